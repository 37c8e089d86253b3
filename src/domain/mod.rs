//! Domain layer - The docstring parsing core

pub mod builder;
pub mod docstring;
pub mod interpreter;
pub mod keywords;
pub mod parser;
pub mod segmenter;
pub mod text;

pub use docstring::{
    Docstring, DocstringDeprecated, DocstringMeta, DocstringParam, DocstringRaises,
    DocstringReturns, DocstringStyle, DocstringTag,
};
pub use keywords::TagKind;
pub use parser::{parse, tag_names};

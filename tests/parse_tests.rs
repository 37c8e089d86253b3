//! Behaviour tests for the docstring parser

use jsdoc::domain::{parse, DocstringMeta, DocstringParam, DocstringReturns};

fn only_param(text: &str) -> DocstringParam {
    let doc = parse(text).unwrap();
    assert_eq!(doc.meta.len(), 1);
    match doc.meta.into_iter().next().unwrap() {
        DocstringMeta::Param(p) => p,
        other => panic!("Expected param, got {:?}", other),
    }
}

fn only_returns(text: &str) -> DocstringReturns {
    let doc = parse(text).unwrap();
    match doc.meta.into_iter().next().unwrap() {
        DocstringMeta::Returns(r) => r,
        other => panic!("Expected returns, got {:?}", other),
    }
}

#[test]
fn test_text_without_tags_has_no_meta() {
    let doc = parse("Summary line.\n\nBody paragraph\nsecond line.").unwrap();
    assert!(doc.meta.is_empty());
    assert_eq!(doc.short_description.as_deref(), Some("Summary line."));
    assert_eq!(
        doc.long_description.as_deref(),
        Some("Body paragraph\nsecond line.")
    );
    assert!(doc.blank_after_short_description);
    assert!(!doc.blank_after_long_description);
}

#[test]
fn test_tags_only_has_no_description() {
    let doc = parse("@param {T} x desc").unwrap();
    assert_eq!(doc.short_description, None);
    assert_eq!(doc.long_description, None);
}

#[test]
fn test_param_with_type_and_name() {
    let p = only_param("@param {T} name desc");
    assert_eq!(p.type_name.as_deref(), Some("T"));
    assert_eq!(p.arg_name.as_deref(), Some("name"));
    assert!(!p.is_optional);
    assert_eq!(p.default, None);
    assert_eq!(p.description, "desc");
    assert_eq!(p.args, vec!["param", "{T}", "name"]);
}

#[test]
fn test_param_optional_type_marker() {
    let p = only_param("@param {T=} name desc");
    assert!(p.is_optional);
    assert_eq!(p.type_name.as_deref(), Some("T"));
}

#[test]
fn test_param_bracketed_default() {
    let p = only_param("@param {T} [name=default] desc");
    assert_eq!(p.arg_name.as_deref(), Some("name"));
    assert_eq!(p.default.as_deref(), Some("default"));
    assert!(p.is_optional);
}

#[test]
fn test_typedef_and_property_are_param_like() {
    let doc = parse("@typedef {Object} Point\n@property {number} x horizontal").unwrap();
    let params = doc.params();
    assert_eq!(params.len(), 2);
    assert_eq!(params[0].arg_name.as_deref(), Some("Point"));
    assert_eq!(params[1].arg_name.as_deref(), Some("x"));
    assert_eq!(params[1].description, "horizontal");
}

#[test]
fn test_return_and_yield() {
    let r = only_returns("@return {T} desc");
    assert!(!r.is_generator);
    assert_eq!(r.type_name.as_deref(), Some("T"));
    assert_eq!(r.description, "desc");

    let y = only_returns("@yield {T} desc");
    assert!(y.is_generator);
    assert_eq!(y.args, vec!["yield"]);
    assert_eq!(y.type_name, None);
    assert_eq!(y.description, "{T} desc");
}

#[test]
fn test_class_aliases_take_no_structured_arguments() {
    let r = only_returns("@returns {T} desc");
    assert!(!r.is_generator);
    assert_eq!(r.args, vec!["returns"]);
    assert_eq!(r.type_name, None);
    assert_eq!(r.description, "{T} desc");

    let y = only_returns("@yields {T} desc");
    assert!(y.is_generator);
    assert_eq!(y.description, "{T} desc");

    let doc = parse("@throw {Error} always").unwrap();
    assert_eq!(doc.raises()[0].type_name, None);
    assert_eq!(doc.raises()[0].description, "{Error} always");
}

#[test]
fn test_param_alias_fails_arity_check() {
    let err = parse("@arg {T} x desc").unwrap_err();
    assert_eq!(err.tag, "arg");

    assert!(parse("@prop {T} x").is_err());
}

#[test]
fn test_type_tag_is_plain_record_with_typed_arguments() {
    let doc = parse("@type {Array} desc").unwrap();
    match &doc.meta[0] {
        DocstringMeta::Tag(tag) => {
            assert_eq!(tag.args, vec!["type", "{Array}"]);
            assert_eq!(tag.description, "desc");
        }
        other => panic!("Expected plain tag, got {:?}", other),
    }
}

#[test]
fn test_bare_return_keeps_empty_argument() {
    let r = only_returns("@return");
    assert_eq!(r.args, vec!["return", ""]);
    assert_eq!(r.type_name, None);
    assert_eq!(r.description, "");
}

#[test]
fn test_throws() {
    let doc = parse("@throws {RangeError} When out of range").unwrap();
    let raises = doc.raises();
    assert_eq!(raises[0].type_name.as_deref(), Some("RangeError"));
    assert_eq!(raises[0].description, "When out of range");
}

#[test]
fn test_deprecated_with_and_without_version() {
    let doc = parse("@deprecated v1.2.3 use X instead").unwrap();
    let dep = doc.deprecation().unwrap();
    assert_eq!(dep.version.as_deref(), Some("v1.2.3"));
    assert_eq!(dep.description, "use X instead");

    let doc = parse("@deprecated no version here").unwrap();
    let dep = doc.deprecation().unwrap();
    assert_eq!(dep.version, None);
    assert_eq!(dep.description, "no version here");
}

#[test]
fn test_deprecated_version_takes_first_line_only() {
    let doc = parse("@deprecated v1.0 use X\nand Y").unwrap();
    let dep = doc.deprecation().unwrap();
    assert_eq!(dep.version.as_deref(), Some("v1.0"));
    assert_eq!(dep.description, "use X");
}

#[test]
fn test_param_without_arguments_fails() {
    let err = parse("Summary.\n\n@param").unwrap_err();
    assert_eq!(err.tag, "param");
    assert!(err.to_string().contains("\"param\""));
}

#[test]
fn test_failure_anywhere_aborts_parse() {
    let result = parse("@return {int} ok\n@property {int}\n@param {T} x fine");
    assert!(result.is_err());
}

#[test]
fn test_parse_is_repeatable() {
    let text = "Summary.\n\nBody.\n\n@param {T} [x=1] first\n@return {U} out";
    assert_eq!(parse(text).unwrap(), parse(text).unwrap());
}

#[test]
fn test_meta_order_follows_source() {
    let doc = parse("@param {A} a\n@return {R} r\n@param {B} b\n@see other").unwrap();
    let tags: Vec<&str> = doc.meta.iter().map(|m| m.tag()).collect();
    assert_eq!(tags, vec!["param", "return", "param", "see"]);

    let names: Vec<Option<&str>> = doc.params().iter().map(|p| p.arg_name.as_deref()).collect();
    assert_eq!(names, vec![Some("a"), Some("b")]);
}

#[test]
fn test_type_span_wins_over_name_span_in_one_token() {
    let p = only_param("@param name {T}[other=1] desc");
    assert_eq!(p.type_name.as_deref(), Some("T"));
    assert_eq!(p.arg_name.as_deref(), Some("name"));
    assert!(!p.is_optional);
    assert_eq!(p.default, None);
}

#[test]
fn test_malformed_micro_syntax_degrades() {
    let p = only_param("@param {T name desc");
    assert_eq!(p.type_name, None);
    assert_eq!(p.arg_name.as_deref(), Some("name"));
}

#[test]
fn test_indented_comment_body_is_normalized() {
    let text = "
        Formats a value.

        @param {*} value The value
            spanning two lines
        @return {string}
    ";
    let doc = parse(text).unwrap();
    assert_eq!(doc.short_description.as_deref(), Some("Formats a value."));
    assert_eq!(doc.meta[0].description(), "The value\nspanning two lines");
    assert_eq!(doc.returns().and_then(|r| r.type_name.as_deref()), Some("string"));
}

#[test]
fn test_generic_tag_keeps_full_text() {
    let doc = parse("@example\n  add(1, 2)\n  // => 3").unwrap();
    match &doc.meta[0] {
        DocstringMeta::Tag(tag) => {
            assert_eq!(tag.args, vec!["example"]);
            assert_eq!(tag.description, "add(1, 2)\n// => 3");
        }
        other => panic!("Expected plain tag, got {:?}", other),
    }
}

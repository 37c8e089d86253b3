use clap::Parser;
use jsdoc::application::{ConfigService, ListTagsService, ParseService};
use jsdoc::cli::{format_config, format_json, format_tag_list, format_text, Cli, Commands};
use jsdoc::error::{JsdocError, Result};
use jsdoc::infrastructure::{
    Config, FileSystemSource, OutputFormat, SourceRepository, StdinSource,
};
use std::path::PathBuf;
use std::str::FromStr;

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

/// Pick the input source: stdin when no paths are given
fn source(paths: Vec<PathBuf>, config: &Config) -> Box<dyn SourceRepository> {
    if paths.is_empty() {
        Box::new(StdinSource)
    } else {
        Box::new(FileSystemSource::new(paths, config.extensions.clone()))
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Parse {
            paths,
            format,
            keep_going,
        } => {
            let config = Config::discover()?;
            let format = match format {
                Some(f) => OutputFormat::from_str(&f).map_err(JsdocError::Config)?,
                None => config.format,
            };
            let strict = config.strict && !keep_going;

            let service = ParseService::new(source(paths, &config), strict);
            let report = service.execute()?;

            let output = match format {
                OutputFormat::Json => format_json(&report.parsed)?,
                OutputFormat::Text => format_text(&report.parsed),
            };
            print!("{}", output);

            for failure in &report.failures {
                eprintln!("warning: {}: {}", failure.source, failure.error);
            }
            if !report.failures.is_empty() {
                return Err(JsdocError::Failures(report.failures.len()));
            }
            Ok(())
        }
        Commands::Tags { paths } => {
            let config = Config::discover()?;
            let service = ListTagsService::new(source(paths, &config));
            let tags = service.execute()?;
            let output = format_tag_list(&tags);
            if tags.is_empty() {
                println!("{}", output);
            } else {
                print!("{}", output);
            }
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let service = ConfigService::new(std::env::current_dir()?);

            if list {
                print!("{}", format_config(&service.list()?));
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
                Ok(())
            } else {
                println!("Usage: jsdoc config [--list | <key> [<value>]]");
                println!("Valid keys: format, extensions, strict");
                Ok(())
            }
        }
    }
}

//! Command-line interface for weft
//!
//! Usage:
//!   weft parse `<path|->` [--format `<format>`] [--config `<file>`] [--log-level `<level>`]
//!   weft list-formats

use clap::{Arg, ArgMatches, Command};
use std::io::Read;
use tracing_subscriber::EnvFilter;
use weft::weft::config::{Loader, WeftConfig};
use weft::weft::processor::{available_formats, process_source, ProcessingError, ProcessingSpec};

fn main() {
    let matches = Command::new("weft")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Parse passage markup into a syntax tree")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("parse")
                .about("Parse a passage and print the result")
                .arg(
                    Arg::new("path")
                        .help("Path to the passage file, or '-' for stdin")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (e.g., 'ast-json', 'ast-treeviz')"),
                )
                .arg(
                    Arg::new("config")
                        .long("config")
                        .short('c')
                        .help("Configuration file layered over the defaults"),
                )
                .arg(
                    Arg::new("log-level")
                        .long("log-level")
                        .help("Log filter, e.g. 'debug' (RUST_LOG takes precedence)"),
                ),
        )
        .subcommand(Command::new("list-formats").about("List available output formats"))
        .get_matches();

    match matches.subcommand() {
        Some(("parse", parse_matches)) => handle_parse_command(parse_matches),
        Some(("list-formats", _)) => handle_list_formats_command(),
        _ => unreachable!(),
    }
}

fn load_config(matches: &ArgMatches) -> WeftConfig {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    let overrides = [("output.format", "format"), ("logging.level", "log-level")];
    for (key, arg) in overrides {
        if let Some(value) = matches.get_one::<String>(arg) {
            loader = loader.set_override(key, value.as_str()).unwrap_or_else(|e| {
                eprintln!("Invalid --{}: {}", arg, e);
                std::process::exit(1);
            });
        }
    }
    loader.build().unwrap_or_else(|e| {
        eprintln!("Error loading configuration: {}", e);
        std::process::exit(1);
    })
}

fn init_logging(level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn read_source(path: &str) -> std::io::Result<String> {
    if path == "-" {
        let mut source = String::new();
        std::io::stdin().read_to_string(&mut source)?;
        Ok(source)
    } else {
        std::fs::read_to_string(path)
    }
}

/// Handle the parse command
fn handle_parse_command(matches: &ArgMatches) {
    let config = load_config(matches);
    init_logging(&config.logging.level);

    let spec = ProcessingSpec::from_string(&config.output.format).unwrap_or_else(|e| {
        eprintln!("{}", e);
        std::process::exit(1);
    });

    let path = matches
        .get_one::<String>("path")
        .map(String::as_str)
        .unwrap_or("-");
    let source = read_source(path).unwrap_or_else(|e| {
        eprintln!("Error reading {}: {}", path, e);
        std::process::exit(1);
    });

    tracing::debug!(path, format = %spec.name(), "parsing");
    match process_source(&source, &spec, &config.catalog()) {
        Ok(output) => {
            print!("{}", output);
            if !output.ends_with('\n') {
                println!();
            }
        }
        Err(ProcessingError::Parse(e)) => {
            eprintln!("{}: {}", e.kind(), e);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    println!("Available formats:\n");
    for format in available_formats() {
        println!("  {}", format);
    }
}

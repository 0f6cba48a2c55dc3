//! Command-line interface for diwire
//! This binary parses diwire files and prints them in different formats.
//!
//! Usage:
//!   diwire parse `<path>` [--format `<format>`]  - Parse a file and print the container
//!   diwire tokens `<path>`                     - Print the token stream of a file
//!   diwire list-formats                      - List all available formats
//!
//! Global options `--config <file>` and `--log-level <level>` apply to every command.

use clap::{Arg, ArgMatches, Command};
use diwire::diwire::config::{DiwireConfig, Loader, PROJECT_CONFIG_FILE};
use diwire::diwire::formats::FormatRegistry;
use diwire::diwire::processor::{process_file, tokens_for_file};
use std::fmt::Display;

fn main() {
    let matches = Command::new("diwire")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting and converting diwire files")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .help("Configuration file layered over the defaults"),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .global(true)
                .help("Log level: trace, debug, info, warn or error"),
        )
        .subcommand(
            Command::new("parse")
                .about("Parse a file and print the container")
                .arg(
                    Arg::new("path")
                        .help("Path to the diwire file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (e.g., 'dsl', 'json', 'yaml', 'tag')"),
                ),
        )
        .subcommand(
            Command::new("tokens")
                .about("Print the token stream of a file")
                .arg(
                    Arg::new("path")
                        .help("Path to the diwire file")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(Command::new("list-formats").about("List available output formats"))
        .get_matches();

    let config = load_config(&matches).unwrap_or_else(|e| fail(e));
    init_logging(&config);

    // Handle subcommands
    match matches.subcommand() {
        Some(("parse", parse_matches)) => {
            let path = parse_matches.get_one::<String>("path").unwrap();
            let format = parse_matches
                .get_one::<String>("format")
                .unwrap_or(&config.output.format);
            handle_parse_command(path, format);
        }
        Some(("tokens", tokens_matches)) => {
            let path = tokens_matches.get_one::<String>("path").unwrap();
            handle_tokens_command(path);
        }
        Some(("list-formats", _)) => {
            handle_list_formats_command();
        }
        _ => unreachable!(),
    }
}

/// Defaults, then `--config` (or `diwire.toml` when present), then flags
fn load_config(matches: &ArgMatches) -> Result<DiwireConfig, config::ConfigError> {
    let mut loader = match matches.get_one::<String>("config") {
        Some(path) => Loader::new().with_file(path),
        None => Loader::new().with_optional_file(PROJECT_CONFIG_FILE),
    };
    if let Some(level) = matches.get_one::<String>("log-level") {
        loader = loader.set_override("logging.level", level.as_str())?;
    }
    loader.build()
}

fn init_logging(config: &DiwireConfig) {
    tracing_subscriber::fmt()
        .with_max_level(config.logging.max_level())
        .with_writer(std::io::stderr)
        .init();
}

/// Handle the parse command
fn handle_parse_command(path: &str, format: &str) {
    let registry = FormatRegistry::with_defaults();
    let output = process_file(path, format, &registry).unwrap_or_else(|e| fail(e));
    print!("{}", output);
}

/// Handle the tokens command
fn handle_tokens_command(path: &str) {
    let output = tokens_for_file(path).unwrap_or_else(|e| fail(e));
    print!("{}", output);
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    let registry = FormatRegistry::with_defaults();
    println!("Available formats:\n");
    for name in registry.list_formats() {
        let description = registry.get(&name).map_or("", |f| f.description());
        println!("  {name}");
        println!("    {description}");
    }
}

fn fail(error: impl Display) -> ! {
    eprintln!("Error: {}", error);
    std::process::exit(1);
}

//! Command-line interface for seymour
//! Converts a `.seymour` file into HTML plus a CSS scaffold, or derives the CSS scaffold
//! from an existing `.html` file.
//!
//! Usage:
//!   seymour `<path>` [--out-dir `<dir>`] [--indent `<n>`] [--config `<file>`] [--format files|json]

use clap::{value_parser, Arg, ArgMatches, Command};
use seymour::seymour::config::{Loader, SeymourConfig, PROJECT_CONFIG_FILE};
use seymour::seymour::loader::{detect_mode, SourceLoader};
use seymour::seymour::output::write_files;
use seymour::Mode;
use std::path::{Path, PathBuf};
use std::process;

/// Exit code for missing arguments and unsupported input files
const USAGE_EXIT_CODE: i32 = 3;
const FAILURE_EXIT_CODE: i32 = 1;

fn cli() -> Command {
    Command::new("seymour")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Converts Seymour markup to HTML and derives CSS selector scaffolds")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Path to a .seymour or .html file")
                .required(true)
                .value_parser(value_parser!(PathBuf))
                .index(1),
        )
        .arg(
            Arg::new("out-dir")
                .long("out-dir")
                .short('o')
                .help("Directory for the generated files (default: current directory)")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("indent")
                .long("indent")
                .help("Spaces per nesting level in the generated HTML")
                .value_parser(value_parser!(u32)),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the defaults (default: ./seymour.toml if present)")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Write output files, or print the conversion as JSON")
                .value_parser(["files", "json"])
                .default_value("files"),
        )
}

fn main() {
    let matches = cli().try_get_matches().unwrap_or_else(|e| {
        if !e.use_stderr() {
            // --help / --version
            e.exit();
        }
        let _ = e.print();
        process::exit(USAGE_EXIT_CODE);
    });

    let path = matches
        .get_one::<PathBuf>("path")
        .expect("path is a required argument");
    let format = matches
        .get_one::<String>("format")
        .expect("format has a default value");

    let mode = detect_mode(path).unwrap_or_else(|e| {
        eprintln!("{}", e);
        process::exit(USAGE_EXIT_CODE);
    });

    let config = load_config(&matches).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        process::exit(FAILURE_EXIT_CODE);
    });

    match format.as_str() {
        "json" => handle_json_command(path, &config),
        _ => handle_files_command(path, mode, &config),
    }
}

/// Layer the project file (or --config) and CLI flags over the built-in defaults
fn load_config(matches: &ArgMatches) -> Result<SeymourConfig, config::ConfigError> {
    let mut loader = match matches.get_one::<PathBuf>("config") {
        Some(path) => Loader::new().with_file(path),
        None => Loader::new().with_optional_file(PROJECT_CONFIG_FILE),
    };
    if let Some(dir) = matches.get_one::<PathBuf>("out-dir") {
        loader = loader.set_override("output.directory", dir.to_string_lossy().into_owned())?;
    }
    if let Some(indent) = matches.get_one::<u32>("indent") {
        loader = loader.set_override("html.indent_width", i64::from(*indent))?;
    }
    loader.build()
}

/// Convert and write the output files
fn handle_files_command(path: &Path, mode: Mode, config: &SeymourConfig) {
    println!("Generating from {}...", mode);
    if mode == Mode::Html {
        println!("WARNING");
        println!("The HTML output is experimental...");
    }

    let conversion = SourceLoader::from_path(path)
        .and_then(|loader| loader.convert_with(config.convert_options()))
        .unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            process::exit(FAILURE_EXIT_CODE);
        });

    let written = write_files(&conversion, &config.output).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        process::exit(FAILURE_EXIT_CODE);
    });
    for file in written {
        println!("  wrote {}", file.display());
    }
    println!("Done!");
}

/// Convert and print the result as JSON instead of writing files
fn handle_json_command(path: &Path, config: &SeymourConfig) {
    let conversion = SourceLoader::from_path(path)
        .and_then(|loader| loader.convert_with(config.convert_options()))
        .unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            process::exit(FAILURE_EXIT_CODE);
        });

    let json = serde_json::to_string_pretty(&conversion).unwrap_or_else(|e| {
        eprintln!("Error formatting conversion: {}", e);
        process::exit(FAILURE_EXIT_CODE);
    });
    println!("{}", json);
}

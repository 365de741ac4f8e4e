//! Command-line interface for mdl
//! This binary checks, formats and inspects model files.
//!
//! Usage:
//!   mdl check `<path>`                              - Parse and validate a model
//!   mdl format `<path>`                             - Print the canonical form of a model
//!   mdl execute `<path>` [--format `<format>`]      - Run a processing specification
//!   mdl list-formats                              - List all available formats
//!
//! Every subcommand accepts `--config <file>` to layer a TOML file over the built-in
//! defaults. Logging goes to stderr and is controlled through `RUST_LOG`.

use clap::{Arg, ArgMatches, Command};
use mdl::mdl::config::{Loader, MdlConfig};
use mdl::mdl::processor::{available_formats, process_file, ProcessingSpec};
use tracing_subscriber::{fmt, EnvFilter};

fn main() {
    init_logging();

    let matches = Command::new("mdl")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for checking and formatting model files")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .help("TOML file layered over the default configuration"),
        )
        .subcommand(
            Command::new("check")
                .about("Parse and validate a model file")
                .arg(path_arg()),
        )
        .subcommand(
            Command::new("format")
                .about("Print the canonical form of a model file")
                .arg(path_arg()),
        )
        .subcommand(
            Command::new("execute")
                .about("Run a model file through a processing specification")
                .arg(path_arg())
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (e.g., 'token-simple', 'ast-json')")
                        .default_value("model-canonical"),
                ),
        )
        .subcommand(Command::new("list-formats").about("List available output formats"))
        .get_matches();

    match matches.subcommand() {
        Some(("check", sub_matches)) => {
            let config = load_config(sub_matches);
            run(path(sub_matches), "model-check", &config);
        }
        Some(("format", sub_matches)) => {
            let config = load_config(sub_matches);
            run(path(sub_matches), "model-canonical", &config);
        }
        Some(("execute", sub_matches)) => {
            let config = load_config(sub_matches);
            let format = sub_matches
                .get_one::<String>("format")
                .map(String::as_str)
                .unwrap_or("model-canonical");
            run(path(sub_matches), format, &config);
        }
        Some(("list-formats", _)) => {
            handle_list_formats_command();
        }
        _ => unreachable!(),
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn path_arg() -> Arg {
    Arg::new("path")
        .help("Path to the model file")
        .required(true)
        .index(1)
}

fn path(matches: &ArgMatches) -> &str {
    matches
        .get_one::<String>("path")
        .map(String::as_str)
        .unwrap_or_default()
}

fn load_config(matches: &ArgMatches) -> MdlConfig {
    let loader = match matches.get_one::<String>("config") {
        Some(path) => Loader::new().with_file(path),
        None => Loader::new(),
    };
    loader.build().unwrap_or_else(|e| {
        eprintln!("Error loading configuration: {}", e);
        std::process::exit(2);
    })
}

/// Process `path` with the format string `format` and print the result
fn run(path: &str, format: &str, config: &MdlConfig) {
    let spec = ProcessingSpec::from_string(format).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        eprintln!("Run `mdl list-formats` to see the available formats.");
        std::process::exit(2);
    });

    match process_file(path, &spec, config) {
        Ok(output) => print!("{}", output),
        Err(e) => {
            eprintln!("{}", e);
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

//! Command-line demonstration for intbox
//! Feeds strings through a try-parse and shows what ends up in the box.
//!
//! Usage:
//!   intbox demo [--config `<file>`] [--strategy `<s>`] [--width `<w>`] [--format `<f>`]  - Parse the configured sample inputs
//!   intbox parse `<input>...` [--strategy `<s>`] [--width `<w>`] [--format `<f>`]      - Parse the given inputs
//!   intbox constants [--width `<w>`] [--format `<f>`]                                - Show the boundary decomposition

use clap::{Arg, ArgMatches, Command};
use intbox::config::{IntboxConfig, Loader, OutputFormat};
use intbox::demo::{self, ParseReport, Width};
use serde::Serialize;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    init_tracing();

    let matches = Command::new("intbox")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Try-parse strings into bounded integer boxes")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("demo")
                .about("Parse the sample inputs from the configuration")
                .args(shared_args()),
        )
        .subcommand(
            Command::new("parse")
                .about("Parse the given inputs into one box")
                .arg(
                    Arg::new("inputs")
                        .help("Strings to parse (use -- before negative numbers)")
                        .required(true)
                        .num_args(1..)
                        .allow_hyphen_values(true)
                        .index(1),
                )
                .args(shared_args()),
        )
        .subcommand(
            Command::new("constants")
                .about("Show the boundary decomposition of a width")
                .args(shared_args()),
        )
        .get_matches();

    let result = match matches.subcommand() {
        Some(("demo", demo_matches)) => handle_demo_command(demo_matches),
        Some(("parse", parse_matches)) => handle_parse_command(parse_matches),
        Some(("constants", constants_matches)) => handle_constants_command(constants_matches),
        _ => unreachable!(),
    };

    match result {
        Ok(code) => code,
        Err(message) => {
            eprintln!("Error: {}", message);
            ExitCode::from(1)
        }
    }
}

fn shared_args() -> [Arg; 4] {
    [
        Arg::new("config")
            .long("config")
            .short('c')
            .help("TOML file layered over the built-in defaults"),
        Arg::new("strategy")
            .long("strategy")
            .short('s')
            .help("Accumulation strategy")
            .value_parser(["direct", "table"]),
        Arg::new("width")
            .long("width")
            .short('w')
            .help("Signed width of the box")
            .value_parser(["i8", "i16", "i32", "i64", "i128"]),
        Arg::new("format")
            .long("format")
            .short('f')
            .help("Output format")
            .value_parser(["text", "json"]),
    ]
}

/// Log to stderr so stdout stays a clean report; `RUST_LOG` overrides the level.
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn load_config(matches: &ArgMatches) -> Result<IntboxConfig, String> {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    for (arg, key) in [
        ("strategy", "parser.strategy"),
        ("width", "demo.width"),
        ("format", "output.format"),
    ] {
        let value = matches.get_one::<String>(arg).map(String::as_str);
        loader = loader.with_flag(key, value).map_err(|e| e.to_string())?;
    }
    let config = loader.build().map_err(|e| format!("invalid configuration: {}", e))?;
    tracing::debug!(
        strategy = %config.parser.strategy,
        width = config.demo.width.name(),
        "loaded configuration"
    );
    Ok(config)
}

/// Handle the demo command
fn handle_demo_command(matches: &ArgMatches) -> Result<ExitCode, String> {
    let config = load_config(matches)?;
    let reports = config
        .demo
        .width
        .run(&config.demo.inputs, config.parser.strategy);
    print_reports(&reports, config.output.format)?;
    Ok(ExitCode::SUCCESS)
}

/// Handle the parse command; exits with 2 when any input is rejected
fn handle_parse_command(matches: &ArgMatches) -> Result<ExitCode, String> {
    let config = load_config(matches)?;
    let inputs: Vec<String> = matches
        .get_many::<String>("inputs")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();
    let reports = config.demo.width.run(&inputs, config.parser.strategy);
    print_reports(&reports, config.output.format)?;

    if reports.iter().all(|report| report.accepted) {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(2))
    }
}

/// Handle the constants command
fn handle_constants_command(matches: &ArgMatches) -> Result<ExitCode, String> {
    let config = load_config(matches)?;
    let width: Width = config.demo.width;
    let constants = width.constants();
    match config.output.format {
        OutputFormat::Text => println!("{}", demo::render_constants(&constants)),
        OutputFormat::Json => println!("{}", to_json(&constants)?),
    }
    Ok(ExitCode::SUCCESS)
}

fn print_reports(reports: &[ParseReport], format: OutputFormat) -> Result<(), String> {
    match format {
        OutputFormat::Text => println!("{}", demo::render_text(reports)),
        OutputFormat::Json => println!("{}", to_json(reports)?),
    }
    Ok(())
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, String> {
    serde_json::to_string_pretty(value).map_err(|e| format!("failed to serialize output: {}", e))
}

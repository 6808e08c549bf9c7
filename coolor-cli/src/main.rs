//! Command-line interface for coolor
//! Parses palette commands and prints the resulting record (or tokens) in the chosen format.
//!
//! Usage:
//!   coolor "GENERATE PALETTE 5 COLORS" [--format `<format>`]   - Parse one or more commands
//!   echo "make palette 3 colors" | coolor                     - Parse commands from stdin, one per line
//!   coolor --list-formats                                     - List all available output formats

use clap::{Arg, ArgAction, ArgMatches, Command};
use coolor::coolor::processor::{process, ProcessingSpec};
use coolor_config::{CoolorConfig, Loader};
use std::io::BufRead;
use tracing::Level;

fn main() {
    let matches = Command::new("coolor")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Validate palette commands such as 'GENERATE PALETTE 5 COLORS'")
        .arg(
            Arg::new("commands")
                .help("Command text to parse (reads one command per line from stdin when omitted)")
                .num_args(0..)
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (e.g., 'command-simple', 'command-json', 'token-json')"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Path to a TOML configuration file layered over the defaults"),
        )
        .arg(
            Arg::new("color-range")
                .long("color-range")
                .help("Accept the FROM <adj> <color> TO <adj> <color> extension")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Increase log output (-v debug, -vv trace)")
                .action(ArgAction::Count),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let config = load_config(&matches).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(2);
    });

    let configured_level = config.logging.level.parse::<Level>().unwrap_or_else(|e| {
        eprintln!("Configuration error: logging.level '{}': {}", config.logging.level, e);
        std::process::exit(2);
    });
    init_logging(matches.get_count("verbose"), configured_level);

    let inputs: Vec<String> = match matches.get_many::<String>("commands") {
        Some(commands) => commands.cloned().collect(),
        None => read_stdin_commands(),
    };
    // Nothing to read still goes through the parser so it is reported as empty input
    let inputs = if inputs.is_empty() {
        vec![String::new()]
    } else {
        inputs
    };

    handle_parse_command(&config, &inputs);
}

/// Layer the optional config file and CLI flags over the embedded defaults
fn load_config(matches: &ArgMatches) -> Result<CoolorConfig, coolor_config::ConfigError> {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if let Some(format) = matches.get_one::<String>("format") {
        loader = loader.set_override("output.format", format.as_str())?;
    }
    if matches.get_flag("color-range") {
        loader = loader.set_override("grammar.color_range", true)?;
    }
    loader.build()
}

fn init_logging(verbosity: u8, configured: Level) {
    let level = match verbosity {
        0 => configured,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn read_stdin_commands() -> Vec<String> {
    let stdin = std::io::stdin();
    let mut commands = Vec::new();
    for line in stdin.lock().lines() {
        match line {
            Ok(line) if line.trim().is_empty() => {}
            Ok(line) => commands.push(line),
            Err(e) => {
                eprintln!("Error reading stdin: {}", e);
                std::process::exit(2);
            }
        }
    }
    commands
}

/// Parse every input independently; exit with status 1 if any of them failed
fn handle_parse_command(config: &CoolorConfig, inputs: &[String]) {
    let spec = config.output.spec().unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        eprintln!("\nAvailable formats:");
        for spec in ProcessingSpec::available_specs() {
            eprintln!("  {}", spec);
        }
        std::process::exit(2);
    });
    let grammar = config.grammar.grammar();
    tracing::info!(
        grammar = grammar.name(),
        format = %spec,
        inputs = inputs.len(),
        "parsing commands"
    );

    let mut failures = 0;
    for input in inputs {
        match process(input, &spec, grammar) {
            Ok(output) => println!("{}", output),
            Err(e) => {
                eprintln!("Parsing Failed: {}", e);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        std::process::exit(1);
    }
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    println!("Available output formats:\n");
    for spec in ProcessingSpec::available_specs() {
        println!("  {}", spec);
    }
}

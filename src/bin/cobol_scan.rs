//! Command-line interface for cobol-scanner
//! This binary runs the scanner over COBOL sources and prints what it classified.
//!
//! Usage:
//!   cobol-scan tokens `<path>` [--format `<format>`] [--free] [--config `<file>`]
//!       Dump the tokens of a source
//!   cobol-scan mode `<path>` [--free] [--config `<file>`]
//!       Print the format mode at end of file

use clap::{Arg, ArgAction, ArgMatches, Command};
use cobol_scanner::config::{Loader, OutputFormat, ScannerConfig};
use cobol_scanner::host::{self, HostOptions, Tokenized};
use cobol_scanner::{Error, FormatMode, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let matches = Command::new("cobol-scan")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Classify fixed and free format COBOL sources")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("tokens")
                .about("Dump the tokens of a source")
                .arg(path_arg())
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format: text, json or yaml (default from config)"),
                )
                .arg(free_arg())
                .arg(config_arg()),
        )
        .subcommand(
            Command::new("mode")
                .about("Print the source format in effect at the end of a source")
                .arg(path_arg())
                .arg(free_arg())
                .arg(config_arg()),
        )
        .get_matches();

    let outcome = match matches.subcommand() {
        Some(("tokens", tokens_matches)) => handle_tokens_command(tokens_matches),
        Some(("mode", mode_matches)) => handle_mode_command(mode_matches),
        _ => unreachable!(),
    };

    if let Err(e) = outcome {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn path_arg() -> Arg {
    Arg::new("path")
        .help("Path to the COBOL source")
        .required(true)
        .index(1)
}

fn free_arg() -> Arg {
    Arg::new("free")
        .long("free")
        .help("Start in free format instead of the configured one")
        .action(ArgAction::SetTrue)
}

fn config_arg() -> Arg {
    Arg::new("config")
        .long("config")
        .short('c')
        .help("Configuration file layered over the defaults")
}

/// Handle the tokens command
fn handle_tokens_command(matches: &ArgMatches) -> Result<()> {
    let config = load_config(matches)?;
    let format = match matches.get_one::<String>("format") {
        Some(format) => format.parse()?,
        None => config.output.format,
    };
    let tokenized = scan_file(matches, &config)?;
    print!("{}", render(&tokenized, format)?);
    Ok(())
}

/// Handle the mode command
fn handle_mode_command(matches: &ArgMatches) -> Result<()> {
    let config = load_config(matches)?;
    let tokenized = scan_file(matches, &config)?;
    println!("{}", tokenized.final_mode);
    Ok(())
}

fn load_config(matches: &ArgMatches) -> Result<ScannerConfig> {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if matches.get_flag("free") {
        loader = loader.set_override("scanner.initial_format", FormatMode::Free.as_str())?;
    }
    loader.build()
}

fn scan_file(matches: &ArgMatches, config: &ScannerConfig) -> Result<Tokenized> {
    let path = matches
        .get_one::<String>("path")
        .ok_or(Error::MissingArgument("path"))?;
    let source = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    info!(path = %path, bytes = source.len(), "scanning");
    Ok(host::tokenize(&source, HostOptions::from(&config.scanner)))
}

fn render(tokenized: &Tokenized, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Text => {
            let mut out = String::new();
            for token in &tokenized.tokens {
                out.push_str(&token.to_string());
                out.push('\n');
            }
            out
        }
        OutputFormat::Json => serde_json::to_string_pretty(tokenized)? + "\n",
        OutputFormat::Yaml => serde_yaml::to_string(tokenized)?,
    })
}

//! Command-line surface.
//!
//! Usage:
//!   tokenize-copilot [ENTRY]...            open the form pre-filled with ENTRY fields
//!   tokenize-copilot --print [ENTRY]...    print tokens, one per line, and exit
//!
//! Options: `-p/--pricing`, `--log-file <PATH>`, `-v/--verbose`.

use std::ffi::OsString;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use log::{info, warn, LevelFilter};

use crate::engine::{generator, Config, LogConfig};

pub fn command() -> Command {
    Command::new("tokenize-copilot")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Turn contract fields into #[TOKEN]# placeholders")
        .arg(
            Arg::new("entries")
                .help("Initial entries, e.g. \"effective date\"")
                .value_name("ENTRY")
                .num_args(1..)
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("pricing")
                .short('p')
                .long("pricing")
                .help("Include the pricing table tokens")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("print")
                .long("print")
                .help("Print the tokens and exit instead of opening the form")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .value_name("PATH")
                .help("Write logs to PATH")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Log at debug level")
                .action(ArgAction::SetTrue),
        )
}

pub fn config_from_matches(matches: &ArgMatches) -> Config {
    let initial_entries = matches
        .get_many::<String>("entries")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();
    let level = if matches.get_flag("verbose") {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    Config {
        initial_entries,
        pricing_enabled: matches.get_flag("pricing"),
        print_only: matches.get_flag("print"),
        log: LogConfig {
            file: matches.get_one::<PathBuf>("log-file").cloned(),
            level,
        },
    }
}

/// Parse an argument list (program name first) into a `Config`.
pub fn parse_config<I, T>(args: I) -> Result<Config, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = command().try_get_matches_from(args)?;
    Ok(config_from_matches(&matches))
}

/// Write generated tokens, then the pricing tokens when enabled, one per line.
/// Returns the number of lines written.
pub fn print_tokens<W: Write>(config: &Config, out: &mut W) -> io::Result<usize> {
    let mut tokens = generator::generate(&config.initial_entries);
    if tokens.is_empty() {
        warn!("no non-blank entries given");
    }
    if config.pricing_enabled {
        tokens.extend(generator::pricing_table_tokens());
    }
    for token in &tokens {
        writeln!(out, "{}", token)?;
    }
    out.flush()?;
    info!("printed {} tokens", tokens.len());
    Ok(tokens.len())
}

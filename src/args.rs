//! Command-line argument parsing and processing.
//!
//! Turns the raw argument list into a [`CliAction`] for `main`. Value options
//! take the following argument verbatim, so negative latitudes such as
//! `--latitude -33.9` work without quoting tricks.

use chrono::NaiveDate;
use std::str::FromStr;

use crate::constants::DATE_FORMAT;
use crate::logger::Log;

/// Options for a normal run. `None` falls back to the config file or today.
#[derive(Debug, Default, PartialEq)]
pub struct RunOptions {
    pub debug_enabled: bool,
    pub latitude: Option<f64>,
    pub date: Option<NaiveDate>,
    pub days: Option<u32>,
}

/// Represents the parsed command-line arguments and their intended actions.
#[derive(Debug, PartialEq)]
pub enum CliAction {
    /// Print sunrise and sunset for one or more days
    Run(RunOptions),
    /// Store a new latitude in the config file and exit
    SetLatitude { debug_enabled: bool, latitude: f64 },
    /// Display help information and exit
    ShowHelp,
    /// Display version information and exit
    ShowVersion,
    /// Show help due to unknown or malformed arguments and exit
    ShowHelpDueToError,
}

/// Result of parsing command-line arguments.
pub struct ParsedArgs {
    pub action: CliAction,
}

impl ParsedArgs {
    /// Parse command-line arguments into a structured result.
    ///
    /// The first item is the program name and is skipped.
    pub fn parse<I, S>(args: I) -> ParsedArgs
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut options = RunOptions::default();
        let mut set_latitude: Option<f64> = None;
        let mut display_help = false;
        let mut display_version = false;
        let mut error_found = false;

        let args_vec: Vec<String> = args
            .into_iter()
            .skip(1)
            .map(|s| s.as_ref().to_string())
            .collect();
        let mut remaining = args_vec.iter();

        while let Some(arg) = remaining.next() {
            match arg.as_str() {
                "--help" | "-h" => display_help = true,
                "--version" | "-V" | "-v" => display_version = true,
                "--debug" | "-d" => options.debug_enabled = true,
                "--latitude" | "-l" => match parse_value::<f64>(arg, remaining.next()) {
                    Some(latitude) => options.latitude = Some(latitude),
                    None => error_found = true,
                },
                "--set-latitude" => match parse_value::<f64>(arg, remaining.next()) {
                    Some(latitude) => set_latitude = Some(latitude),
                    None => error_found = true,
                },
                "--days" | "-n" => match parse_value::<u32>(arg, remaining.next()) {
                    Some(days) => options.days = Some(days),
                    None => error_found = true,
                },
                "--date" | "-D" => match parse_date(arg, remaining.next()) {
                    Some(date) => options.date = Some(date),
                    None => error_found = true,
                },
                other => {
                    if other.starts_with('-') {
                        Log::log_warning(&format!("Unknown option: {}", other));
                        error_found = true;
                    }
                    // Non-option arguments are currently ignored
                }
            }
        }

        let action = if display_version {
            CliAction::ShowVersion
        } else if error_found {
            CliAction::ShowHelpDueToError
        } else if display_help {
            CliAction::ShowHelp
        } else if let Some(latitude) = set_latitude {
            CliAction::SetLatitude {
                debug_enabled: options.debug_enabled,
                latitude,
            }
        } else {
            CliAction::Run(options)
        };

        ParsedArgs { action }
    }

    /// Convenience method to parse from std::env::args()
    pub fn from_env() -> ParsedArgs {
        Self::parse(std::env::args())
    }
}

fn parse_value<T: FromStr>(option: &str, value: Option<&String>) -> Option<T> {
    let Some(value) = value else {
        Log::log_warning(&format!("Missing value for {}", option));
        return None;
    };

    let parsed = value.parse::<T>().ok();
    if parsed.is_none() {
        Log::log_warning(&format!("Invalid value for {}: {}", option, value));
    }
    parsed
}

fn parse_date(option: &str, value: Option<&String>) -> Option<NaiveDate> {
    let Some(value) = value else {
        Log::log_warning(&format!("Missing value for {}", option));
        return None;
    };

    let parsed = NaiveDate::parse_from_str(value, DATE_FORMAT).ok();
    if parsed.is_none() {
        Log::log_warning(&format!(
            "Invalid date for {}: {} (expected YYYY-MM-DD)",
            option, value
        ));
    }
    parsed
}

/// Displays version information using custom logging style.
pub fn display_version_info() {
    Log::log_version();
    Log::log_pipe();
    println!("┗ {}", env!("CARGO_PKG_DESCRIPTION"));
}

/// Displays custom help message using logger methods.
pub fn display_help() {
    Log::log_version();
    Log::log_block_start(env!("CARGO_PKG_DESCRIPTION"));
    Log::log_block_start("Usage: daytime [OPTIONS]");
    Log::log_block_start("Options:");
    Log::log_indented("-l, --latitude <deg>      Latitude to use instead of the configured one");
    Log::log_indented("-D, --date <YYYY-MM-DD>   First date to report (default: today)");
    Log::log_indented("-n, --days <n>            Number of consecutive days to report");
    Log::log_indented("    --set-latitude <deg>  Store a latitude in the config file");
    Log::log_indented("-d, --debug               Enable detailed debug output");
    Log::log_indented("-h, --help                Print help information");
    Log::log_indented("-V, --version             Print version information");
    Log::log_end();
}

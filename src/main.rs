use anyhow::{Context, Result};
use chrono::{Datelike, Days, Local, NaiveDate};

use daytime::args::{CliAction, ParsedArgs, RunOptions, display_help, display_version_info};
use daytime::config::{Config, validate_config, validate_latitude};
use daytime::constants::{DATE_FORMAT, EXIT_FAILURE};
use daytime::logger::Log;
use daytime::time_state::{DayEvent, naive_time_to_hours, next_event};
use daytime::utils::{format_clock, format_span, path_for_display};
use daytime::{DayTimeCalculator, DayTimes, get_time_state};

fn main() {
    let parsed_args = ParsedArgs::from_env();

    let result = match parsed_args.action {
        CliAction::ShowVersion => {
            display_version_info();
            Ok(())
        }
        CliAction::ShowHelp => {
            display_help();
            Ok(())
        }
        CliAction::ShowHelpDueToError => {
            display_help();
            std::process::exit(EXIT_FAILURE);
        }
        CliAction::SetLatitude {
            debug_enabled,
            latitude,
        } => run_set_latitude(debug_enabled, latitude),
        CliAction::Run(options) => run_report(options),
    };

    if let Err(e) = result {
        Log::log_pipe();
        Log::log_error(&format!("{:#}", e));
        Log::log_end();
        std::process::exit(EXIT_FAILURE);
    }
}

/// Write a new latitude to the config file, creating the file if needed.
fn run_set_latitude(debug_enabled: bool, latitude: f64) -> Result<()> {
    Log::log_version();

    let config_path = Config::get_config_path()?;
    if debug_enabled {
        Log::log_debug(&format!(
            "Using config path {}",
            path_for_display(&config_path)
        ));
    }

    if config_path.exists() {
        Config::update_latitude(&config_path, latitude)?;
    } else {
        validate_latitude(latitude)?;
        Config::create_default_config(&config_path, Some(latitude))?;
        Log::log_block_start(&format!(
            "Created configuration at {}",
            path_for_display(&config_path)
        ));
        Log::log_indented(&format!("Latitude: {}", latitude));
    }

    Log::log_end();
    Ok(())
}

/// Print sunrise and sunset for the requested range of days.
///
/// A latitude given on the command line bypasses the config file entirely.
fn run_report(options: RunOptions) -> Result<()> {
    Log::log_version();

    let config = match options.latitude {
        Some(latitude) => Config {
            latitude: Some(latitude),
            days: options.days,
        },
        None => {
            let mut config = Config::load()?;
            if options.days.is_some() {
                config.days = options.days;
            }
            config
        }
    };
    validate_config(&config)?;

    if options.debug_enabled {
        config.log_config();
    }

    let calculator = DayTimeCalculator::new(config.effective_latitude());
    Log::log_decorated(&format!(
        "Latitude {:.4}° ({} hemisphere)",
        config.effective_latitude(),
        calculator.hemisphere().as_str()
    ));
    if options.debug_enabled {
        Log::log_block_start("Day length model");
        Log::log_indented(&format!(
            "Seasonal swing: ±{}",
            format_span(calculator.half_amplitude())
        ));
    }

    let now = Local::now();
    let today = now.date_naive();
    let start = options.date.unwrap_or(today);

    for offset in 0..config.effective_days() {
        let date = start
            .checked_add_days(Days::new(u64::from(offset)))
            .with_context(|| format!("Date out of range after {}", start.format(DATE_FORMAT)))?;
        let times = calculator.calculate(&date);

        log_day(date, &times);
        if date == today {
            log_current_state(&times, naive_time_to_hours(now.time()));
        }
    }

    Log::log_end();
    Ok(())
}

fn log_day(date: NaiveDate, times: &DayTimes) {
    Log::log_block_start(&format!(
        "{} (day {})",
        date.format(DATE_FORMAT),
        date.ordinal()
    ));
    Log::log_indented(&format!("Sunrise: {}", format_clock(times.sunrise_hour)));
    Log::log_indented(&format!("Sunset: {}", format_clock(times.sunset_hour)));
    Log::log_indented(&format!("Day length: {}", format_span(times.day_length())));
}

fn log_current_state(times: &DayTimes, hour: f64) {
    let state = get_time_state(times, hour);
    Log::log_indented(&format!("Now: {}", state.as_str()));

    if let Some((event, remaining)) = next_event(times, hour) {
        let event_name = match event {
            DayEvent::Sunrise => "sunrise",
            DayEvent::Sunset => "sunset",
        };
        Log::log_indented(&format!(
            "Next {} in {}",
            event_name,
            format_span(remaining.as_secs_f64() / 3600.0)
        ));
    }
}

use std::str::FromStr;
use fern::colors::{Color, ColoredLevelConfig};
use log::info;
use sea_query::Value;
use crate::common::structs::custom_error::CustomError;
use crate::config::structs::configuration::Configuration;

pub fn parse_log_level(level: &str) -> Result<log::LevelFilter, CustomError> {
    match level {
        "off" => Ok(log::LevelFilter::Off),
        "trace" => Ok(log::LevelFilter::Trace),
        "debug" => Ok(log::LevelFilter::Debug),
        "info" => Ok(log::LevelFilter::Info),
        "warn" => Ok(log::LevelFilter::Warn),
        "error" => Ok(log::LevelFilter::Error),
        _ => Err(CustomError::new(&format!("Unknown log level encountered: '{}'", level))),
    }
}

pub fn setup_logging(config: &Configuration) -> Result<(), CustomError>
{
    let level = parse_log_level(config.log_level.as_str())?;

    let colors = ColoredLevelConfig::new()
        .trace(Color::Cyan)
        .debug(Color::Magenta)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    if let Err(err) = fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{} [{:width$}][{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.9f"),
                colors.color(record.level()),
                record.target(),
                message,
                width = 5
            ))
        })
        .level(level)
        .level_for("sqlx", log::LevelFilter::Warn)
        .chain(std::io::stderr())
        .apply()
    {
        return Err(CustomError::new(&format!("Failed to initialize logging: {}", err)));
    }
    info!("logging initialized.");
    Ok(())
}

/// Reads a command-line placeholder value: integer, float, boolean, `null`,
/// otherwise text.
pub fn parse_value(raw: &str) -> Value {
    if let Ok(integer) = i64::from_str(raw) {
        return Value::from(integer);
    }
    if let Ok(float) = f64::from_str(raw) {
        return Value::from(float);
    }
    match raw {
        "true" => Value::from(true),
        "false" => Value::from(false),
        "null" => Value::String(None),
        _ => Value::from(raw),
    }
}

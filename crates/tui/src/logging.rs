use std::{fs::OpenOptions, sync::Mutex};

use crate::{
    config::AppConfig,
    error::{AppError, Result},
};

/// Installs the tracing subscriber.
///
/// The terminal UI owns stdout, so logs only go to `log_file`; without one no
/// subscriber is installed and events are dropped.
pub fn init(config: &AppConfig) -> Result<()> {
    let Some(path) = config.log_file.as_deref() else {
        return Ok(());
    };

    let file = OpenOptions::new().create(true).append(true).open(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter_directives(&config.log_level))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|err| AppError::Log(err.to_string()))
}

fn filter_directives(level: &str) -> String {
    format!("cashbook={level},engine={level}")
}

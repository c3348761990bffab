use chrono_tz::Tz;
use clap::{Parser, ValueEnum};
use engine::{Currency, EngineError};
use serde::Deserialize;

use crate::error::Result;

const DEFAULT_CONFIG_PATH: &str = "config/cashbook.toml";

/// How entry timestamps are shown in the list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DateStyle {
    /// `2024-03-01 18:30:00` in the configured timezone.
    #[default]
    Absolute,
    /// `5 minutes ago`, absolute after a week.
    Relative,
}

/// Arithmetic used for the balance shown in the header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum BalanceMode {
    /// Float sum, prints like `0.30000000000000004 ₹`.
    #[default]
    Float,
    /// Integer paise, prints like `0.30 ₹`.
    Exact,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub currency: Currency,
    pub timezone: String,
    pub date_style: DateStyle,
    pub balance_mode: BalanceMode,
    pub log_file: Option<String>,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        let view = ViewSettings::default();
        Self {
            currency: view.currency,
            timezone: view.timezone.name().to_string(),
            date_style: view.date_style,
            balance_mode: view.balance_mode,
            log_file: None,
            log_level: "info".to_string(),
        }
    }
}

/// Validated, display-ready part of the configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewSettings {
    pub currency: Currency,
    pub timezone: Tz,
    pub date_style: DateStyle,
    pub balance_mode: BalanceMode,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            currency: Currency::default(),
            timezone: chrono_tz::Asia::Kolkata,
            date_style: DateStyle::default(),
            balance_mode: BalanceMode::default(),
        }
    }
}

impl AppConfig {
    pub fn view_settings(&self) -> Result<ViewSettings> {
        let timezone = self.timezone.trim().parse::<Tz>().map_err(|err| {
            config::ConfigError::Message(format!("invalid timezone {:?}: {err}", self.timezone))
        })?;

        Ok(ViewSettings {
            currency: self.currency,
            timezone,
            date_style: self.date_style,
            balance_mode: self.balance_mode,
        })
    }
}

#[derive(Debug, Parser)]
#[command(name = "cashbook", about = "Terminal cashbook", disable_version_flag = true)]
struct Args {
    /// Optional config file path (TOML).
    #[arg(long)]
    config: Option<String>,
    /// Override currency code.
    #[arg(long, value_parser = parse_currency)]
    currency: Option<Currency>,
    /// Override timezone (IANA name).
    #[arg(long)]
    timezone: Option<String>,
    /// Override timestamp style.
    #[arg(long, value_enum)]
    date_style: Option<DateStyle>,
    /// Override balance arithmetic.
    #[arg(long, value_enum)]
    balance_mode: Option<BalanceMode>,
    /// Append logs to this file (nothing is logged otherwise).
    #[arg(long)]
    log_file: Option<String>,
    /// Override log level (e.g. debug).
    #[arg(long)]
    log_level: Option<String>,
}

fn parse_currency(value: &str) -> std::result::Result<Currency, EngineError> {
    Currency::try_from(value)
}

pub fn load() -> Result<AppConfig> {
    load_from(Args::parse())
}

fn load_from(args: Args) -> Result<AppConfig> {
    let config_path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
    let mut builder = config::Config::builder();
    builder = builder.add_source(config::File::with_name(config_path).required(false));
    builder = builder.add_source(config::Environment::with_prefix("CASHBOOK_TUI"));
    let mut settings: AppConfig = builder.build()?.try_deserialize()?;

    if let Some(currency) = args.currency {
        settings.currency = currency;
    }
    if let Some(timezone) = args.timezone {
        settings.timezone = timezone;
    }
    if let Some(date_style) = args.date_style {
        settings.date_style = date_style;
    }
    if let Some(balance_mode) = args.balance_mode {
        settings.balance_mode = balance_mode;
    }
    if let Some(log_file) = args.log_file {
        settings.log_file = Some(log_file);
    }
    if let Some(log_level) = args.log_level {
        settings.log_level = log_level;
    }

    Ok(settings)
}

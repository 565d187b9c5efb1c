use clap::{Parser, ValueEnum};
use serde::Deserialize;
use std::path::PathBuf;
use validator::Validate;

use crate::error::{Result, SeatingError};

// Главная структура конфигурации - контейнер для всех настроек
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct Config {
    pub app: AppConfig,
    #[validate(nested)]
    pub grid: GridConfig,
}

// Настройки приложения
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub rust_log: String,
    pub log_format: LogFormat,
    pub output_format: OutputFormat,
    // None - читаем stdin
    pub input: Option<PathBuf>,
}

// Размеры зала
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GridConfig {
    #[validate(range(min = 1, message = "rows must be at least 1"))]
    pub rows: usize,
    #[validate(range(min = 1, message = "columns must be at least 1"))]
    pub columns: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self { rows: 3, columns: 11 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

/// Аргументы командной строки, у каждого есть переменная окружения.
#[derive(Debug, Parser)]
#[command(author, version, about = "Allocate center-biased seat blocks for a sequence of group requests")]
pub struct Cli {
    /// Number of rows in the seating plan
    #[arg(short, long, env = "SEATING_ROWS", default_value_t = 3)]
    pub rows: usize,

    /// Number of seats per row
    #[arg(short, long, env = "SEATING_COLUMNS", default_value_t = 11)]
    pub columns: usize,

    /// Read requests from a file instead of stdin
    #[arg(short, long, env = "SEATING_INPUT")]
    pub input: Option<PathBuf>,

    /// Output format
    #[arg(short, long, env = "SEATING_OUTPUT", value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    /// Log filter directives
    #[arg(long, env = "RUST_LOG", default_value = "seating_system=info")]
    pub log: String,

    /// Log line format
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

impl Config {
    /// Собирает конфигурацию из аргументов и проверяет размеры зала
    /// до того, как зал будет создан.
    pub fn from_cli(cli: Cli) -> Result<Self> {
        let config = Config {
            app: AppConfig {
                rust_log: cli.log,
                log_format: cli.log_format,
                output_format: cli.output,
                input: cli.input,
            },
            grid: GridConfig {
                rows: cli.rows,
                columns: cli.columns,
            },
        };
        config
            .validate()
            .map_err(|e| SeatingError::Config(e.to_string()))?;
        Ok(config)
    }

    pub fn load() -> Result<Self> {
        Self::from_cli(Cli::parse())
    }
}

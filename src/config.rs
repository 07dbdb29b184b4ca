use indexmap::IndexMap;
use serde::Deserialize;

use crate::error::ReportError;

/// Log levels accepted in the config file. Parsed by explicit name mapping;
/// unknown names are a config error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
    Fatal,
}

impl LogLevel {
    pub fn to_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Warning => log::LevelFilter::Warn,
            // The log crate has no fatal level; fatal conditions log as error.
            LogLevel::Error | LogLevel::Fatal => log::LevelFilter::Error,
        }
    }
}

/// Run configuration, read from a JSON file. The field layout keeps its
/// declaration order; the client and product grouping lists are independent.
#[derive(Debug, Deserialize)]
pub struct Config {
    pub input_file_path: String,
    pub output_csv_path: String,
    pub field_configuration: IndexMap<String, usize>,
    pub group_by_client_info_columns: Vec<String>,
    pub group_by_product_info_columns: Vec<String>,
    #[serde(default)]
    pub log_level: Option<LogLevel>,
    #[serde(default)]
    pub log_file_path: Option<String>,
    #[serde(default)]
    pub currency_code: Option<String>,
}

impl Config {
    pub fn from_json(raw: &str) -> Result<Config, ReportError> {
        let config: Config =
            serde_json::from_str(raw).map_err(|e| ReportError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ReportError> {
        if self.field_configuration.is_empty() {
            return Err(ReportError::Config(
                "field_configuration must declare at least one field".to_string(),
            ));
        }
        for (name, &width) in &self.field_configuration {
            if width == 0 {
                return Err(ReportError::Config(format!(
                    "field `{}` has width 0; widths must be positive",
                    name
                )));
            }
        }
        Ok(())
    }
}

pub fn load(path: &str) -> Result<Config, ReportError> {
    let raw = std::fs::read_to_string(path)?;
    Config::from_json(&raw)
}

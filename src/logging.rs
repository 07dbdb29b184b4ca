use crate::config::LogLevel;
use crate::error::ReportError;

const DEFAULT_LOG_FILE: &str = "transactions.log";

/// Configures the global logger to append to the configured log file at the
/// configured level. INFO and `transactions.log` when the config is silent.
pub fn init(level: Option<LogLevel>, log_file_path: Option<&str>) -> Result<(), ReportError> {
    let level = level.unwrap_or(LogLevel::Info);
    let path = log_file_path.unwrap_or(DEFAULT_LOG_FILE);

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;

    env_logger::Builder::new()
        .filter_level(level.to_filter())
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

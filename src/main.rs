use log::{error, info};

use crate::aggregator::Aggregator;
use crate::config::Config;
use crate::currency::CurrencyConverter;
use crate::error::ReportError;

mod aggregator;
mod config;
mod currency;
mod error;
mod logging;
mod parser;
mod report;

const DEFAULT_CONFIG_PATH: &str = "script_config.json";

fn main() {
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());

    // Config and logger failures surface on stderr; the log file location is
    // itself configuration, so nothing can be logged yet.
    let config = match config::load(&config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to read config from path {}: {}", config_path, e);
            std::process::exit(1);
        }
    };
    if let Err(e) = logging::init(config.log_level, config.log_file_path.as_deref()) {
        eprintln!("Failed to set up logging: {}", e);
        std::process::exit(1);
    }

    info!("script started with config {}", config_path);
    match run(&config) {
        Ok(()) => {
            info!("report written to {}", config.output_csv_path);
        }
        Err(e) => {
            error!("run failed: {}", e);
            std::process::exit(1);
        }
    }
}

fn run(config: &Config) -> Result<(), ReportError> {
    let text = std::fs::read_to_string(&config.input_file_path)?;

    let mut table = parser::parse(&text, &config.field_configuration);
    // A trailing newline in the input parses as a row of empty values.
    table.drop_blank_rows();
    info!("parsed {} transaction rows from {}", table.row_count(), config.input_file_path);

    let aggregator = Aggregator::new(CurrencyConverter::default());
    let summaries = aggregator.aggregate(
        &table,
        &config.group_by_client_info_columns,
        &config.group_by_product_info_columns,
        config.currency_code.as_deref(),
    )?;
    info!("aggregated into {} client/product groups", summaries.len());

    report::write_summary_csv(&config.output_csv_path, &summaries)
}

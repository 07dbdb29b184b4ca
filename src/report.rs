use std::fs::File;
use std::io::Write;

use crate::aggregator::GroupedSummary;
use crate::error::ReportError;

const SUMMARY_COLUMNS: [&str; 5] = [
    "product_info",
    "client_info",
    "quantity_long_sum",
    "quantity_short_sum",
    "total_transaction_amount",
];

/// Humanizes a column name for the CSV header row: underscores become spaces
/// and every word is title-cased, e.g. `quantity_long_sum` -> `Quantity Long Sum`.
fn humanize_header(name: &str) -> String {
    name.split('_')
        .map(title_word)
        .collect::<Vec<String>>()
        .join(" ")
}

fn title_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

/// Writes the grouped summary as CSV. Undefined grouping keys serialize as
/// empty cells.
pub fn write_summary<W: Write>(writer: W, summaries: &[GroupedSummary]) -> Result<(), ReportError> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(SUMMARY_COLUMNS.iter().map(|c| humanize_header(c)))?;
    for summary in summaries {
        wtr.write_record([
            summary.product_info.clone().unwrap_or_default(),
            summary.client_info.clone().unwrap_or_default(),
            summary.quantity_long_sum.to_string(),
            summary.quantity_short_sum.to_string(),
            summary.total_transaction_amount.to_string(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_summary_csv(path: &str, summaries: &[GroupedSummary]) -> Result<(), ReportError> {
    let file = File::create(path)?;
    write_summary(file, summaries)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(product: &str, client: &str, long: f64, short: f64) -> GroupedSummary {
        GroupedSummary {
            product_info: Some(product.to_string()),
            client_info: Some(client.to_string()),
            quantity_long_sum: long,
            quantity_short_sum: short,
            total_transaction_amount: long - short,
        }
    }

    #[test]
    fn test_humanize_header() {
        assert_eq!(humanize_header("quantity_long_sum"), "Quantity Long Sum");
        assert_eq!(humanize_header("product_info"), "Product Info");
        assert_eq!(humanize_header("total_transaction_amount"), "Total Transaction Amount");
    }

    #[test]
    fn test_written_csv_has_humanized_header_and_rows() {
        let summaries = vec![summary("P001", "C001", 100.0, 50.0)];
        let mut buffer = Vec::new();
        write_summary(&mut buffer, &summaries).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        let mut lines = output.lines();
        assert_eq!(
            lines.next().unwrap(),
            "Product Info,Client Info,Quantity Long Sum,Quantity Short Sum,Total Transaction Amount"
        );
        assert_eq!(lines.next().unwrap(), "P001,C001,100,50,50");
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_undefined_key_serializes_as_empty_cell() {
        let summaries = vec![GroupedSummary {
            product_info: Some("P001".to_string()),
            client_info: None,
            quantity_long_sum: 10.0,
            quantity_short_sum: 4.0,
            total_transaction_amount: 6.0,
        }];
        let mut buffer = Vec::new();
        write_summary(&mut buffer, &summaries).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert_eq!(output.lines().nth(1).unwrap(), "P001,,10,4,6");
    }
}

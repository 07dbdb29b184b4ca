use indexmap::IndexMap;
use log::warn;

use crate::currency::CurrencyConverter;
use crate::error::{ReportError, RowKeyError};
use crate::parser::Table;

pub const QUANTITY_LONG_COLUMN: &str = "quantity_long";
pub const QUANTITY_SHORT_COLUMN: &str = "quantity_short";

/// One output row per unique (product_info, client_info) pair. A `None` key
/// marks rows whose grouping fields were missing from the table.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupedSummary {
    pub product_info: Option<String>,
    pub client_info: Option<String>,
    pub quantity_long_sum: f64,
    pub quantity_short_sum: f64,
    pub total_transaction_amount: f64,
}

/// Groups transaction rows by derived client/product keys and sums the two
/// quantity columns per group.
#[derive(Debug, Default)]
pub struct Aggregator {
    converter: CurrencyConverter,
}

impl Aggregator {
    pub fn new(converter: CurrencyConverter) -> Self {
        Aggregator { converter }
    }

    /// Aggregates `table` into one summary per (product_info, client_info)
    /// pair. The keys are underscore-joins of the row's values for
    /// `client_key_fields` and `product_key_fields` respectively. Fails with
    /// a data error if either quantity column is absent or holds a value that
    /// does not parse as a number; a grouping field missing from the table is
    /// row-local and only demotes that row's key to the undefined bucket.
    ///
    /// When `source_currency` names a non-USD currency, the summed quantities
    /// and the total are normalized to USD through the converter.
    pub fn aggregate(
        &self,
        table: &Table,
        client_key_fields: &[String],
        product_key_fields: &[String],
        source_currency: Option<&str>,
    ) -> Result<Vec<GroupedSummary>, ReportError> {
        let long_idx = require_column(table, QUANTITY_LONG_COLUMN)?;
        let short_idx = require_column(table, QUANTITY_SHORT_COLUMN)?;

        let mut groups: IndexMap<(Option<String>, Option<String>), (f64, f64)> = IndexMap::new();

        for row in table.rows() {
            let quantity_long = parse_quantity(&row[long_idx], QUANTITY_LONG_COLUMN)?;
            let quantity_short = parse_quantity(&row[short_idx], QUANTITY_SHORT_COLUMN)?;

            let client_info = combine_column_values(table, row, client_key_fields);
            let product_info = combine_column_values(table, row, product_key_fields);

            let sums = groups.entry((product_info, client_info)).or_insert((0.0, 0.0));
            sums.0 += quantity_long;
            sums.1 += quantity_short;
        }

        let mut summaries: Vec<GroupedSummary> = groups
            .into_iter()
            .map(|((product_info, client_info), (long_sum, short_sum))| GroupedSummary {
                product_info,
                client_info,
                quantity_long_sum: long_sum,
                quantity_short_sum: short_sum,
                total_transaction_amount: long_sum - short_sum,
            })
            .collect();

        if let Some(code) = source_currency {
            if !code.eq_ignore_ascii_case("USD") {
                for summary in &mut summaries {
                    summary.quantity_long_sum =
                        self.converter.convert_to_usd(summary.quantity_long_sum, code)?;
                    summary.quantity_short_sum =
                        self.converter.convert_to_usd(summary.quantity_short_sum, code)?;
                    summary.total_transaction_amount =
                        summary.quantity_long_sum - summary.quantity_short_sum;
                }
            }
        }

        Ok(summaries)
    }
}

fn require_column(table: &Table, name: &str) -> Result<usize, ReportError> {
    table.column_index(name).ok_or_else(|| {
        ReportError::Data(format!("required column `{}` is absent from the table", name))
    })
}

fn parse_quantity(raw: &str, column: &str) -> Result<f64, ReportError> {
    raw.parse::<f64>().map_err(|_| {
        ReportError::Data(format!(
            "value `{}` in column `{}` cannot be converted to a number",
            raw, column
        ))
    })
}

/// Joins the row's values for `key_fields` with underscores. A field missing
/// from the table is row-local: logged, and the key becomes `None`.
fn combine_column_values(table: &Table, row: &[String], key_fields: &[String]) -> Option<String> {
    match try_combine(table, row, key_fields) {
        Ok(key) => Some(key),
        Err(e) => {
            warn!("could not derive grouping key: {}. Row falls into the undefined key bucket.", e);
            None
        }
    }
}

fn try_combine(table: &Table, row: &[String], key_fields: &[String]) -> Result<String, RowKeyError> {
    let mut parts = Vec::with_capacity(key_fields.len());
    for field in key_fields {
        let idx = table
            .column_index(field)
            .ok_or_else(|| RowKeyError { field: field.clone() })?;
        parts.push(row[idx].as_str());
    }
    Ok(parts.join("_"))
}

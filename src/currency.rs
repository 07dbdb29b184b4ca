use std::collections::HashMap;

use crate::error::ReportError;

/// Stateless USD normalization service. Constructed explicitly by the caller
/// and handed to the aggregator; the default pipeline configures no source
/// currency, so conversion stays dormant.
#[derive(Debug, Default)]
pub struct CurrencyConverter {
    rates_to_usd: HashMap<String, f64>,
}

impl CurrencyConverter {
    pub fn with_rates(rates_to_usd: HashMap<String, f64>) -> Self {
        let rates_to_usd = rates_to_usd
            .into_iter()
            .map(|(code, rate)| (code.to_uppercase(), rate))
            .collect();
        CurrencyConverter { rates_to_usd }
    }

    pub fn convert_to_usd(&self, amount: f64, currency_code: &str) -> Result<f64, ReportError> {
        let code = currency_code.to_uppercase();
        if code == "USD" {
            return Ok(amount);
        }
        match self.rates_to_usd.get(&code) {
            Some(rate) => Ok(amount * rate),
            None => Err(ReportError::Data(format!(
                "no USD rate known for currency code `{}`",
                currency_code
            ))),
        }
    }
}

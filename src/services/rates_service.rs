use chrono::NaiveDate;
use std::collections::BTreeMap;
use tracing::{debug, warn};
use crate::api::exchangerates::{ApiError, ExchangeRatesClient};
use crate::models::{CurrencySeries, RateSeries};

/// Pivot the API's `date -> currency -> rate` map into one series per requested currency.
///
/// Dates are sorted ascending and every rate is inverted (`1 / rate`) so the
/// chart shows how much base currency one unit of each secondary costs.
/// Unparseable dates, unrequested currencies and rates that are non-positive
/// or whose inverse overflows are skipped.
pub fn reformat_data(
    base: &str,
    rates: &BTreeMap<String, BTreeMap<String, f64>>,
    currencies: &[String],
) -> RateSeries {
    let mut dated: Vec<(NaiveDate, &BTreeMap<String, f64>)> = Vec::with_capacity(rates.len());
    for (date_str, per_currency) in rates {
        match NaiveDate::parse_from_str(date_str, "%Y-%m-%d") {
            Ok(date) => dated.push((date, per_currency)),
            Err(e) => warn!("Skipping rates for unparseable date '{}': {}", date_str, e),
        }
    }
    dated.sort_by_key(|(date, _)| *date);

    let mut series: Vec<CurrencySeries> = currencies.iter().map(CurrencySeries::new).collect();

    for (date, per_currency) in dated {
        for (currency, &rate) in per_currency {
            let Some(target) = series.iter_mut().find(|s| &s.currency == currency) else {
                debug!("Ignoring unrequested currency {} on {}", currency, date);
                continue;
            };
            let value = 1.0 / rate;
            if !rate.is_finite() || rate <= 0.0 || !value.is_finite() {
                warn!("Skipping unusable {} rate {} on {}", currency, rate, date);
                continue;
            }
            target.push(date, value);
        }
    }

    RateSeries {
        base: base.to_string(),
        series,
    }
}

/// Fetch the history for `currencies` against `base` and reshape it
pub async fn get_data(
    client: &ExchangeRatesClient,
    base: &str,
    currencies: &[String],
    start: NaiveDate,
    end: NaiveDate,
) -> Result<RateSeries, ApiError> {
    let history = client.get_history(base, currencies, start, end).await?;
    debug!("API answered base={:?} range={:?}..{:?} days={}",
        history.base, history.start_at, history.end_at, history.rates.len());
    let data = reformat_data(base, &history.rates, currencies);

    if data.total_points() == 0 {
        return Err(ApiError::EmptyData(format!("{} against {} from {} to {}",
            currencies.join(","), base, start, end)));
    }

    debug!("Reshaped {} points across {} currencies", data.total_points(), data.series.len());
    Ok(data)
}

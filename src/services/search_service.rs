use chrono::NaiveDate;
use tracing::{info, warn};
use crate::api::exchangerates::ExchangeRatesClient;
use crate::models::{ChartView, SearchParams};
use crate::services::{chart_service, rates_service, timeframe_service, validation_service};
use crate::services::validation_service::ValidationError;
use crate::utils::ChartError;

/// Pixel size of the rendered chart
#[derive(Debug, Clone, Copy)]
pub struct ChartSize {
    pub width: u32,
    pub height: u32,
}

/// If the input is valid, fetch the rates and draw the chart.
///
/// # Returns
/// * `Ok(ChartView)` - Markup plus summary for the search page
/// * `Err(ChartError::InvalidInput)` - Parameters failed validation
/// * `Err(ChartError::Upstream)` - The exchange-rate API failed or had no data
/// * `Err(ChartError::Render)` - Plotting failed
pub async fn visuals(
    client: &ExchangeRatesClient,
    params: &SearchParams,
    today: NaiveDate,
    size: ChartSize,
) -> Result<ChartView, ChartError> {
    let start = timeframe_service::normalize_date(&params.time_frame, today);

    validation_service::validate(params).map_err(|e| {
        warn!("Rejected search {:?}: {}", params, e);
        e
    })?;

    let start = match start {
        Some(date) if validation_service::check_input(&params.base, &params.secondary, start) => date,
        _ => {
            warn!("Rejected search {:?}: bad time frame", params);
            return Err(ValidationError::InvalidTimeFrame(params.time_frame.clone()).into());
        }
    };

    info!("Charting {} against {} from {} to {}", params.secondary.join(","), params.base, start, today);

    let data = rates_service::get_data(client, &params.base, &params.secondary, start, today)
        .await
        .map_err(|e| {
            warn!("Exchange-rate lookup failed for {:?} (status {:?}): {}", params, e.status(), e);
            e
        })?;

    let svg = chart_service::render_chart(&data, size.width, size.height)?;
    let summary = chart_service::summarize(&data);

    info!("Chart rendered: {} points, {} bytes of SVG", data.total_points(), svg.len());

    Ok(ChartView {
        base: data.base,
        start,
        end: today,
        svg,
        summary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::exchangerates::stub::{spawn_stub, StubReply};
    use crate::api::exchangerates::ApiError;

    const SIZE: ChartSize = ChartSize { width: 640, height: 400 };

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2020, 10, 8).unwrap()
    }

    fn params(base: &str, secondary: &[&str], time_frame: &str) -> SearchParams {
        SearchParams {
            base: base.to_string(),
            secondary: secondary.iter().map(|s| s.to_string()).collect(),
            time_frame: time_frame.to_string(),
        }
    }

    #[tokio::test]
    async fn test_valid_search_yields_markup() {
        let stub = spawn_stub(StubReply::Echo).await;
        let client = ExchangeRatesClient::with_base_url(stub.url.clone()).unwrap();

        let view = visuals(&client, &params("EUR", &["USD", "ILS"], "Last week"), today(), SIZE)
            .await
            .expect("valid search should chart");

        assert!(!view.svg.is_empty());
        assert!(view.svg.contains("<svg"));
        assert_eq!(view.start, NaiveDate::from_ymd_opt(2020, 10, 1).unwrap());
        assert_eq!(view.end, today());
        assert_eq!(view.summary.len(), 2);
        assert_eq!(view.base, "EUR");
    }

    #[tokio::test]
    async fn test_invalid_input_never_calls_api() {
        // Any request would fail loudly against this address
        let client = ExchangeRatesClient::with_base_url("http://127.0.0.1:1/history".to_string()).unwrap();

        let cases = [
            params("EUR", &["EUR"], "Last week"),
            params("EUR", &["BTC"], "Last week"),
            params("EUR", &[], "Last week"),
            params("EUR", &["USD", "JPY", "GBP", "CHF"], "Last week"),
            params("EUR", &["USD"], "Last decade"),
            params("EUR", &["USD"], "-7"),
            SearchParams::default(),
        ];

        for case in cases {
            let result = visuals(&client, &case, today(), SIZE).await;
            assert!(matches!(result, Err(ChartError::InvalidInput(_))), "{:?} -> {:?}", case, result);
        }
    }

    #[tokio::test]
    async fn test_upstream_failure_is_sentinel() {
        let stub = spawn_stub(StubReply::Status(500, r#"{"error":"boom"}"#)).await;
        let client = ExchangeRatesClient::with_base_url(stub.url.clone()).unwrap();

        let result = visuals(&client, &params("EUR", &["USD"], "Last month"), today(), SIZE).await;

        match result {
            Err(ChartError::Upstream(ApiError::ServerError(500, msg))) => assert_eq!(msg, "boom"),
            other => panic!("expected upstream failure, got {:?}", other),
        }
    }
}

use reqwest::Client as HttpClient;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use chrono::NaiveDate;
use std::time::Duration;
use super::models::{ApiError, HistoryResponse};
use crate::config::Config;
use crate::services::timeframe_service::format_date;
use crate::utils::extract_api_message;
use tracing::{debug, warn};

/// Client for the historical exchange-rate REST API
#[derive(Debug, Clone)]
pub struct ExchangeRatesClient {
    http_client: HttpClient,
    base_url: String,
    access_key: Option<String>,
}

impl ExchangeRatesClient {
    /// Create a client from the app config
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        Self::build(config.api_url.clone(), config.api_key.clone(), config.api_timeout)
    }

    /// Create a client pointed at a custom history endpoint (for testing)
    pub fn with_base_url(base_url: String) -> Result<Self, ApiError> {
        Self::build(base_url, None, Duration::from_secs(5))
    }

    fn build(base_url: String, access_key: Option<String>, timeout: Duration) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http_client = HttpClient::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::RequestError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            base_url,
            access_key,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Map a non-success response to an error, keeping the API's own message when it sent one
    async fn handle_error_response(status: reqwest::StatusCode, response: reqwest::Response) -> ApiError {
        let status_code = status.as_u16();
        let body_text = response.text().await.unwrap_or_default();
        let message = extract_api_message(&body_text);

        match status_code {
            400 => ApiError::BadRequest(message),
            401 => ApiError::Unauthorized(message),
            403 => ApiError::Forbidden(message),
            404 => ApiError::NotFound(message),
            429 => {
                warn!("Exchange-rate API is rate limiting us: {}", message);
                ApiError::RateLimited(message)
            }
            500..=599 => {
                warn!("Exchange-rate API server error {}: {}", status_code, message);
                ApiError::ServerError(status_code, message)
            }
            _ => ApiError::HttpError(status_code, message),
        }
    }

    /// GET {base_url}?start_at=..&end_at=..&symbols=..&base=..
    ///
    /// Retrieves daily rates of `symbols` against `base` between two dates, inclusive.
    ///
    /// # Returns
    /// * `Ok(HistoryResponse)` - Rates keyed by date
    /// * `Err(ApiError)` - Non-success status, transport failure or unparseable body
    pub async fn get_history(
        &self,
        base: &str,
        symbols: &[String],
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<HistoryResponse, ApiError> {
        let mut query = vec![
            ("start_at", format_date(start)),
            ("end_at", format_date(end)),
            ("symbols", symbols.join(",")),
            ("base", base.to_string()),
        ];
        if let Some(key) = &self.access_key {
            query.push(("access_key", key.clone()));
        }

        debug!("GET {} base={} symbols={} {}..{}", self.base_url, base, symbols.join(","), start, end);

        let response = self.http_client
            .get(&self.base_url)
            .query(&query)
            .send()
            .await
            .map_err(|e| ApiError::RequestError(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(Self::handle_error_response(status, response).await);
        }

        response
            .json::<HistoryResponse>()
            .await
            .map_err(|e| ApiError::DeserializationError(format!("Failed to parse response: {}", e)))
    }
}

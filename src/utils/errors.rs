use axum::http::StatusCode;
use thiserror::Error;
use crate::api::exchangerates::ApiError;
use crate::services::validation_service::ValidationError;

/// Why a search did not produce a chart
#[derive(Debug, Error)]
pub enum ChartError {
    /// The submitted parameters cannot be charted
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] ValidationError),
    /// The exchange-rate API failed or returned nothing usable
    #[error("Upstream failure: {0}")]
    Upstream(#[from] ApiError),
    /// Plotting failed
    #[error("Render failure: {0}")]
    Render(String),
}

impl ChartError {
    /// Status code the search page answers with
    pub fn status_code(&self) -> StatusCode {
        match self {
            ChartError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ChartError::Upstream(_) => StatusCode::BAD_GATEWAY,
            ChartError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to show to the visitor
    pub fn user_message(&self) -> String {
        match self {
            ChartError::InvalidInput(e) => e.to_string(),
            ChartError::Upstream(ApiError::RateLimited(_)) => {
                "The exchange-rate service is busy. Please try again in a moment.".to_string()
            }
            ChartError::Upstream(ApiError::RequestError(_)) => {
                "Could not reach the exchange-rate service. Please try again later.".to_string()
            }
            ChartError::Upstream(ApiError::EmptyData(_)) => {
                "No exchange rates were published for that period.".to_string()
            }
            ChartError::Upstream(_) => {
                "The exchange-rate service could not answer this search.".to_string()
            }
            ChartError::Render(_) => "The chart could not be drawn.".to_string(),
        }
    }
}

/// Extract a clean error message from an exchange-rate API error body
///
/// Understands both shapes the API has used:
/// `{"error": "Base 'XXX' is not supported."}` and
/// `{"success": false, "error": {"code": 201, "info": "Invalid base currency."}}`
///
/// Falls back to the trimmed raw body when it is not JSON.
pub fn extract_api_message(body: &str) -> String {
    if let Ok(json) = serde_json::from_str::<serde_json::Value>(body) {
        let error = json.get("error");
        let message = error
            .and_then(|e| e.as_str())
            .or_else(|| error.and_then(|e| e.get("info")).and_then(|v| v.as_str()))
            .or_else(|| error.and_then(|e| e.get("message")).and_then(|v| v.as_str()))
            .or_else(|| json.get("message").and_then(|v| v.as_str()));
        if let Some(message) = message {
            return message.trim().to_string();
        }
    }
    body.trim().to_string()
}

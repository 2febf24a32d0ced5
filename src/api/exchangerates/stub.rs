//! In-process stand-in for the exchange-rate API, used by tests

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::NaiveDate;
use serde_json::{json, Map, Value};
use std::collections::HashMap;
use std::sync::Arc;

/// What the stub answers with
#[derive(Debug, Clone)]
pub enum StubReply {
    /// One rate per requested symbol for every day in `start_at..=end_at`
    Echo,
    /// A fixed status and raw body
    Status(u16, &'static str),
}

pub struct StubServer {
    pub url: String,
}

/// Bind the stub on an ephemeral local port and serve it in the background
pub async fn spawn_stub(reply: StubReply) -> StubServer {
    let app = Router::new()
        .route("/history", get(history))
        .with_state(Arc::new(reply));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub listener");
    let addr = listener.local_addr().expect("stub address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub server");
    });

    StubServer {
        url: format!("http://{}/history", addr),
    }
}

async fn history(
    State(reply): State<Arc<StubReply>>,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    match reply.as_ref() {
        StubReply::Status(code, body) => {
            let status = StatusCode::from_u16(*code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            (status, [(header::CONTENT_TYPE, "application/json")], body.to_string()).into_response()
        }
        StubReply::Echo => Json(echo_rates(&query)).into_response(),
    }
}

fn echo_rates(query: &HashMap<String, String>) -> Value {
    let start_at = query.get("start_at").cloned().unwrap_or_default();
    let end_at = query.get("end_at").cloned().unwrap_or_default();
    let base = query.get("base").cloned().unwrap_or_default();
    let symbols: Vec<&str> = query
        .get("symbols")
        .map(|s| s.split(',').filter(|s| !s.is_empty()).collect())
        .unwrap_or_default();

    let mut rates = Map::new();
    if let (Ok(start), Ok(end)) = (
        NaiveDate::parse_from_str(&start_at, "%Y-%m-%d"),
        NaiveDate::parse_from_str(&end_at, "%Y-%m-%d"),
    ) {
        for (day, date) in start.iter_days().take_while(|d| *d <= end).enumerate() {
            let mut per_day = Map::new();
            for (i, symbol) in symbols.iter().enumerate() {
                let rate = (i as f64 + 1.0) + day as f64 * 0.01;
                per_day.insert(symbol.to_string(), json!(rate));
            }
            rates.insert(date.format("%Y-%m-%d").to_string(), Value::Object(per_day));
        }
    }

    json!({
        "rates": rates,
        "base": base,
        "start_at": start_at,
        "end_at": end_at,
    })
}

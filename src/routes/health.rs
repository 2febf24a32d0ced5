use axum::extract::State;
use std::sync::Arc;
use std::time::Duration;
use super::AppState;

/// GET /health
///
/// Plain-text liveness check: how long the server has been up and which
/// rate endpoint it is configured to call.
pub async fn execute(State(state): State<Arc<AppState>>) -> String {
    health_text(state.started_at.elapsed(), state.client.base_url())
}

fn health_text(uptime: Duration, api_url: &str) -> String {
    let secs = uptime.as_secs();
    format!(
        "ok\nuptime: {}d {:02}:{:02}:{:02}\nrates api: {}\n",
        secs / 86_400,
        (secs % 86_400) / 3600,
        (secs % 3600) / 60,
        secs % 60,
        api_url
    )
}

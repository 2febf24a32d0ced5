use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Html;
use std::sync::Arc;
use crate::currencies::{display_name, SUPPORTED_CURRENCIES};
use crate::models::search::{SearchParams, BASE_FIELD, SECONDARY_FIELD, TIME_FRAME_FIELD};
use crate::services::timeframe_service::TimeFrame;
use crate::services::validation_service;
use crate::utils::{escape_html, Page};

use super::{search, AppState};

/// GET /
///
/// A complete, valid query string is treated as a search so old bookmarks keep working.
pub async fn execute(
    State(state): State<Arc<AppState>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> (StatusCode, Html<String>) {
    let params = SearchParams::from_pairs(pairs);
    if validation_service::is_valid(&params) {
        return search::execute(&state, params).await;
    }
    (StatusCode::OK, Html(Page::new("Exchange rate history", render_search_form(None, None)).render()))
}

/// The search form, optionally pre-filled from a previous submission and showing an error
pub fn render_search_form(previous: Option<&SearchParams>, error: Option<&str>) -> String {
    let mut html = String::new();

    if let Some(error) = error {
        html.push_str(&format!("<p class=\"error\">{}</p>\n", escape_html(error)));
    }

    html.push_str("<form action=\"/search\" method=\"post\">\n");

    // Base currency
    let base = previous.map(|p| p.base.as_str()).unwrap_or("EUR");
    html.push_str(&format!("<label for=\"{0}\">Base currency</label>\n<select id=\"{0}\" name=\"{0}\">\n", BASE_FIELD));
    for code in SUPPORTED_CURRENCIES {
        html.push_str(&currency_option(code, code == base));
    }
    html.push_str("</select>\n");

    // Secondary currencies
    html.push_str(&format!(
        "<label for=\"{0}\">Compare with (up to 3)</label>\n<select id=\"{0}\" name=\"{0}\" multiple size=\"{1}\">\n",
        SECONDARY_FIELD,
        SUPPORTED_CURRENCIES.len()
    ));
    for code in SUPPORTED_CURRENCIES {
        let selected = previous.map(|p| p.secondary.iter().any(|c| c == code)).unwrap_or(false);
        html.push_str(&currency_option(code, selected));
    }
    html.push_str("</select>\n");

    // Time frame
    let chosen = previous
        .and_then(|p| TimeFrame::parse(&p.time_frame))
        .unwrap_or(TimeFrame::LastMonth);
    html.push_str(&format!("<label for=\"{0}\">Time frame</label>\n<select id=\"{0}\" name=\"{0}\">\n", TIME_FRAME_FIELD));
    for preset in TimeFrame::PRESETS {
        let label = preset.label();
        html.push_str(&format!(
            "<option value=\"{0}\"{1}>{0}</option>\n",
            escape_html(&label),
            if preset == chosen { " selected" } else { "" }
        ));
    }
    html.push_str("</select>\n");

    html.push_str("<p><button type=\"submit\">Show chart</button></p>\n</form>\n");
    html
}

fn currency_option(code: &str, selected: bool) -> String {
    format!(
        "<option value=\"{0}\"{1}>{0} - {2}</option>\n",
        code,
        if selected { " selected" } else { "" },
        display_name(code)
    )
}

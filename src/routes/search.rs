use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Html;
use axum::Form;
use std::sync::Arc;
use tracing::{error, info};
use crate::models::{ChartView, SearchParams};
use crate::services::search_service::{self, ChartSize};
use crate::services::timeframe_service::{self, format_date};
use crate::utils::{escape_html, ChartError, Page, Table};
use super::{home, AppState};

/// GET /search
pub async fn execute_get(
    State(state): State<Arc<AppState>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> (StatusCode, Html<String>) {
    execute(&state, SearchParams::from_pairs(pairs)).await
}

/// POST /search
pub async fn execute_post(
    State(state): State<Arc<AppState>>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> (StatusCode, Html<String>) {
    execute(&state, SearchParams::from_pairs(pairs)).await
}

pub(super) async fn execute(state: &AppState, params: SearchParams) -> (StatusCode, Html<String>) {
    info!("🔎 Search requested: {:?}", params);

    // Nothing submitted yet: just show the form
    if params.is_empty() {
        return (StatusCode::OK, Html(Page::new("Exchange rate history", home::render_search_form(None, None)).render()));
    }

    let size = ChartSize {
        width: state.config.chart_width,
        height: state.config.chart_height,
    };

    match search_service::visuals(&state.client, &params, timeframe_service::today(), size).await {
        Ok(view) => (StatusCode::OK, Html(render_result(&view, &params))),
        Err(e) => {
            if let ChartError::Render(_) = e {
                error!("Chart rendering failed for {:?}: {}", params, e);
            }
            (e.status_code(), Html(render_error(&e, &params)))
        }
    }
}

fn render_result(view: &ChartView, params: &SearchParams) -> String {
    let mut body = format!(
        "<p>{} against {} from {} to {}</p>\n<div id=\"graph-box\">\n{}\n</div>\n",
        escape_html(&params.secondary.join(", ")),
        escape_html(&view.base),
        format_date(view.start),
        format_date(view.end),
        view.svg
    );

    let mut table = Table::new(vec!["Currency", "First", "Last", "Low", "High", "Change"]).with_class("summary");
    for row in &view.summary {
        table.add_row(vec![
            row.currency.clone(),
            format!("{:.4}", row.first),
            format!("{:.4}", row.last),
            format!("{:.4}", row.min),
            format!("{:.4}", row.max),
            format!("{:+.2}%", row.change_pct),
        ]);
    }
    if !table.is_empty() {
        body.push_str(&format!("<p>Price of one unit in {}:</p>\n", escape_html(&view.base)));
        body.push_str(&table.render());
    }

    body.push_str("\n<h2>New search</h2>\n");
    body.push_str(&home::render_search_form(Some(params), None));

    Page::new(format!("{} exchange rates", view.base), body).render()
}

fn render_error(err: &ChartError, params: &SearchParams) -> String {
    match err {
        ChartError::InvalidInput(_) => {
            let message = err.user_message();
            Page::new("Exchange rate history", home::render_search_form(Some(params), Some(&message))).render()
        }
        ChartError::Upstream(_) | ChartError::Render(_) => {
            let body = format!(
                "<p class=\"error\">{}</p>\n<p><a href=\"/\">Back to search</a></p>",
                escape_html(&err.user_message())
            );
            Page::new("Something went wrong", body).render()
        }
    }
}

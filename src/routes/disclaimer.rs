use axum::response::Html;
use crate::utils::Page;

const DISCLAIMER: &str = r#"<p>Exchange rates shown on this site are fetched from a third-party
service and are published as reference rates only. They may be delayed, incomplete or
differ from the rates offered by banks and exchange offices.</p>
<p>Nothing on this site is financial advice. Do not rely on these charts for trading
or any other financial decision.</p>
<p>Charts plot the value of one unit of each selected currency expressed in the base
currency, one point per published business day.</p>"#;

/// GET /disclaimer
pub async fn execute() -> Html<String> {
    Html(Page::new("Disclaimer", DISCLAIMER).render())
}

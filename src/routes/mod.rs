pub mod disclaimer;
pub mod health;
pub mod home;
pub mod search;

use axum::{http::StatusCode, response::Html, routing::get, Router};
use std::sync::Arc;
use std::time::Instant;
use crate::api::exchangerates::ExchangeRatesClient;
use crate::config::Config;
use crate::utils::Page;

/// Read-only state shared by every handler
pub struct AppState {
    pub config: Config,
    pub client: ExchangeRatesClient,
    pub started_at: Instant,
}

/// Build the application router
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(home::execute))
        .route("/search", get(search::execute_get).post(search::execute_post))
        .route("/disclaimer", get(disclaimer::execute))
        .route("/health", get(health::execute))
        .fallback(not_found)
        .with_state(state)
}

async fn not_found() -> (StatusCode, Html<String>) {
    let body = "<p>There is nothing here.</p>\n<p><a href=\"/\">Back to search</a></p>";
    (StatusCode::NOT_FOUND, Html(Page::new("Page not found", body).render()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::exchangerates::stub::{spawn_stub, StubReply};
    use std::collections::HashMap;

    async fn spawn_app(api_url: String) -> String {
        let lookup: HashMap<&str, String> = HashMap::from([("FX_API_URL", api_url)]);
        let config = Config::from_lookup(|key| lookup.get(key).cloned()).unwrap();
        let client = ExchangeRatesClient::new(&config).unwrap();
        let state = Arc::new(AppState {
            config,
            client,
            started_at: Instant::now(),
        });

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router(state)).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn search_form(base: &str, secondary: &[&str], time_frame: &str) -> Vec<(String, String)> {
        let mut form = vec![("base-currency".to_string(), base.to_string())];
        for code in secondary {
            form.push(("secondary-currency".to_string(), code.to_string()));
        }
        form.push(("time-frame".to_string(), time_frame.to_string()));
        form
    }

    #[tokio::test]
    async fn test_static_pages() {
        let app = spawn_app("http://127.0.0.1:1/history".to_string()).await;
        let http = reqwest::Client::new();

        let home = http.get(format!("{}/", app)).send().await.unwrap();
        assert_eq!(home.status().as_u16(), 200);
        assert!(home.text().await.unwrap().contains("<form action=\"/search\""));

        let disclaimer = http.get(format!("{}/disclaimer", app)).send().await.unwrap();
        assert_eq!(disclaimer.status().as_u16(), 200);
        assert!(disclaimer.text().await.unwrap().contains("not financial advice"));

        let health = http.get(format!("{}/health", app)).send().await.unwrap();
        assert_eq!(health.status().as_u16(), 200);
        assert!(health.text().await.unwrap().starts_with("ok"));

        let missing = http.get(format!("{}/nope", app)).send().await.unwrap();
        assert_eq!(missing.status().as_u16(), 404);
    }

    #[tokio::test]
    async fn test_post_search_renders_chart() {
        let stub = spawn_stub(StubReply::Echo).await;
        let app = spawn_app(stub.url.clone()).await;

        let response = reqwest::Client::new()
            .post(format!("{}/search", app))
            .form(&search_form("EUR", &["USD", "ILS"], "Last week"))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status().as_u16(), 200);
        let html = response.text().await.unwrap();
        assert!(html.contains("<div id=\"graph-box\">"));
        assert!(html.contains("<svg"));
        assert!(html.contains("<table class=\"summary\">"));
    }

    #[tokio::test]
    async fn test_get_search_with_query() {
        let stub = spawn_stub(StubReply::Echo).await;
        let app = spawn_app(stub.url.clone()).await;

        let response = reqwest::Client::new()
            .get(format!("{}/search", app))
            .query(&search_form("USD", &["JPY"], "14"))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status().as_u16(), 200);
        assert!(response.text().await.unwrap().contains("<svg"));
    }

    #[tokio::test]
    async fn test_home_with_valid_query_runs_search() {
        let stub = spawn_stub(StubReply::Echo).await;
        let app = spawn_app(stub.url.clone()).await;

        let response = reqwest::Client::new()
            .get(format!("{}/?base-currency=EUR&secondary-currency=USD&time-frame=Last%20week", app))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status().as_u16(), 200);
        let html = response.text().await.unwrap();
        assert!(html.contains("<div id=\"graph-box\">"));
        assert!(html.contains("<svg"));
    }

    #[tokio::test]
    async fn test_search_without_parameters_shows_form() {
        let app = spawn_app("http://127.0.0.1:1/history".to_string()).await;

        let response = reqwest::Client::new().get(format!("{}/search", app)).send().await.unwrap();

        assert_eq!(response.status().as_u16(), 200);
        let html = response.text().await.unwrap();
        assert!(html.contains("<form action=\"/search\""));
        assert!(!html.contains("class=\"error\""));
    }

    #[tokio::test]
    async fn test_invalid_search_is_bad_request() {
        let app = spawn_app("http://127.0.0.1:1/history".to_string()).await;

        let response = reqwest::Client::new()
            .post(format!("{}/search", app))
            .form(&search_form("EUR", &["EUR"], "Last week"))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status().as_u16(), 400);
        let html = response.text().await.unwrap();
        assert!(html.contains("class=\"error\""));
        assert!(html.contains("cannot also be a secondary currency"));
    }

    #[tokio::test]
    async fn test_upstream_failure_is_bad_gateway() {
        let stub = spawn_stub(StubReply::Status(500, r#"{"error":"down"}"#)).await;
        let app = spawn_app(stub.url.clone()).await;

        let response = reqwest::Client::new()
            .post(format!("{}/search", app))
            .form(&search_form("EUR", &["USD"], "Last month"))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status().as_u16(), 502);
        assert!(response.text().await.unwrap().contains("Something went wrong"));
    }
}

//! # Menu Loader
//!
//! One GET, one decode, one menu. No retry and no cache; a failed load is
//! final for the session.

use std::time::Instant;

use reqwest::Client;
use tracing::{debug, error, info, warn};
use url::Url;

use thali_core::validation::audit_menu;
use thali_core::Menu;

use crate::config::SourceSettings;
use crate::error::{LoadError, LoadResult};
use crate::payload::decode_response;

const USER_AGENT: &str = concat!("thali/", env!("CARGO_PKG_VERSION"));

/// Fetches the configured restaurant's menu.
#[derive(Debug, Clone)]
pub struct MenuLoader {
    client: Client,
    url: Url,
}

impl MenuLoader {
    /// Builds a loader for `settings`. Fails only on a bad endpoint or an
    /// HTTP client that cannot be constructed.
    pub fn new(settings: &SourceSettings) -> LoadResult<Self> {
        let url = settings.request_url()?;

        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = settings.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| LoadError::Config(format!("HTTP client: {e}")))?;

        Ok(MenuLoader { client, url })
    }

    /// Full request URL, query string included.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Performs the fetch and decodes the menu.
    pub async fn load(&self) -> LoadResult<Menu> {
        let started = Instant::now();
        info!(endpoint = %self.url, "Fetching menu");

        let result = self.fetch().await;
        let elapsed_ms = started.elapsed().as_millis() as u64;

        match &result {
            Ok(menu) => {
                for issue in audit_menu(menu) {
                    warn!(%issue, "Menu integrity issue");
                }
                info!(
                    categories = menu.len(),
                    items = menu.item_count(),
                    elapsed_ms,
                    "Menu loaded"
                );
            }
            Err(e) => error!(error = %e, kind = e.kind(), elapsed_ms, "Menu load failed"),
        }

        result
    }

    async fn fetch(&self) -> LoadResult<Menu> {
        let response = self.client.get(self.url.clone()).send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;
        debug!(status, bytes = body.len(), "Menu response received");

        decode_response(status, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn settings_for(server: &MockServer) -> SourceSettings {
        SourceSettings {
            endpoint: format!("{}/api/menu", server.uri()),
            shop_id: "3161".to_string(),
            locale_id: "null".to_string(),
            request_timeout_secs: Some(5),
        }
    }

    fn menu_body() -> String {
        let inner = json!({
            "CategoryList": [
                {
                    "CategryId": 1,
                    "CategryName": "Pizza",
                    "ItemListWidget": [
                        { "ItemId": 11, "ItemName": "Veg Pizza", "Price": 199 },
                        { "ItemId": 12, "ItemName": "Paneer Tikka", "Price": 229 }
                    ]
                },
                { "CategryId": 2, "CategryName": "Drinks", "ItemListWidget": [] }
            ]
        });
        json!({ "data": inner.to_string() }).to_string()
    }

    #[tokio::test]
    async fn test_load_success() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/menu"))
            .and(query_param("ShopId", "3161"))
            .and(query_param("locale_id", "null"))
            .respond_with(ResponseTemplate::new(200).set_body_string(menu_body()))
            .expect(1)
            .mount(&server)
            .await;

        let loader = MenuLoader::new(&settings_for(&server)).unwrap();
        let menu = loader.load().await.unwrap();

        assert_eq!(menu.len(), 2);
        assert_eq!(menu.first_category().map(|c| c.id.as_str()), Some("1"));
        assert_eq!(menu.item_count(), 2);
    }

    #[tokio::test]
    async fn test_load_non_200() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/menu"))
            .respond_with(ResponseTemplate::new(500).set_body_string(menu_body()))
            .mount(&server)
            .await;

        let loader = MenuLoader::new(&settings_for(&server)).unwrap();
        let err = loader.load().await.unwrap_err();
        assert!(matches!(err, LoadError::Status { status: 500 }));
    }

    #[tokio::test]
    async fn test_load_missing_data() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/menu"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"status": "ok"}"#))
            .mount(&server)
            .await;

        let loader = MenuLoader::new(&settings_for(&server)).unwrap();
        let err = loader.load().await.unwrap_err();
        assert!(matches!(err, LoadError::MissingData));
    }

    #[tokio::test]
    async fn test_load_unparsable_inner() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/menu"))
            .respond_with(
                ResponseTemplate::new(200).set_body_string(r#"{"data": "{CategoryList:"}"#),
            )
            .mount(&server)
            .await;

        let loader = MenuLoader::new(&settings_for(&server)).unwrap();
        let err = loader.load().await.unwrap_err();
        assert!(err.is_payload());
    }

    #[tokio::test]
    async fn test_load_transport_failure() {
        let server = MockServer::start().await;
        let settings = settings_for(&server);
        drop(server);

        let loader = MenuLoader::new(&settings).unwrap();
        let err = loader.load().await.unwrap_err();
        assert!(err.is_transport(), "unexpected error: {err}");
    }

    #[test]
    fn test_new_rejects_bad_endpoint() {
        let settings = SourceSettings {
            endpoint: "menu.example.com/api".to_string(),
            ..SourceSettings::default()
        };
        let err = MenuLoader::new(&settings).unwrap_err();
        assert!(matches!(err, LoadError::InvalidUrl(_)));
    }

    #[test]
    fn test_url_carries_query() {
        let loader = MenuLoader::new(&SourceSettings::default()).unwrap();
        assert!(loader.url().as_str().ends_with("?ShopId=3161&locale_id=null"));
    }
}

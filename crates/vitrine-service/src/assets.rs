//! External asset host client.
//!
//! Product images are uploaded as base64 data URLs; the host stores the
//! binary and returns a public URL plus an asset id used for deletion.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use vitrine_core::{VitrineError, VitrineResult};

/// Result of a successful upload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredAsset {
    /// Public URL of the stored image.
    pub url: String,
    /// Asset identifier for later deletion.
    #[serde(rename = "id")]
    pub asset_id: String,
}

/// Storage for product images.
#[async_trait]
pub trait AssetStore: Send + Sync {
    /// Uploads an image given as a data URL.
    async fn upload(&self, data_url: &str) -> VitrineResult<StoredAsset>;

    /// Deletes a previously uploaded asset.
    async fn delete(&self, asset_id: &str) -> VitrineResult<()>;

    /// Whether the store is configured and enabled.
    fn is_enabled(&self) -> bool;
}

#[derive(Serialize)]
struct UploadBody<'a> {
    image: &'a str,
}

/// HTTP client for the asset host API.
pub struct HttpAssetStore {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    enabled: bool,
}

impl HttpAssetStore {
    /// Creates a client from the assets configuration.
    #[must_use]
    pub fn new(config: &vitrine_config::AssetsConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            enabled: config.enabled,
        }
    }

    fn service_error(message: impl Into<String>) -> VitrineError {
        VitrineError::external_service("asset-host", message)
    }
}

#[async_trait]
impl AssetStore for HttpAssetStore {
    async fn upload(&self, data_url: &str) -> VitrineResult<StoredAsset> {
        if !self.enabled {
            return Err(Self::service_error("Asset host is not configured"));
        }

        let response = self
            .client
            .post(format!("{}/assets", self.base_url))
            .header("x-api-key", &self.api_key)
            .json(&UploadBody { image: data_url })
            .send()
            .await
            .map_err(|e| Self::service_error(format!("Upload request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(Self::service_error(format!(
                "Upload rejected with status {}",
                response.status()
            )));
        }

        response
            .json::<StoredAsset>()
            .await
            .map_err(|e| Self::service_error(format!("Malformed upload response: {e}")))
    }

    async fn delete(&self, asset_id: &str) -> VitrineResult<()> {
        if !self.enabled {
            return Err(Self::service_error("Asset host is not configured"));
        }

        let response = self
            .client
            .delete(format!("{}/assets/{asset_id}", self.base_url))
            .header("x-api-key", &self.api_key)
            .send()
            .await
            .map_err(|e| Self::service_error(format!("Delete request failed: {e}")))?;

        // A missing asset is fine: the caller only wants it gone.
        if response.status().is_success() || response.status() == reqwest::StatusCode::NOT_FOUND {
            Ok(())
        } else {
            Err(Self::service_error(format!(
                "Delete rejected with status {}",
                response.status()
            )))
        }
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_config::AssetsConfig;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config(server: &MockServer, enabled: bool) -> AssetsConfig {
        AssetsConfig {
            base_url: server.uri(),
            api_key: "test-key".to_string(),
            enabled,
        }
    }

    #[tokio::test]
    async fn test_upload_sends_data_url_and_api_key() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/assets"))
            .and(header("x-api-key", "test-key"))
            .and(body_json(serde_json::json!({ "image": "data:image/png;base64,aGk=" })))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "url": "https://assets.example/lamp.png",
                "id": "asset-123"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let store = HttpAssetStore::new(&config(&server, true));
        let asset = store.upload("data:image/png;base64,aGk=").await.unwrap();

        assert_eq!(asset.url, "https://assets.example/lamp.png");
        assert_eq!(asset.asset_id, "asset-123");
    }

    #[tokio::test]
    async fn test_upload_failure_is_external_service_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/assets"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let store = HttpAssetStore::new(&config(&server, true));
        let err = store.upload("data:image/png;base64,aGk=").await.unwrap_err();
        assert!(matches!(err, VitrineError::ExternalService { .. }));
    }

    #[tokio::test]
    async fn test_delete_tolerates_missing_asset() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/assets/asset-123"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let store = HttpAssetStore::new(&config(&server, true));
        store.delete("asset-123").await.unwrap();
    }

    #[tokio::test]
    async fn test_disabled_store_rejects_uploads() {
        let server = MockServer::start().await;
        let store = HttpAssetStore::new(&config(&server, false));
        assert!(!store.is_enabled());
        assert!(store.upload("data:image/png;base64,aGk=").await.is_err());
    }
}

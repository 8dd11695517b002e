//! HTTP client for the metadata back end's asset endpoints.

use std::time::Duration;

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::domain::asset::{Asset, AssetType};
use crate::services::asset_catalog::AssetApi;
use crate::services::{ServiceError, ServiceResult};

/// Errors raised while talking to the asset API.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid base url {0}")]
    InvalidBaseUrl(String),

    #[error("failed to build http client: {0}")]
    Build(#[source] reqwest::Error),

    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("request to {url} returned status {status}")]
    Status { url: String, status: u16 },

    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl From<ClientError> for ServiceError {
    fn from(err: ClientError) -> Self {
        ServiceError::Upstream(err.to_string())
    }
}

/// Client for `/api/assets/*`, authenticated with an optional bearer token.
#[derive(Clone, Debug)]
pub struct AssetClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl AssetClient {
    /// Creates a client for the back end rooted at `base_url`.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        Url::parse(base_url).map_err(|_| ClientError::InvalidBaseUrl(base_url.to_string()))?;

        let client = Client::builder()
            .user_agent(concat!("egeria-ui/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(ClientError::Build)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        })
    }

    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.is_empty());
        self
    }

    /// Absolute URL for a request path relative to the back end root.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let url = self.endpoint(path);
        log::debug!("GET {url}");

        let mut request = self.client.get(&url);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|source| ClientError::Request {
            url: url.clone(),
            source,
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status {
                url,
                status: status.as_u16(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|source| ClientError::Decode { url, source })
    }
}

impl AssetApi for AssetClient {
    async fn fetch_assets(&self, url: &str) -> ServiceResult<Vec<Asset>> {
        Ok(self.get_json(url).await?)
    }

    async fn fetch_asset_types(&self, url: &str) -> ServiceResult<Vec<AssetType>> {
        Ok(self.get_json(url).await?)
    }
}

//! HTTP catalog source
//!
//! Fetches the skip list for a location from the catalog API. Every failure
//! (transport, status, payload) is logged and turned into an empty list.

use std::future::Future;
use std::time::Duration;

use super::{CatalogError, CatalogItem, CatalogSource};
use crate::config::CatalogConfig;
use crate::constants::HTTP_USER_AGENT;

/// Catalog source backed by the skips-by-location endpoint
#[derive(Debug, Clone)]
pub struct HttpCatalogSource {
    client: reqwest::Client,
    endpoint: String,
    image_ref: Option<String>,
}

impl HttpCatalogSource {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(HTTP_USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            image_ref: None,
        })
    }

    pub fn from_config(config: &CatalogConfig) -> anyhow::Result<Self> {
        let source = Self::new(config.endpoint.clone(), config.timeout())?;
        Ok(source.with_image_ref(config.image_ref.clone()))
    }

    /// Attach an image reference to every item that arrives without one
    pub fn with_image_ref(mut self, image_ref: Option<String>) -> Self {
        self.image_ref = image_ref;
        self
    }

    /// Full request URL for a location key
    pub fn url_for(&self, location_key: &str) -> String {
        let key = location_key.trim_start_matches('?');
        if key.is_empty() {
            self.endpoint.clone()
        } else {
            format!("{}?{}", self.endpoint, key)
        }
    }

    async fn try_fetch(&self, location_key: &str) -> Result<Vec<CatalogItem>, CatalogError> {
        let url = self.url_for(location_key);
        tracing::debug!("Fetching catalog from {}", url);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(CatalogError::Status(response.status().as_u16()));
        }

        let body = response.text().await?;
        let items = parse_catalog(&body, self.image_ref.as_deref())?;
        Ok(items)
    }
}

impl CatalogSource for HttpCatalogSource {
    fn fetch_catalog(&self, location_key: &str) -> impl Future<Output = Vec<CatalogItem>> + Send {
        async move {
            match self.try_fetch(location_key).await {
                Ok(items) => {
                    tracing::info!("Fetched {} catalog items for {}", items.len(), location_key);
                    items
                }
                Err(e) => {
                    tracing::error!("Error fetching skip data: {}", e);
                    Vec::new()
                }
            }
        }
    }
}

/// Decode a catalog payload, filling in the default image reference
pub fn parse_catalog(body: &str, image_ref: Option<&str>) -> Result<Vec<CatalogItem>, CatalogError> {
    let mut items: Vec<CatalogItem> = serde_json::from_str(body)?;

    if let Some(image) = image_ref {
        for item in items.iter_mut().filter(|i| i.image_ref.is_none()) {
            item.image_ref = Some(image.to_string());
        }
    }

    Ok(items)
}

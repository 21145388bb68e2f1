//! Skip catalog
//!
//! - `CatalogItem` - one rentable skip tier
//! - `CatalogSource` - the port the wizard fetches items through
//! - `http` - the production source backed by the catalog API
//! - `loader` - spawns the one fetch per wizard mount

pub mod http;
pub mod loader;

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::future::Future;
use thiserror::Error;

pub use http::HttpCatalogSource;
pub use loader::{spawn_catalog_load, CatalogLoad, CatalogMessage};

/// One rentable skip tier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: u64,
    /// Capacity in cubic yards
    pub size: u32,
    #[serde(rename = "price_before_vat")]
    pub price_before_tax: f64,
    #[serde(rename = "vat")]
    pub tax_rate_percent: f64,
    pub hire_period_days: u32,
    #[serde(default)]
    pub allows_heavy_waste: bool,
    #[serde(default)]
    pub allowed_on_road: bool,
    #[serde(default, rename = "image")]
    pub image_ref: Option<String>,
}

impl CatalogItem {
    /// Price including tax
    pub fn total_price(&self) -> f64 {
        self.price_before_tax + self.price_before_tax * self.tax_rate_percent / 100.0
    }

    /// Price including tax, rounded to whole pounds for display
    pub fn display_price(&self) -> u64 {
        // Prices are non-negative, so round() matches half-up rounding
        self.total_price().round().max(0.0) as u64
    }

    /// Collection date for a skip delivered on `delivery`
    pub fn collection_date(&self, delivery: NaiveDate) -> Option<NaiveDate> {
        delivery.checked_add_days(Days::new(u64::from(self.hire_period_days)))
    }
}

/// Why a catalog fetch produced nothing
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Catalog endpoint returned status {0}")]
    Status(u16),

    #[error("Failed to decode catalog: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Where the wizard gets its skips from
///
/// Implementations never fail towards the caller: any internal error is
/// logged and reported as an empty catalog.
pub trait CatalogSource: Send + Sync + 'static {
    fn fetch_catalog(&self, location_key: &str) -> impl Future<Output = Vec<CatalogItem>> + Send;
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    pub fn item(id: u64, size: u32, price: f64) -> CatalogItem {
        CatalogItem {
            id,
            size,
            price_before_tax: price,
            tax_rate_percent: 20.0,
            hire_period_days: 14,
            allows_heavy_waste: true,
            allowed_on_road: true,
            image_ref: None,
        }
    }

    /// Source that answers with a fixed list
    pub struct FixedSource(pub Vec<CatalogItem>);

    impl CatalogSource for FixedSource {
        fn fetch_catalog(&self, _location_key: &str) -> impl Future<Output = Vec<CatalogItem>> + Send {
            let items = self.0.clone();
            async move { items }
        }
    }
}

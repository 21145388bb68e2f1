//! Catalog loading task
//!
//! The wizard requests its catalog exactly once per mount. The fetch runs on
//! the tokio runtime and reports back over a channel; the returned
//! `CatalogLoad` owns the task, and dropping it aborts the fetch so a late
//! result never reaches a wizard that is gone.

use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::{CatalogItem, CatalogSource};

/// Messages sent from the catalog task to the UI
#[derive(Debug, Clone)]
pub enum CatalogMessage {
    /// Fetch settled (an empty list on failure)
    Loaded(Vec<CatalogItem>),
}

/// Scoped handle to the in-flight catalog fetch
#[derive(Debug)]
pub struct CatalogLoad {
    handle: JoinHandle<()>,
}

impl CatalogLoad {
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for CatalogLoad {
    fn drop(&mut self) {
        if !self.handle.is_finished() {
            tracing::debug!("Cancelling in-flight catalog fetch");
        }
        self.handle.abort();
    }
}

/// Start the catalog fetch for `location_key`
pub fn spawn_catalog_load<S: CatalogSource>(
    source: Arc<S>,
    location_key: String,
    tx: mpsc::Sender<CatalogMessage>,
) -> CatalogLoad {
    tracing::info!("Requesting catalog for {}", location_key);

    let handle = tokio::spawn(async move {
        let items = source.fetch_catalog(&location_key).await;
        // A closed channel means the wizard was torn down meanwhile
        if tx.send(CatalogMessage::Loaded(items)).await.is_err() {
            tracing::debug!("Catalog arrived after the wizard closed, discarding");
        }
    });

    CatalogLoad { handle }
}

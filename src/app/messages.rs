//! Catalog message handling for the application

use skiphire::catalog::CatalogMessage;

use super::App;

impl App {
    /// Handle messages from the catalog task
    pub fn handle_catalog_message(&mut self, msg: CatalogMessage) {
        match msg {
            CatalogMessage::Loaded(items) => {
                tracing::info!("Catalog settled with {} skips", items.len());
                self.wizard.apply_catalog(items);
                self.catalog_load = None;

                // Start the cursor on the preselected card, if any
                let count = self.wizard.catalog().len();
                let focus = self
                    .wizard
                    .selected()
                    .and_then(|s| self.wizard.catalog().iter().position(|i| i.id == s.id))
                    .unwrap_or(0);
                self.cursor.set(focus, count);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::{app_at, skip};
    use skiphire::catalog::{CatalogItem, CatalogMessage, CatalogSource};
    use skiphire::preferences::{MemoryPreferenceStore, ThemeContext};
    use skiphire::wizard::WizardOptions;
    use std::future::Future;
    use std::sync::Arc;
    use tokio::sync::mpsc;

    use crate::app::App;

    struct FixedSource(Vec<CatalogItem>);

    impl CatalogSource for FixedSource {
        fn fetch_catalog(&self, _location_key: &str) -> impl Future<Output = Vec<CatalogItem>> + Send {
            let items = self.0.clone();
            async move { items }
        }
    }

    #[test]
    fn test_loaded_catalog_stops_loading() {
        let mut app = app_at(3);
        assert!(app.wizard.is_loading());

        app.handle_catalog_message(CatalogMessage::Loaded(vec![skip(1, 4, 200.0)]));

        assert!(!app.wizard.is_loading());
        assert_eq!(app.wizard.catalog().len(), 1);
        assert_eq!(app.cursor.index(), 0);
    }

    #[test]
    fn test_cursor_starts_on_preselected_card() {
        let mut app = App::new(
            WizardOptions {
                initial_step: 3,
                preselect_index: Some(1),
            },
            ThemeContext::load(Box::new(MemoryPreferenceStore::default())),
            String::new(),
        );

        app.handle_catalog_message(CatalogMessage::Loaded(vec![
            skip(1, 4, 200.0),
            skip(2, 6, 250.0),
            skip(3, 8, 300.0),
        ]));

        assert_eq!(app.wizard.selected().map(|s| s.id), Some(2));
        assert_eq!(app.cursor.index(), 1);
    }

    #[tokio::test]
    async fn test_catalog_requested_once_per_mount() {
        let mut app = app_at(1);
        let (tx, mut rx) = mpsc::channel(4);
        let source = Arc::new(FixedSource(vec![skip(1, 4, 200.0), skip(2, 6, 250.0)]));

        app.start_catalog_load(Arc::clone(&source), tx.clone());
        app.start_catalog_load(source, tx);

        let msg = rx.recv().await.unwrap();
        app.handle_catalog_message(msg);
        assert_eq!(app.wizard.catalog().len(), 2);

        // Second request was refused, so only the first task ever sent
        assert!(rx.try_recv().is_err());
    }
}

//! Application state management
//!
//! This module contains the terminal front end's state and is split into:
//! - `state.rs` - Card grid cursor
//! - `handlers.rs` - Keyboard input handlers
//! - `messages.rs` - Catalog message handling

mod handlers;
mod messages;
pub mod state;

use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;

use skiphire::catalog::{spawn_catalog_load, CatalogLoad, CatalogMessage, CatalogSource};
use skiphire::constants::SPINNER_TICK_MS;
use skiphire::preferences::ThemeContext;
use skiphire::wizard::{Wizard, WizardOptions};

pub use state::{CardCursor, CARD_COLUMNS};

/// Main application state
pub struct App {
    pub wizard: Wizard,
    pub theme: ThemeContext,
    pub cursor: CardCursor,
    /// Location the catalog was requested for
    pub location_key: String,
    pub should_quit: bool,
    pub show_exit_confirm: bool,
    pub spinner_state: usize,
    pub last_tick: Instant,
    catalog_load: Option<CatalogLoad>,
}

impl App {
    pub fn new(options: WizardOptions, theme: ThemeContext, location_key: String) -> Self {
        let mut wizard = Wizard::new(options);
        wizard.subscribe(Box::new(|change| {
            tracing::info!("Wizard moved {}", change);
        }));

        Self {
            wizard,
            theme,
            cursor: CardCursor::default(),
            location_key,
            should_quit: false,
            show_exit_confirm: false,
            spinner_state: 0,
            last_tick: Instant::now(),
            catalog_load: None,
        }
    }

    /// Request the catalog; called once when the wizard mounts
    pub fn start_catalog_load<S: CatalogSource>(
        &mut self,
        source: Arc<S>,
        tx: mpsc::Sender<CatalogMessage>,
    ) {
        if self.catalog_load.is_some() {
            tracing::warn!("Catalog already requested for this wizard");
            return;
        }
        self.catalog_load = Some(spawn_catalog_load(source, self.location_key.clone(), tx));
    }

    /// Called on each tick to update animations
    pub fn tick(&mut self) {
        if self.last_tick.elapsed().as_millis() >= SPINNER_TICK_MS {
            self.spinner_state = (self.spinner_state + 1) % 10;
            self.last_tick = Instant::now();
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use skiphire::catalog::CatalogItem;
    use skiphire::preferences::MemoryPreferenceStore;

    pub fn skip(id: u64, size: u32, price: f64) -> CatalogItem {
        CatalogItem {
            id,
            size,
            price_before_tax: price,
            tax_rate_percent: 20.0,
            hire_period_days: 14,
            allows_heavy_waste: true,
            allowed_on_road: size < 12,
            image_ref: None,
        }
    }

    pub fn app_at(step: u8) -> App {
        App::new(
            WizardOptions {
                initial_step: step,
                preselect_index: None,
            },
            ThemeContext::load(Box::new(MemoryPreferenceStore::default())),
            "postcode=NR32&area=Lowestoft".to_string(),
        )
    }
}

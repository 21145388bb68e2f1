//! Checkout wizard state
//!
//! This module contains the front-end independent wizard and is split into:
//! - `steps.rs` - The step table and step-flow state machine
//! - `selection.rs` - Skip selection
//!
//! `Wizard` composes both with the catalog the loader delivers.

pub mod selection;
pub mod steps;

use crate::catalog::CatalogItem;
use crate::config::WizardConfig;

pub use selection::ItemSelection;
pub use steps::{
    Accent, StepChange, StepDefinition, StepFlow, StepListener, StepStatus,
    SELECT_SKIP_STEP, STEPS,
};

/// Panel shown under the step indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Postcode,
    WasteType,
    SelectSkip,
    PermitCheck,
    ChooseDate,
    Payment,
}

impl Panel {
    pub fn for_step(id: u8) -> Self {
        match id {
            1 => Panel::Postcode,
            2 => Panel::WasteType,
            3 => Panel::SelectSkip,
            4 => Panel::PermitCheck,
            5 => Panel::ChooseDate,
            _ => Panel::Payment,
        }
    }
}

/// Start-up options chosen by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WizardOptions {
    pub initial_step: u8,
    /// Catalog position selected automatically once the catalog arrives
    pub preselect_index: Option<usize>,
}

impl Default for WizardOptions {
    fn default() -> Self {
        Self {
            initial_step: crate::constants::FIRST_STEP,
            preselect_index: None,
        }
    }
}

impl From<&WizardConfig> for WizardOptions {
    fn from(config: &WizardConfig) -> Self {
        Self {
            initial_step: config.initial_step,
            preselect_index: config.preselect_index,
        }
    }
}

/// Wizard state for one session
#[derive(Debug)]
pub struct Wizard {
    flow: StepFlow,
    selection: ItemSelection,
    catalog: Vec<CatalogItem>,
    loading: bool,
    preselect_index: Option<usize>,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new(WizardOptions::default())
    }
}

impl Wizard {
    /// A freshly mounted wizard, waiting for its catalog
    pub fn new(options: WizardOptions) -> Self {
        Self {
            flow: StepFlow::starting_at(options.initial_step),
            selection: ItemSelection::default(),
            catalog: Vec::new(),
            loading: true,
            preselect_index: options.preselect_index,
        }
    }

    // ---------------------------------------------------------------------
    // Queries
    // ---------------------------------------------------------------------

    pub fn current_step(&self) -> u8 {
        self.flow.current()
    }

    pub fn panel(&self) -> Panel {
        Panel::for_step(self.flow.current())
    }

    pub fn statuses(&self) -> impl Iterator<Item = (&'static StepDefinition, StepStatus)> + '_ {
        self.flow.statuses()
    }

    pub fn status(&self, id: u8) -> StepStatus {
        self.flow.status(id)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn catalog(&self) -> &[CatalogItem] {
        &self.catalog
    }

    pub fn selected(&self) -> Option<&CatalogItem> {
        self.selection.selected()
    }

    pub fn is_selected(&self, id: u64) -> bool {
        self.selection.is_selected(id)
    }

    /// Whether the current panel offers "continue"
    pub fn can_continue(&self) -> bool {
        match self.panel() {
            Panel::SelectSkip => !self.loading && self.selection.selected().is_some(),
            _ => !self.flow.is_terminal(),
        }
    }

    // ---------------------------------------------------------------------
    // Mutations
    // ---------------------------------------------------------------------

    pub fn subscribe(&mut self, listener: StepListener) {
        self.flow.subscribe(listener);
    }

    pub fn go_to(&mut self, target: u8) -> bool {
        self.flow.go_to(target)
    }

    pub fn advance(&mut self) -> bool {
        self.flow.advance()
    }

    pub fn back(&mut self) -> bool {
        self.flow.back()
    }

    pub fn toggle_select(&mut self, item: &CatalogItem) {
        self.selection.toggle_select(item);
    }

    /// Toggle the card at `index` of the loaded catalog.
    /// Returns false while loading or when there is no such card.
    pub fn toggle_select_at(&mut self, index: usize) -> bool {
        if self.loading {
            return false;
        }
        match self.catalog.get(index) {
            Some(item) => {
                self.selection.toggle_select(item);
                true
            }
            None => false,
        }
    }

    /// Store the settled fetch result and stop loading
    pub fn apply_catalog(&mut self, items: Vec<CatalogItem>) {
        if !self.loading {
            tracing::warn!("Catalog delivered twice, replacing the current one");
        }

        self.catalog = items;
        self.loading = false;

        if let Some(item) = self.preselect_index.and_then(|i| self.catalog.get(i)) {
            tracing::debug!("Preselecting skip {}", item.id);
            if !self.selection.is_selected(item.id) {
                self.selection.toggle_select(item);
            }
        }
    }
}

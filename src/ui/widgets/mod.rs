//! Reusable UI widgets

mod skip_card;
mod spinner;
mod step_indicator;

pub use skip_card::{SkipCard, CARD_HEIGHT};
pub use spinner::Spinner;
pub use step_indicator::StepIndicator;

//! Step panels
//!
//! One module per wizard step, plus shared helpers.

pub mod date;
pub mod helpers;
pub mod payment;
pub mod permit;
pub mod postcode;
pub mod select_skip;
pub mod waste_type;

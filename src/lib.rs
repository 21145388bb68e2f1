//! Skiphire - skip hire checkout wizard
//!
//! Library half of the crate: the catalog port and its HTTP adapter, the
//! wizard state machine, configuration, paths and the theme preference.
//! The terminal front end lives in the binary.

pub mod catalog;
pub mod config;
pub mod constants;
pub mod paths;
pub mod preferences;
pub mod wizard;

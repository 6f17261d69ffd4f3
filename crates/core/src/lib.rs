//! Core types for sf-weather
//!
//! This crate contains domain types shared across all other crates.

mod config;
mod constants;
mod reading;
mod snapshot;
mod timefmt;

pub use config::*;
pub use constants::*;
pub use reading::*;
pub use snapshot::*;
pub use timefmt::*;

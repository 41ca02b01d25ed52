pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{BringClient, LocalStorage};
pub use config::{ListConfig, TomlConfig};
pub use crate::core::{
    engine::{CycleReport, SensorEngine},
    reconcile::{purge, reconcile},
    sensor::BringSensor,
};
pub use utils::error::{BringError, Result};

//! Configuration loading and management for the pay calculation engine.
//!
//! This module holds the pay rules (task-hour quota, bonuses, fees) and the
//! static salary and rate tables, plus a loader that reads overrides from
//! YAML files.
//!
//! # Example
//!
//! ```no_run
//! use teacher_pay::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/standard").unwrap();
//! println!("Quota: {} hours", config.rules().task_hour_quota);
//! ```

mod loader;
mod tables;
mod types;

pub use loader::ConfigLoader;
pub use types::{HOURS_PER_CLASS, PayConfig, PayRules, PayTables, SalaryConfig};

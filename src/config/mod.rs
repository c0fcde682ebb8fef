//! Configuration loading and management for the on-call payment engine.
//!
//! This module loads the per-day payment rates from YAML and provides the
//! default rates used when no configuration is supplied.
//!
//! # Example
//!
//! ```no_run
//! use ooh_pay::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Weekday rate: {}", config.rates().weekday_rate);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{PaymentRates, WEEKDAY_RATE, WEEKEND_RATE};

//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading payment rate
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::PaymentRates;

/// Loads and provides access to payment configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// └── rates.yaml   # weekday_rate / weekend_rate
/// ```
///
/// # Example
///
/// ```no_run
/// use ooh_pay::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default")?;
/// println!("Weekend rate: {}", loader.rates().weekend_rate);
/// # Ok::<(), ooh_pay::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    rates: PaymentRates,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if `rates.yaml` is missing, is not valid YAML, lacks
    /// a rate, or holds a negative rate.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let rates_path = path.as_ref().join("rates.yaml");
        let rates = Self::load_yaml::<PaymentRates>(&rates_path)?;
        rates.validate()?;

        debug!(
            path = %rates_path.display(),
            weekday_rate = %rates.weekday_rate,
            weekend_rate = %rates.weekend_rate,
            "Loaded payment rates"
        );

        Ok(Self { rates })
    }

    /// Wraps rates that are already in memory.
    pub fn from_rates(rates: PaymentRates) -> EngineResult<Self> {
        rates.validate()?;
        Ok(Self { rates })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the configured rates.
    pub fn rates(&self) -> PaymentRates {
        self.rates
    }
}

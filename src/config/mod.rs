use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::fiscal::DEFAULT_AVERAGE_MONTHLY_GUIDE;
use crate::ledger::DEFAULT_HORIZON_DAYS;
use crate::utils::{self, ensure_dir, write_atomic};

/// Tunable values threaded into the projection and diagnosis components.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Average monthly DAS guide value used by the estimation fallback.
    pub average_monthly_guide: f64,
    /// How many days the liquidity forecast walks forward.
    pub forecast_horizon_days: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            average_monthly_guide: DEFAULT_AVERAGE_MONTHLY_GUIDE,
            forecast_horizon_days: DEFAULT_HORIZON_DAYS,
        }
    }
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self, CoreError> {
        Self::at_path(utils::config_file())
    }

    pub fn at_path(path: PathBuf) -> Result<Self, CoreError> {
        if let Some(parent) = path.parent() {
            ensure_dir(parent)?;
        }
        Ok(Self { path })
    }

    /// Loads the persisted configuration, falling back to defaults when the
    /// file does not exist yet.
    pub fn load(&self) -> Result<Config, CoreError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<(), CoreError> {
        let json = serde_json::to_string_pretty(config)?;
        write_atomic(&self.path, &json)
    }
}

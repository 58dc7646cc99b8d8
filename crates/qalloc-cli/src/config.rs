//! Configuration loading for the qalloc CLI

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use config::{ConfigBuilder, Environment, File};
use serde::{Deserialize, Serialize};

use qalloc_core::AllocError;
use qalloc_rl::Hyperparameters;

/// Configuration for a simulation run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub simulation: SimulationConfig,
    pub learning: LearningConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub n_resources: usize,
    pub n_tasks: usize,
    /// Exploration seed; entropy when unset
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            n_resources: 5,
            n_tasks: 10,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LearningConfig {
    pub alpha: f64,
    pub gamma: f64,
    pub epsilon: f64,
}

impl Default for LearningConfig {
    fn default() -> Self {
        Self {
            alpha: Hyperparameters::DEFAULT_ALPHA,
            gamma: Hyperparameters::DEFAULT_GAMMA,
            epsilon: Hyperparameters::DEFAULT_EPSILON,
        }
    }
}

impl Config {
    /// Load configuration from file and environment
    ///
    /// An explicit `path` must exist; otherwise the first file found by
    /// [`Config::find_config_file`] is used, if any.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = ConfigBuilder::<config::builder::DefaultState>::default();

        if let Some(path) = path {
            tracing::info!("Loading config from: {:?}", path);
            builder = builder.add_source(File::from(path.to_path_buf()).required(true));
        } else if let Some(path) = Self::find_config_file() {
            tracing::info!("Loading config from: {:?}", path);
            builder = builder.add_source(File::from(path).required(false));
        } else {
            tracing::debug!("No config file found, using defaults");
        }

        // Add environment variables with QALLOC_ prefix
        builder = builder.add_source(
            Environment::with_prefix("QALLOC")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().context("Failed to read configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }

    /// Find the configuration file
    fn find_config_file() -> Option<PathBuf> {
        // Check in order: QALLOC_CONFIG env, ./qalloc.toml, ~/.config/qalloc/qalloc.toml
        if let Ok(path) = std::env::var("QALLOC_CONFIG") {
            let path = PathBuf::from(path);
            if path.exists() {
                return Some(path);
            }
        }

        let local = PathBuf::from("qalloc.toml");
        if local.exists() {
            return Some(local);
        }

        if let Some(home) = dirs::home_dir() {
            let user_config = home.join(".config").join("qalloc").join("qalloc.toml");
            if user_config.exists() {
                return Some(user_config);
            }
        }

        None
    }

    /// Reject configurations the allocator cannot run with
    pub fn validate(&self) -> qalloc_core::Result<Hyperparameters> {
        if self.simulation.n_resources == 0 {
            return Err(AllocError::Config(
                "simulation.n_resources must be greater than 0".to_string(),
            ));
        }
        if self.simulation.n_tasks == 0 {
            return Err(AllocError::Config(
                "simulation.n_tasks must be greater than 0".to_string(),
            ));
        }
        self.hyperparameters()
    }

    pub fn hyperparameters(&self) -> qalloc_core::Result<Hyperparameters> {
        Hyperparameters::new(
            self.learning.alpha,
            self.learning.gamma,
            self.learning.epsilon,
        )
    }
}

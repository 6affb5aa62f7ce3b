//! Service configuration loaded from YAML.
//!
//! ```yaml
//! http:
//!   addr: "0.0.0.0:8080"
//! seed:
//!   demo: false
//!   pets:
//!     - id: 100
//!       name: Rex
//!       status: available
//!       tags: [good-boy]
//! ```
//!
//! Every field is optional. Command-line flags override file values.

use crate::pet::Pet;
use crate::store::{InMemoryPetStore, PetRepository};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

pub const DEFAULT_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub http: HttpConfig,
    pub seed: SeedConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub addr: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            addr: DEFAULT_ADDR.to_string(),
        }
    }
}

/// Records the store starts with.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    /// Load the ten demo pets first (default `true`)
    pub demo: bool,
    /// Extra pets, applied after the demo set (same id replaces)
    pub pets: Vec<Pet>,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            demo: true,
            pets: Vec::new(),
        }
    }
}

impl ServiceConfig {
    /// Read and parse a YAML configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be read or is not valid YAML
    /// for this structure.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_yaml(&text).with_context(|| format!("invalid config file {}", path.display()))
    }

    pub fn from_yaml(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(text)?)
    }

    /// Build the store described by the `seed` section.
    pub fn build_store(&self) -> InMemoryPetStore {
        let store = if self.seed.demo {
            InMemoryPetStore::with_demo_data()
        } else {
            InMemoryPetStore::new()
        };
        for pet in &self.seed.pets {
            store.upsert(pet.clone());
        }
        store
    }
}

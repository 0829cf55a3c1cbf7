//! Combat tuning loader.

use std::path::Path;

use combat_core::CombatConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for combat configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys keep their defaults, so a file may override a single value.
    pub fn load(path: &Path) -> LoadResult<CombatConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<CombatConfig> {
        let config: CombatConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;
        if config.terrain.lightning_min > config.terrain.lightning_max {
            anyhow::bail!(
                "Invalid lightning range {}..={}",
                config.terrain.lightning_min,
                config.terrain.lightning_max
            );
        }
        if config.hand_size > config.max_hand_size {
            tracing::warn!(
                hand_size = config.hand_size,
                max_hand_size = config.max_hand_size,
                "hand size exceeds the hand limit; draws will stop at the limit"
            );
        }
        Ok(config)
    }
}

//! Enemy template loader.

use std::path::Path;

use combat_core::{EnemyTemplate, IntentScripts};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Enemy catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyCatalog {
    pub enemies: Vec<EnemyTemplate>,
}

/// Loader for enemy templates from RON files.
pub struct EnemyLoader;

impl EnemyLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<EnemyTemplate>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse an enemy catalog, checking HP ranges and that every archetype
    /// has a built-in intent script.
    pub fn parse(content: &str) -> LoadResult<Vec<EnemyTemplate>> {
        let catalog: EnemyCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse enemy catalog RON: {}", e))?;

        let scripts = IntentScripts::builtin();
        for enemy in &catalog.enemies {
            if enemy.min_hp == 0 || enemy.min_hp > enemy.max_hp {
                anyhow::bail!(
                    "Enemy '{}' has invalid HP range {}..={}",
                    enemy.id,
                    enemy.min_hp,
                    enemy.max_hp
                );
            }
            if !scripts.contains(&enemy.archetype) {
                anyhow::bail!(
                    "Enemy '{}' uses unknown archetype '{}'",
                    enemy.id,
                    enemy.archetype
                );
            }
        }
        Ok(catalog.enemies)
    }
}

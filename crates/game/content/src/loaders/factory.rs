//! Content factory for loading combat content from a data directory.

use std::path::{Path, PathBuf};

use combat_core::{Card, CombatConfig, EnemyTemplate};

use crate::library::ContentLibrary;
use crate::loaders::{CardLoader, ConfigLoader, EnemyLoader, LoadResult};

/// Content factory that loads all combat content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── combat.toml
/// ├── cards.ron
/// └── enemies.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load combat tuning from `combat.toml`.
    pub fn load_config(&self) -> LoadResult<CombatConfig> {
        ConfigLoader::load(&self.data_dir.join("combat.toml"))
    }

    /// Load the card library from `cards.ron`.
    pub fn load_cards(&self) -> LoadResult<Vec<Card>> {
        CardLoader::load(&self.data_dir.join("cards.ron"))
    }

    /// Load enemy templates from `enemies.ron`.
    pub fn load_enemies(&self) -> LoadResult<Vec<EnemyTemplate>> {
        EnemyLoader::load(&self.data_dir.join("enemies.ron"))
    }

    /// Load cards and enemies into one lookup library.
    pub fn load_library(&self) -> LoadResult<ContentLibrary> {
        Ok(ContentLibrary::new(self.load_cards()?, self.load_enemies()?))
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn missing_file_names_the_path() {
        let factory = ContentFactory::new("/nonexistent/combat-data");
        let err = factory.load_cards().unwrap_err();
        assert!(err.to_string().contains("cards.ron"));
    }
}

//! Content embedded in the binary.
//!
//! The same files ship under `data/` and can be copied next to a binary and
//! edited; see [`crate::ContentFactory`].

use combat_core::{Card, CombatConfig, EnemyTemplate};

use crate::library::ContentLibrary;
use crate::loaders::{CardLoader, ConfigLoader, EnemyLoader, LoadResult};

pub const CARDS_RON: &str = include_str!("../data/cards.ron");
pub const ENEMIES_RON: &str = include_str!("../data/enemies.ron");
pub const COMBAT_TOML: &str = include_str!("../data/combat.toml");

pub fn cards() -> LoadResult<Vec<Card>> {
    CardLoader::parse(CARDS_RON)
}

pub fn enemies() -> LoadResult<Vec<EnemyTemplate>> {
    EnemyLoader::parse(ENEMIES_RON)
}

pub fn config() -> LoadResult<CombatConfig> {
    ConfigLoader::parse(COMBAT_TOML)
}

/// The embedded cards and enemies as one library.
pub fn library() -> LoadResult<ContentLibrary> {
    Ok(ContentLibrary::new(cards()?, enemies()?))
}

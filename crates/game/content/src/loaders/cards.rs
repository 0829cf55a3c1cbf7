//! Card catalog loader.

use std::collections::HashSet;
use std::path::Path;

use combat_core::Card;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Card catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardCatalog {
    pub cards: Vec<Card>,
}

/// Loader for the card library from RON files.
pub struct CardLoader;

impl CardLoader {
    /// Load a card catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<Vec<Card>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse a card catalog. Card ids must be unique.
    pub fn parse(content: &str) -> LoadResult<Vec<Card>> {
        let catalog: CardCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse card catalog RON: {}", e))?;

        let mut seen = HashSet::new();
        for card in &catalog.cards {
            if !seen.insert(card.id.as_str()) {
                anyhow::bail!("Duplicate card id '{}'", card.id);
            }
            if card.effects.is_empty() {
                anyhow::bail!("Card '{}' has no effects", card.id);
            }
        }
        tracing::debug!(cards = catalog.cards.len(), "card catalog parsed");
        Ok(catalog.cards)
    }
}

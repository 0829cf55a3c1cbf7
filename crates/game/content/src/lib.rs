//! Data-driven combat content and loaders.
//!
//! This crate houses the built-in card library, enemy templates, default
//! tuning and relic hooks, and provides loaders for RON/TOML data files:
//! - Card library with upgrade variants (data-driven via RON)
//! - Enemy templates, one per intent archetype (data-driven via RON)
//! - Combat tuning (data-driven via TOML)
//! - Built-in relics (code, implementing `combat_core::RelicHook`)
//!
//! Content is handed to `combat_core::CombatBuilder` and never mutated by the
//! engine.

pub mod library;
pub mod relics;

#[cfg(feature = "loaders")]
pub mod builtin;
#[cfg(feature = "loaders")]
pub mod loaders;

pub use library::{ContentLibrary, STARTER_DECK, UnknownContent};
pub use relics::{BuiltinRelic, Grant, builtin_relics};

#[cfg(feature = "loaders")]
pub use loaders::{
    CardCatalog, CardLoader, ConfigLoader, ContentFactory, EnemyCatalog, EnemyLoader, LoadResult,
};

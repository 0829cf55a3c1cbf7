//! Collaborators the engine depends on but does not own.
//!
//! `player` exposes the persistent player resource store the engine mutates
//! through deltas, and `rng` supplies deterministic randomness.
mod player;
mod rng;

pub use player::{PlayerResources, PlayerStore};
pub use rng::{CombatRng, PcgRng, RngOracle, RngStream, compute_seed};

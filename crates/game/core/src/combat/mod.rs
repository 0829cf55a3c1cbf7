//! Damage and modifier resolution.
//!
//! Pure functions only: nothing here touches the session, the player store
//! or the event stream.
//!
//! - `DamageMultiplier::compose`: WEAK / VULNERABLE / terrain into one multiplier
//! - `calculate_damage`: strength, then multiplier, then floor
//! - `resolve_hit`: block absorption followed by HP clamps
//! - `resolve_direct_loss`: HP loss that skips block

pub mod damage;
pub mod hit;

pub use damage::{DamageMultiplier, calculate_damage};
pub use hit::{HitOutcome, resolve_direct_loss, resolve_hit};

//! Block absorption and HP loss for a single defender.
//!
//! Hits are absorbed by block first; direct losses skip block. Both respect
//! INVULNERABLE (nothing lands) and UNDYING (HP never drops below 1).

use crate::state::{StatusKind, StatusSet};

/// What happened to one incoming amount.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HitOutcome {
    pub incoming: u32,
    /// Amount consumed by block.
    pub blocked: u32,
    /// Amount left after block, before the HP clamps.
    pub unblocked: u32,
    /// HP actually lost.
    pub hp_loss: u32,
    /// INVULNERABLE nulled the whole amount.
    pub nullified: bool,
}

impl HitOutcome {
    fn nulled(incoming: u32) -> Self {
        Self {
            incoming,
            nullified: true,
            ..Self::default()
        }
    }
}

/// HP loss after the UNDYING clamp.
fn clamp_loss(amount: u32, current_hp: u32, statuses: &StatusSet) -> u32 {
    if statuses.has(StatusKind::Undying) {
        amount.min(current_hp.saturating_sub(1))
    } else {
        amount.min(current_hp)
    }
}

/// Resolves a hit against `block` and `current_hp`.
///
/// `block` is consumed in place and never goes negative.
pub fn resolve_hit(
    damage: u32,
    block: &mut u32,
    current_hp: u32,
    statuses: &StatusSet,
) -> HitOutcome {
    if statuses.has(StatusKind::Invulnerable) {
        return HitOutcome::nulled(damage);
    }
    let blocked = damage.min(*block);
    *block -= blocked;
    let unblocked = damage - blocked;
    HitOutcome {
        incoming: damage,
        blocked,
        unblocked,
        hp_loss: clamp_loss(unblocked, current_hp, statuses),
        nullified: false,
    }
}

/// Resolves HP loss that bypasses block.
///
/// Self-inflicted losses pass `respect_invulnerable = false`.
pub fn resolve_direct_loss(
    amount: u32,
    current_hp: u32,
    statuses: &StatusSet,
    respect_invulnerable: bool,
) -> HitOutcome {
    if respect_invulnerable && statuses.has(StatusKind::Invulnerable) {
        return HitOutcome::nulled(amount);
    }
    HitOutcome {
        incoming: amount,
        blocked: 0,
        unblocked: amount,
        hp_loss: clamp_loss(amount, current_hp, statuses),
        nullified: false,
    }
}

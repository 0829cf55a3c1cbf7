//! Pacing of resolution steps.
//!
//! The engine resolves every action to completion at once. Pacing only
//! decides when the resulting steps become visible to the caller.

use bitflags::bitflags;

/// How a session hands out the steps of a resolution.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PacingMode {
    /// Steps are returned from the operation that produced them.
    #[default]
    Immediate,
    /// Steps are queued in the session and drained with `next_step`.
    /// New player actions are rejected until the queue is empty.
    Deferred,
}

bitflags! {
    /// Player actions currently locked while steps are still being presented.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct ActionLock: u8 {
        const CARD_PLAY = 1 << 0;
        const END_TURN  = 1 << 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locks_combine() {
        let locks = ActionLock::CARD_PLAY | ActionLock::END_TURN;
        assert!(locks.contains(ActionLock::CARD_PLAY));
        assert!(ActionLock::default().is_empty());
    }
}

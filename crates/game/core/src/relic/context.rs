//! Mutation requests a relic hook can make.
//!
//! Hooks never touch the session. They record requests on a [`RelicContext`];
//! the engine sums the requests of every hook that fired for a trigger and
//! applies the total once, through the same paths card effects use.

use super::RelicTrigger;
use crate::state::{StatusKind, StatusSet};

/// Accumulated relic requests for one trigger.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RelicRequests {
    pub block: u32,
    pub energy: u32,
    pub strength: u32,
    pub dexterity: u32,
    pub draw: u32,
    /// Direct HP loss for the player.
    pub damage_player: u32,
    pub heal: u32,
    /// Statuses applied to every living enemy.
    pub enemy_statuses: StatusSet,
    /// Hit dealt to every living enemy.
    pub damage_all_enemies: u32,
}

impl RelicRequests {
    pub fn merge(&mut self, other: RelicRequests) {
        self.block = self.block.saturating_add(other.block);
        self.energy = self.energy.saturating_add(other.energy);
        self.strength = self.strength.saturating_add(other.strength);
        self.dexterity = self.dexterity.saturating_add(other.dexterity);
        self.draw = self.draw.saturating_add(other.draw);
        self.damage_player = self.damage_player.saturating_add(other.damage_player);
        self.heal = self.heal.saturating_add(other.heal);
        for status in other.enemy_statuses.iter() {
            self.enemy_statuses.apply(status.kind, status.stacks);
        }
        self.damage_all_enemies = self
            .damage_all_enemies
            .saturating_add(other.damage_all_enemies);
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Read-only view of the combat plus a request sink, handed to one hook call.
#[derive(Debug)]
pub struct RelicContext {
    trigger: RelicTrigger,
    turn: u32,
    player_hp: u32,
    player_max_hp: u32,
    amount: u32,
    requests: RelicRequests,
}

impl RelicContext {
    pub fn new(
        trigger: RelicTrigger,
        turn: u32,
        player_hp: u32,
        player_max_hp: u32,
        amount: u32,
    ) -> Self {
        Self {
            trigger,
            turn,
            player_hp,
            player_max_hp,
            amount,
            requests: RelicRequests::default(),
        }
    }

    pub fn trigger(&self) -> RelicTrigger {
        self.trigger
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn player_hp(&self) -> u32 {
        self.player_hp
    }

    pub fn player_max_hp(&self) -> u32 {
        self.player_max_hp
    }

    /// Damage dealt or taken for the damage triggers, zero otherwise.
    pub fn amount(&self) -> u32 {
        self.amount
    }

    pub fn gain_block(&mut self, amount: u32) {
        self.requests.block = self.requests.block.saturating_add(amount);
    }

    pub fn gain_energy(&mut self, amount: u32) {
        self.requests.energy = self.requests.energy.saturating_add(amount);
    }

    pub fn gain_strength(&mut self, amount: u32) {
        self.requests.strength = self.requests.strength.saturating_add(amount);
    }

    pub fn gain_dexterity(&mut self, amount: u32) {
        self.requests.dexterity = self.requests.dexterity.saturating_add(amount);
    }

    pub fn draw_cards(&mut self, count: u32) {
        self.requests.draw = self.requests.draw.saturating_add(count);
    }

    pub fn damage_player(&mut self, amount: u32) {
        self.requests.damage_player = self.requests.damage_player.saturating_add(amount);
    }

    pub fn heal(&mut self, amount: u32) {
        self.requests.heal = self.requests.heal.saturating_add(amount);
    }

    pub fn apply_status_to_all_enemies(&mut self, kind: StatusKind, stacks: u32) {
        self.requests.enemy_statuses.apply(kind, stacks);
    }

    pub fn damage_all_enemies(&mut self, amount: u32) {
        self.requests.damage_all_enemies =
            self.requests.damage_all_enemies.saturating_add(amount);
    }

    /// Requests recorded so far.
    pub fn requests(&self) -> &RelicRequests {
        &self.requests
    }

    pub(crate) fn into_requests(self) -> RelicRequests {
        self.requests
    }
}


//! Turn state machine and action resolution.
//!
//! The [`CombatSession`] is the authoritative reducer for [`CombatState`].
//! Callers construct it explicitly (there is no process-wide instance), drive
//! it through the public operations and read state back for rendering. Every
//! mutation is mirrored by a [`CombatEvent`] delivered to the observers and
//! collected into the returned [`Resolution`].
//!
//! The player's HP lives in an external [`PlayerResources`] store that each
//! operation borrows for its duration.

mod effects;
mod enemy_turn;
mod errors;
mod pacing;
mod play;
mod relics;
mod resolve;
mod setup;
mod terrain;
mod turns;

pub use errors::{CombatActionError, InvalidReference, Rejection, SetupError};
pub use pacing::{ActionLock, PacingMode};

use core::time::Duration;
use std::collections::VecDeque;

use crate::card::{CardInstance, CardInstanceId};
use crate::config::CombatConfig;
use crate::enemy::{EnemyId, EnemyInstance, IntentScripts};
use crate::env::{CombatRng, PlayerResources};
use crate::error::CombatError;
use crate::events::{Checkpoint, CombatEvent, CombatObserver, HandCard, Resolution, Step};
use crate::relic::RelicRegistry;
use crate::state::{CombatLog, CombatOutcome, CombatPhase, CombatState, StatusSet};
use crate::terrain::TerrainKind;

/// Configures a session before the encounter is prepared.
pub struct CombatBuilder {
    config: CombatConfig,
    seed: u64,
    relics: RelicRegistry,
    scripts: IntentScripts,
    observers: Vec<Box<dyn CombatObserver>>,
    pacing: PacingMode,
}

impl Default for CombatBuilder {
    fn default() -> Self {
        Self {
            config: CombatConfig::default(),
            seed: 0,
            relics: RelicRegistry::new(),
            scripts: IntentScripts::builtin(),
            observers: Vec::new(),
            pacing: PacingMode::Immediate,
        }
    }
}

impl CombatBuilder {
    pub fn config(mut self, config: CombatConfig) -> Self {
        self.config = config;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn relics(mut self, relics: RelicRegistry) -> Self {
        self.relics = relics;
        self
    }

    pub fn scripts(mut self, scripts: IntentScripts) -> Self {
        self.scripts = scripts;
        self
    }

    /// Adds an observer. Observers are notified in registration order.
    pub fn observer(mut self, observer: impl CombatObserver + 'static) -> Self {
        self.observers.push(Box::new(observer));
        self
    }

    pub fn pacing(mut self, pacing: PacingMode) -> Self {
        self.pacing = pacing;
        self
    }
}

/// One encounter, from setup to victory or defeat.
pub struct CombatSession {
    config: CombatConfig,
    state: CombatState,
    rng: CombatRng,
    relics: RelicRegistry,
    scripts: IntentScripts,
    observers: Vec<Box<dyn CombatObserver>>,
    pacing: PacingMode,
    locks: ActionLock,
    /// Steps waiting to be presented.
    queue: VecDeque<Step>,
    /// Steps of the operation currently resolving.
    steps: Vec<Step>,
    /// Enemies killed so far by the card currently resolving.
    kills_this_card: u32,
    /// Set while relic requests are applied, so they cannot re-trigger hooks.
    relics_suspended: bool,
}

impl core::fmt::Debug for CombatSession {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CombatSession")
            .field("turn", &self.state.turn)
            .field("phase", &self.state.phase)
            .field("pacing", &self.pacing)
            .field("queued_steps", &self.queue.len())
            .finish_non_exhaustive()
    }
}

impl CombatSession {
    pub fn builder() -> CombatBuilder {
        CombatBuilder::default()
    }

    fn from_builder(builder: CombatBuilder) -> Self {
        let state = CombatState::new(builder.config.max_energy, builder.config.log_capacity);
        Self {
            rng: CombatRng::new(builder.seed),
            config: builder.config,
            state,
            relics: builder.relics,
            scripts: builder.scripts,
            observers: builder.observers,
            pacing: builder.pacing,
            locks: ActionLock::empty(),
            queue: VecDeque::new(),
            steps: Vec::new(),
            kills_this_card: 0,
            relics_suspended: false,
        }
    }

    // ========================================================================
    // Player-facing operations
    // ========================================================================

    /// Begins the first player turn. Valid once, right after setup.
    pub fn start_player_turn(
        &mut self,
        player: &mut dyn PlayerResources,
    ) -> Result<Resolution, CombatActionError> {
        self.guard(ActionLock::all(), CombatPhase::Setup)?;
        self.begin_player_turn(player, true);
        Ok(self.finish())
    }

    /// Ends the player turn: turn-end triggers, terrain, then the enemy phase
    /// (or an extra player turn) and the next player turn start.
    pub fn end_player_turn(
        &mut self,
        player: &mut dyn PlayerResources,
    ) -> Result<Resolution, CombatActionError> {
        self.guard(ActionLock::END_TURN, CombatPhase::PlayerTurn)?;
        self.finish_player_turn(player);
        Ok(self.finish())
    }

    /// Reports the outcome, transitioning into a terminal phase when one applies.
    ///
    /// Events produced by the transition are queued; see [`Self::drain_steps`].
    pub fn check_combat_end(&mut self, player: &dyn PlayerResources) -> CombatOutcome {
        let outcome = self.detect_outcome(player);
        self.stash();
        outcome
    }

    /// Pops the next queued step. Unlocks player actions once the queue is empty.
    pub fn next_step(&mut self) -> Option<Step> {
        let step = self.queue.pop_front();
        if self.queue.is_empty() {
            self.locks = ActionLock::empty();
        }
        step
    }

    /// Takes every queued step at once.
    pub fn drain_steps(&mut self) -> Vec<Step> {
        self.locks = ActionLock::empty();
        self.queue.drain(..).collect()
    }

    // ========================================================================
    // Read-only state
    // ========================================================================

    pub fn state(&self) -> &CombatState {
        &self.state
    }

    pub fn config(&self) -> &CombatConfig {
        &self.config
    }

    pub fn hand(&self) -> &[CardInstance] {
        &self.state.piles.hand
    }

    pub fn draw_pile(&self) -> &[CardInstance] {
        &self.state.piles.draw
    }

    pub fn discard_pile(&self) -> &[CardInstance] {
        &self.state.piles.discard
    }

    pub fn exhaust_pile(&self) -> &[CardInstance] {
        &self.state.piles.exhaust
    }

    pub fn energy(&self) -> u32 {
        self.state.energy
    }

    pub fn max_energy(&self) -> u32 {
        self.state.max_energy
    }

    pub fn enemies(&self) -> &[EnemyInstance] {
        &self.state.enemies
    }

    pub fn enemy(&self, id: EnemyId) -> Option<&EnemyInstance> {
        self.state.enemy(id)
    }

    pub fn player_block(&self) -> u32 {
        self.state.player_block
    }

    pub fn player_statuses(&self) -> &StatusSet {
        &self.state.player_statuses
    }

    pub fn log(&self) -> &CombatLog {
        &self.state.log
    }

    pub fn turn(&self) -> u32 {
        self.state.turn
    }

    pub fn phase(&self) -> CombatPhase {
        self.state.phase
    }

    pub fn active_terrain(&self) -> Option<TerrainKind> {
        self.state.active_terrain
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn pacing(&self) -> PacingMode {
        self.pacing
    }

    pub fn locks(&self) -> ActionLock {
        self.locks
    }

    /// True while deferred steps are still waiting to be presented.
    pub fn is_resolving(&self) -> bool {
        !self.queue.is_empty()
    }

    pub fn queued_steps(&self) -> usize {
        self.queue.len()
    }

    /// Instance id of the first hand card with the given card id.
    pub fn find_in_hand(&self, card_id: &str) -> Option<CardInstanceId> {
        self.state
            .piles
            .hand
            .iter()
            .find(|c| c.card.id == card_id)
            .map(|c| c.instance_id)
    }

    // ========================================================================
    // Resolution bookkeeping
    // ========================================================================

    /// Rejects the action unless the session is in `expected` and `lock` is free.
    fn guard(&mut self, lock: ActionLock, expected: CombatPhase) -> Result<(), CombatActionError> {
        let phase = self.state.phase;
        let rejection = if phase.is_terminal() {
            Some(Rejection::CombatOver)
        } else if self.locks.intersects(lock) {
            Some(Rejection::ActionInFlight)
        } else if phase != expected {
            Some(Rejection::WrongPhase(phase))
        } else {
            None
        };
        match rejection {
            Some(rejection) => Err(self.reject(rejection)),
            None => Ok(()),
        }
    }

    fn reject(&mut self, rejection: Rejection) -> CombatActionError {
        tracing::warn!(
            target: "combat::engine",
            code = rejection.error_code(),
            turn = self.state.turn,
            "action rejected: {rejection}"
        );
        self.state.log(rejection.log_message());
        rejection.into()
    }

    /// Hands the collected steps to the caller according to the pacing mode.
    fn finish(&mut self) -> Resolution {
        let steps = core::mem::take(&mut self.steps);
        match self.pacing {
            PacingMode::Immediate => Resolution { steps },
            PacingMode::Deferred => {
                self.queue.extend(steps);
                self.lock_while_queued();
                Resolution::default()
            }
        }
    }

    /// Queues steps produced outside a player action.
    fn stash(&mut self) {
        let steps = core::mem::take(&mut self.steps);
        self.queue.extend(steps);
        if self.pacing == PacingMode::Deferred {
            self.lock_while_queued();
        }
    }

    fn lock_while_queued(&mut self) {
        if !self.queue.is_empty() {
            self.locks = ActionLock::all();
        }
    }

    fn emit(&mut self, event: CombatEvent) {
        self.emit_after(Duration::ZERO, event);
    }

    fn emit_after(&mut self, delay: Duration, event: CombatEvent) {
        for observer in &mut self.observers {
            observer.on_event(&event);
        }
        self.steps.push(Step { delay, event });
    }

    fn checkpoint(&mut self, checkpoint: Checkpoint) {
        let pacing = &self.config.pacing;
        let delay = match checkpoint {
            Checkpoint::AttackWindup(_) => pacing.attack_windup(),
            Checkpoint::StatusDecay(_) => pacing.status_decay(),
            Checkpoint::ReturnToHand(_) => pacing.return_to_hand(),
        };
        self.emit_after(delay, CombatEvent::Checkpoint(checkpoint));
    }

    fn emit_hand(&mut self) {
        let cards = self
            .state
            .piles
            .hand
            .iter()
            .map(|c| HandCard {
                instance_id: c.instance_id,
                card_id: c.card.id.clone(),
                card_type: c.card_type(),
            })
            .collect();
        self.emit(CombatEvent::HandChanged { cards });
    }

    fn emit_energy(&mut self) {
        self.emit(CombatEvent::EnergyChanged {
            energy: self.state.energy,
        });
    }
}

//! Deterministic turn-based card combat.
//!
//! `combat-core` defines the canonical combat rules (cards, statuses,
//! terrain, enemy intents, relic hooks) and exposes pure APIs that renderers,
//! content loaders and offline simulators share. All state mutation flows
//! through [`engine::CombatSession`]; the player's HP and relic list live in
//! an external [`env::PlayerResources`] store borrowed per operation.
//!
//! Randomness is derived from a single combat seed, so two sessions built
//! with the same seed and driven by the same operations produce the same
//! events.
pub mod card;
pub mod combat;
pub mod config;
pub mod enemy;
pub mod engine;
pub mod env;
pub mod error;
pub mod events;
pub mod relic;
pub mod state;
pub mod terrain;

pub use card::{
    Card, CardInstance, CardInstanceId, CardType, CardUpgrade, Effect, Rarity, TargetScope,
};
pub use combat::{DamageMultiplier, HitOutcome, calculate_damage};
pub use config::{CombatConfig, PacingConfig, TerrainTuning};
pub use enemy::{
    EnemyId, EnemyInstance, EnemyIntent, EnemyTemplate, IntentScript, IntentScripts,
};
pub use engine::{
    ActionLock, CombatActionError, CombatBuilder, CombatSession, InvalidReference, PacingMode,
    Rejection, SetupError,
};
pub use env::{CombatRng, PlayerResources, PlayerStore, RngStream};
pub use error::{CombatError, ErrorSeverity};
pub use events::{
    Achievement, AchievementTracker, Checkpoint, CombatEvent, CombatObserver, CombatStats,
    DamageSource, EventRecorder, HandCard, NullObserver, Resolution, Step,
};
pub use relic::{RelicContext, RelicError, RelicHook, RelicRegistry, RelicRequests, RelicTrigger};
pub use state::{
    CombatLog, CombatOutcome, CombatPhase, CombatState, Combatant, LogEntry, Status, StatusKind,
    StatusSet,
};
pub use terrain::{BlockRule, TerrainKind};

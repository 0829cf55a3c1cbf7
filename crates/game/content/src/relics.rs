//! Built-in relics.
//!
//! Every built-in relic grants one fixed reward at one trigger. Relics with
//! conditional behavior implement [`RelicHook`] directly.

use std::sync::Arc;

use combat_core::{RelicContext, RelicError, RelicHook, RelicRegistry, RelicTrigger};

/// What a built-in relic asks for when it fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Grant {
    Block(u32),
    Energy(u32),
    Strength(u32),
    Dexterity(u32),
    Draw(u32),
    Heal(u32),
    DamageAllEnemies(u32),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuiltinRelic {
    pub id: &'static str,
    pub name: &'static str,
    pub trigger: RelicTrigger,
    pub grant: Grant,
}

impl BuiltinRelic {
    pub const ANCHOR: Self = Self::new(
        "anchor",
        "Anchor",
        RelicTrigger::OnCombatStart,
        Grant::Block(10),
    );
    pub const VAJRA: Self = Self::new(
        "vajra",
        "Vajra",
        RelicTrigger::OnCombatStart,
        Grant::Strength(1),
    );
    pub const LANTERN: Self = Self::new(
        "lantern",
        "Lantern",
        RelicTrigger::OnCombatStart,
        Grant::Energy(1),
    );
    pub const BLOOD_VIAL: Self = Self::new(
        "blood_vial",
        "Blood Vial",
        RelicTrigger::OnCombatStart,
        Grant::Heal(2),
    );
    pub const BAG_OF_PREPARATION: Self = Self::new(
        "bag_of_preparation",
        "Bag of Preparation",
        RelicTrigger::OnCombatStart,
        Grant::Draw(2),
    );
    pub const MERCURY_HOURGLASS: Self = Self::new(
        "mercury_hourglass",
        "Mercury Hourglass",
        RelicTrigger::OnTurnStart,
        Grant::DamageAllEnemies(3),
    );
    pub const BRONZE_SCALES: Self = Self::new(
        "bronze_scales",
        "Bronze Scales",
        RelicTrigger::OnDamageTaken,
        Grant::DamageAllEnemies(3),
    );
    pub const ORICHALCUM: Self = Self::new(
        "orichalcum",
        "Orichalcum",
        RelicTrigger::OnTurnEnd,
        Grant::Block(6),
    );

    pub const ALL: [Self; 8] = [
        Self::ANCHOR,
        Self::VAJRA,
        Self::LANTERN,
        Self::BLOOD_VIAL,
        Self::BAG_OF_PREPARATION,
        Self::MERCURY_HOURGLASS,
        Self::BRONZE_SCALES,
        Self::ORICHALCUM,
    ];

    pub const fn new(
        id: &'static str,
        name: &'static str,
        trigger: RelicTrigger,
        grant: Grant,
    ) -> Self {
        Self {
            id,
            name,
            trigger,
            grant,
        }
    }
}

impl RelicHook for BuiltinRelic {
    fn id(&self) -> &str {
        self.id
    }

    fn name(&self) -> &str {
        self.name
    }

    fn responds_to(&self, trigger: RelicTrigger) -> bool {
        trigger == self.trigger
    }

    fn on_trigger(&self, ctx: &mut RelicContext) -> Result<(), RelicError> {
        match self.grant {
            Grant::Block(amount) => ctx.gain_block(amount),
            Grant::Energy(amount) => ctx.gain_energy(amount),
            Grant::Strength(amount) => ctx.gain_strength(amount),
            Grant::Dexterity(amount) => ctx.gain_dexterity(amount),
            Grant::Draw(count) => ctx.draw_cards(count),
            Grant::Heal(amount) => ctx.heal(amount),
            Grant::DamageAllEnemies(amount) => ctx.damage_all_enemies(amount),
        }
        Ok(())
    }
}

/// Registry holding every built-in relic.
pub fn builtin_relics() -> RelicRegistry {
    BuiltinRelic::ALL
        .into_iter()
        .fold(RelicRegistry::new(), |registry, relic| registry.with(Arc::new(relic)))
}

//! End-of-run report.

use combat_core::{
    Achievement, AchievementTracker, CombatOutcome, CombatSession, CombatStats, PlayerResources,
};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct EnemySummary {
    pub name: String,
    pub hp: u32,
    pub max_hp: u32,
}

#[derive(Debug, Serialize)]
pub struct Summary {
    pub seed: u64,
    pub outcome: CombatOutcome,
    pub turns: u32,
    pub player_hp: u32,
    pub player_max_hp: u32,
    pub enemies: Vec<EnemySummary>,
    pub stats: CombatStats,
    pub achievements: Vec<Achievement>,
    /// Most recent combat log lines.
    pub log: Vec<String>,
}

impl Summary {
    pub fn collect(
        session: &CombatSession,
        player: &dyn PlayerResources,
        outcome: CombatOutcome,
        stats: CombatStats,
        achievements: &AchievementTracker,
    ) -> Self {
        Self {
            seed: session.seed(),
            outcome,
            turns: session.turn(),
            player_hp: player.current_hp(),
            player_max_hp: player.max_hp(),
            enemies: session
                .enemies()
                .iter()
                .map(|enemy| EnemySummary {
                    name: enemy.name.clone(),
                    hp: enemy.current_hp,
                    max_hp: enemy.max_hp,
                })
                .collect(),
            stats,
            achievements: achievements.unlocked().collect(),
            log: session
                .log()
                .iter()
                .map(|entry| format!("[{}] {}", entry.turn, entry.message))
                .collect(),
        }
    }

    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for line in &self.log {
            out.push_str(line);
            out.push('\n');
        }
        out.push_str(&format!(
            "\n{} after {} turns (seed {})\n",
            self.outcome, self.turns, self.seed
        ));
        out.push_str(&format!("Player: {}/{} HP\n", self.player_hp, self.player_max_hp));
        for enemy in &self.enemies {
            out.push_str(&format!("{}: {}/{} HP\n", enemy.name, enemy.hp, enemy.max_hp));
        }
        out.push_str(&format!(
            "Cards played: {}, damage dealt: {}, damage taken: {}, kills: {}\n",
            self.stats.cards_played,
            self.stats.damage_dealt,
            self.stats.damage_taken,
            self.stats.kills
        ));
        if !self.achievements.is_empty() {
            let names: Vec<String> = self.achievements.iter().map(ToString::to_string).collect();
            out.push_str(&format!("Achievements: {}\n", names.join(", ")));
        }
        out
    }
}

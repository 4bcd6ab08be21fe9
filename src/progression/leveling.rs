use crate::battle::rng::BattleRng;
use crate::errors::ConfigError;
use crate::pokemon::{PokemonInst, MAX_LEVEL};
use schema::BaseStats;
use serde::{Deserialize, Serialize};

pub const DEFAULT_XP_PER_LEVEL: u32 = 100;

// Stat growth per level: HP gains 3..=4, every other stat 1..=2
const HP_GROWTH_OFFSET: u16 = 2;
const HP_GROWTH_ROLL: (u16, u16) = (1, 2);
const STAT_GROWTH_OFFSET: u16 = 1;
const STAT_GROWTH_ROLL: (u16, u16) = (0, 1);

/// Leveling parameters, supplied by the caller rather than held as globals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressionConfig {
    xp_per_level: u32,
    max_level: u8,
}

impl ProgressionConfig {
    pub fn new(xp_per_level: u32) -> Result<Self, ConfigError> {
        if xp_per_level == 0 {
            return Err(ConfigError::InvalidXpPerLevel);
        }
        Ok(Self {
            xp_per_level,
            max_level: MAX_LEVEL,
        })
    }

    pub fn xp_per_level(&self) -> u32 {
        self.xp_per_level
    }

    pub fn max_level(&self) -> u8 {
        self.max_level
    }
}

impl Default for ProgressionConfig {
    fn default() -> Self {
        Self {
            xp_per_level: DEFAULT_XP_PER_LEVEL,
            max_level: MAX_LEVEL,
        }
    }
}

/// Report of a single level gained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelUp {
    pub new_level: u8,
    pub growth: BaseStats,
}

impl PokemonInst {
    /// Add experience and level up as many times as it allows.
    ///
    /// No-op when fainted, at max level, or for a non-positive amount. Reaching
    /// max level resets xp to zero. Returns one report per level gained.
    pub fn gain_xp(
        &mut self,
        amount: i32,
        config: &ProgressionConfig,
        rng: &mut impl BattleRng,
    ) -> Vec<LevelUp> {
        let mut level_ups = Vec::new();
        if self.is_fainted() || self.level >= config.max_level || amount <= 0 {
            return level_ups;
        }

        self.xp = self.xp.saturating_add(amount.unsigned_abs());
        tracing::debug!(pokemon = self.name(), amount, xp = self.xp, "gained xp");

        while self.xp >= config.xp_per_level && self.level < config.max_level {
            self.xp -= config.xp_per_level;
            level_ups.push(self.level_up(rng));
        }

        if self.level >= config.max_level {
            self.xp = 0;
        }

        level_ups
    }

    fn level_up(&mut self, rng: &mut impl BattleRng) -> LevelUp {
        self.level += 1;

        let (hp_low, hp_high) = HP_GROWTH_ROLL;
        let (stat_low, stat_high) = STAT_GROWTH_ROLL;
        let growth = BaseStats {
            hp: rng.pick_in_range(hp_low, hp_high, "HP Growth") + HP_GROWTH_OFFSET,
            attack: rng.pick_in_range(stat_low, stat_high, "Attack Growth") + STAT_GROWTH_OFFSET,
            defense: rng.pick_in_range(stat_low, stat_high, "Defense Growth") + STAT_GROWTH_OFFSET,
            speed: rng.pick_in_range(stat_low, stat_high, "Speed Growth") + STAT_GROWTH_OFFSET,
        };
        self.grow_stats(&growth);

        tracing::info!(
            pokemon = self.name(),
            level = self.level,
            max_hp = self.max_hp(),
            attack = self.attack(),
            defense = self.defense(),
            speed = self.speed(),
            "level up"
        );

        LevelUp {
            new_level: self.level,
            growth,
        }
    }
}

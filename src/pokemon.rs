use schema::{BaseStats, Move};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

pub const MIN_LEVEL: u8 = 1;
pub const MAX_LEVEL: u8 = 100;

/// A single Pokemon as it exists in a roster or an encounter.
///
/// HP and the stat block are private so that `0 <= current_hp <= max_hp` holds
/// at all times and stats can only grow through leveling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonInst {
    pub id: Uuid,
    pub species: String,
    pub nickname: Option<String>,
    pub types: Vec<String>,
    pub level: u8,
    pub xp: u32,
    pub moves: Vec<Move>,   // Insertion order is selection order
    pub status: Option<String>, // Reserved, no battle effect yet
    stats: BaseStats,
    current_hp: u16,
}

impl PokemonInst {
    /// Create a new Pokemon at full HP with no moves.
    pub fn new(species: impl Into<String>, types: Vec<String>, level: u8, stats: BaseStats) -> Self {
        Self {
            id: Uuid::new_v4(),
            species: species.into(),
            nickname: None,
            types,
            level,
            xp: 0,
            moves: Vec::new(),
            status: None,
            current_hp: stats.hp,
            stats,
        }
    }

    pub fn with_nickname(mut self, nickname: impl Into<String>) -> Self {
        self.nickname = Some(nickname.into());
        self
    }

    pub fn with_moves(mut self, moves: Vec<Move>) -> Self {
        self.moves = moves;
        self
    }

    pub fn learn_move(&mut self, move_: Move) {
        self.moves.push(move_);
    }

    /// Display name: the nickname if one was given, otherwise the species name.
    pub fn name(&self) -> &str {
        self.nickname.as_deref().unwrap_or(&self.species)
    }

    pub fn stats(&self) -> &BaseStats {
        &self.stats
    }

    pub fn max_hp(&self) -> u16 {
        self.stats.hp
    }

    pub fn attack(&self) -> u16 {
        self.stats.attack
    }

    pub fn defense(&self) -> u16 {
        self.stats.defense
    }

    pub fn speed(&self) -> u16 {
        self.stats.speed
    }

    pub fn current_hp(&self) -> u16 {
        self.current_hp
    }

    pub fn is_fainted(&self) -> bool {
        self.current_hp == 0
    }

    /// Set HP directly, clamped to `0..=max_hp`.
    pub fn set_hp(&mut self, hp: u16) {
        self.current_hp = hp.min(self.stats.hp);
    }

    pub fn set_hp_to_max(&mut self) {
        self.current_hp = self.stats.hp;
    }

    /// Subtract damage, never going below zero.
    /// Returns true if the Pokemon is fainted afterwards.
    pub fn take_damage(&mut self, damage: u16) -> bool {
        self.current_hp = self.current_hp.saturating_sub(damage);
        self.is_fainted()
    }

    /// Apply stat growth from a level-up. Current HP rises by the same amount as
    /// max HP, then is clamped to the new maximum.
    pub(crate) fn grow_stats(&mut self, growth: &BaseStats) {
        self.stats.hp = self.stats.hp.saturating_add(growth.hp);
        self.stats.attack = self.stats.attack.saturating_add(growth.attack);
        self.stats.defense = self.stats.defense.saturating_add(growth.defense);
        self.stats.speed = self.stats.speed.saturating_add(growth.speed);
        self.current_hp = self.current_hp.saturating_add(growth.hp).min(self.stats.hp);
    }

    /// Check the data invariants a combatant must satisfy before entering a battle.
    /// The error describes the first violated invariant.
    pub fn validate(&self) -> Result<(), String> {
        if !(MIN_LEVEL..=MAX_LEVEL).contains(&self.level) {
            return Err(format!(
                "{} has level {} outside {}..={}",
                self.name(),
                self.level,
                MIN_LEVEL,
                MAX_LEVEL
            ));
        }
        if !self.stats.all_positive() {
            return Err(format!(
                "{} has a non-positive stat: {:?}",
                self.name(),
                self.stats
            ));
        }
        if self.current_hp > self.stats.hp {
            return Err(format!(
                "{} has {} HP above its maximum of {}",
                self.name(),
                self.current_hp,
                self.stats.hp
            ));
        }
        Ok(())
    }
}

impl fmt::Display for PokemonInst {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (Lv.{} Type: {}, HP: {}/{})",
            self.name(),
            self.level,
            self.types.join(", "),
            self.current_hp,
            self.stats.hp
        )
    }
}

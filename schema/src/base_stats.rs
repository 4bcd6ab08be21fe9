use serde::{Deserialize, Serialize};

/// The stat block a combatant is created with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseStats {
    pub hp: u16,
    pub attack: u16,
    pub defense: u16,
    pub speed: u16,
}

impl BaseStats {
    pub fn new(hp: u16, attack: u16, defense: u16, speed: u16) -> Self {
        Self {
            hp,
            attack,
            defense,
            speed,
        }
    }

    /// Every stat must be strictly positive.
    pub fn all_positive(&self) -> bool {
        self.hp > 0 && self.attack > 0 && self.defense > 0 && self.speed > 0
    }
}

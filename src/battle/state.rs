use serde::{Deserialize, Serialize};
use std::fmt;

/// Which side of a battle a Pokemon fights for.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Player,
    Opponent,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Player => write!(f, "Player"),
            Side::Opponent => write!(f, "Opponent"),
        }
    }
}

/// Terminal result of a battle.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleOutcome {
    Winner(Side),
    /// Move selection was cancelled; neither side fainted.
    NoWinner,
}

impl BattleOutcome {
    pub fn winner(self) -> Option<Side> {
        match self {
            BattleOutcome::Winner(side) => Some(side),
            BattleOutcome::NoWinner => None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    InProgress,
    Ended(BattleOutcome),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum BattleEvent {
    BattleStarted {
        player: String,
        opponent: String,
    },

    // Turn Management
    TurnStarted {
        turn_number: u32,
        player_hp: u16,
        opponent_hp: u16,
    },
    TurnOrderDecided {
        first: Side,
        pokemon: String,
        speed_tie: bool,
    },
    SelectionCancelled {
        side: Side,
    },

    // Pokemon Actions
    MoveUsed {
        side: Side,
        pokemon: String,
        move_name: String,
    },
    MoveMissed {
        attacker: String,
        defender: String,
        move_name: String,
    },
    MoveHit {
        attacker: String,
        defender: String,
        move_name: String,
    },
    DamageDealt {
        target: String,
        damage: u16,
        remaining_hp: u16,
        max_hp: u16,
    },
    NoDirectEffect {
        move_name: String,
    },
    PokemonFainted {
        side: Side,
        pokemon: String,
    },

    // Battle End
    BattleEnded {
        outcome: BattleOutcome,
        turns: u32,
    },
}

impl BattleEvent {
    /// Formats the event into a human-readable string.
    /// Returns None for silent events that should not produce user-visible text.
    pub fn format(&self) -> Option<String> {
        match self {
            BattleEvent::BattleStarted { player, opponent } => {
                Some(format!("--- Battle Start: {} vs Wild {} ---", player, opponent))
            }
            BattleEvent::TurnStarted { turn_number, .. } => {
                Some(format!("--- Turn {} ---", turn_number))
            }
            BattleEvent::TurnOrderDecided { pokemon, .. } => {
                Some(format!("{} goes first this turn.", pokemon))
            }
            BattleEvent::SelectionCancelled { .. } => {
                Some("Move selection failed or was cancelled. Ending battle.".to_string())
            }
            BattleEvent::MoveUsed { pokemon, move_name, .. } => {
                Some(format!("{} uses {}!", pokemon, move_name))
            }
            BattleEvent::MoveMissed { .. } => Some("But it missed!".to_string()),
            BattleEvent::MoveHit { .. } => {
                None // Silent - hit is obvious from damage/effects
            }
            BattleEvent::DamageDealt {
                target,
                damage,
                remaining_hp,
                max_hp,
            } => Some(format!(
                "Dealt {} damage. {} HP: {}/{}",
                damage, target, remaining_hp, max_hp
            )),
            BattleEvent::NoDirectEffect { .. } => {
                Some("But it had no direct effect.".to_string())
            }
            BattleEvent::PokemonFainted { pokemon, .. } => Some(format!("{} fainted!", pokemon)),
            BattleEvent::BattleEnded { outcome, turns } => Some(match outcome {
                BattleOutcome::Winner(side) => {
                    format!("--- Battle End --- Turn {}: {} side wins!", turns, side)
                }
                BattleOutcome::NoWinner => {
                    format!("--- Battle End --- Turn {}: no winner.", turns)
                }
            }),
        }
    }
}

/// Narration line for the event. Silent events render as an empty string.
impl fmt::Display for BattleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.format() {
            Some(line) => f.write_str(&line),
            None => Ok(()),
        }
    }
}

/// Ordered record of everything that happened in a battle.
#[derive(Serialize, Debug, Clone, Default)]
pub struct EventBus {
    events: Vec<BattleEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, event: BattleEvent) {
        tracing::debug!(?event, "battle event");
        self.events.push(event);
    }

    pub fn events(&self) -> &[BattleEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Human-readable lines for every non-silent event, in order.
    pub fn formatted(&self) -> Vec<String> {
        self.events.iter().filter_map(BattleEvent::format).collect()
    }
}

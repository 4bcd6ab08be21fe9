// In: src/lib.rs

//! Pokemon Duel Battle Engine
//!
//! A minimal turn-based battle between a player's active Pokemon and a wild
//! opponent: turn order, move resolution, the battle loop and the experience
//! progression that follows a win. Randomness and move selection are injected,
//! so every outcome can be forced in tests.

// --- MODULE DECLARATIONS ---
pub mod battle;
pub mod config;
pub mod errors;
pub mod player;
pub mod pokemon;
pub mod progression;

// --- PUBLIC API RE-EXPORTS ---

// --- From the `schema` crate ---
pub use schema::{BaseStats, Move, MoveCategory, MoveDataError};

// --- From this crate's modules (`src/`) ---

// Core battle engine types.
pub use battle::ai::{FirstMoveAI, MoveSelector, SideSelector};
pub use battle::calculators::{calculate_damage, resolve_move, MoveOutcome};
pub use battle::engine::Battle;
pub use battle::rng::{BattleRng, LiveRng, TurnRng};
pub use battle::state::{BattleEvent, BattleOutcome, EventBus, GameState, Side};
pub use battle::turn_orchestrator::determine_turn_order;

// Combatants, roster and progression.
pub use player::{Player, Roster};
pub use pokemon::PokemonInst;
pub use progression::{defeat_xp, LevelUp, ProgressionConfig};

// Configuration.
pub use config::EncounterConfig;

// Crate-specific error and result types.
pub use errors::{
    BattleEngineError, BattleResult, BattleSetupError, ConfigError, ConfigResult, TeamError,
};

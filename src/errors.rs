use schema::MoveDataError;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the Pokemon duel battle engine
#[derive(Debug, Error)]
pub enum BattleEngineError {
    /// A battle could not be set up
    #[error("Battle setup error: {0}")]
    Setup(#[from] BattleSetupError),
    /// A roster operation was rejected
    #[error("Team error: {0}")]
    Team(#[from] TeamError),
    /// Encounter configuration could not be loaded
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    /// Move data is malformed
    #[error("Move data error: {0}")]
    MoveData(#[from] MoveDataError),
    /// The event log could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors that reject a battle at construction time
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BattleSetupError {
    /// The player's roster has no non-fainted Pokemon
    #[error("player has no active Pokemon to start the battle")]
    NoActivePokemon,
    /// The player's active Pokemon violates the combatant data invariants
    #[error("invalid player Pokemon: {0}")]
    InvalidPlayerPokemon(String),
    /// The opponent violates the combatant data invariants
    #[error("invalid opponent: {0}")]
    InvalidOpponent(String),
}

/// Errors related to roster management
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TeamError {
    /// The team already holds the maximum number of Pokemon
    #[error("{player}'s team is full, cannot add {pokemon}")]
    TeamFull { player: String, pokemon: String },
}

/// Errors raised while loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
    #[error("xp_per_level must be greater than zero")]
    InvalidXpPerLevel,
    #[error("invalid Pokemon {name:?}: {reason}")]
    InvalidPokemon { name: String, reason: String },
    #[error(transparent)]
    MoveData(#[from] MoveDataError),
    #[error(transparent)]
    Team(#[from] TeamError),
}

/// Type alias for Results using BattleEngineError
pub type BattleResult<T> = Result<T, BattleEngineError>;

/// Type alias for Results using ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

pub mod leveling;
pub mod rewards;

pub use leveling::{LevelUp, ProgressionConfig, DEFAULT_XP_PER_LEVEL};
pub use rewards::defeat_xp;

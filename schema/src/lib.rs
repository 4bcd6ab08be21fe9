// Pokemon Duel Schema - Shared type definitions
// This crate contains the plain data records shared between the battle engine,
// its configuration loader and any presentation layer built on top of it.

// Re-export the main types
pub use base_stats::*;
pub use move_data::*;

pub mod base_stats;
pub mod move_data;

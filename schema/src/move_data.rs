use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use strum::{Display, EnumIter, IntoStaticStr};
use thiserror::Error;

/// Errors raised while building move data from untyped input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveDataError {
    /// The category name is not one of the known move categories.
    #[error("unknown move category: {0:?}")]
    UnknownCategory(String),
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, IntoStaticStr,
)]
pub enum MoveCategory {
    Physical,
    Special,
    Status,
}

impl MoveCategory {
    /// Whether a move of this category deals direct damage.
    pub fn is_damaging(self) -> bool {
        match self {
            MoveCategory::Physical | MoveCategory::Special => true,
            MoveCategory::Status => false,
        }
    }
}

impl FromStr for MoveCategory {
    type Err = MoveDataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Physical" => Ok(MoveCategory::Physical),
            "Special" => Ok(MoveCategory::Special),
            "Status" => Ok(MoveCategory::Status),
            other => Err(MoveDataError::UnknownCategory(other.to_string())),
        }
    }
}

/// A usable action. Accuracy above 100 means the move never misses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub name: String,
    pub move_type: String, // Free-form elemental tag, e.g. "Fire"
    pub category: MoveCategory,
    pub power: u16,
    pub accuracy: u16,
    pub max_pp: u8,
}

impl Move {
    pub fn new(
        name: impl Into<String>,
        move_type: impl Into<String>,
        category: MoveCategory,
        power: u16,
        accuracy: u16,
        max_pp: u8,
    ) -> Self {
        Self {
            name: name.into(),
            move_type: move_type.into(),
            category,
            power,
            accuracy,
            max_pp,
        }
    }

    pub fn is_damaging(&self) -> bool {
        self.category.is_damaging()
    }

    pub fn never_misses(&self) -> bool {
        self.accuracy > 100
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) Cat:{} Pow:{} Acc:{} PP:{}",
            self.name, self.move_type, self.category, self.power, self.accuracy, self.max_pp
        )
    }
}

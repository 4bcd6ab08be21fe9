//! Encounter configuration for the CLI driver, loaded from a RON file.

use crate::errors::{ConfigError, ConfigResult};
use crate::player::Player;
use crate::pokemon::PokemonInst;
use crate::progression::{ProgressionConfig, DEFAULT_XP_PER_LEVEL};
use schema::{BaseStats, Move, MoveCategory};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_ENCOUNTER_PATH: &str = "data/encounter.ron";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveConfig {
    pub name: String,
    pub move_type: String,
    pub category: String, // Validated against MoveCategory when building
    pub power: u16,
    pub accuracy: u16,
    pub pp: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonConfig {
    pub species: String,
    #[serde(default)]
    pub nickname: Option<String>,
    pub types: Vec<String>,
    pub level: u8,
    pub stats: BaseStats,
    #[serde(default)]
    pub moves: Vec<MoveConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncounterConfig {
    pub player_name: String,
    pub team: Vec<PokemonConfig>,
    pub opponent: PokemonConfig,
    #[serde(default = "default_xp_per_level")]
    pub xp_per_level: u32,
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_xp_per_level() -> u32 {
    DEFAULT_XP_PER_LEVEL
}

impl MoveConfig {
    pub fn build(&self) -> ConfigResult<Move> {
        let category: MoveCategory = self.category.parse()?;
        Ok(Move::new(
            self.name.clone(),
            self.move_type.clone(),
            category,
            self.power,
            self.accuracy,
            self.pp,
        ))
    }
}

impl PokemonConfig {
    pub fn build(&self) -> ConfigResult<PokemonInst> {
        let moves = self
            .moves
            .iter()
            .map(MoveConfig::build)
            .collect::<ConfigResult<Vec<_>>>()?;

        let mut pokemon =
            PokemonInst::new(self.species.clone(), self.types.clone(), self.level, self.stats)
                .with_moves(moves);
        if let Some(nickname) = &self.nickname {
            pokemon = pokemon.with_nickname(nickname.clone());
        }

        pokemon
            .validate()
            .map_err(|reason| ConfigError::InvalidPokemon {
                name: self.species.clone(),
                reason,
            })?;
        Ok(pokemon)
    }
}

impl EncounterConfig {
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: EncounterConfig =
            ron::de::from_str(&contents).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        tracing::debug!(path = %path.display(), "encounter config loaded");
        Ok(config)
    }

    pub fn progression(&self) -> ConfigResult<ProgressionConfig> {
        ProgressionConfig::new(self.xp_per_level)
    }

    pub fn build_player(&self) -> ConfigResult<Player> {
        let mut player = Player::new(self.player_name.clone());
        for pokemon in &self.team {
            player.add_pokemon(pokemon.build()?)?;
        }
        Ok(player)
    }

    pub fn build_opponent(&self) -> ConfigResult<PokemonInst> {
        self.opponent.build()
    }
}

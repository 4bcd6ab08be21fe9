use crate::errors::TeamError;
use crate::pokemon::PokemonInst;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const MAX_TEAM_SIZE: usize = 6;

/// Supplies the battle with the Pokemon that fights for the player.
pub trait Roster {
    /// The Pokemon that should enter battle, or None when nobody can fight.
    fn active_pokemon_mut(&mut self) -> Option<&mut PokemonInst>;
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Player {
    pub name: String,
    team: Vec<PokemonInst>,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            team: Vec::with_capacity(MAX_TEAM_SIZE),
        }
    }

    /// Add a Pokemon to the end of the team, if there is room.
    pub fn add_pokemon(&mut self, pokemon: PokemonInst) -> Result<(), TeamError> {
        if self.team.len() >= MAX_TEAM_SIZE {
            return Err(TeamError::TeamFull {
                player: self.name.clone(),
                pokemon: pokemon.name().to_string(),
            });
        }
        tracing::debug!(player = %self.name, pokemon = pokemon.name(), "added to team");
        self.team.push(pokemon);
        Ok(())
    }

    pub fn team(&self) -> &[PokemonInst] {
        &self.team
    }

    pub fn team_mut(&mut self) -> &mut [PokemonInst] {
        &mut self.team
    }

    /// Index of the first non-fainted team member.
    pub fn active_pokemon_index(&self) -> Option<usize> {
        self.team.iter().position(|pokemon| !pokemon.is_fainted())
    }

    /// The first non-fainted team member.
    pub fn active_pokemon(&self) -> Option<&PokemonInst> {
        self.team.iter().find(|pokemon| !pokemon.is_fainted())
    }

    pub fn has_usable_pokemon(&self) -> bool {
        self.active_pokemon().is_some()
    }
}

impl Roster for Player {
    fn active_pokemon_mut(&mut self) -> Option<&mut PokemonInst> {
        self.team.iter_mut().find(|pokemon| !pokemon.is_fainted())
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let team = if self.team.is_empty() {
            "No Pokemon".to_string()
        } else {
            self.team
                .iter()
                .map(PokemonInst::name)
                .collect::<Vec<_>>()
                .join(", ")
        };
        write!(f, "Player: {}\nTeam: [{}]", self.name, team)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use schema::BaseStats;

    fn pokemon(species: &str) -> PokemonInst {
        PokemonInst::new(species, vec![], 5, BaseStats::new(35, 10, 10, 10))
    }

    #[test]
    fn test_active_pokemon_is_first_non_fainted() {
        let mut player = Player::new("Ash");
        assert!(player.active_pokemon().is_none());

        player.add_pokemon(pokemon("Pikachu")).unwrap();
        player.add_pokemon(pokemon("Bulbasaur")).unwrap();
        assert_eq!(player.active_pokemon().unwrap().species, "Pikachu");

        player.team_mut()[0].set_hp(0);
        assert_eq!(player.active_pokemon().unwrap().species, "Bulbasaur");
        assert_eq!(player.active_pokemon_index(), Some(1));

        player.team_mut()[1].set_hp(0);
        assert!(player.active_pokemon().is_none());
        assert!(player.active_pokemon_mut().is_none());
        assert!(!player.has_usable_pokemon());
    }

    #[test]
    fn test_team_is_capped_at_six() {
        let mut player = Player::new("Ash");
        for _ in 0..MAX_TEAM_SIZE {
            player.add_pokemon(pokemon("Rattata")).unwrap();
        }

        let result = player.add_pokemon(pokemon("Mew"));

        assert_eq!(
            result,
            Err(TeamError::TeamFull {
                player: "Ash".to_string(),
                pokemon: "Mew".to_string(),
            })
        );
        assert_eq!(player.team().len(), MAX_TEAM_SIZE);
    }

    #[test]
    fn test_display_lists_team_names() {
        let mut player = Player::new("Ash");
        assert_eq!(player.to_string(), "Player: Ash\nTeam: [No Pokemon]");

        player.add_pokemon(pokemon("Pikachu").with_nickname("Pika")).unwrap();
        player.add_pokemon(pokemon("Bulbasaur")).unwrap();
        assert_eq!(player.to_string(), "Player: Ash\nTeam: [Pika, Bulbasaur]");
    }
}

use crate::battle::rng::TurnRng;
use crate::player::Player;
use crate::pokemon::PokemonInst;
use schema::{BaseStats, Move, MoveCategory};

/// A builder for creating test Pokemon instances with common defaults.
///
/// # Example
/// ```ignore
/// let pokemon = TestPokemonBuilder::new("Pikachu", 25)
///     .with_stats(35, 55, 40, 90)
///     .with_moves(vec![tackle()])
///     .with_hp(10)
///     .build();
/// ```
pub struct TestPokemonBuilder {
    species: String,
    level: u8,
    stats: BaseStats,
    moves: Vec<Move>,
    current_hp: Option<u16>,
}

impl TestPokemonBuilder {
    /// Creates a new builder for a given species and level.
    pub fn new(species: &str, level: u8) -> Self {
        Self {
            species: species.to_string(),
            level,
            stats: BaseStats::new(100, 50, 50, 50),
            moves: vec![tackle()],
            current_hp: None,
        }
    }

    pub fn with_stats(mut self, hp: u16, attack: u16, defense: u16, speed: u16) -> Self {
        self.stats = BaseStats::new(hp, attack, defense, speed);
        self
    }

    /// Sets the moves for the test Pokemon.
    pub fn with_moves(mut self, moves: Vec<Move>) -> Self {
        self.moves = moves;
        self
    }

    /// Sets the current HP for the test Pokemon. If not set, HP will be max.
    pub fn with_hp(mut self, hp: u16) -> Self {
        self.current_hp = Some(hp);
        self
    }

    /// Builds the `PokemonInst`.
    pub fn build(self) -> PokemonInst {
        let mut pokemon = PokemonInst::new(self.species, vec!["Normal".to_string()], self.level, self.stats)
            .with_moves(self.moves);
        if let Some(hp) = self.current_hp {
            pokemon.set_hp(hp);
        }
        pokemon
    }
}

pub fn tackle() -> Move {
    Move::new("Tackle", "Normal", MoveCategory::Physical, 40, 100, 35)
}

pub fn growl() -> Move {
    Move::new("Growl", "Normal", MoveCategory::Status, 0, 100, 40)
}

/// A damaging move that skips the accuracy roll.
pub fn sure_hit(name: &str, power: u16) -> Move {
    Move::new(name, "Normal", MoveCategory::Physical, power, 101, 20)
}

/// Level 50 Pikachu: speed 90, attack 55, defense 40, 150 HP.
pub fn scenario_pikachu(moves: Vec<Move>) -> PokemonInst {
    TestPokemonBuilder::new("Pikachu", 50)
        .with_stats(150, 55, 40, 90)
        .with_moves(moves)
        .build()
}

/// Level 48 Rattata: speed 72, attack 56, defense 35, 120 HP.
pub fn scenario_rattata(moves: Vec<Move>) -> PokemonInst {
    TestPokemonBuilder::new("Rattata", 48)
        .with_stats(120, 56, 35, 72)
        .with_moves(moves)
        .build()
}

/// Creates a default test player with the given team.
pub fn create_test_player(team: Vec<PokemonInst>) -> Player {
    let mut player = Player::new("Tester");
    for pokemon in team {
        player
            .add_pokemon(pokemon)
            .unwrap_or_else(|err| panic!("test team too large: {}", err));
    }
    player
}

/// Every roll is 100: moves with accuracy 100 hit and damage variance is exactly 1.0.
/// A speed tie resolved with this rng puts the opponent first.
pub fn predictable_rng() -> TurnRng {
    TurnRng::new_for_test(vec![100; 200])
}

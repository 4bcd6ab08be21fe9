//! Move-selection collaborators for the battle loop.

use crate::battle::state::Side;
use crate::pokemon::PokemonInst;
use schema::Move;

/// Anything that can choose a move for a Pokemon about to act.
///
/// Returning `None` means no choice is available (cancelled input, empty move
/// list) and ends the battle without a winner.
pub trait MoveSelector {
    fn choose_move(&mut self, side: Side, pokemon: &PokemonInst) -> Option<Move>;
}

impl<F> MoveSelector for F
where
    F: FnMut(Side, &PokemonInst) -> Option<Move>,
{
    fn choose_move(&mut self, side: Side, pokemon: &PokemonInst) -> Option<Move> {
        self(side, pokemon)
    }
}

/// Simple opponent behavior: always the first known move.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstMoveAI;

impl MoveSelector for FirstMoveAI {
    fn choose_move(&mut self, _side: Side, pokemon: &PokemonInst) -> Option<Move> {
        pokemon.moves.first().cloned()
    }
}

/// Routes each side to its own selector, e.g. a human for the player and an AI for the opponent.
#[derive(Debug, Clone, Default)]
pub struct SideSelector<P, O> {
    pub player: P,
    pub opponent: O,
}

impl<P, O> SideSelector<P, O> {
    pub fn new(player: P, opponent: O) -> Self {
        Self { player, opponent }
    }
}

impl<P: MoveSelector, O: MoveSelector> MoveSelector for SideSelector<P, O> {
    fn choose_move(&mut self, side: Side, pokemon: &PokemonInst) -> Option<Move> {
        match side {
            Side::Player => self.player.choose_move(side, pokemon),
            Side::Opponent => self.opponent.choose_move(side, pokemon),
        }
    }
}

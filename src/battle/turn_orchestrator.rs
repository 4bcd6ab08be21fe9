use crate::battle::rng::BattleRng;
use crate::battle::state::Side;
use crate::pokemon::PokemonInst;

/// Decide which side acts first this turn.
///
/// Higher speed goes first. An exact tie is settled by a coin flip; no random
/// outcome is consumed otherwise.
pub fn determine_turn_order(
    player: &PokemonInst,
    opponent: &PokemonInst,
    rng: &mut impl BattleRng,
) -> [Side; 2] {
    if player.speed() > opponent.speed() {
        [Side::Player, Side::Opponent]
    } else if opponent.speed() > player.speed() {
        [Side::Opponent, Side::Player]
    } else if rng.coin_flip("Speed Tie") {
        [Side::Player, Side::Opponent]
    } else {
        [Side::Opponent, Side::Player]
    }
}

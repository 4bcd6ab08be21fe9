use crate::battle::rng::BattleRng;
use crate::pokemon::PokemonInst;
use schema::{Move, MoveCategory};

/// What a single move did. Secondary effects (status, stat changes) would hang off this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveOutcome {
    pub hit: bool,
    pub damage: u16,
    pub defender_fainted: bool,
}

/// Accuracy check. Moves with accuracy above 100 skip the roll entirely.
pub fn move_hits(move_: &Move, rng: &mut impl BattleRng) -> bool {
    if move_.never_misses() {
        return true;
    }
    u16::from(rng.next_outcome("Accuracy Check")) <= move_.accuracy
}

/// Damage formula for a move that has already hit.
///
/// Attack and Defense are used for every damaging category; there is no
/// special split. A hitting move with nonzero power always deals at least 1.
pub fn calculate_damage(
    attacker: &PokemonInst,
    defender: &PokemonInst,
    move_: &Move,
    variance: f64,
) -> u16 {
    match move_.category {
        MoveCategory::Status => 0,
        MoveCategory::Physical | MoveCategory::Special => {
            let level_factor = (2.0 * f64::from(attacker.level) / 5.0) + 2.0;
            let atk_def_ratio = f64::from(attacker.attack()) / f64::from(defender.defense());
            let base = (level_factor * f64::from(move_.power) * atk_def_ratio) / 50.0 + 2.0;
            let damage = (base * variance).floor().min(f64::from(u16::MAX)) as u16;

            if move_.power > 0 {
                damage.max(1)
            } else {
                damage
            }
        }
    }
}

/// Resolve one use of `move_` by `attacker` against `defender`, applying any damage.
pub fn resolve_move(
    attacker: &PokemonInst,
    defender: &mut PokemonInst,
    move_: &Move,
    rng: &mut impl BattleRng,
) -> MoveOutcome {
    if !move_hits(move_, rng) {
        return MoveOutcome {
            hit: false,
            damage: 0,
            defender_fainted: defender.is_fainted(),
        };
    }

    let damage = if move_.is_damaging() {
        let variance = rng.damage_variance();
        calculate_damage(attacker, defender, move_, variance)
    } else {
        0
    };

    let defender_fainted = if damage > 0 {
        defender.take_damage(damage)
    } else {
        defender.is_fainted()
    };

    MoveOutcome {
        hit: true,
        damage,
        defender_fainted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battle::rng::{LiveRng, TurnRng};
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use schema::BaseStats;

    fn pikachu() -> PokemonInst {
        PokemonInst::new(
            "Pikachu",
            vec!["Electric".to_string()],
            50,
            BaseStats::new(150, 55, 40, 90),
        )
    }

    fn rattata() -> PokemonInst {
        PokemonInst::new(
            "Rattata",
            vec!["Normal".to_string()],
            48,
            BaseStats::new(120, 56, 35, 72),
        )
    }

    fn thunder_shock() -> Move {
        Move::new("Thunder Shock", "Electric", MoveCategory::Special, 40, 100, 30)
    }

    #[test]
    fn test_damage_formula_at_full_variance() {
        // level factor 22, ratio 55/35, base 29.657...
        assert_eq!(calculate_damage(&pikachu(), &rattata(), &thunder_shock(), 1.0), 29);
        // level factor 21.2, ratio 56/40, base 25.744
        let quick_attack = Move::new("Quick Attack", "Normal", MoveCategory::Physical, 40, 100, 30);
        assert_eq!(calculate_damage(&rattata(), &pikachu(), &quick_attack, 1.0), 25);
    }

    #[test]
    fn test_damage_formula_at_minimum_variance() {
        // floor(29.657 * 0.85) = 25
        assert_eq!(calculate_damage(&pikachu(), &rattata(), &thunder_shock(), 0.85), 25);
    }

    #[test]
    fn test_status_moves_never_deal_damage_in_the_formula() {
        let mislabelled = Move::new("Odd Growl", "Normal", MoveCategory::Status, 80, 100, 40);
        assert_eq!(calculate_damage(&pikachu(), &rattata(), &mislabelled, 1.0), 0);
    }

    #[rstest]
    #[case(1)]
    #[case(50)]
    #[case(100)]
    fn test_status_move_leaves_hp_unchanged_for_any_roll(#[case] roll: u8) {
        let attacker = pikachu();
        let mut defender = rattata();
        let growl = Move::new("Growl", "Normal", MoveCategory::Status, 0, 50, 40);
        let mut rng = TurnRng::new_for_test(vec![roll]);

        let outcome = resolve_move(&attacker, &mut defender, &growl, &mut rng);

        assert_eq!(outcome.damage, 0);
        assert_eq!(outcome.hit, roll <= 50);
        assert_eq!(defender.current_hp(), defender.max_hp());
        // Only the accuracy roll is consumed, never a variance roll
        assert_eq!(rng.consumed(), 1);
    }

    #[test]
    fn test_accuracy_above_100_never_misses() {
        let attacker = pikachu();
        let swift = Move::new("Swift", "Normal", MoveCategory::Special, 60, 101, 20);
        let mut rng = LiveRng::from_seed(42);

        for _ in 0..1000 {
            let mut defender = rattata();
            let outcome = resolve_move(&attacker, &mut defender, &swift, &mut rng);
            assert!(outcome.hit);
        }
    }

    #[test]
    fn test_never_miss_move_skips_the_accuracy_roll() {
        let attacker = pikachu();
        let mut defender = rattata();
        let swift = Move::new("Swift", "Normal", MoveCategory::Special, 60, 150, 20);
        let mut rng = TurnRng::new_for_test(vec![100]); // Only the variance roll

        let outcome = resolve_move(&attacker, &mut defender, &swift, &mut rng);
        assert!(outcome.hit);
        assert_eq!(rng.consumed(), 1);
    }

    #[rstest]
    #[case(70, true)]
    #[case(71, false)]
    fn test_accuracy_boundary(#[case] roll: u8, #[case] expect_hit: bool) {
        let attacker = pikachu();
        let mut defender = rattata();
        let slam = Move::new("Slam", "Normal", MoveCategory::Physical, 80, 70, 20);
        let mut rng = TurnRng::new_for_test(vec![roll, 100]);

        let outcome = resolve_move(&attacker, &mut defender, &slam, &mut rng);
        assert_eq!(outcome.hit, expect_hit);
    }

    #[test]
    fn test_miss_deals_no_damage() {
        let attacker = pikachu();
        let mut defender = rattata();
        let slam = Move::new("Slam", "Normal", MoveCategory::Physical, 80, 75, 20);
        let mut rng = TurnRng::new_for_test(vec![99]);

        let outcome = resolve_move(&attacker, &mut defender, &slam, &mut rng);

        assert_eq!(outcome, MoveOutcome::default());
        assert_eq!(defender.current_hp(), 120);
    }

    #[test]
    fn test_hitting_move_with_power_deals_at_least_one() {
        let weakling = PokemonInst::new("Magikarp", vec![], 1, BaseStats::new(10, 1, 1, 1));
        let wall = PokemonInst::new("Shuckle", vec![], 100, BaseStats::new(100, 10, 255, 5));
        let tackle = Move::new("Tackle", "Normal", MoveCategory::Physical, 1, 100, 35);

        let mut rng = LiveRng::from_seed(3);
        for _ in 0..200 {
            let mut target = wall.clone();
            let outcome = resolve_move(&weakling, &mut target, &tackle, &mut rng);
            if outcome.hit {
                assert!(outcome.damage >= 1);
                assert_eq!(target.current_hp(), 100 - outcome.damage);
            }
        }
    }

    #[test]
    fn test_lethal_hit_clamps_hp_to_zero_and_reports_faint() {
        let attacker = pikachu();
        let mut defender = rattata();
        defender.set_hp(10);
        let mut rng = TurnRng::new_for_test(vec![1, 100]);

        let outcome = resolve_move(&attacker, &mut defender, &thunder_shock(), &mut rng);

        assert!(outcome.hit);
        assert_eq!(outcome.damage, 29);
        assert!(outcome.defender_fainted);
        assert_eq!(defender.current_hp(), 0);
        assert!(defender.is_fainted());
    }
}

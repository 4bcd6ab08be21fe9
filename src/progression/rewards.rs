use crate::pokemon::PokemonInst;

const DEFEAT_XP_NUMERATOR: i32 = 50;
const DEFEAT_XP_DENOMINATOR: i32 = 7;

/// Experience awarded for defeating `defeated`: `50 * level / 7`, rounded down.
pub fn defeat_xp(defeated: &PokemonInst) -> i32 {
    DEFEAT_XP_NUMERATOR * i32::from(defeated.level) / DEFEAT_XP_DENOMINATOR
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use schema::BaseStats;

    #[rstest]
    #[case(1, 7)]
    #[case(7, 50)]
    #[case(48, 342)]
    #[case(100, 714)]
    fn test_defeat_xp_scales_with_level(#[case] level: u8, #[case] expected: i32) {
        let defeated = PokemonInst::new("Meowth", vec![], level, BaseStats::new(10, 10, 10, 10));
        assert_eq!(defeat_xp(&defeated), expected);
    }
}

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of every random outcome the battle engine consumes.
///
/// All randomness is funneled through `next_outcome`, a uniform roll in `1..=100`.
/// The provided methods derive coin flips, ranged picks and damage variance from
/// that single roll so that a scripted source can force any result.
pub trait BattleRng {
    /// Next uniform outcome in `1..=100`. `reason` names the consumer, for debugging.
    fn next_outcome(&mut self, reason: &str) -> u8;

    /// 50/50 flip. True for rolls of 50 or below.
    fn coin_flip(&mut self, reason: &str) -> bool {
        self.next_outcome(reason) <= 50
    }

    /// Uniform pick in `low..=high`.
    fn pick_in_range(&mut self, low: u16, high: u16, reason: &str) -> u16 {
        let (low, high) = if low <= high { (low, high) } else { (high, low) };
        let span = high - low + 1;
        low + (u16::from(self.next_outcome(reason).clamp(1, 100)) - 1) % span
    }

    /// Damage variance in `0.85..=1.00`, in steps of 0.01. A roll of 100 yields exactly 1.0.
    fn damage_variance(&mut self) -> f64 {
        let roll = u32::from(self.next_outcome("Damage Variance").clamp(1, 100));
        let percent = 85 + (roll - 1) * 15 / 99;
        f64::from(percent) / 100.0
    }
}

/// Scripted outcomes, consumed in order.
#[derive(Debug, Clone)]
pub struct TurnRng {
    outcomes: Vec<u8>,
    index: usize,
}

impl TurnRng {
    pub fn new_for_test(outcomes: Vec<u8>) -> Self {
        Self { outcomes, index: 0 }
    }

    /// How many scripted outcomes have been consumed so far.
    pub fn consumed(&self) -> usize {
        self.index
    }
}

impl BattleRng for TurnRng {
    fn next_outcome(&mut self, reason: &str) -> u8 {
        if self.index >= self.outcomes.len() {
            // Add the reason to the panic message for better debugging!
            panic!(
                "TurnRng exhausted! Tried to get a value for: '{}'. Need more random values.",
                reason
            );
        }
        let outcome = self.outcomes[self.index];
        tracing::trace!(outcome, reason, "rng outcome consumed");
        self.index += 1;
        outcome
    }
}

/// Live randomness backed by `rand`.
#[derive(Debug, Clone)]
pub struct LiveRng {
    rng: StdRng,
}

impl LiveRng {
    pub fn new_random() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible sequence for a given seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for LiveRng {
    fn default() -> Self {
        Self::new_random()
    }
}

impl BattleRng for LiveRng {
    fn next_outcome(&mut self, reason: &str) -> u8 {
        let outcome = self.rng.random_range(1..=100);
        tracing::trace!(outcome, reason, "rng outcome drawn");
        outcome
    }
}

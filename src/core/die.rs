//! The die seam.
//!
//! `MatchState` never touches its RNG for rolling directly; it asks a
//! `Die`. Production matches use `RandomDie`; tests substitute
//! `ScriptedDie` to force exact roll sequences.

use std::collections::VecDeque;

use super::rng::EngineRng;

/// A uniform 1-6 value source.
pub trait Die: Send {
    /// Produce the next roll, in `1..=6`.
    fn roll(&mut self) -> u8;
}

/// Fair die over the engine RNG.
#[derive(Clone, Debug)]
pub struct RandomDie {
    rng: EngineRng,
}

impl RandomDie {
    /// Create a die with its own seeded stream.
    #[must_use]
    pub fn new(rng: EngineRng) -> Self {
        Self { rng }
    }

    /// Convenience constructor from a raw seed.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self::new(EngineRng::new(seed))
    }
}

impl Die for RandomDie {
    fn roll(&mut self) -> u8 {
        self.rng.roll_d6()
    }
}

/// Die that replays a fixed sequence of values.
///
/// Panics when the sequence runs out or contains a value outside
/// `1..=6`. Intended for tests and replayable demos.
#[derive(Clone, Debug)]
pub struct ScriptedDie {
    values: VecDeque<u8>,
}

impl ScriptedDie {
    /// Create a die replaying `values` in order.
    #[must_use]
    pub fn new(values: impl IntoIterator<Item = u8>) -> Self {
        let values: VecDeque<u8> = values.into_iter().collect();
        assert!(
            values.iter().all(|v| (1..=6).contains(v)),
            "Scripted die values must be in 1..=6"
        );
        Self { values }
    }

    /// Number of rolls remaining in the script.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl Die for ScriptedDie {
    fn roll(&mut self) -> u8 {
        self.values
            .pop_front()
            .expect("Scripted die ran out of values")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_die_range() {
        let mut die = RandomDie::from_seed(42);
        for _ in 0..1000 {
            assert!((1..=6).contains(&die.roll()));
        }
    }

    #[test]
    fn test_random_die_deterministic_per_seed() {
        let mut a = RandomDie::from_seed(7);
        let mut b = RandomDie::from_seed(7);
        for _ in 0..50 {
            assert_eq!(a.roll(), b.roll());
        }
    }

    #[test]
    fn test_scripted_die_replays_in_order() {
        let mut die = ScriptedDie::new([6, 2, 1]);
        assert_eq!(die.remaining(), 3);
        assert_eq!(die.roll(), 6);
        assert_eq!(die.roll(), 2);
        assert_eq!(die.roll(), 1);
        assert_eq!(die.remaining(), 0);
    }

    #[test]
    #[should_panic(expected = "ran out of values")]
    fn test_scripted_die_exhaustion_panics() {
        let mut die = ScriptedDie::new([3]);
        die.roll();
        die.roll();
    }

    #[test]
    #[should_panic(expected = "must be in 1..=6")]
    fn test_scripted_die_rejects_bad_values() {
        let _ = ScriptedDie::new([0, 7]);
    }
}

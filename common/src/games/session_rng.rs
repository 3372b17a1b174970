use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform choices for everything random in a game: seed placement,
/// starting side and the random bot.
pub trait RandomSource {
    /// Index in `0..options`. `options` is never zero.
    fn choose(&mut self, options: usize) -> usize;
}

pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SessionRng {
    fn choose(&mut self, options: usize) -> usize {
        self.rng.random_range(0..options)
    }
}

/// Replays a fixed list of choices, then keeps answering 0.
#[cfg(test)]
pub struct ScriptedRandom {
    choices: std::collections::VecDeque<usize>,
}

#[cfg(test)]
impl ScriptedRandom {
    pub fn new(choices: Vec<usize>) -> Self {
        Self {
            choices: choices.into(),
        }
    }
}

#[cfg(test)]
impl RandomSource for ScriptedRandom {
    fn choose(&mut self, options: usize) -> usize {
        let choice = self.choices.pop_front().unwrap_or(0);
        assert!(choice < options, "scripted choice {} out of 0..{}", choice, options);
        choice
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_gives_same_choices() {
        let mut first = SessionRng::new(42);
        let mut second = SessionRng::new(42);

        let a: Vec<usize> = (0..20).map(|_| first.choose(9)).collect();
        let b: Vec<usize> = (0..20).map(|_| second.choose(9)).collect();

        assert_eq!(a, b);
        assert_eq!(first.seed(), 42);
    }

    #[test]
    fn test_choices_stay_in_range() {
        let mut rng = SessionRng::from_random();
        for options in 1..10 {
            for _ in 0..50 {
                assert!(rng.choose(options) < options);
            }
        }
    }

    #[test]
    fn test_scripted_random_replays_then_defaults() {
        let mut rng = ScriptedRandom::new(vec![1, 2]);
        assert_eq!(rng.choose(2), 1);
        assert_eq!(rng.choose(3), 2);
        assert_eq!(rng.choose(3), 0);
    }
}

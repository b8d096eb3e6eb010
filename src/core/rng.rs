//! Randomness helpers.
//!
//! Every randomized decision in the engine draws uniform rolls in `[0, 1)`
//! from a caller-supplied generator. Indices are derived as
//! `floor(roll * len)` so that a scripted sequence of rolls replays a run
//! exactly.

use rand::{Error, Rng, RngCore};

/// Draw one uniform roll in `[0, 1)`.
pub fn roll(rng: &mut impl Rng) -> f64 {
    rng.gen::<f64>()
}

/// Pick an index in `0..len` from a single roll.
///
/// `len` must be non-zero; callers check for empty pools first.
pub fn roll_index(rng: &mut impl Rng, len: usize) -> usize {
    let idx = (roll(rng) * len as f64) as usize;
    idx.min(len.saturating_sub(1))
}

/// Largest f64 strictly below 1.0 that survives the 53-bit conversion.
const MAX_ROLL: f64 = 1.0 - 1.0 / (1u64 << 53) as f64;

/// A generator that replays a fixed list of rolls, cycling when exhausted.
///
/// Each `next_u64` encodes one roll so that `rng.gen::<f64>()` returns it
/// unchanged (up to 53 bits of precision).
#[derive(Debug, Clone)]
pub struct ScriptedRng {
    rolls: Vec<f64>,
    cursor: usize,
}

impl ScriptedRng {
    pub fn new(rolls: impl Into<Vec<f64>>) -> Self {
        Self {
            rolls: rolls.into(),
            cursor: 0,
        }
    }

    /// Always returns the same roll.
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }

    /// Number of rolls drawn so far.
    pub fn consumed(&self) -> usize {
        self.cursor
    }

    fn next_roll(&mut self) -> f64 {
        let value = if self.rolls.is_empty() {
            0.0
        } else {
            self.rolls[self.cursor % self.rolls.len()]
        };
        self.cursor += 1;
        value.clamp(0.0, MAX_ROLL)
    }
}

impl RngCore for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        let roll = self.next_roll();
        ((roll * (1u64 << 53) as f64) as u64) << 11
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_rng_replays_rolls() {
        let mut rng = ScriptedRng::new(vec![0.0, 0.25, 0.5, 0.75]);
        assert_eq!(roll(&mut rng), 0.0);
        assert_eq!(roll(&mut rng), 0.25);
        assert_eq!(roll(&mut rng), 0.5);
        assert_eq!(roll(&mut rng), 0.75);
        assert_eq!(rng.consumed(), 4);
    }

    #[test]
    fn test_scripted_rng_cycles() {
        let mut rng = ScriptedRng::new(vec![0.1, 0.9]);
        let rolls: Vec<f64> = (0..4).map(|_| roll(&mut rng)).collect();
        assert!((rolls[0] - 0.1).abs() < 1e-12);
        assert!((rolls[2] - 0.1).abs() < 1e-12);
        assert!((rolls[3] - 0.9).abs() < 1e-12);
    }

    #[test]
    fn test_scripted_rng_never_reaches_one() {
        let mut rng = ScriptedRng::constant(1.0);
        let r = roll(&mut rng);
        assert!(r < 1.0);
        assert_eq!(roll_index(&mut rng, 4), 3);
    }

    #[test]
    fn test_roll_index_floor() {
        let mut rng = ScriptedRng::new(vec![0.0, 0.49, 0.5, 0.99]);
        assert_eq!(roll_index(&mut rng, 2), 0);
        assert_eq!(roll_index(&mut rng, 2), 0);
        assert_eq!(roll_index(&mut rng, 2), 1);
        assert_eq!(roll_index(&mut rng, 2), 1);
    }

    #[test]
    fn test_roll_in_unit_interval_with_real_rng() {
        use rand::SeedableRng;
        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(12345);
        for _ in 0..1000 {
            let r = roll(&mut rng);
            assert!((0.0..1.0).contains(&r));
        }
    }
}

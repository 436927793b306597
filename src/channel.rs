//! Binary symmetric channel simulation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Error probability applied when none is set explicitly.
const DEFAULT_ERROR_CHANCE: f64 = 0.1;

/// A binary symmetric channel: every bit passed through it is flipped
/// independently with probability `error_chance`.
///
/// The random state lives in the instance, so a `Channel` is not safe to
/// share across concurrent encode/decode pipelines without external
/// synchronization. The channel knows nothing about the code; it distorts
/// arbitrary bit sequences.
#[derive(Debug, Clone)]
pub struct Channel {
    /// Per-bit flip probability
    error_chance: f64,
    rng: StdRng,
}

impl Channel {
    /// Creates a channel with the default error chance, seeded from OS
    /// entropy.
    pub fn new() -> Self {
        Channel {
            error_chance: DEFAULT_ERROR_CHANCE,
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a channel with a fixed RNG seed for reproducible noise.
    pub fn with_seed(seed: u64) -> Self {
        Channel {
            error_chance: DEFAULT_ERROR_CHANCE,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Current per-bit flip probability.
    pub fn error_chance(&self) -> f64 {
        self.error_chance
    }

    /// Sets the per-bit flip probability.
    ///
    /// Values outside [0, 1] are accepted deliberately and degrade
    /// predictably: anything at or below 0 never flips, anything at or above
    /// 1 always flips.
    pub fn set_error_chance(&mut self, error_chance: f64) {
        self.error_chance = error_chance;
    }

    /// Passes a message through the channel, returning a new bit sequence.
    ///
    /// For each bit a uniform value in [0, 1) is drawn; the bit is flipped
    /// when the draw does not exceed `error_chance`.
    ///
    /// # Arguments
    ///
    /// * `message` - Bits to transmit
    ///
    /// # Returns
    ///
    /// The possibly distorted bits; the input is left untouched
    pub fn pass_message(&mut self, message: &[bool]) -> Vec<bool> {
        message
            .iter()
            .map(|&bit| {
                if self.rng.gen::<f64>() <= self.error_chance {
                    !bit
                } else {
                    bit
                }
            })
            .collect()
    }
}

impl Default for Channel {
    fn default() -> Self {
        Channel::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_error_chance_is_identity() {
        let mut channel = Channel::with_seed(42);
        channel.set_error_chance(0.0);

        let message = vec![true, false, true, true, false, false, true, false];
        assert_eq!(channel.pass_message(&message), message);
    }

    #[test]
    fn test_full_error_chance_complements() {
        let mut channel = Channel::with_seed(42);
        channel.set_error_chance(1.0);

        let message = vec![true, false, true, false];
        let expected: Vec<bool> = message.iter().map(|&bit| !bit).collect();
        assert_eq!(channel.pass_message(&message), expected);
    }

    #[test]
    fn test_out_of_range_chances_degrade_predictably() {
        let message = vec![true, false, true, false, true, false];

        let mut channel = Channel::with_seed(7);
        channel.set_error_chance(-0.5);
        assert_eq!(channel.pass_message(&message), message);

        channel.set_error_chance(2.0);
        let expected: Vec<bool> = message.iter().map(|&bit| !bit).collect();
        assert_eq!(channel.pass_message(&message), expected);
    }

    #[test]
    fn test_seeded_channels_agree() {
        let message = vec![true; 64];

        let mut first = Channel::with_seed(123);
        let mut second = Channel::with_seed(123);
        assert_eq!(first.pass_message(&message), second.pass_message(&message));
    }

    #[test]
    fn test_moderate_chance_flips_some_bits() {
        let mut channel = Channel::with_seed(99);
        channel.set_error_chance(0.5);

        let message = vec![false; 256];
        let received = channel.pass_message(&message);
        let flipped = received.iter().filter(|&&bit| bit).count();

        // With p = 0.5 over 256 bits, all-or-nothing outcomes would mean a
        // broken RNG path
        assert!(flipped > 0 && flipped < 256);
    }

    #[test]
    fn test_default_error_chance() {
        assert_eq!(Channel::with_seed(1).error_chance(), DEFAULT_ERROR_CHANCE);
    }
}

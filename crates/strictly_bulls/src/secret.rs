//! Secret generation behind an injectable random source.

use super::types::{CODE_LEN, Secret};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

/// Draws a fresh secret.
///
/// The first digit comes uniformly from 1-9. The remaining three are drawn
/// uniformly without replacement from the digits not yet used, zero
/// included.
#[instrument(skip(rng))]
pub fn generate_secret<R: Rng + ?Sized>(rng: &mut R) -> Secret {
    let mut pool: Vec<u8> = (0..10).collect();

    // pool[0] is zero, so starting at index 1 keeps it out of the lead.
    let lead = pool.remove(rng.random_range(1..pool.len()));
    let mut digits = [lead; CODE_LEN];
    for slot in digits.iter_mut().skip(1) {
        let index = rng.random_range(0..pool.len());
        *slot = pool.remove(index);
    }

    Secret::from_digits_unchecked(digits)
}

/// Source of secrets for new rounds.
pub trait SecretGenerator {
    /// Produces the secret for the next round.
    fn next_secret(&mut self) -> Secret;
}

impl<G: SecretGenerator + ?Sized> SecretGenerator for Box<G> {
    fn next_secret(&mut self) -> Secret {
        (**self).next_secret()
    }
}

impl<G: SecretGenerator + ?Sized> SecretGenerator for &mut G {
    fn next_secret(&mut self) -> Secret {
        (**self).next_secret()
    }
}

/// Secrets drawn from a random number generator.
#[derive(Debug, Clone)]
pub struct RandomSecrets<R = StdRng> {
    rng: R,
}

impl<R: Rng> RandomSecrets<R> {
    /// Wraps an existing generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomSecrets<StdRng> {
    /// Deterministic secrets for a given seed.
    #[instrument]
    pub fn from_seed(seed: u64) -> Self {
        debug!(seed, "Seeding secret generator");
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Secrets seeded from the operating system.
    #[instrument]
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> SecretGenerator for RandomSecrets<R> {
    fn next_secret(&mut self) -> Secret {
        generate_secret(&mut self.rng)
    }
}

/// A fixed, cycling sequence of secrets.
///
/// Useful when a round has to be reproduced exactly.
#[derive(Debug, Clone)]
pub struct FixedSecrets {
    secrets: Vec<Secret>,
    next: usize,
}

impl FixedSecrets {
    /// Starts the sequence with one secret.
    pub fn new(first: Secret) -> Self {
        Self {
            secrets: vec![first],
            next: 0,
        }
    }

    /// Appends another secret to the sequence.
    pub fn then(mut self, secret: Secret) -> Self {
        self.secrets.push(secret);
        self
    }
}

impl SecretGenerator for FixedSecrets {
    fn next_secret(&mut self) -> Secret {
        let secret = self.secrets[self.next];
        self.next = (self.next + 1) % self.secrets.len();
        secret
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn assert_valid(secret: &Secret) {
        let digits = secret.digits();
        assert_eq!(secret.to_string().len(), CODE_LEN);
        assert_ne!(digits[0], 0, "leading zero in {secret}");
        let unique: HashSet<_> = digits.iter().collect();
        assert_eq!(unique.len(), CODE_LEN, "repeated digit in {secret}");
        assert!(digits.iter().all(|d| *d < 10));
    }

    #[test]
    fn test_generated_secrets_are_valid() {
        let mut secrets = RandomSecrets::from_seed(7);
        for _ in 0..2000 {
            assert_valid(&secrets.next_secret());
        }
    }

    #[test]
    fn test_seeded_generators_agree() {
        let mut a = RandomSecrets::from_seed(42);
        let mut b = RandomSecrets::from_seed(42);
        for _ in 0..20 {
            assert_eq!(a.next_secret(), b.next_secret());
        }
    }

    #[test]
    fn test_every_digit_eventually_leads_and_zero_never_does() {
        let mut secrets = RandomSecrets::from_seed(1);
        let leads: HashSet<u8> = (0..2000).map(|_| secrets.next_secret().digits()[0]).collect();
        assert_eq!(leads, (1..10).collect());
    }

    #[test]
    fn test_zero_appears_in_later_positions() {
        let mut secrets = RandomSecrets::from_seed(3);
        assert!((0..500).any(|_| secrets.next_secret().contains(0)));
    }

    #[test]
    fn test_fixed_secrets_cycle() {
        let first = Secret::parse("1234").unwrap();
        let second = Secret::parse("5678").unwrap();
        let mut secrets = FixedSecrets::new(first).then(second);
        assert_eq!(secrets.next_secret(), first);
        assert_eq!(secrets.next_secret(), second);
        assert_eq!(secrets.next_secret(), first);
    }

    #[test]
    fn test_boxed_generator() {
        let mut boxed: Box<dyn SecretGenerator> =
            Box::new(FixedSecrets::new(Secret::parse("9021").unwrap()));
        assert_eq!(boxed.next_secret().to_string(), "9021");
    }
}

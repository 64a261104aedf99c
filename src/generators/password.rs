use rand::distributions::{Distribution, Uniform};
use rand::rngs::OsRng;
use rand::{Rng, RngCore};

use crate::models::{CharacterClassSelection, GenerationOutcome, PasswordLength};
use crate::strength;

pub const UPPERCASE_CHARS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const NUMBER_CHARS: &[u8] = b"0123456789";
pub const SYMBOL_CHARS: &[u8] = b"!@#$%^&*()_+~`|}{[]\\:;?><,./-=";

/// Concatenation of the literal sets of every enabled class.
///
/// Order is fixed: uppercase, lowercase, numbers, symbols.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterPool(Vec<u8>);

impl CharacterPool {
    pub fn from_selection(selection: &CharacterClassSelection) -> Self {
        let mut chars = Vec::new();

        if selection.uppercase {
            chars.extend_from_slice(UPPERCASE_CHARS);
        }
        if selection.lowercase {
            chars.extend_from_slice(LOWERCASE_CHARS);
        }
        if selection.numbers {
            chars.extend_from_slice(NUMBER_CHARS);
        }
        if selection.symbols {
            chars.extend_from_slice(SYMBOL_CHARS);
        }

        Self(chars)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, c: char) -> bool {
        c.is_ascii() && self.0.contains(&(c as u8))
    }

    /// Draws `length` characters uniformly, with replacement.
    ///
    /// Returns an empty string for an empty pool.
    pub fn sample<R: Rng + ?Sized>(&self, length: usize, rng: &mut R) -> String {
        if self.0.is_empty() {
            return String::new();
        }

        let dist = Uniform::from(0..self.0.len());
        (0..length)
            .map(|_| self.0[dist.sample(rng)] as char)
            .collect()
    }
}

/// Source of randomness for generation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RandomSource {
    /// Thread-local PRNG; fast, not meant for secrets.
    #[default]
    Thread,
    /// Operating system CSPRNG.
    Os,
}

pub struct PasswordGenerator {
    source: RandomSource,
}

impl PasswordGenerator {
    pub fn new() -> Self {
        PasswordGenerator {
            source: RandomSource::default(),
        }
    }

    pub fn with_source(source: RandomSource) -> Self {
        PasswordGenerator { source }
    }

    /// Runs `f` with the RNG this generator is configured for.
    pub fn with_rng<T>(&self, f: impl FnOnce(&mut dyn RngCore) -> T) -> T {
        match self.source {
            RandomSource::Thread => f(&mut rand::thread_rng()),
            RandomSource::Os => f(&mut OsRng),
        }
    }

    pub fn generate_password(
        &self,
        length: PasswordLength,
        selection: &CharacterClassSelection,
    ) -> GenerationOutcome {
        self.with_rng(|rng| generate_with(length, selection, rng))
    }
}

impl Default for PasswordGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Generates a password from `selection` using the given RNG and scores it
/// with the selection-based evaluator.
pub fn generate_with<R: Rng + ?Sized>(
    length: PasswordLength,
    selection: &CharacterClassSelection,
    rng: &mut R,
) -> GenerationOutcome {
    let pool = CharacterPool::from_selection(selection);
    if pool.is_empty() {
        log::debug!("Generation requested with no character class selected");
        return GenerationOutcome::no_criteria();
    }

    let password = pool.sample(length.get(), rng);
    let strength = strength::evaluate_selection(&password, selection);

    log::debug!(
        "Generated password of length {} from a pool of {} characters ({})",
        length,
        pool.len(),
        strength
    );

    GenerationOutcome { password, strength }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StrengthLevel;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn selections() -> Vec<CharacterClassSelection> {
        (1u8..16)
            .map(|bits| CharacterClassSelection {
                uppercase: bits & 1 != 0,
                lowercase: bits & 2 != 0,
                numbers: bits & 4 != 0,
                symbols: bits & 8 != 0,
            })
            .collect()
    }

    #[test]
    fn pool_order_and_size() {
        let pool = CharacterPool::from_selection(&CharacterClassSelection::all());
        assert_eq!(pool.len(), 26 + 26 + 10 + SYMBOL_CHARS.len());
        assert_eq!(pool.0[0], b'A');
        assert_eq!(pool.0[26], b'a');
        assert_eq!(pool.0[52], b'0');
        assert_eq!(pool.0[62], b'!');
    }

    #[test]
    fn generated_length_and_characters_follow_selection() {
        let mut rng = StdRng::seed_from_u64(7);

        for selection in selections() {
            let pool = CharacterPool::from_selection(&selection);
            for length in 6..=20 {
                let outcome = generate_with(PasswordLength::new(length), &selection, &mut rng);
                assert_eq!(outcome.password.chars().count(), length);
                assert!(outcome.password.chars().all(|c| pool.contains(c)));
                assert_ne!(outcome.strength, StrengthLevel::NoCriteriaSelected);
            }
        }
    }

    #[test]
    fn empty_selection_yields_sentinel() {
        let mut rng = StdRng::seed_from_u64(1);
        let outcome = generate_with(
            PasswordLength::new(12),
            &CharacterClassSelection::default(),
            &mut rng,
        );
        assert_eq!(outcome.password, "");
        assert_eq!(outcome.strength, StrengthLevel::NoCriteriaSelected);
        assert_eq!(outcome.strength.to_string(), "No criteria selected");
    }

    #[test]
    fn out_of_range_length_is_clamped() {
        let mut rng = StdRng::seed_from_u64(3);
        let selection = CharacterClassSelection::all();
        let short = generate_with(PasswordLength::new(1), &selection, &mut rng);
        let long = generate_with(PasswordLength::new(64), &selection, &mut rng);
        assert_eq!(short.password.len(), 6);
        assert_eq!(long.password.len(), 20);
    }

    #[test]
    fn same_seed_same_password() {
        let selection = CharacterClassSelection::all();
        let a = generate_with(PasswordLength::new(16), &selection, &mut StdRng::seed_from_u64(42));
        let b = generate_with(PasswordLength::new(16), &selection, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn full_selection_at_ten_is_high() {
        let mut rng = StdRng::seed_from_u64(9);
        let selection = CharacterClassSelection::all();
        let outcome = generate_with(PasswordLength::new(10), &selection, &mut rng);
        assert_eq!(outcome.strength, StrengthLevel::High);
    }

    #[test]
    fn os_source_generates() {
        let generator = PasswordGenerator::with_source(RandomSource::Os);
        let outcome =
            generator.generate_password(PasswordLength::new(14), &CharacterClassSelection::all());
        assert_eq!(outcome.password.len(), 14);
    }
}

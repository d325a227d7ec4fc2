//! Opaque game identifiers.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Opaque identifier for one game.
///
/// Uniqueness is not enforced; callers that need it pick their own ids.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
pub struct GameId(String);

impl GameId {
    /// Length of ids from [`GameId::random`].
    pub const DEFAULT_LENGTH: usize = 10;

    /// Wraps an existing identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Draws `len` lowercase ASCII letters from `rng`.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Self {
        let id: String = (0..len).map(|_| rng.gen_range('a'..='z')).collect();
        Self(id)
    }

    /// Fresh random id of [`GameId::DEFAULT_LENGTH`] letters.
    ///
    /// Each call draws a new id; nothing is cached between calls.
    #[instrument]
    pub fn random() -> Self {
        Self::random_with_len(Self::DEFAULT_LENGTH)
    }

    /// Fresh random id of `len` letters.
    #[instrument]
    pub fn random_with_len(len: usize) -> Self {
        let id = Self::generate(&mut rand::thread_rng(), len);
        debug!(game_id = %id, "Generated game id");
        id
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for GameId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_generate_lowercase_letters() {
        let mut rng = StdRng::seed_from_u64(7);
        let id = GameId::generate(&mut rng, 10);
        assert_eq!(id.as_str().len(), 10);
        assert!(id.as_str().chars().all(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn test_generate_is_deterministic_per_seed() {
        let a = GameId::generate(&mut StdRng::seed_from_u64(42), 12);
        let b = GameId::generate(&mut StdRng::seed_from_u64(42), 12);
        assert_eq!(a, b);
    }

    #[test]
    fn test_random_draws_fresh_ids() {
        let ids: std::collections::HashSet<_> = (0..20).map(|_| GameId::random()).collect();
        assert!(ids.len() > 1);
        assert!(ids.iter().all(|id| id.as_str().len() == GameId::DEFAULT_LENGTH));
    }

    #[test]
    fn test_wraps_caller_id() {
        let id = GameId::from("match-1");
        assert_eq!(id.to_string(), "match-1");
        assert_eq!(id, GameId::from(String::from("match-1")));
    }
}

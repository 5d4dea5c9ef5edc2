//! Opaque game session identifiers.

use rand::Rng;
use serde::{Deserialize, Serialize};

const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const SUFFIX_LEN: usize = 8;

/// Identifier correlating snapshots with a game session.
///
/// Formatted as `game-` followed by eight lowercase base-36 characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(transparent)]
pub struct GameId(String);

impl GameId {
    /// Generates a fresh identifier from the thread-local RNG.
    pub fn generate() -> Self {
        Self::generate_with(&mut rand::thread_rng())
    }

    /// Generates an identifier from the given RNG.
    pub fn generate_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let suffix: String = (0..SUFFIX_LEN)
            .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
            .collect();
        Self(format!("game-{suffix}"))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for GameId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_format() {
        let id = GameId::generate();
        let suffix = id.as_str().strip_prefix("game-").unwrap();
        assert_eq!(suffix.len(), SUFFIX_LEN);
        assert!(suffix.bytes().all(|b| ALPHABET.contains(&b)));
    }

    #[test]
    fn test_seeded_generation_is_deterministic() {
        let a = GameId::generate_with(&mut StdRng::seed_from_u64(7));
        let b = GameId::generate_with(&mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let id = GameId::from("game-abc12345".to_string());
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"game-abc12345\"");
    }
}

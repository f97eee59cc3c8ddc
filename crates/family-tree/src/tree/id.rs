//! Person identifiers and the generators that mint them

use derive_more::{Display, From};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Unique identifier for a person in the tree
///
/// Ids are assigned once, when a person is first normalized or created by an
/// edit, and are never rewritten afterwards.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Display, From, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct PersonId(String);

impl PersonId {
    /// Create an id from any string-like value
    pub fn new(id: impl Into<String>) -> Self {
        PersonId(id.into())
    }

    /// Borrow the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the id and return the inner string
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<&str> for PersonId {
    fn from(id: &str) -> Self {
        PersonId(id.to_string())
    }
}

impl AsRef<str> for PersonId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Source of fresh person ids
pub trait IdGenerator {
    /// Produce an id that has not been handed out before
    fn next_id(&mut self) -> PersonId;
}

impl<G: IdGenerator + ?Sized> IdGenerator for &mut G {
    fn next_id(&mut self) -> PersonId {
        (**self).next_id()
    }
}

const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const ID_SUFFIX_LEN: usize = 5;

/// Generates ids of the form `n-<unix millis>-<5 random base36 chars>`
#[derive(Debug)]
pub struct RandomIdGenerator {
    rng: StdRng,
}

impl RandomIdGenerator {
    /// Create a generator seeded from the operating system
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a generator with a fixed seed (the timestamp part still varies)
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for RandomIdGenerator {
    fn next_id(&mut self) -> PersonId {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis())
            .unwrap_or_default();
        let suffix: String = (0..ID_SUFFIX_LEN)
            .map(|_| ID_ALPHABET[self.rng.gen_range(0..ID_ALPHABET.len())] as char)
            .collect();

        PersonId(format!("n-{millis}-{suffix}"))
    }
}

/// Deterministic generator producing `<prefix>-1`, `<prefix>-2`, ...
#[derive(Debug, Clone)]
pub struct SequentialIdGenerator {
    prefix: String,
    next: u64,
}

impl SequentialIdGenerator {
    /// Create a generator with the given prefix, starting at 1
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }

    /// Number of ids handed out so far
    pub fn issued(&self) -> u64 {
        self.next - 1
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new("n")
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> PersonId {
        let id = PersonId(format!("{}-{}", self.prefix, self.next));
        self.next += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_person_id() {
        let id = PersonId::new("n-1");
        assert_eq!(id.as_str(), "n-1");
        assert_eq!(id.to_string(), "n-1");
        assert_eq!(PersonId::from("n-1"), id);
        assert_eq!(PersonId::from(String::from("n-1")), id);
        assert_eq!(id.into_inner(), "n-1");
    }

    #[test]
    fn test_sequential_ids() {
        let mut ids = SequentialIdGenerator::new("p");
        assert_eq!(ids.next_id(), PersonId::from("p-1"));
        assert_eq!(ids.next_id(), PersonId::from("p-2"));
        assert_eq!(ids.issued(), 2);
    }

    #[test]
    fn test_random_id_shape() {
        let mut ids = RandomIdGenerator::seeded(7);
        let id = ids.next_id();
        let parts: Vec<&str> = id.as_str().split('-').collect();

        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "n");
        assert!(parts[1].chars().all(|c| c.is_ascii_digit()));
        assert_eq!(parts[2].len(), ID_SUFFIX_LEN);
        assert!(parts[2]
            .bytes()
            .all(|b| b.is_ascii_digit() || b.is_ascii_lowercase()));
    }

    #[test]
    fn test_random_ids_do_not_repeat() {
        let mut ids = RandomIdGenerator::new();
        let issued: HashSet<PersonId> = (0..100).map(|_| ids.next_id()).collect();
        assert_eq!(issued.len(), 100);
    }
}

//! Cache key type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifies an entry held by a cache policy.
///
/// Entries are abstract: there is no payload, only the integer identity
/// plus whatever metadata the policy keeps alongside it.
///
/// # Example
/// ```
/// use cachesim::Key;
///
/// let key = Key::new(3);
/// assert_eq!(key.0, 3);
/// assert_eq!(Key::from(3), key);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Key(pub u64);

impl Key {
    /// Create a new Key.
    #[inline]
    pub const fn new(id: u64) -> Self {
        Key(id)
    }
}

impl From<u64> for Key {
    #[inline]
    fn from(id: u64) -> Self {
        Key(id)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Key({})", self.0)
    }
}

/// Build a key trace from raw integers.
///
/// Handy for replaying fixed traces: `keys(&[1, 2, 3, 1, 4])`.
pub fn keys(ids: &[u64]) -> Vec<Key> {
    ids.iter().copied().map(Key).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_new() {
        let key = Key::new(10);
        assert_eq!(key.0, 10);
    }

    #[test]
    fn test_key_ordering() {
        assert!(Key::new(1) < Key::new(2));
        assert_eq!(Key::new(5), Key::from(5));
    }

    #[test]
    fn test_key_display() {
        assert_eq!(format!("{}", Key::new(42)), "Key(42)");
    }

    #[test]
    fn test_keys_helper() {
        assert_eq!(keys(&[1, 2]), vec![Key(1), Key(2)]);
        assert!(keys(&[]).is_empty());
    }
}

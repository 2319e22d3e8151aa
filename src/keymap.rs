//! Single-key selectors for profiles.
//!
//! Keys are positional: the profile at index `i` of a listing gets the `i`-th
//! character of [`KEYS`]. Because a different listing may bind the same key to
//! a different profile, the listing is frozen into a [`Menu`] once and every
//! later lookup goes through that snapshot.

/// Ordered selector alphabet.
pub const KEYS: &str = r"123456789abcdefghijklmnopqrstuvwxyz!@#$%^&?*|_+<>.,\/-=;:";

/// Number of selectable entries.
pub fn capacity() -> usize {
    KEYS.chars().count()
}

/// Key bound to the profile at `index`, if any.
pub fn key_for(index: usize) -> Option<char> {
    KEYS.chars().nth(index)
}

/// Profile index bound to `key` among the first `count` bindings.
pub fn index_of(key: char, count: usize) -> Option<usize> {
    KEYS.chars().take(count).position(|c| c == key)
}

/// Immutable profile listing with its key bindings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu {
    profiles: Vec<String>,
}

impl Menu {
    pub fn new(profiles: Vec<String>) -> Self {
        Self { profiles }
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// More profiles than keys; the tail is unreachable.
    pub fn overflows(&self) -> bool {
        self.profiles.len() > capacity()
    }

    /// Every profile with its key, `None` for the unreachable tail.
    pub fn entries(&self) -> impl Iterator<Item = (Option<char>, &str)> + '_ {
        self.profiles.iter().enumerate().map(|(i, p)| (key_for(i), p.as_str()))
    }

    pub fn resolve(&self, key: char) -> Option<&str> {
        index_of(key, self.profiles.len()).map(|i| self.profiles[i].as_str())
    }
}

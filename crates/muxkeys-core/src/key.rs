// Muxkeys Key Identifier
// Case-folded, human-readable key names ("alt+n", "up")

use std::borrow::Borrow;
use std::fmt;

/// A normalized key identifier.
///
/// Key events arrive as human-readable strings such as `"Alt+n"` or `"Up"`.
/// The identifier is lowercased on construction, so two strings that differ
/// only in letter case produce equal `KeyId`s. Nothing else about the format
/// is parsed or validated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct KeyId(String);

impl KeyId {
    /// Normalize a raw key string
    pub fn new(raw: &str) -> Self {
        KeyId(raw.to_lowercase())
    }

    /// Get the normalized form
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for KeyId {
    fn from(raw: &str) -> Self {
        KeyId::new(raw)
    }
}

impl From<String> for KeyId {
    fn from(raw: String) -> Self {
        KeyId::new(&raw)
    }
}

impl Borrow<str> for KeyId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for KeyId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for KeyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

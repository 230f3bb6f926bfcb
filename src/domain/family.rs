use serde::{Serialize, Serializer};
use std::fmt;

/// Identifies a wallet family in the registry.
///
/// Keys are normalized to uppercase on construction, so `"esewa"`, `"Esewa"`
/// and `"ESEWA"` all name the same family. Any string is a valid key, including
/// the empty string; such keys simply never match a registered family.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FamilyKey(String);

impl FamilyKey {
    pub fn new(name: &str) -> Self {
        Self(name.to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FamilyKey {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for FamilyKey {
    fn from(name: String) -> Self {
        Self(name.to_uppercase())
    }
}

impl fmt::Display for FamilyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for FamilyKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Password text that zeroes its memory on drop.
///
/// Form inputs and payloads carry passwords as `Secret` so that dropped
/// submissions do not leave plain text behind and so that `Debug` output
/// (including `tracing` fields) never shows the value. Serialization writes
/// the plain text: that is the one place the value must leave the process.
#[derive(Default, Zeroize, ZeroizeOnDrop)]
pub struct Secret {
    data: String,
}

impl Secret {
    /// Wrap an owned string.
    pub fn new(data: String) -> Self {
        Self { data }
    }

    /// Borrow the plain text.
    ///
    /// # Security Note
    /// The returned slice points into memory that is zeroed on drop; do not
    /// copy it into long-lived storage.
    pub fn expose(&self) -> &str {
        &self.data
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Number of Unicode scalar values, used for minimum-length rules.
    pub fn char_count(&self) -> usize {
        self.data.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl Clone for Secret {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
        }
    }
}

impl From<String> for Secret {
    fn from(data: String) -> Self {
        Self::new(data)
    }
}

impl From<&str> for Secret {
    fn from(data: &str) -> Self {
        Self::new(data.to_string())
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Secret")
            .field("len", &self.len())
            .field("data", &"[REDACTED]")
            .finish()
    }
}

impl PartialEq for Secret {
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }
        self.data.as_bytes() == other.data.as_bytes()
    }
}

impl Eq for Secret {}

impl Serialize for Secret {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.data)
    }
}

impl<'de> Deserialize<'de> for Secret {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::new)
    }
}

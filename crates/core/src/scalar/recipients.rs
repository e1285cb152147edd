//! Ordered list of phone numbers

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Scalar;
use crate::error::{BoundsError, DecodeError};
use crate::value::Value;

/// Phone numbers in call order
///
/// Stored and rendered comma-joined. Numbers containing a comma do not
/// survive a round trip.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Recipients(Vec<String>);

impl Recipients {
    /// An empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a number
    pub fn push(&mut self, number: impl Into<String>) {
        self.0.push(number.into());
    }

    /// Remove the number at `index`, returning it
    ///
    /// The list is unchanged when `index` is outside `[0, len)`.
    pub fn remove_at(&mut self, index: isize) -> Result<String, BoundsError> {
        let len = self.0.len();
        match usize::try_from(index) {
            Ok(i) if i < len => Ok(self.0.remove(i)),
            _ => Err(BoundsError { index, len }),
        }
    }

    /// Position of the first occurrence of `number`
    pub fn find(&self, number: &str) -> Option<usize> {
        self.0.iter().position(|n| n == number)
    }

    /// True when `number` is in the list
    pub fn contains(&self, number: &str) -> bool {
        self.find(number).is_some()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when there are no entries
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate in call order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Entries as a slice
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Split comma-joined text. Empty text yields one empty entry.
    fn split(text: &str) -> Self {
        Recipients(text.split(',').map(str::to_string).collect())
    }
}

impl<S: Into<String>> FromIterator<S> for Recipients {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Recipients(iter.into_iter().map(Into::into).collect())
    }
}

impl From<Vec<String>> for Recipients {
    fn from(numbers: Vec<String>) -> Self {
        Recipients(numbers)
    }
}

impl IntoIterator for Recipients {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for Recipients {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(","))
    }
}

impl Scalar for Recipients {
    const TYPE_NAME: &'static str = "Recipients";

    fn render_text(&self) -> String {
        self.0.join(",")
    }

    fn to_value(&self) -> Value {
        Value::String(self.render_text())
    }

    fn from_value(value: &Value) -> Result<Self, DecodeError> {
        match value {
            Value::String(s) => Ok(Self::split(s)),
            Value::Bytes(b) => std::str::from_utf8(b)
                .map(Self::split)
                .map_err(|e| DecodeError::malformed(Self::TYPE_NAME, String::from_utf8_lossy(b), e)),
            other => Err(DecodeError::unsupported(Self::TYPE_NAME, other)),
        }
    }

    fn is_default(&self) -> bool {
        self.0.is_empty()
    }
}

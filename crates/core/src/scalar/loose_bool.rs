//! Boolean that also understands numeric and textual sources

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Scalar;
use crate::error::DecodeError;
use crate::value::Value;

/// A boolean transmitted as `"1"` / `"0"`
///
/// Decodes from boolean literals, from any number (positive is true) and
/// from a native boolean.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LooseBool(bool);

impl LooseBool {
    /// Wrap a native boolean
    pub const fn new(value: bool) -> Self {
        LooseBool(value)
    }

    /// The native boolean
    pub const fn get(self) -> bool {
        self.0
    }

    /// 1 for true, 0 for false
    pub const fn as_int(self) -> i64 {
        if self.0 {
            1
        } else {
            0
        }
    }

    /// 1 for true, 0 for false
    pub const fn as_uint(self) -> u64 {
        if self.0 {
            1
        } else {
            0
        }
    }

    /// Parse a canonical boolean literal
    pub fn parse(text: &str) -> Result<Self, DecodeError> {
        match text {
            "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(LooseBool(true)),
            "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(LooseBool(false)),
            _ => Err(DecodeError::malformed(
                Self::TYPE_NAME,
                text,
                "not a boolean literal",
            )),
        }
    }
}

impl From<bool> for LooseBool {
    fn from(value: bool) -> Self {
        LooseBool(value)
    }
}

impl From<LooseBool> for bool {
    fn from(value: LooseBool) -> Self {
        value.0
    }
}

impl fmt::Display for LooseBool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_int())
    }
}

impl Scalar for LooseBool {
    const TYPE_NAME: &'static str = "LooseBool";

    fn render_text(&self) -> String {
        self.to_string()
    }

    fn to_value(&self) -> Value {
        Value::Bool(self.0)
    }

    fn from_value(value: &Value) -> Result<Self, DecodeError> {
        match value {
            Value::Bool(b) => Ok(LooseBool(*b)),
            Value::String(s) => Self::parse(s),
            Value::Int(i) => Ok(LooseBool(*i > 0)),
            Value::UInt(u) => Ok(LooseBool(*u > 0)),
            Value::Float(f) => Ok(LooseBool(*f > 0.0)),
            other => Err(DecodeError::unsupported(Self::TYPE_NAME, other)),
        }
    }

    fn is_default(&self) -> bool {
        !self.0
    }
}

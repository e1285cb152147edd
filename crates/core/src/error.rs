//! Error types for scalar decoding and recipient list access
//!
//! ## Error Kinds
//!
//! | Error | Raised when |
//! |-------|-------------|
//! | `DecodeError::UnsupportedShape` | the source `Value` has a shape the target cannot read |
//! | `DecodeError::MalformedText` | text fails the target's literal or layout |
//! | `DecodeError::NegativeValue` | a negative number targets a non-negative domain |
//! | `BoundsError` | a position is outside `[0, len)` |

use thiserror::Error;

/// Failure to decode a scalar from a storage [`Value`](crate::Value)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The source shape cannot be interpreted by the target type
    #[error("cannot decode {target} from {shape}")]
    UnsupportedShape {
        /// Scalar type being decoded
        target: &'static str,
        /// Shape name of the offending source value
        shape: &'static str,
    },

    /// Text did not parse under the target's expected literal or layout
    #[error("cannot decode {target} from text {input:?}: {reason}")]
    MalformedText {
        /// Scalar type being decoded
        target: &'static str,
        /// The offending input, verbatim
        input: String,
        /// Parser message
        reason: String,
    },

    /// A negative number where the target domain is non-negative
    #[error("cannot decode {target} from negative value {value}")]
    NegativeValue {
        /// Scalar type being decoded
        target: &'static str,
        /// The offending number, rendered
        value: String,
    },
}

impl DecodeError {
    /// Build an `UnsupportedShape` error for `target` from the source value
    pub fn unsupported(target: &'static str, source: &crate::Value) -> Self {
        DecodeError::UnsupportedShape {
            target,
            shape: source.type_name(),
        }
    }

    /// Build a `MalformedText` error
    pub fn malformed(
        target: &'static str,
        input: impl Into<String>,
        reason: impl ToString,
    ) -> Self {
        DecodeError::MalformedText {
            target,
            input: input.into(),
            reason: reason.to_string(),
        }
    }

    /// Build a `NegativeValue` error
    pub fn negative(target: &'static str, value: impl ToString) -> Self {
        DecodeError::NegativeValue {
            target,
            value: value.to_string(),
        }
    }

    /// Name of the scalar type that failed to decode
    pub fn target(&self) -> &'static str {
        match self {
            DecodeError::UnsupportedShape { target, .. }
            | DecodeError::MalformedText { target, .. }
            | DecodeError::NegativeValue { target, .. } => target,
        }
    }
}

/// A position-based operation received an index outside `[0, len)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{index} is out of bounds for {len} recipients")]
pub struct BoundsError {
    /// The requested position
    pub index: isize,
    /// Length of the list at the time of the call
    pub len: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Value;

    #[test]
    fn test_unsupported_names_shape() {
        let err = DecodeError::unsupported("LooseBool", &Value::Bytes(vec![1]));
        assert_eq!(
            err,
            DecodeError::UnsupportedShape {
                target: "LooseBool",
                shape: "Bytes"
            }
        );
        assert_eq!(err.to_string(), "cannot decode LooseBool from Bytes");
    }

    #[test]
    fn test_malformed_keeps_input_verbatim() {
        let err = DecodeError::malformed("MessageKind", "abc", "invalid digit");
        assert!(err.to_string().contains("\"abc\""));
        assert_eq!(err.target(), "MessageKind");
    }

    #[test]
    fn test_bounds_message() {
        let err = BoundsError { index: -1, len: 3 };
        assert_eq!(err.to_string(), "-1 is out of bounds for 3 recipients");
    }
}

//! Unified error types for MultiSend.
//!
//! This module provides one error type wrapping the failures of the
//! scalar adapters and the reply decoder.

use multisend_core::{BoundsError, DecodeError};
use multisend_wire::ResponseError;
use thiserror::Error;

/// All MultiSend errors.
///
/// Adapter errors are kept whole so callers can surface their kind and the
/// offending input verbatim.
#[derive(Debug, Error)]
pub enum Error {
    /// A scalar could not be decoded from its source value
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// A recipient position was out of range
    #[error(transparent)]
    Bounds(#[from] BoundsError),

    /// A gateway reply could not be decoded
    #[error(transparent)]
    Response(#[from] ResponseError),
}

/// Result type for MultiSend operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this is a scalar decode error.
    pub fn is_decode(&self) -> bool {
        matches!(self, Error::Decode(_))
    }

    /// Check if this is a recipient bounds error.
    pub fn is_bounds(&self) -> bool {
        matches!(self, Error::Bounds(_))
    }

    /// The decode error, if this is one.
    pub fn as_decode(&self) -> Option<&DecodeError> {
        match self {
            Error::Decode(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_error_kept_whole() {
        let err: Error = DecodeError::negative("MessageKind", -1).into();
        assert!(err.is_decode());
        assert!(!err.is_bounds());
        assert_eq!(err.to_string(), "cannot decode MessageKind from negative value -1");
        assert!(matches!(
            err.as_decode(),
            Some(DecodeError::NegativeValue { .. })
        ));
    }

    #[test]
    fn test_malformed_reply_is_a_response_error() {
        let err: Error = multisend_wire::decode_response("{").unwrap_err().into();
        assert!(matches!(err, Error::Response(ResponseError::Json(_))));
        assert!(!err.is_decode());
        assert!(!err.is_bounds());
    }

    #[test]
    fn test_bounds_error_conversion() {
        let err: Error = BoundsError { index: 4, len: 2 }.into();
        assert!(err.is_bounds());
        assert_eq!(err.as_decode(), None);
    }
}

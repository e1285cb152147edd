//! Custom scalar types
//!
//! Each scalar owns three conversions:
//!
//! | Scalar | Text | Storage `Value` |
//! |--------|------|-----------------|
//! | [`LooseBool`] | `"1"` / `"0"` | `Bool` |
//! | [`MessageKind`] | `"tts"`, `"sms"`, `"sms+tts"`, `"unknown"` | `UInt` ordinal |
//! | [`DeliveryStatus`] | raw 3-digit code | `String` code |
//! | [`ScheduledTime`] | `YYYY-DD-MM+hh:mm:ss` or `""` | `String` or `Null` |
//! | [`Recipients`] | comma-joined | `String` comma-joined |
//!
//! Decoding goes through [`Scalar::from_value`], which accepts any storage
//! shape the type understands and rejects the rest with a [`DecodeError`].

mod delivery_status;
mod loose_bool;
mod message_kind;
mod recipients;
mod scheduled_time;

pub use delivery_status::{DeliveryStatus, DESCRIPTIONS};
pub use loose_bool::LooseBool;
pub use message_kind::MessageKind;
pub use recipients::Recipients;
pub use scheduled_time::{ScheduledTime, SCHEDULE_FORMAT};

use crate::error::DecodeError;
use crate::value::Value;

/// Two-way conversion between a custom scalar and its text and storage forms
pub trait Scalar: Sized {
    /// Name used in decode errors
    const TYPE_NAME: &'static str;

    /// Render the wire text form. Total and deterministic.
    fn render_text(&self) -> String;

    /// Convert to the storage scalar
    fn to_value(&self) -> Value;

    /// Decode from a storage scalar
    fn from_value(value: &Value) -> Result<Self, DecodeError>;

    /// True when this is the type's zero value, used for omission
    fn is_default(&self) -> bool;

    /// Decode `value` into `self`.
    ///
    /// On error `self` keeps its previous value.
    fn scan(&mut self, value: &Value) -> Result<(), DecodeError> {
        match Self::from_value(value) {
            Ok(decoded) => {
                *self = decoded;
                Ok(())
            }
            Err(e) => {
                tracing::warn!(target: "multisend::scalar", error = %e, "scan rejected source value");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_keeps_previous_value_on_error() {
        let mut kind = MessageKind::Sms;
        let err = kind.scan(&Value::Int(-1)).unwrap_err();
        assert!(matches!(err, DecodeError::NegativeValue { .. }));
        assert_eq!(kind, MessageKind::Sms);

        let mut recipients: Recipients = ["a", "b"].into_iter().collect();
        assert!(recipients.scan(&Value::Bool(true)).is_err());
        assert_eq!(recipients.len(), 2);
    }

    #[test]
    fn test_scan_replaces_on_success() {
        let mut flag = LooseBool::new(false);
        flag.scan(&Value::from("true")).unwrap();
        assert!(flag.get());
    }
}

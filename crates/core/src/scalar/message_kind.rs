//! Message kind requested from the gateway

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Scalar;
use crate::error::DecodeError;
use crate::value::Value;

/// How the gateway should deliver a message
///
/// Stored as its unsigned ordinal. Ordinals outside `0..=3` are kept as
/// [`MessageKind::Other`] so they store back unchanged; they render as
/// `"unknown"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u64", into = "u64")]
pub enum MessageKind {
    /// No kind chosen (ordinal 0)
    #[default]
    Unknown,
    /// Text to speech (ordinal 1)
    Tts,
    /// Plain SMS (ordinal 2)
    Sms,
    /// SMS, falling back to text to speech (ordinal 3)
    SmsAndTts,
    /// An ordinal with no assigned kind
    Other(u64),
}

impl MessageKind {
    /// The assigned kinds in ordinal order
    pub const ALL: [MessageKind; 4] = [
        MessageKind::Unknown,
        MessageKind::Tts,
        MessageKind::Sms,
        MessageKind::SmsAndTts,
    ];

    /// Storage ordinal
    pub const fn ordinal(self) -> u64 {
        match self {
            MessageKind::Unknown => 0,
            MessageKind::Tts => 1,
            MessageKind::Sms => 2,
            MessageKind::SmsAndTts => 3,
            MessageKind::Other(n) => n,
        }
    }

    /// Kind for an ordinal. Total: unassigned ordinals become `Other`.
    pub const fn from_ordinal(ordinal: u64) -> Self {
        match ordinal {
            0 => MessageKind::Unknown,
            1 => MessageKind::Tts,
            2 => MessageKind::Sms,
            3 => MessageKind::SmsAndTts,
            n => MessageKind::Other(n),
        }
    }

    /// Wire label
    pub const fn label(self) -> &'static str {
        match self {
            MessageKind::Tts => "tts",
            MessageKind::Sms => "sms",
            MessageKind::SmsAndTts => "sms+tts",
            MessageKind::Unknown | MessageKind::Other(_) => "unknown",
        }
    }

    /// Parse a base-10 numeral. Signs and blanks are rejected.
    fn parse_numeral(text: &str) -> Result<Self, DecodeError> {
        if !text.bytes().next().is_some_and(|b| b.is_ascii_digit()) {
            return Err(DecodeError::malformed(
                Self::TYPE_NAME,
                text,
                "not a base-10 unsigned numeral",
            ));
        }
        text.parse::<u16>()
            .map(|n| Self::from_ordinal(u64::from(n)))
            .map_err(|e| DecodeError::malformed(Self::TYPE_NAME, text, e))
    }
}

impl From<u64> for MessageKind {
    fn from(ordinal: u64) -> Self {
        Self::from_ordinal(ordinal)
    }
}

impl From<MessageKind> for u64 {
    fn from(kind: MessageKind) -> Self {
        kind.ordinal()
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Scalar for MessageKind {
    const TYPE_NAME: &'static str = "MessageKind";

    fn render_text(&self) -> String {
        self.label().to_string()
    }

    fn to_value(&self) -> Value {
        Value::UInt(self.ordinal())
    }

    fn from_value(value: &Value) -> Result<Self, DecodeError> {
        match value {
            Value::String(s) => Self::parse_numeral(s),
            Value::UInt(u) => Ok(Self::from_ordinal(*u)),
            Value::Int(i) if *i < 0 => Err(DecodeError::negative(Self::TYPE_NAME, i)),
            Value::Int(i) => Ok(Self::from_ordinal(i.unsigned_abs())),
            Value::Float(f) if *f < 0.0 => Err(DecodeError::negative(Self::TYPE_NAME, f)),
            // `as` truncates toward zero and saturates; NaN becomes 0
            Value::Float(f) => Ok(Self::from_ordinal(*f as u64)),
            other => Err(DecodeError::unsupported(Self::TYPE_NAME, other)),
        }
    }

    fn is_default(&self) -> bool {
        self.ordinal() == 0
    }
}

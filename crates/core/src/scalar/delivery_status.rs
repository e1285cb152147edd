//! Delivery report (DLR) status codes

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

use super::Scalar;
use crate::error::DecodeError;
use crate::value::Value;

/// Code to English description for every status the gateway reports.
///
/// Read-only, process-wide.
pub const DESCRIPTIONS: [(&str, &str); 8] = [
    ("888", "Delivered"),
    ("000", "The number is not linked to a device"),
    ("003", "Device memory is full"),
    ("009", "Receiver filtered message"),
    ("012", "Device does not support SMS"),
    ("021", "Service does not support SMS"),
    ("032", "Device is full"),
    ("041", "Message expired"),
];

/// A three digit delivery report code
///
/// Codes outside the known set are kept as-is and describe as `""`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeliveryStatus(Cow<'static, str>);

impl DeliveryStatus {
    /// 888: delivered
    pub const DELIVERED: DeliveryStatus = DeliveryStatus(Cow::Borrowed("888"));
    /// 000: number not linked to a device
    pub const NUMBER_WITHOUT_DEVICE: DeliveryStatus = DeliveryStatus(Cow::Borrowed("000"));
    /// 003: device memory full
    pub const DEVICE_MEMORY_FULL: DeliveryStatus = DeliveryStatus(Cow::Borrowed("003"));
    /// 009: receiver filtered the message
    pub const FILTERED_MESSAGE: DeliveryStatus = DeliveryStatus(Cow::Borrowed("009"));
    /// 012: device does not support SMS
    pub const DEVICE_NOT_SUPPORTED: DeliveryStatus = DeliveryStatus(Cow::Borrowed("012"));
    /// 021: service does not support SMS
    pub const SERVICE_NOT_SUPPORTED: DeliveryStatus = DeliveryStatus(Cow::Borrowed("021"));
    /// 032: device full
    pub const DEVICE_FULL: DeliveryStatus = DeliveryStatus(Cow::Borrowed("032"));
    /// 041: message expired
    pub const MESSAGE_EXPIRED: DeliveryStatus = DeliveryStatus(Cow::Borrowed("041"));

    /// Wrap a raw code
    pub fn new(code: impl Into<String>) -> Self {
        DeliveryStatus(Cow::Owned(code.into()))
    }

    /// The raw code
    pub fn code(&self) -> &str {
        &self.0
    }

    /// English description, or `""` for a code outside the table
    pub fn describe(&self) -> &'static str {
        DESCRIPTIONS
            .iter()
            .find(|(code, _)| *code == self.code())
            .map_or("", |(_, desc)| *desc)
    }

    /// True for the delivered code
    pub fn is_success(&self) -> bool {
        *self == Self::DELIVERED
    }

    /// True when the code has a description
    pub fn is_known(&self) -> bool {
        DESCRIPTIONS.iter().any(|(code, _)| *code == self.code())
    }

    fn from_number(n: u64) -> Self {
        DeliveryStatus::new(format!("{:03}", n))
    }
}

impl fmt::Display for DeliveryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Lets a failed delivery report travel as an error; the message is the code,
/// [`DeliveryStatus::describe`] gives the English text.
impl std::error::Error for DeliveryStatus {}

impl Scalar for DeliveryStatus {
    const TYPE_NAME: &'static str = "DeliveryStatus";

    fn render_text(&self) -> String {
        self.code().to_string()
    }

    fn to_value(&self) -> Value {
        Value::String(self.code().to_string())
    }

    fn from_value(value: &Value) -> Result<Self, DecodeError> {
        match value {
            Value::String(s) => Ok(DeliveryStatus::new(s.as_str())),
            Value::UInt(u) => Ok(Self::from_number(*u)),
            Value::Int(i) if *i < 0 => Err(DecodeError::negative(Self::TYPE_NAME, i)),
            Value::Int(i) => Ok(Self::from_number(i.unsigned_abs())),
            Value::Float(f) if *f < 0.0 => Err(DecodeError::negative(Self::TYPE_NAME, f)),
            Value::Float(f) => Ok(Self::from_number(*f as u64)),
            other => Err(DecodeError::unsupported(Self::TYPE_NAME, other)),
        }
    }

    fn is_default(&self) -> bool {
        self.0.is_empty()
    }
}

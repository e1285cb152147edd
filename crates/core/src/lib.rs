//! Core types for MultiSend
//!
//! This crate defines the storage scalar [`Value`], the decode and bounds
//! errors, and the custom scalar types carried by an SMS send request:
//!
//! - [`LooseBool`]: boolean rendered `"1"` / `"0"`
//! - [`MessageKind`]: tts / sms / sms+tts
//! - [`DeliveryStatus`]: delivery report code with its description
//! - [`ScheduledTime`]: optional send time in the gateway's layout
//! - [`Recipients`]: ordered phone numbers
//!
//! ## Example
//!
//! ```
//! use multisend_core::{MessageKind, Scalar, Value};
//!
//! let kind = MessageKind::from_value(&Value::UInt(2)).unwrap();
//! assert_eq!(kind.render_text(), "sms");
//! assert_eq!(kind.to_value(), Value::UInt(2));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod scalar;
pub mod value;

pub use error::{BoundsError, DecodeError};
pub use scalar::{
    DeliveryStatus, LooseBool, MessageKind, Recipients, Scalar, ScheduledTime, DESCRIPTIONS,
    SCHEDULE_FORMAT,
};
pub use value::Value;

//! # MultiSend
//!
//! Typed request model for the MultiSend SMS gateway.
//!
//! MultiSend turns an SMS send request into the ordered key/value params the
//! gateway expects, and gives its custom scalar types two-way conversions to
//! wire text and to a storage scalar.
//!
//! ## Quick Start
//!
//! ```
//! use multisend::prelude::*;
//!
//! let request = SendSmsRequest::new("1", "2", "me", "9721234567", "Hello world")
//!     .with_kind(MessageKind::Sms)
//!     .with_international(false);
//!
//! let prepared = EndpointConfig::default().prepare(&request, SendMethod::Get);
//! assert_eq!(prepared.query.get("recipient"), Some("9721234567"));
//!
//! // Scalars store to and decode from a storage `Value`
//! let kind = MessageKind::from_value(&Value::UInt(3))?;
//! assert_eq!(kind.render_text(), "sms+tts");
//! # Ok::<(), multisend::Error>(())
//! ```
//!
//! ## Layers
//!
//! - [`multisend_core`] - storage [`Value`], scalar types, decode errors
//! - [`multisend_wire`] - field metadata, encoder, endpoint config, replies

#![warn(missing_docs)]

mod error;

pub mod prelude;

pub use error::{Error, Result};

pub use multisend_core::{
    BoundsError, DecodeError, DeliveryStatus, LooseBool, MessageKind, Recipients, Scalar,
    ScheduledTime, Value, DESCRIPTIONS, SCHEDULE_FORMAT,
};
pub use multisend_wire::{
    decode_response, encode, EndpointConfig, FieldModel, FieldValue, Params, PreparedRequest,
    Record, ResponseError, SendMethod, SendResponse, SendSmsRequest, NOT_TRANSMITTED,
};

//! Wire encoding for MultiSend
//!
//! This crate turns typed records into the ordered key/value params the
//! gateway expects, and decodes the gateway's replies.
//!
//! ## Encoding Rules
//!
//! | Field kind | Param text | Zero value |
//! |------------|-----------|------------|
//! | Text | as-is | `""` |
//! | LooseBool | `1` / `0` | `false` |
//! | MessageKind | `tts`, `sms`, `sms+tts`, `unknown` | `Unknown` |
//! | ScheduledTime | `YYYY-DD-MM+hh:mm:ss` | invalid |
//! | Recipients | comma-joined | empty |
//! | DeliveryStatus | raw code | `""` |
//!
//! Fields named `""` or `"-"` are never sent. Fields declared optional are
//! left out while they hold their zero value.
//!
//! ## Examples
//!
//! ```
//! use multisend_core::MessageKind;
//! use multisend_wire::{encode, SendSmsRequest};
//!
//! let request = SendSmsRequest::new("1", "2", "me", "9721234567", "Hello world")
//!     .with_kind(MessageKind::Sms)
//!     .with_international(false);
//!
//! let params = encode(&request);
//! assert_eq!(params.get("message_type"), Some("sms"));
//! assert_eq!(params.get("international"), Some("0"));
//! assert_eq!(params.get("scheduledatetime"), None);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod encode;
pub mod endpoint;
pub mod field;
pub mod request;
pub mod response;

// Re-export main types
pub use encode::{encode, Params};
pub use endpoint::{
    EndpointConfig, PreparedRequest, SendMethod, DEFAULT_BASE_URL, DEFAULT_SEND_PAGE,
};
pub use field::{FieldModel, FieldValue, Record, NOT_TRANSMITTED};
pub use request::SendSmsRequest;
pub use response::{decode_response, ResponseError, SendResponse};

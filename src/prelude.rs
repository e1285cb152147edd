//! Convenient imports for MultiSend.
//!
//! ```
//! use multisend::prelude::*;
//!
//! let params = SendSmsRequest::new("u", "p", "me", "0501234567", "hi").to_params();
//! assert_eq!(params.len(), 5);
//! ```

// Error handling
pub use crate::error::{Error, Result};

// Scalars
pub use multisend_core::{
    DeliveryStatus, LooseBool, MessageKind, Recipients, Scalar, ScheduledTime, Value,
};

// Encoding and requests
pub use multisend_wire::{
    decode_response, encode, EndpointConfig, Params, Record, SendMethod, SendResponse,
    SendSmsRequest,
};

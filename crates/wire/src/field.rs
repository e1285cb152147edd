//! Static field metadata for encodable records
//!
//! A record type declares, once, a table of [`FieldModel`] entries in field
//! declaration order. Each entry carries the external name, the omission
//! policy and an accessor that projects the field onto the closed set of
//! [`FieldValue`] kinds the encoder knows how to render.
//!
//! ## Transmission rules
//!
//! | name | omit_if_default | value | encoded? |
//! |------|-----------------|-------|----------|
//! | `""` or `"-"` | any | any | never |
//! | declared | false | any | yes |
//! | declared | true | default | no |
//! | declared | true | non-default | yes |

use multisend_core::{DeliveryStatus, LooseBool, MessageKind, Recipients, Scalar, ScheduledTime};

/// External name marking a field that is never transmitted
pub const NOT_TRANSMITTED: &str = "-";

/// Borrowed view of one field's current value
///
/// Closed over the scalar kinds the encoder can render, so a field without a
/// rendering rule cannot be declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    /// Optional field with nothing set
    Absent,
    /// Plain text, sent as-is
    Text(&'a str),
    /// Loose boolean, sent as `1` / `0`
    Bool(LooseBool),
    /// Loose boolean the caller set explicitly; never the zero value, so an
    /// explicit `false` is still sent as `0`
    Set(LooseBool),
    /// Message kind label
    Kind(MessageKind),
    /// Scheduled send time
    Schedule(&'a ScheduledTime),
    /// Comma-joined phone numbers
    Recipients(&'a Recipients),
    /// Raw delivery report code
    Status(&'a DeliveryStatus),
}

impl FieldValue<'_> {
    /// True when the value equals its type's zero value
    pub fn is_default(&self) -> bool {
        match self {
            FieldValue::Absent => true,
            FieldValue::Text(s) => s.is_empty(),
            FieldValue::Bool(b) => b.is_default(),
            FieldValue::Set(_) => false,
            FieldValue::Kind(k) => k.is_default(),
            FieldValue::Schedule(t) => t.is_default(),
            FieldValue::Recipients(r) => r.is_default(),
            FieldValue::Status(s) => s.is_default(),
        }
    }

    /// Wire text for the value
    pub fn render(&self) -> String {
        match self {
            FieldValue::Absent => String::new(),
            FieldValue::Text(s) => (*s).to_string(),
            FieldValue::Bool(b) | FieldValue::Set(b) => b.render_text(),
            FieldValue::Kind(k) => k.render_text(),
            FieldValue::Schedule(t) => t.render_text(),
            FieldValue::Recipients(r) => r.render_text(),
            FieldValue::Status(s) => s.render_text(),
        }
    }
}

/// Metadata for one field of record type `R`
pub struct FieldModel<R> {
    /// Key the field is transmitted under
    pub name: &'static str,
    /// Skip the field while it holds its type's zero value
    pub omit_if_default: bool,
    /// Projects the field out of a record
    pub read: fn(&R) -> FieldValue<'_>,
}

impl<R> FieldModel<R> {
    /// A field that is always transmitted
    pub const fn required(name: &'static str, read: fn(&R) -> FieldValue<'_>) -> Self {
        FieldModel {
            name,
            omit_if_default: false,
            read,
        }
    }

    /// A field that is left out while at its zero value
    pub const fn optional(name: &'static str, read: fn(&R) -> FieldValue<'_>) -> Self {
        FieldModel {
            name,
            omit_if_default: true,
            read,
        }
    }

    /// A field that is declared but never transmitted
    pub const fn skipped(read: fn(&R) -> FieldValue<'_>) -> Self {
        FieldModel {
            name: NOT_TRANSMITTED,
            omit_if_default: false,
            read,
        }
    }

    /// False for an empty or [`NOT_TRANSMITTED`] name
    pub fn is_transmitted(&self) -> bool {
        !self.name.is_empty() && self.name != NOT_TRANSMITTED
    }
}

impl<R> std::fmt::Debug for FieldModel<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldModel")
            .field("name", &self.name)
            .field("omit_if_default", &self.omit_if_default)
            .finish()
    }
}

/// A type whose fields can be encoded into key/value params
pub trait Record: Sized + 'static {
    /// Field table in declaration order
    fn fields() -> &'static [FieldModel<Self>];
}

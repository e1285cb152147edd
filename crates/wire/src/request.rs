//! SMS send request record

use multisend_core::{LooseBool, MessageKind, Recipients, Scalar, ScheduledTime};
use serde::{Deserialize, Serialize};

use crate::encode::{encode, Params};
use crate::field::{FieldModel, FieldValue, Record};

/// Parameters of one `sendsms` call
///
/// The first five fields are always transmitted; the rest are left out
/// while they hold their zero value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendSmsRequest {
    /// Account user name
    pub user: String,
    /// Account password
    pub password: String,
    /// Sender id shown to the recipient
    pub from: String,
    /// Destination number, or several numbers comma-joined
    pub recipient: String,
    /// Message body
    pub message: String,
    /// Delivery kind
    #[serde(default)]
    pub message_kind: MessageKind,
    /// Send time, now when invalid
    #[serde(default)]
    pub scheduled_at: ScheduledTime,
    /// Recipient numbers are in international format. Left out of the
    /// params only while unset; an explicit `false` is sent as `0`.
    #[serde(default)]
    pub international: Option<LooseBool>,
    /// Where the gateway posts delivery reports
    #[serde(default)]
    pub notification_url: String,
    /// Caller's own id for this message, echoed in delivery reports
    #[serde(default)]
    pub customer_message_id: String,
    /// HTTP method the gateway uses for delivery reports
    #[serde(default)]
    pub notification_method: String,
    /// Gateway send id
    #[serde(default)]
    pub send_id: String,
}

type Field = FieldModel<SendSmsRequest>;

const SEND_SMS_FIELDS: &[Field] = &[
    Field::required("user", |r| FieldValue::Text(&r.user)),
    Field::required("password", |r| FieldValue::Text(&r.password)),
    Field::required("from", |r| FieldValue::Text(&r.from)),
    Field::required("recipient", |r| FieldValue::Text(&r.recipient)),
    Field::required("message", |r| FieldValue::Text(&r.message)),
    Field::optional("message_type", |r| FieldValue::Kind(r.message_kind)),
    Field::optional("scheduledatetime", |r| FieldValue::Schedule(&r.scheduled_at)),
    Field::optional("international", |r| {
        r.international.map_or(FieldValue::Absent, FieldValue::Set)
    }),
    Field::optional("deliverynotification_url", |r| {
        FieldValue::Text(&r.notification_url)
    }),
    Field::optional("customermessageid", |r| {
        FieldValue::Text(&r.customer_message_id)
    }),
    Field::optional("deliverynotificationmethod", |r| {
        FieldValue::Text(&r.notification_method)
    }),
    Field::optional("sendID", |r| FieldValue::Text(&r.send_id)),
];

impl Record for SendSmsRequest {
    fn fields() -> &'static [FieldModel<Self>] {
        SEND_SMS_FIELDS
    }
}

impl SendSmsRequest {
    /// A request with the mandatory fields set and everything else at default
    pub fn new(
        user: impl Into<String>,
        password: impl Into<String>,
        from: impl Into<String>,
        recipient: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        SendSmsRequest {
            user: user.into(),
            password: password.into(),
            from: from.into(),
            recipient: recipient.into(),
            message: message.into(),
            ..Default::default()
        }
    }

    /// Send to every number in `recipients`
    pub fn with_recipients(mut self, recipients: &Recipients) -> Self {
        self.recipient = recipients.render_text();
        self
    }

    /// Set the delivery kind
    pub fn with_kind(mut self, kind: MessageKind) -> Self {
        self.message_kind = kind;
        self
    }

    /// Schedule the send
    pub fn with_schedule(mut self, at: ScheduledTime) -> Self {
        self.scheduled_at = at;
        self
    }

    /// Mark recipient numbers as international
    pub fn with_international(mut self, international: bool) -> Self {
        self.international = Some(LooseBool::new(international));
        self
    }

    /// Ask for delivery reports at `url`, sent with `method`
    pub fn with_notification(mut self, url: impl Into<String>, method: impl Into<String>) -> Self {
        self.notification_url = url.into();
        self.notification_method = method.into();
        self
    }

    /// Attach the caller's message id
    pub fn with_customer_message_id(mut self, id: impl Into<String>) -> Self {
        self.customer_message_id = id.into();
        self
    }

    /// Attach a gateway send id
    pub fn with_send_id(mut self, id: impl Into<String>) -> Self {
        self.send_id = id.into();
        self
    }

    /// Encode into transport params
    pub fn to_params(&self) -> Params {
        encode(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::collections::HashSet;

    fn base() -> SendSmsRequest {
        SendSmsRequest::new("1", "2", "me", "9721234567", "Hello world")
            .with_kind(MessageKind::Sms)
    }

    #[test]
    fn test_valid_to_params() {
        let params = base().with_international(false).to_params();
        let expected: Params = [
            ("user", "1"),
            ("password", "2"),
            ("from", "me"),
            ("recipient", "9721234567"),
            ("message", "Hello world"),
            ("message_type", "sms"),
            ("international", "0"),
        ]
        .into_iter()
        .collect();
        assert_eq!(params, expected);
    }

    #[test]
    fn test_optional_fields_use_external_names() {
        let at = NaiveDate::from_ymd_opt(2024, 7, 4)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap();
        let params = base()
            .with_schedule(ScheduledTime::from_datetime(at))
            .with_international(true)
            .with_notification("https://example.com/dlr", "POST")
            .with_customer_message_id("c-42")
            .with_send_id("s-7")
            .to_params();

        assert_eq!(params.get("scheduledatetime"), Some("2024-04-07+10:30:00"));
        assert_eq!(params.get("international"), Some("1"));
        assert_eq!(params.get("deliverynotification_url"), Some("https://example.com/dlr"));
        assert_eq!(params.get("deliverynotificationmethod"), Some("POST"));
        assert_eq!(params.get("customermessageid"), Some("c-42"));
        assert_eq!(params.get("sendID"), Some("s-7"));
        assert_eq!(params.len(), 12);
        assert!(!params.contains_key("send_id"));
    }

    #[test]
    fn test_unset_international_is_omitted() {
        let params = base().to_params();
        assert!(!params.contains_key("international"));
        assert_eq!(params.len(), 6);
    }

    #[test]
    fn test_mandatory_fields_sent_when_empty() {
        let params = SendSmsRequest::default().to_params();
        assert_eq!(
            params.keys().collect::<Vec<_>>(),
            ["user", "password", "from", "recipient", "message"]
        );
    }

    #[test]
    fn test_with_recipients_joins_numbers() {
        let recipients: Recipients = ["0501", "0502"].into_iter().collect();
        let params = base().with_recipients(&recipients).to_params();
        assert_eq!(params.get("recipient"), Some("0501,0502"));
    }

    #[test]
    fn test_field_names_are_unique() {
        let names: HashSet<_> = SendSmsRequest::fields().iter().map(|f| f.name).collect();
        assert_eq!(names.len(), SendSmsRequest::fields().len());
        assert!(SendSmsRequest::fields().iter().all(|f| f.is_transmitted()));
    }
}

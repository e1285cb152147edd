//! Optional send time for scheduled messages

use chrono::{DateTime, NaiveDateTime, SubsecRound, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::Scalar;
use crate::error::DecodeError;
use crate::value::Value;

/// Wire layout of a scheduled time: year, DAY, month, then time of day.
///
/// The day-before-month order is what the gateway expects.
pub const SCHEDULE_FORMAT: &str = "%Y-%d-%m+%H:%M:%S";

/// A send time that may be absent
///
/// An invalid time renders as `""` and stores as `Null`. Times are kept to
/// whole seconds, the resolution of [`SCHEDULE_FORMAT`].
///
/// Setting the zero instant (`NaiveDateTime::default()`, 1970-01-01 00:00:00)
/// leaves the time invalid. Other clients of the gateway use 0001-01-01 as
/// their zero instant, so a real epoch time written by them reads back here
/// as unset, and their zero instant reads back here as a valid year-1 time.
/// Serde goes through the same rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<NaiveDateTime>", into = "Option<NaiveDateTime>")]
pub struct ScheduledTime(Option<NaiveDateTime>);

impl ScheduledTime {
    /// An invalid (absent) time
    pub const fn none() -> Self {
        ScheduledTime(None)
    }

    /// A time at `datetime`, invalid when it is the zero instant
    pub fn from_datetime(datetime: NaiveDateTime) -> Self {
        let mut time = ScheduledTime::none();
        time.set_datetime(datetime);
        time
    }

    /// Same as [`ScheduledTime::from_datetime`] for a zoned time, using its
    /// local wall clock
    pub fn from_zoned<Tz: TimeZone>(datetime: &DateTime<Tz>) -> Self {
        Self::from_datetime(datetime.naive_local())
    }

    /// Parse text in [`SCHEDULE_FORMAT`]. Empty text gives an invalid time.
    pub fn parse(text: &str) -> Result<Self, DecodeError> {
        if text.is_empty() {
            return Ok(ScheduledTime::none());
        }
        NaiveDateTime::parse_from_str(text, SCHEDULE_FORMAT)
            .map(Self::from_datetime)
            .map_err(|e| DecodeError::malformed(Self::TYPE_NAME, text, e))
    }

    /// Replace the time, dropping sub-second digits. The zero instant
    /// clears it.
    pub fn set_datetime(&mut self, datetime: NaiveDateTime) {
        let datetime = datetime.trunc_subsecs(0);
        self.0 = if datetime == NaiveDateTime::default() {
            None
        } else {
            Some(datetime)
        };
    }

    /// Make the time invalid
    pub fn clear(&mut self) {
        self.0 = None;
    }

    /// True when a time is set
    pub fn is_valid(&self) -> bool {
        self.0.is_some()
    }

    /// The time, when valid
    pub fn datetime(&self) -> Option<NaiveDateTime> {
        self.0
    }
}

impl From<NaiveDateTime> for ScheduledTime {
    fn from(datetime: NaiveDateTime) -> Self {
        Self::from_datetime(datetime)
    }
}

impl From<Option<NaiveDateTime>> for ScheduledTime {
    fn from(datetime: Option<NaiveDateTime>) -> Self {
        datetime.map_or_else(ScheduledTime::none, Self::from_datetime)
    }
}

impl From<ScheduledTime> for Option<NaiveDateTime> {
    fn from(time: ScheduledTime) -> Self {
        time.0
    }
}

impl fmt::Display for ScheduledTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(dt) => write!(f, "{}", dt.format(SCHEDULE_FORMAT)),
            None => Ok(()),
        }
    }
}

impl Scalar for ScheduledTime {
    const TYPE_NAME: &'static str = "ScheduledTime";

    fn render_text(&self) -> String {
        self.to_string()
    }

    fn to_value(&self) -> Value {
        match self.0 {
            Some(_) => Value::String(self.render_text()),
            None => Value::Null,
        }
    }

    fn from_value(value: &Value) -> Result<Self, DecodeError> {
        match value {
            Value::Null => Ok(ScheduledTime::none()),
            Value::Timestamp(t) => Ok(Self::from_datetime(*t)),
            Value::String(s) => Self::parse(s),
            Value::Bytes(b) => {
                let text = std::str::from_utf8(b).map_err(|e| {
                    DecodeError::malformed(Self::TYPE_NAME, String::from_utf8_lossy(b), e)
                })?;
                Self::parse(text)
            }
            other => Err(DecodeError::unsupported(Self::TYPE_NAME, other)),
        }
    }

    fn is_default(&self) -> bool {
        !self.is_valid()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike, Utc};
    use proptest::prelude::*;

    fn at(y: i32, m: u32, d: u32, hh: u32, mm: u32, ss: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(hh, mm, ss)
            .unwrap()
    }

    // === Rendering ===

    #[test]
    fn test_render_day_before_month() {
        let time = ScheduledTime::from_datetime(at(2024, 3, 9, 14, 5, 7));
        assert_eq!(time.render_text(), "2024-09-03+14:05:07");
        assert_eq!(time.to_value(), Value::String("2024-09-03+14:05:07".into()));
    }

    #[test]
    fn test_zero_instant_is_invalid() {
        let time = ScheduledTime::from_datetime(NaiveDateTime::default());
        assert!(!time.is_valid());
        assert_eq!(time.render_text(), "");
        assert_eq!(time.to_value(), Value::Null);
        assert!(time.is_default());
    }

    #[test]
    fn test_clear_and_set() {
        let mut time = ScheduledTime::from_datetime(at(2030, 1, 2, 3, 4, 5));
        assert!(time.is_valid());
        time.clear();
        assert!(!time.is_valid());
        time.set_datetime(at(2030, 12, 31, 23, 59, 59));
        assert_eq!(time.datetime(), Some(at(2030, 12, 31, 23, 59, 59)));
        time.set_datetime(NaiveDateTime::default());
        assert_eq!(time.datetime(), None);
    }

    #[test]
    fn test_from_zoned_uses_wall_clock() {
        let zoned = Utc.from_utc_datetime(&at(2025, 6, 1, 8, 0, 0));
        assert_eq!(
            ScheduledTime::from_zoned(&zoned).render_text(),
            "2025-01-06+08:00:00"
        );
    }

    // === Decoding ===

    #[test]
    fn test_decode_text_and_bytes() {
        let expected = ScheduledTime::from_datetime(at(2024, 11, 5, 9, 0, 0));
        assert_eq!(
            ScheduledTime::from_value(&Value::from("2024-05-11+09:00:00")),
            Ok(expected)
        );
        assert_eq!(
            ScheduledTime::from_value(&Value::Bytes(b"2024-05-11+09:00:00".to_vec())),
            Ok(expected)
        );
    }

    #[test]
    fn test_decode_layout_mismatch_is_error() {
        for text in ["2024-11-05 09:00:00", "2024-05-13+09:00:00", "tomorrow"] {
            let err = ScheduledTime::from_value(&Value::from(text)).unwrap_err();
            assert!(matches!(err, DecodeError::MalformedText { .. }), "{text}");
        }
        let err = ScheduledTime::from_value(&Value::Bytes(vec![0xff, 0xfe])).unwrap_err();
        assert!(matches!(err, DecodeError::MalformedText { .. }));
    }

    #[test]
    fn test_decode_null_is_invalid_not_error() {
        assert_eq!(ScheduledTime::from_value(&Value::Null), Ok(ScheduledTime::none()));
    }

    #[test]
    fn test_decode_timestamp() {
        let t = at(2024, 2, 29, 12, 0, 0);
        assert_eq!(
            ScheduledTime::from_value(&Value::Timestamp(t)),
            Ok(ScheduledTime::from_datetime(t))
        );
        assert_eq!(
            ScheduledTime::from_value(&Value::Timestamp(NaiveDateTime::default())),
            Ok(ScheduledTime::none())
        );
    }

    #[test]
    fn test_decode_unsupported_shapes() {
        for value in [Value::Bool(true), Value::Int(1), Value::UInt(1), Value::Float(1.0)] {
            let err = ScheduledTime::from_value(&value).unwrap_err();
            assert!(matches!(err, DecodeError::UnsupportedShape { .. }));
        }
    }

    #[test]
    fn test_storage_round_trip() {
        for time in [
            ScheduledTime::none(),
            ScheduledTime::from_datetime(at(1999, 12, 31, 23, 59, 59)),
            ScheduledTime::from_datetime(at(2024, 1, 1, 0, 0, 0)),
        ] {
            assert_eq!(ScheduledTime::from_value(&time.to_value()), Ok(time));
        }
    }

    #[test]
    fn test_sub_second_digits_are_dropped() {
        let precise = at(2024, 1, 1, 0, 0, 0)
            .with_nanosecond(500_000_000)
            .unwrap();
        let time = ScheduledTime::from_datetime(precise);
        assert_eq!(time.datetime(), Some(at(2024, 1, 1, 0, 0, 0)));
        assert_eq!(ScheduledTime::from_value(&time.to_value()), Ok(time));

        let just_after_epoch = NaiveDateTime::default().with_nanosecond(1).unwrap();
        assert!(!ScheduledTime::from_datetime(just_after_epoch).is_valid());
    }

    // === Serde ===

    #[test]
    fn test_serde_applies_zero_instant_rule() {
        let time: ScheduledTime = serde_json::from_str("\"1970-01-01T00:00:00\"").unwrap();
        assert!(!time.is_valid());
        assert_eq!(time.to_value(), Value::Null);

        let time: ScheduledTime = serde_json::from_str("\"2024-03-09T14:05:07.250\"").unwrap();
        assert_eq!(time.render_text(), "2024-09-03+14:05:07");

        let none: ScheduledTime = serde_json::from_str("null").unwrap();
        assert_eq!(none, ScheduledTime::none());
        assert_eq!(serde_json::to_string(&none).unwrap(), "null");
    }

    proptest! {
        #[test]
        fn prop_storage_round_trip_any_instant(
            y in 1000i32..=9999,
            mo in 1u32..=12,
            d in 1u32..=28,
            h in 0u32..24,
            mi in 0u32..60,
            sec in 0u32..60,
            nanos in 0u32..1_000_000_000,
        ) {
            let datetime = NaiveDate::from_ymd_opt(y, mo, d)
                .unwrap()
                .and_hms_nano_opt(h, mi, sec, nanos)
                .unwrap();
            let time = ScheduledTime::from_datetime(datetime);
            prop_assert_eq!(ScheduledTime::from_value(&time.to_value()), Ok(time));
        }
    }
}

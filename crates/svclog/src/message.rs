//! crates/svclog/src/message.rs
//! Log records and their console rendering.

use std::io::{self, Write};

use time::OffsetDateTime;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

use crate::level::{Level, level_text};
use crate::style::{self, Painted};

/// Timestamp layout of every record: `YYYY/MM/DD HH:MM:SS`.
pub const TIMESTAMP_FORMAT: &[BorrowedFormatItem<'static>] = format_description!(
    "[year]/[month padding:zero]/[day padding:zero] [hour padding:zero]:[minute padding:zero]:[second padding:zero]"
);

const EPOCH_TIMESTAMP: &str = "1970/01/01 00:00:00";

/// Formats `at` with [`TIMESTAMP_FORMAT`].
#[must_use]
pub fn format_timestamp(at: OffsetDateTime) -> String {
    at.format(TIMESTAMP_FORMAT)
        .unwrap_or_else(|_| EPOCH_TIMESTAMP.to_owned())
}

/// Current time formatted with [`TIMESTAMP_FORMAT`].
///
/// Local time is used when the offset can be determined, UTC otherwise.
#[must_use]
pub fn timestamp_now() -> String {
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    format_timestamp(now)
}

/// A single log record, built fresh for every emitted call.
///
/// With the `serde` feature the record serialises with the field names a
/// remote collector expects: `uuid`, `service`, `position`, `level`,
/// `timestamp`, `text`, and `type`. Absent optional fields serialise as empty
/// strings.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogMessage {
    /// Request correlation id.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "uuid", default, with = "empty_as_none")
    )]
    pub correlation_id: Option<String>,
    /// Registered service name.
    pub service: String,
    /// Rendered call-site position.
    pub position: String,
    /// Numeric severity level.
    pub level: i32,
    /// Creation time, formatted with [`TIMESTAMP_FORMAT`].
    pub timestamp: String,
    /// Message text.
    pub text: String,
    /// Reserved record type.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "type", default, with = "empty_as_none")
    )]
    pub kind: Option<String>,
}

impl LogMessage {
    /// Builds a record stamped with the current time.
    #[must_use]
    pub fn new(
        correlation_id: Option<String>,
        service: String,
        position: String,
        level: Level,
        text: String,
    ) -> Self {
        Self {
            correlation_id,
            service,
            position,
            level: level.value(),
            timestamp: timestamp_now(),
            text,
            kind: None,
        }
    }

    /// Writes the console form of the record.
    ///
    /// The layout is `<timestamp> - <correlationId> - <position> - <LEVEL> || <text>`.
    /// With `color` set, the timestamp is green, the position blue, and the
    /// level carries its severity badge.
    pub fn render_console<W>(&self, out: &mut W, color: bool) -> io::Result<()>
    where
        W: Write + ?Sized,
    {
        let level_name = level_text(self.level);
        let level_style = Level::from_i32(self.level).map_or_else(anstyle::Style::new, style::level_style);

        write!(
            out,
            "{} - {} - {} - {} || {}",
            Painted::new(style::TIMESTAMP, &self.timestamp, color),
            self.correlation_id.as_deref().unwrap_or_default(),
            Painted::new(style::POSITION, &self.position, color),
            Painted::new(level_style, level_name, color),
            self.text,
        )
    }

    /// Console form of the record as a string.
    #[must_use]
    pub fn console_line(&self, color: bool) -> String {
        let mut buffer = Vec::new();
        // Writing into a Vec cannot fail.
        let _ = self.render_console(&mut buffer, color);
        String::from_utf8_lossy(&buffer).into_owned()
    }
}

#[cfg(feature = "serde")]
mod empty_as_none {
    use serde::{Deserialize, Deserializer, Serializer};

    #[allow(clippy::ref_option)]
    pub(super) fn serialize<S>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(value.as_deref().unwrap_or_default())
    }

    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<String>::deserialize(deserializer)?;
        Ok(value.filter(|text| !text.is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn sample() -> LogMessage {
        LogMessage {
            correlation_id: Some("req-7".to_owned()),
            service: "payments".to_owned(),
            position: "src/pay.rs:10 charge()".to_owned(),
            level: Level::Info.value(),
            timestamp: "2024/03/05 07:08:09".to_owned(),
            text: "charged".to_owned(),
            kind: None,
        }
    }

    #[test]
    fn timestamp_uses_fixed_layout() {
        let at = datetime!(2024-03-05 07:08:09 UTC);
        assert_eq!(format_timestamp(at), "2024/03/05 07:08:09");
    }

    #[test]
    fn timestamp_now_has_expected_shape() {
        let stamp = timestamp_now();
        assert_eq!(stamp.len(), 19);
        assert_eq!(&stamp[4..5], "/");
        assert_eq!(&stamp[10..11], " ");
        assert_eq!(&stamp[13..14], ":");
    }

    #[test]
    fn plain_console_line_matches_layout() {
        assert_eq!(
            sample().console_line(false),
            "2024/03/05 07:08:09 - req-7 - src/pay.rs:10 charge() - INFO || charged"
        );
    }

    #[test]
    fn missing_correlation_id_renders_empty() {
        let mut message = sample();
        message.correlation_id = None;
        assert_eq!(
            message.console_line(false),
            "2024/03/05 07:08:09 -  - src/pay.rs:10 charge() - INFO || charged"
        );
    }

    #[test]
    fn service_is_not_interpolated() {
        assert!(!sample().console_line(false).contains("payments"));
    }

    #[test]
    fn colored_line_keeps_plain_fields() {
        let line = sample().console_line(true);
        assert!(line.contains('\u{1b}'));
        assert!(line.contains("2024/03/05 07:08:09"));
        assert!(line.contains("INFO"));
        assert!(line.ends_with("|| charged"));
    }

    #[test]
    fn new_stamps_level_and_time() {
        let message = LogMessage::new(
            None,
            String::new(),
            "p".to_owned(),
            Level::Trace,
            "t".to_owned(),
        );
        assert_eq!(message.level, 5);
        assert_eq!(message.timestamp.len(), 19);
        assert!(message.kind.is_none());
    }
}

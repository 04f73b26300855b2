use chrono::{DateTime, NaiveDateTime, Utc};
use thiserror::Error;

/// The only timestamp layout the tip floor endpoint uses, e.g.
/// `2025-03-12T15:38:27Z`. Fractional seconds and numeric offsets are not
/// accepted.
pub const TIP_FLOOR_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// `d` marks a position that must hold an ASCII digit.
const TIP_FLOOR_TIME_SHAPE: &[u8; 20] = b"dddd-dd-ddTdd:dd:ddZ";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimestampError {
    #[error("expected YYYY-MM-DDTHH:MM:SSZ, got {0:?}")]
    Layout(String),
    #[error(transparent)]
    Invalid(#[from] chrono::ParseError),
}

/// Parses a [`TIP_FLOOR_TIME_FORMAT`] timestamp as UTC.
///
/// chrono alone accepts signed years, single-digit fields and leap seconds,
/// so the fixed shape is checked first.
pub fn parse_utc_timestamp(text: &str) -> Result<DateTime<Utc>, TimestampError> {
    if !has_tip_floor_shape(text) {
        return Err(TimestampError::Layout(text.to_string()));
    }
    Ok(NaiveDateTime::parse_from_str(text, TIP_FLOOR_TIME_FORMAT)?.and_utc())
}

fn has_tip_floor_shape(text: &str) -> bool {
    text.len() == TIP_FLOOR_TIME_SHAPE.len()
        && text
            .bytes()
            .zip(TIP_FLOOR_TIME_SHAPE)
            .all(|(byte, &expected)| match expected {
                b'd' => byte.is_ascii_digit(),
                _ => byte == expected,
            })
        && &text[17..19] < "60"
}

pub fn format_utc_timestamp(time: &DateTime<Utc>) -> String {
    time.format(TIP_FLOOR_TIME_FORMAT).to_string()
}

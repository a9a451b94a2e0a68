//! Purpose: Parse and format the registrar's fixed date-time layout.
//! Exports: `DATE_FORMAT`, `parse_timestamp`, `format_timestamp`.
//! Role: Shared by the resource decoder and its serializer.
//! Invariants: Layout is `YYYY-MM-DD HH:MM:SS`, 24-hour, no zone, no fractions.
//! Invariants: Parsed values are interpreted as UTC.

use crate::core::error::{Error, ErrorKind};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime, UtcOffset};

pub const DATE_FORMAT: &str = "[year]-[month]-[day] [hour]:[minute]:[second]";

const LAYOUT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

pub fn parse_timestamp(field: &str, text: &str) -> Result<OffsetDateTime, Error> {
    let invalid = || {
        Error::new(ErrorKind::InvalidDate)
            .with_message(format!("field `{field}` failed date parse: {text:?}"))
            .with_field(field)
    };
    // `[year]` tolerates a leading sign; the wire layout does not.
    if !text.as_bytes().first().is_some_and(u8::is_ascii_digit) {
        return Err(invalid());
    }
    let parsed =
        PrimitiveDateTime::parse(text, LAYOUT).map_err(|err| invalid().with_source(err))?;
    Ok(parsed.assume_utc())
}

pub fn format_timestamp(field: &str, value: OffsetDateTime) -> Result<String, Error> {
    let utc = value.checked_to_offset(UtcOffset::UTC).ok_or_else(|| {
        Error::new(ErrorKind::Encode)
            .with_message(format!("field `{field}` is outside the representable UTC range"))
            .with_field(field)
    })?;
    utc.format(LAYOUT).map_err(|err| {
        Error::new(ErrorKind::Encode)
            .with_message(format!("field `{field}` failed date format"))
            .with_field(field)
            .with_source(err)
    })
}

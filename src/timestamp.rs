use std::sync::OnceLock;

use chrono::{NaiveDate, NaiveDateTime};
use regex::Regex;

use crate::DecodeError;

fn packed_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^([0-9]{4})([0-9]{2})([0-9]{2})([0-9]{2})([0-9]{2})([0-9]{2})$").expect("static regex is valid")
    })
}

/// Strips a `^^datatype` suffix and the quote characters around a literal.
pub fn strip_literal(literal: &str) -> &str {
    let lexical = match literal.split_once("^^") {
        Some((lexical, _datatype)) => lexical,
        None => literal,
    };
    lexical.trim().trim_matches('"')
}

/// Decodes `YYYYMMDDHHMMSS` (e.g. `"20240815120000"^^xsd:string`) into a
/// wall-clock timestamp.
pub fn decode_packed_timestamp(literal: &str) -> Result<NaiveDateTime, DecodeError> {
    let digits = strip_literal(literal);

    let caps = packed_re()
        .captures(digits)
        .ok_or_else(|| DecodeError::new(literal, "expected 14 digits YYYYMMDDHHMMSS"))?;

    let field = |i: usize| -> Result<u32, DecodeError> {
        caps[i]
            .parse()
            .map_err(|e| DecodeError::new(literal, format!("bad digits {:?}: {e}", &caps[i])))
    };

    let year = i32::try_from(field(1)?).map_err(|e| DecodeError::new(literal, e.to_string()))?;
    let (month, day) = (field(2)?, field(3)?);
    let (hour, minute, second) = (field(4)?, field(5)?, field(6)?);

    let date = NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| DecodeError::new(literal, format!("no such date {year:04}-{month:02}-{day:02}")))?;

    date.and_hms_opt(hour, minute, second)
        .ok_or_else(|| DecodeError::new(literal, format!("no such time {hour:02}:{minute:02}:{second:02}")))
}

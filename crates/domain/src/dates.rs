use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

use crate::errors::{Error, Result};

/// A zero-padded `YYYY-MM-DD` date.
///
/// Record dates are compared as plain strings, which only orders correctly
/// when every date has this exact shape. Anything entering the system as a
/// date goes through [`IsoDate::parse`] first.
#[derive(Clone, Debug, Serialize, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[serde(transparent)]
pub struct IsoDate(String);

impl IsoDate {
    pub fn parse(field: &str, value: &str) -> Result<Self> {
        let valid = has_iso_shape(value)
            && NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok();

        if !valid {
            return Err(Error::Validation {
                message: format!("{field} must be a YYYY-MM-DD date, got {value:?}"),
            });
        }

        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Digits everywhere except `-` at offsets 4 and 7. chrono alone accepts
/// signs and padding spaces inside numeric fields.
fn has_iso_shape(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

impl fmt::Display for IsoDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

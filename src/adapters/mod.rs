// Adapters: wire formats and the SQL scan seam for `Int32`.

pub mod json;
pub mod sql;
pub mod text;

use crate::utils::error::{NullError, Result};

pub(crate) fn from_i64(v: i64) -> Result<i32> {
    i32::try_from(v).map_err(|_| NullError::overflow(v))
}

pub(crate) fn from_u64(v: u64) -> Result<i32> {
    i32::try_from(v).map_err(|_| NullError::overflow(v))
}

/// Accepts only floats that hold an exact integer within `i32` range.
pub(crate) fn from_f64(v: f64) -> Result<i32> {
    if v.is_nan() || (v.is_finite() && v.fract() != 0.0) {
        return Err(NullError::non_integer(v));
    }
    if v < f64::from(i32::MIN) || v > f64::from(i32::MAX) {
        return Err(NullError::overflow(v));
    }
    Ok(v as i32)
}

pub(crate) fn parse_decimal(s: &str) -> Result<i32> {
    s.parse::<i32>().map_err(|e| NullError::parse(s, e))
}

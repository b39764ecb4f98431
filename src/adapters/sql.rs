use chrono::NaiveDateTime;

use super::{from_f64, from_i64, parse_decimal};
use crate::domain::int32::Int32;
use crate::domain::ports::{Scanner, Valuer};
use crate::utils::error::{NullError, Result};

/// The closed set of values a SQL driver binding layer hands over.
#[derive(Debug, Clone, PartialEq)]
pub enum ScanValue {
    Null,
    Int64(i64),
    Float64(f64),
    Bool(bool),
    Bytes(Vec<u8>),
    Text(String),
    Timestamp(NaiveDateTime),
}

impl ScanValue {
    pub fn is_null(&self) -> bool {
        matches!(self, ScanValue::Null)
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            ScanValue::Null => "null",
            ScanValue::Int64(_) => "int64",
            ScanValue::Float64(_) => "float64",
            ScanValue::Bool(_) => "bool",
            ScanValue::Bytes(_) => "bytes",
            ScanValue::Text(_) => "text",
            ScanValue::Timestamp(_) => "timestamp",
        }
    }
}

impl Scanner for Int32 {
    /// Integers are range checked when narrowed to `i32`; floats must be
    /// integral; text and bytes are parsed as decimal. Booleans and
    /// timestamps are a type error.
    ///
    /// On any error `self` is left null.
    fn scan(&mut self, src: ScanValue) -> Result<()> {
        self.reset();

        let decoded = match &src {
            ScanValue::Null => return Ok(()),
            ScanValue::Int64(v) => from_i64(*v),
            ScanValue::Float64(v) => from_f64(*v),
            ScanValue::Text(s) => parse_decimal(s),
            ScanValue::Bytes(b) => parse_decimal(&String::from_utf8_lossy(b)),
            ScanValue::Bool(_) | ScanValue::Timestamp(_) => Err(NullError::TypeError {
                found: src.type_name(),
                context: "Int32",
            }),
        };

        match decoded {
            Ok(v) => {
                tracing::trace!(source = src.type_name(), value = v, "scanned Int32");
                self.set_valid(v);
                Ok(())
            }
            Err(err) => {
                tracing::debug!(
                    source = src.type_name(),
                    kind = ?err.kind(),
                    "rejected scan value for Int32: {}",
                    err
                );
                Err(err)
            }
        }
    }
}

impl Valuer for Int32 {
    fn value(&self) -> ScanValue {
        match self.to_option() {
            Some(v) => ScanValue::Int64(i64::from(v)),
            None => ScanValue::Null,
        }
    }
}

impl From<i64> for ScanValue {
    fn from(v: i64) -> Self {
        ScanValue::Int64(v)
    }
}

impl From<i32> for ScanValue {
    fn from(v: i32) -> Self {
        ScanValue::Int64(i64::from(v))
    }
}

impl From<f64> for ScanValue {
    fn from(v: f64) -> Self {
        ScanValue::Float64(v)
    }
}

impl From<bool> for ScanValue {
    fn from(v: bool) -> Self {
        ScanValue::Bool(v)
    }
}

impl From<String> for ScanValue {
    fn from(v: String) -> Self {
        ScanValue::Text(v)
    }
}

impl From<&str> for ScanValue {
    fn from(v: &str) -> Self {
        ScanValue::Text(v.to_string())
    }
}

impl From<Vec<u8>> for ScanValue {
    fn from(v: Vec<u8>) -> Self {
        ScanValue::Bytes(v)
    }
}

impl From<NaiveDateTime> for ScanValue {
    fn from(v: NaiveDateTime) -> Self {
        ScanValue::Timestamp(v)
    }
}

impl<T: Into<ScanValue>> From<Option<T>> for ScanValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(ScanValue::Null, Into::into)
    }
}

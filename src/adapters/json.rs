use std::fmt;

use serde::de::{self, Deserialize, Deserializer, IgnoredAny, Visitor};
use serde::ser::{Serialize, Serializer};
use serde_json::Value;

use super::{from_f64, from_i64, from_u64, parse_decimal};
use crate::domain::int32::Int32;
use crate::utils::error::{NullError, Result};

impl Int32 {
    /// Encodes as a bare integer, or `null` when invalid.
    pub fn marshal_json(&self) -> String {
        match self.to_option() {
            Some(v) => v.to_string(),
            None => "null".to_string(),
        }
    }

    /// Decodes `null`, an integer, or a quoted decimal integer.
    ///
    /// On any error `self` is left null.
    pub fn unmarshal_json(&mut self, data: impl AsRef<[u8]>) -> Result<()> {
        self.reset();
        let data = data.as_ref();

        match Self::decode_json(data) {
            Ok(decoded) => {
                *self = decoded;
                Ok(())
            }
            Err(err) => {
                tracing::debug!(
                    kind = ?err.kind(),
                    len = data.len(),
                    "rejected JSON input for Int32: {}",
                    err
                );
                Err(err)
            }
        }
    }

    // The document is validated without being built, so nesting depth and
    // number magnitude never surface as syntax errors.
    fn decode_json(data: &[u8]) -> Result<Self> {
        serde_json::from_slice::<IgnoredAny>(data)?;

        let token = data.trim_ascii();
        match token.first() {
            Some(b'n') => Ok(Self::null()),
            Some(b't' | b'f') => Err(type_error("boolean")),
            Some(b'[') => Err(type_error("array")),
            Some(b'{') => Err(type_error("object")),
            Some(b'"') => {
                let s: String = serde_json::from_slice(token)?;
                parse_decimal(&s).map(Self::from_value)
            }
            _ => number_from_text(token).map(Self::from_value),
        }
    }

    /// Classifies an already parsed JSON value.
    ///
    /// Objects are rejected even when shaped like `{"Int32": 1, "Valid": true}`.
    pub fn from_json_value(value: &Value) -> Result<Self> {
        match value {
            Value::Null => Ok(Self::null()),
            Value::Number(n) => {
                let v = if let Some(v) = n.as_i64() {
                    from_i64(v)?
                } else if let Some(v) = n.as_u64() {
                    from_u64(v)?
                } else {
                    match n.as_f64() {
                        Some(v) => from_f64(v)?,
                        None => return Err(NullError::non_integer(n)),
                    }
                };
                Ok(Self::from_value(v))
            }
            Value::String(s) => parse_decimal(s).map(Self::from_value),
            Value::Bool(_) => Err(type_error("boolean")),
            Value::Array(_) => Err(type_error("array")),
            Value::Object(_) => Err(type_error("object")),
        }
    }
}

fn number_from_text(token: &[u8]) -> Result<i32> {
    let text = String::from_utf8_lossy(token);
    if let Ok(v) = text.parse::<i64>() {
        return from_i64(v);
    }
    if let Ok(v) = text.parse::<u64>() {
        return from_u64(v);
    }
    match text.parse::<f64>() {
        Ok(v) => from_f64(v).map_err(|err| match err {
            NullError::RangeOrTypeError { reason, .. } => NullError::RangeOrTypeError {
                value: text.to_string(),
                reason,
            },
            other => other,
        }),
        Err(_) => Err(NullError::non_integer(text)),
    }
}

fn type_error(found: &'static str) -> NullError {
    NullError::TypeError {
        found,
        context: "Int32",
    }
}

impl Serialize for Int32 {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.to_option() {
            Some(v) => serializer.serialize_i32(v),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for Int32 {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(Int32Visitor)
    }
}

/// Accepts null, integers, integral floats and decimal strings. Everything
/// else falls through to serde's `invalid_type` error.
struct Int32Visitor;

impl<'de> Visitor<'de> for Int32Visitor {
    type Value = Int32;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an int32, a decimal int32 string, or null")
    }

    fn visit_i64<E>(self, v: i64) -> std::result::Result<Self::Value, E>
    where
        E: de::Error,
    {
        from_i64(v).map(Int32::from_value).map_err(E::custom)
    }

    fn visit_u64<E>(self, v: u64) -> std::result::Result<Self::Value, E>
    where
        E: de::Error,
    {
        from_u64(v).map(Int32::from_value).map_err(E::custom)
    }

    fn visit_f64<E>(self, v: f64) -> std::result::Result<Self::Value, E>
    where
        E: de::Error,
    {
        from_f64(v).map(Int32::from_value).map_err(E::custom)
    }

    fn visit_str<E>(self, v: &str) -> std::result::Result<Self::Value, E>
    where
        E: de::Error,
    {
        parse_decimal(v).map(Int32::from_value).map_err(E::custom)
    }

    fn visit_none<E>(self) -> std::result::Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Int32::null())
    }

    fn visit_unit<E>(self) -> std::result::Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Int32::null())
    }

    fn visit_some<D>(self, deserializer: D) -> std::result::Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        Int32::deserialize(deserializer)
    }
}

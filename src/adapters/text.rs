use std::fmt;
use std::str::FromStr;

use super::parse_decimal;
use crate::domain::int32::Int32;
use crate::utils::error::{NullError, Result};

impl Int32 {
    /// Decimal digits, or an empty string when invalid.
    pub fn marshal_text(&self) -> String {
        self.to_string()
    }

    /// Empty input and the exact text `null` decode to null; anything else
    /// must be a decimal `i32`.
    ///
    /// On any error `self` is left null.
    pub fn unmarshal_text(&mut self, text: impl AsRef<[u8]>) -> Result<()> {
        self.reset();
        let text = text.as_ref();
        if text.is_empty() || text == b"null" {
            return Ok(());
        }

        match parse_decimal(&String::from_utf8_lossy(text)) {
            Ok(v) => {
                self.set_valid(v);
                Ok(())
            }
            Err(err) => {
                tracing::debug!(len = text.len(), "rejected text input for Int32: {}", err);
                Err(err)
            }
        }
    }
}

impl fmt::Display for Int32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_option() {
            Some(v) => write!(f, "{}", v),
            None => Ok(()),
        }
    }
}

impl FromStr for Int32 {
    type Err = NullError;

    fn from_str(s: &str) -> Result<Self> {
        let mut i = Int32::null();
        i.unmarshal_text(s)?;
        Ok(i)
    }
}

/// Serde helpers that apply the text contract to a struct field:
///
/// ```
/// use null_int32::Int32;
///
/// #[derive(serde::Deserialize)]
/// struct Settings {
///     #[serde(with = "null_int32::adapters::text::as_text", default)]
///     retries: Int32,
/// }
///
/// let settings: Settings = serde_json::from_str(r#"{"retries": ""}"#).unwrap();
/// assert!(!settings.retries.valid);
/// ```
pub mod as_text {
    use std::fmt;

    use serde::de::{self, Deserializer, Visitor};
    use serde::Serializer;

    use crate::adapters::{from_f64, from_i64, from_u64};
    use crate::domain::int32::Int32;

    pub fn serialize<S>(value: &Int32, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.marshal_text())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Int32, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(TextVisitor)
    }

    struct TextVisitor;

    impl<'de> Visitor<'de> for TextVisitor {
        type Value = Int32;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a decimal int32 string, an empty string, or null")
        }

        fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            v.parse().map_err(E::custom)
        }

        fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            from_i64(v).map(Int32::from_value).map_err(E::custom)
        }

        fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            from_u64(v).map(Int32::from_value).map_err(E::custom)
        }

        fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            from_f64(v).map(Int32::from_value).map_err(E::custom)
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Int32::null())
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Int32::null())
        }
    }
}

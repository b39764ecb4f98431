use std::num::ParseIntError;
use thiserror::Error;

pub(crate) const OVERFLOW: &str = "decoded value overflows int32";
pub(crate) const NON_INTEGER: &str = "non-integer number cannot become int32";

#[derive(Error, Debug)]
pub enum NullError {
    #[error("null: invalid JSON input: {0}")]
    SyntaxError(#[from] serde_json::Error),

    #[error("null: cannot decode {found} into {context}")]
    TypeError {
        found: &'static str,
        context: &'static str,
    },

    #[error("null: {reason}: {value}")]
    RangeOrTypeError { value: String, reason: &'static str },

    #[error("null: couldn't parse {input:?} as int32: {source}")]
    ParseError {
        input: String,
        #[source]
        source: ParseIntError,
    },
}

/// Coarse failure category, for callers that branch on the kind of error
/// rather than its message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Syntax,
    Type,
    RangeOrType,
    Parse,
}

impl NullError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            NullError::SyntaxError(_) => ErrorKind::Syntax,
            NullError::TypeError { .. } => ErrorKind::Type,
            NullError::RangeOrTypeError { .. } => ErrorKind::RangeOrType,
            NullError::ParseError { .. } => ErrorKind::Parse,
        }
    }

    pub(crate) fn overflow(value: impl ToString) -> Self {
        NullError::RangeOrTypeError {
            value: value.to_string(),
            reason: OVERFLOW,
        }
    }

    pub(crate) fn non_integer(value: impl ToString) -> Self {
        NullError::RangeOrTypeError {
            value: value.to_string(),
            reason: NON_INTEGER,
        }
    }

    pub(crate) fn parse(input: &str, source: ParseIntError) -> Self {
        NullError::ParseError {
            input: input.to_string(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, NullError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_matches_variant() {
        let err = NullError::overflow(2147483648u64);
        assert_eq!(err.kind(), ErrorKind::RangeOrType);
        assert_eq!(
            err.to_string(),
            "null: decoded value overflows int32: 2147483648"
        );

        let err = NullError::non_integer(1.1);
        assert_eq!(err.kind(), ErrorKind::RangeOrType);
        assert!(err.to_string().contains(NON_INTEGER));

        let source = "abc".parse::<i32>().unwrap_err();
        let err = NullError::parse("abc", source);
        assert_eq!(err.kind(), ErrorKind::Parse);
        assert!(err.to_string().contains("\"abc\""));
    }

    #[test]
    fn test_syntax_error_from_serde_json() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = NullError::from(source);
        assert_eq!(err.kind(), ErrorKind::Syntax);
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().starts_with("null: invalid JSON input"));
    }
}

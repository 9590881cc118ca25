//! Crate error and result types.

use std::fmt;

/// Convenience alias for results carrying [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by conversion and parsing operations.
#[derive(Debug)]
pub enum Error {
    /// An operation received a value kind it does not support.
    UnsupportedKind {
        /// The operation that rejected the value.
        op: &'static str,
        /// Kind name of the rejected value.
        kind: &'static str,
    },
    /// Integer parsing failed.
    ParseInt {
        /// The input that failed to parse.
        input: String,
        /// The underlying std parse error.
        source: std::num::ParseIntError,
    },
    /// Float parsing failed.
    ParseFloat {
        /// The input that failed to parse.
        input: String,
        /// The underlying std parse error.
        source: std::num::ParseFloatError,
    },
    /// Boolean parsing failed.
    ParseBool {
        /// The input that failed to parse.
        input: String,
        /// The underlying std parse error.
        source: std::str::ParseBoolError,
    },
    /// Date/time parsing failed.
    ParseTime {
        /// The input that failed to parse.
        input: String,
        /// The underlying chrono parse error.
        source: chrono::ParseError,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnsupportedKind { op, kind } => {
                write!(f, "{op} needs a numeric value, got `{kind}`")
            }
            Error::ParseInt { input, .. } => write!(f, "invalid integer: `{input}`"),
            Error::ParseFloat { input, .. } => write!(f, "invalid float: `{input}`"),
            Error::ParseBool { input, .. } => write!(f, "invalid boolean: `{input}`"),
            Error::ParseTime { input, .. } => write!(f, "invalid date/time: `{input}`"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::UnsupportedKind { .. } => None,
            Error::ParseInt { source, .. } => Some(source),
            Error::ParseFloat { source, .. } => Some(source),
            Error::ParseBool { source, .. } => Some(source),
            Error::ParseTime { source, .. } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_unsupported_kind_display() {
        let err = Error::UnsupportedKind {
            op: "to_int64",
            kind: "TEXT",
        };
        assert_eq!(err.to_string(), "to_int64 needs a numeric value, got `TEXT`");
        assert!(err.source().is_none());
    }

    #[test]
    fn test_parse_int_carries_source() {
        let source = "abc".parse::<i64>().unwrap_err();
        let err = Error::ParseInt {
            input: "abc".to_string(),
            source,
        };
        assert_eq!(err.to_string(), "invalid integer: `abc`");
        assert!(err.source().is_some());
    }
}

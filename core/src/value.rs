use compact_str::{CompactString, ToCompactString};
use core::fmt;

/// A positional bind value.
///
/// The compiler emits one `?` placeholder per non-null value and hands the
/// accumulated list to the execution collaborator, which binds the values in
/// order. The variants mirror the column types of the metadata schema: text,
/// 64-bit integers (ids, sizes, timestamps, counters) and doubles.
#[derive(Debug, Clone, PartialEq)]
pub enum AqlValue {
    Text(CompactString),
    Long(i64),
    Double(f64),
    Null,
}

impl AqlValue {
    /// Returns `true` for the SQL NULL value, which binds no parameter and
    /// renders as `is null` / `is not null` instead.
    pub const fn is_null(&self) -> bool {
        matches!(self, AqlValue::Null)
    }
}

impl From<&str> for AqlValue {
    fn from(value: &str) -> Self {
        AqlValue::Text(value.to_compact_string())
    }
}

impl From<String> for AqlValue {
    fn from(value: String) -> Self {
        AqlValue::Text(CompactString::from(value))
    }
}

impl From<CompactString> for AqlValue {
    fn from(value: CompactString) -> Self {
        AqlValue::Text(value)
    }
}

impl From<i64> for AqlValue {
    fn from(value: i64) -> Self {
        AqlValue::Long(value)
    }
}

impl From<i32> for AqlValue {
    fn from(value: i32) -> Self {
        AqlValue::Long(i64::from(value))
    }
}

impl From<f64> for AqlValue {
    fn from(value: f64) -> Self {
        AqlValue::Double(value)
    }
}

impl fmt::Display for AqlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AqlValue::Text(text) => write!(f, "'{text}'"),
            AqlValue::Long(value) => write!(f, "{value}"),
            AqlValue::Double(value) => write!(f, "{value}"),
            AqlValue::Null => f.write_str("null"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversions() {
        assert_eq!(AqlValue::from("jar"), AqlValue::Text("jar".into()));
        assert_eq!(AqlValue::from(42i64), AqlValue::Long(42));
        assert_eq!(AqlValue::from(7i32), AqlValue::Long(7));
        assert_eq!(AqlValue::from(0.5f64), AqlValue::Double(0.5));
    }

    #[test]
    fn null_detection() {
        assert!(AqlValue::Null.is_null());
        assert!(!AqlValue::from("x").is_null());
    }
}

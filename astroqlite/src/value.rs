//! Tagged values as passed by a row-oriented SQL evaluator.
//!
//! [`SqlValue`] mirrors the five storage classes of SQLite. Only integers and
//! floats are valid inputs to the ADQL functions. Text gets numeric affinity
//! when the whole string (ASCII whitespace trimmed) is a number, which is the
//! rule the host applies when it checks a value's numeric type. Everything
//! else is [`NumericType::Other`].

use std::fmt;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SqlValue {
    #[default]
    Null,
    Integer(i64),
    Float(f64),
    Text(String),
    Blob(Vec<u8>),
}

/// Type tag after numeric affinity has been applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericType {
    Integer,
    Float,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Numeric {
    Integer(i64),
    Float(f64),
}

fn parse_numeric_text(text: &str) -> Option<Numeric> {
    let s = text.trim_matches(|c: char| c.is_ascii_whitespace());
    if s.is_empty()
        || !s
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'))
    {
        // rejects "inf", "NaN" and friends that f64::from_str would accept
        return None;
    }
    if let Ok(i) = s.parse::<i64>() {
        return Some(Numeric::Integer(i));
    }
    s.parse::<f64>().ok().map(Numeric::Float)
}

impl SqlValue {
    fn numeric(&self) -> Option<Numeric> {
        match self {
            SqlValue::Integer(i) => Some(Numeric::Integer(*i)),
            SqlValue::Float(f) => Some(Numeric::Float(*f)),
            SqlValue::Text(s) => parse_numeric_text(s),
            SqlValue::Null | SqlValue::Blob(_) => None,
        }
    }

    pub fn numeric_type(&self) -> NumericType {
        match self.numeric() {
            Some(Numeric::Integer(_)) => NumericType::Integer,
            Some(Numeric::Float(_)) => NumericType::Float,
            None => NumericType::Other,
        }
    }

    pub fn is_numeric(&self) -> bool {
        self.numeric().is_some()
    }

    pub fn is_null(&self) -> bool {
        matches!(self, SqlValue::Null)
    }

    /// Value as a double, `None` when not numeric.
    pub fn as_f64(&self) -> Option<f64> {
        match self.numeric()? {
            Numeric::Integer(i) => Some(i as f64),
            Numeric::Float(f) => Some(f),
        }
    }

    /// Value as a 64-bit integer. Floats truncate toward zero and saturate.
    pub fn as_i64(&self) -> Option<i64> {
        match self.numeric()? {
            Numeric::Integer(i) => Some(i),
            Numeric::Float(f) => Some(f as i64),
        }
    }

    /// Value as a 32-bit integer. Out-of-range values saturate.
    pub fn as_i32(&self) -> Option<i32> {
        match self.numeric()? {
            Numeric::Integer(i) => Some(i.clamp(i32::MIN as i64, i32::MAX as i64) as i32),
            Numeric::Float(f) => Some(f as i32),
        }
    }
}

impl From<f64> for SqlValue {
    fn from(v: f64) -> Self {
        SqlValue::Float(v)
    }
}

impl From<i64> for SqlValue {
    fn from(v: i64) -> Self {
        SqlValue::Integer(v)
    }
}

impl From<i32> for SqlValue {
    fn from(v: i32) -> Self {
        SqlValue::Integer(v as i64)
    }
}

impl From<&str> for SqlValue {
    fn from(v: &str) -> Self {
        SqlValue::Text(v.to_string())
    }
}

impl From<String> for SqlValue {
    fn from(v: String) -> Self {
        SqlValue::Text(v)
    }
}

impl From<Vec<u8>> for SqlValue {
    fn from(v: Vec<u8>) -> Self {
        SqlValue::Blob(v)
    }
}

impl<T: Into<SqlValue>> From<Option<T>> for SqlValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(SqlValue::Null, Into::into)
    }
}

impl fmt::Display for SqlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SqlValue::Null => write!(f, "NULL"),
            SqlValue::Integer(i) => write!(f, "{}", i),
            SqlValue::Float(v) => write!(f, "{}", v),
            SqlValue::Text(s) => write!(f, "'{}'", s.replace('\'', "''")),
            SqlValue::Blob(b) => {
                write!(f, "X'")?;
                for byte in b {
                    write!(f, "{:02X}", byte)?;
                }
                write!(f, "'")
            }
        }
    }
}

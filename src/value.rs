use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// One row of a record set: column name mapped to its typed value,
/// in document order.
pub type Record = IndexMap<String, CellValue>;

/// A single column value.
///
/// Record sets are dynamically typed, so every cell is one of a closed set
/// of variants. Decimals keep their exact scale (`5.00` is not collapsed to
/// `5.0`), temporals are timezone-less points in time.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Null,
    Text(String),
    Number(serde_json::Number),
    Decimal(Decimal),
    Temporal(NaiveDateTime),
}

impl CellValue {
    /// Convert a parsed JSON value into a typed cell.
    ///
    /// Strings that look like ISO dates or datetimes become `Temporal`,
    /// numbers written with a fraction or exponent become `Decimal`, and
    /// nested arrays/objects are flattened to their compact JSON text.
    pub fn from_json(value: &Value) -> CellValue {
        match value {
            Value::Null => CellValue::Null,
            Value::Bool(b) => CellValue::Text(b.to_string()),
            Value::Number(n) => number_cell(n),
            Value::String(s) => match parse_temporal(s) {
                Some(t) => CellValue::Temporal(t),
                None => CellValue::Text(s.clone()),
            },
            other => CellValue::Text(other.to_string()),
        }
    }

    /// Display form used when reporting added rows.
    ///
    /// Nulls render as the literal `null`, and temporals at midnight drop
    /// their time-of-day part.
    pub fn dump(&self) -> String {
        match self {
            CellValue::Null => "null".to_string(),
            CellValue::Temporal(t) if t.time() == NaiveTime::MIN => {
                t.format("%Y-%m-%d").to_string()
            }
            CellValue::Temporal(t) => t.format("%Y-%m-%d %H:%M:%S").to_string(),
            other => other.to_string(),
        }
    }

    /// Loose equality used to decide whether a shared row was modified.
    ///
    /// Null only equals null, decimals compare numerically (scale does not
    /// matter), and every other pairing falls back to comparing default
    /// string forms. That last rule means a number `5` on one side equals
    /// the text `"5"` on the other, and two temporals compare by their full
    /// datetime string rather than the date-only form used by [`dump`].
    ///
    /// [`dump`]: CellValue::dump
    pub fn loosely_eq(&self, other: &CellValue) -> bool {
        match (self, other) {
            (CellValue::Null, CellValue::Null) => true,
            (CellValue::Null, _) | (_, CellValue::Null) => false,
            (CellValue::Decimal(a), CellValue::Decimal(b)) => a == b,
            (a, b) => a.to_string() == b.to_string(),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }
}

/// Default string conversion, used for composite keys, modified-row values,
/// and the loose-equality rule. Null stringifies to the empty string, so a
/// null primary-key part contributes nothing between separators.
impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Null => Ok(()),
            CellValue::Text(s) => f.write_str(s),
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Decimal(d) => write!(f, "{}", d),
            CellValue::Temporal(t) => write!(f, "{}", t),
        }
    }
}

fn number_cell(n: &serde_json::Number) -> CellValue {
    let literal = n.to_string();
    if literal.contains('.') || literal.contains('e') || literal.contains('E') {
        // Out-of-range literals (e.g. 1e99) stay plain numbers and compare
        // by their literal text.
        Decimal::from_str(&literal)
            .or_else(|_| Decimal::from_scientific(&literal))
            .map(CellValue::Decimal)
            .unwrap_or_else(|_| CellValue::Number(n.clone()))
    } else {
        CellValue::Number(n.clone())
    }
}

/// Try to read a string as a date or datetime.
///
/// Accepted shapes: `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM:SS[.f]`,
/// `YYYY-MM-DD HH:MM:SS[.f]`, and RFC 3339 (offset normalized to UTC).
fn parse_temporal(s: &str) -> Option<NaiveDateTime> {
    let bytes = s.as_bytes();
    if bytes.len() < 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }
    if !bytes[..4].iter().all(|b| b.is_ascii_digit()) {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(dt);
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(d.and_time(NaiveTime::MIN));
    }
    None
}

//! Column-level access to entity fields
//!
//! Admin views address entity data by column name (`"number"`,
//! `"author.login"`, ...). [`Model`] exposes those columns as borrowed
//! [`Value`]s so the grid can sort, search and render cells without knowing
//! the concrete entity type.

use std::cmp::Ordering;
use std::fmt;

use chrono::{DateTime, Utc};

/// A single field value as seen by the admin grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value<'a> {
    Null,
    Int(i64),
    Text(&'a str),
    Timestamp(DateTime<Utc>),
}

impl<'a> Value<'a> {
    pub fn from_opt_int(value: Option<i64>) -> Self {
        value.map(Value::Int).unwrap_or(Value::Null)
    }

    pub fn from_opt_text(value: Option<&'a str>) -> Self {
        value.map(Value::Text).unwrap_or(Value::Null)
    }

    pub fn from_opt_timestamp(value: Option<DateTime<Utc>>) -> Self {
        value.map(Value::Timestamp).unwrap_or(Value::Null)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            Value::Timestamp(ts) => Some(*ts),
            _ => None,
        }
    }

    /// Ordering used by list sorting. Nulls sort first; values of different
    /// kinds compare by kind so the sort stays total.
    pub fn sort_cmp(&self, other: &Value<'_>) -> Ordering {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a.cmp(b),
            (Value::Text(a), Value::Text(b)) => a.cmp(b),
            (Value::Timestamp(a), Value::Timestamp(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Value::Null => 0,
            Value::Int(_) => 1,
            Value::Text(_) => 2,
            Value::Timestamp(_) => 3,
        }
    }
}

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Int(n) => write!(f, "{}", n),
            Value::Text(s) => f.write_str(s),
            Value::Timestamp(ts) => write!(f, "{}", ts.format("%Y-%m-%d %H:%M:%S%:z")),
        }
    }
}

/// An entity that can be displayed in an admin grid
pub trait Model {
    /// Entity name used in error messages and view metadata
    const ENTITY: &'static str;

    /// Every column an admin view may bind for this entity
    const COLUMNS: &'static [&'static str];

    /// Primary key used to address a single row in detail mode
    fn key(&self) -> String;

    /// Scalar value of a column. Relationship collections and virtual
    /// columns return `Value::Null`; unknown columns return `None`.
    fn field(&self, column: &str) -> Option<Value<'_>>;
}

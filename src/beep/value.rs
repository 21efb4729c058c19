use crate::error::{BeepError, Result};
use std::fmt;

/// Dynamically typed BEEP value.
///
/// Values are stored as whatever the producing operation returned and are
/// coerced when an operator needs an integer or text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Text, from literals, declarations and string operators.
    Text(String),
    /// Result of `+` or `-`.
    Int(i64),
    /// Result of `>` or `>=`.
    Bool(bool),
}

impl Value {
    /// Coerces the value to an integer.
    pub fn as_int(&self) -> Result<i64> {
        match self {
            Value::Text(text) => {
                text.parse().map_err(|_| BeepError::not_numeric(text))
            }
            Value::Int(int) => Ok(*int),
            Value::Bool(boolean) => Ok(i64::from(*boolean)),
        }
    }

    /// Renders the value as text.
    pub fn as_text(&self) -> String {
        self.to_string()
    }

    /// Whether the value is the boolean `true`.
    pub fn is_true(&self) -> bool {
        matches!(self, Value::Bool(true))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(text) => write!(f, "{text}"),
            Value::Int(int) => write!(f, "{int}"),
            Value::Bool(true) => write!(f, "True"),
            Value::Bool(false) => write!(f, "False"),
        }
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Text(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Text(text)
    }
}

impl From<i64> for Value {
    fn from(int: i64) -> Self {
        Value::Int(int)
    }
}

impl From<bool> for Value {
    fn from(boolean: bool) -> Self {
        Value::Bool(boolean)
    }
}

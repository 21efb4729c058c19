use super::symbol::VariableTable;
use super::value::Value;
use crate::error::{BeepError, Result};
use log::trace;
use std::str::FromStr;

/// Longest text `*` may produce, in bytes.
pub const MAX_REPEAT_LEN: usize = 1 << 24;

/// Prefix operator of a three-token expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// `+`, integer sum.
    Add,
    /// `-`, integer difference.
    Subtract,
    /// `>`, integer comparison.
    Greater,
    /// `>=`, integer comparison.
    GreaterEqual,
    /// `&`, text concatenation.
    Concat,
    /// `*`, text repetition.
    Repeat,
}

impl FromStr for Operator {
    type Err = BeepError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(match s {
            "+" => Operator::Add,
            "-" => Operator::Subtract,
            ">" => Operator::Greater,
            ">=" => Operator::GreaterEqual,
            "&" => Operator::Concat,
            "*" => Operator::Repeat,
            other => return Err(BeepError::InvalidExpression(other.to_string())),
        })
    }
}

impl Operator {
    /// Applies the operator to two evaluated operands.
    pub fn apply(self, left: &Value, right: &Value) -> Result<Value> {
        let value = match self {
            Operator::Add => left
                .as_int()?
                .checked_add(right.as_int()?)
                .map(Value::from)
                .ok_or_else(|| overflow(left, right, "+"))?,
            Operator::Subtract => left
                .as_int()?
                .checked_sub(right.as_int()?)
                .map(Value::from)
                .ok_or_else(|| overflow(left, right, "-"))?,
            Operator::Greater => Value::from(left.as_int()? > right.as_int()?),
            Operator::GreaterEqual => {
                Value::from(left.as_int()? >= right.as_int()?)
            }
            Operator::Concat => {
                Value::from(format!("{}{}", left.as_text(), right.as_text()))
            }
            Operator::Repeat => {
                let text = left.as_text();
                let times = usize::try_from(right.as_int()?).unwrap_or(0);

                match text.len().checked_mul(times) {
                    Some(len) if len <= MAX_REPEAT_LEN => {
                        Value::from(text.repeat(times))
                    }
                    _ => {
                        return Err(BeepError::InvalidValueType(format!(
                            "'{right}' copies of a {} byte text is too long",
                            text.len()
                        )))
                    }
                }
            }
        };

        Ok(value)
    }
}

fn overflow(left: &Value, right: &Value, op: &str) -> BeepError {
    BeepError::InvalidValueType(format!("'{left} {op} {right}' overflows"))
}

/// Resolves a single token to a value.
///
/// A token starting with `"` is a string literal and loses its first and last
/// character. A token of decimal digits is a number. Anything else names a
/// variable, which must have a value.
pub fn evaluate_operand(token: &str, variables: &VariableTable) -> Result<Value> {
    if token.starts_with('"') {
        let mut chars = token.chars();
        chars.next();
        chars.next_back();
        return Ok(Value::from(chars.as_str()));
    }

    if !token.is_empty() && token.chars().all(|c| c.is_ascii_digit()) {
        return Ok(Value::from(token));
    }

    variables
        .value(token)
        .cloned()
        .ok_or_else(|| BeepError::VarNotDefined(token.to_string()))
}

/// Evaluates an operand or a prefix expression `op a b`.
pub fn evaluate_expression(
    tokens: &[&str],
    variables: &VariableTable,
) -> Result<Value> {
    let value = match tokens {
        [operand] => evaluate_operand(operand, variables)?,
        [op, left, right] => {
            let left = evaluate_operand(left, variables)?;
            let right = evaluate_operand(right, variables)?;

            op.parse::<Operator>()?.apply(&left, &right)?
        }
        _ => return Err(BeepError::too_few_operands(tokens)),
    };

    trace!("{tokens:?} => {value:?}");

    Ok(value)
}

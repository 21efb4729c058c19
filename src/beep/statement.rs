use crate::error::{BeepError, Result};

/// `VAR <kind> <name> [<value>]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration<'a> {
    /// Kind word as written.
    pub kind: &'a str,
    /// Variable name.
    pub name: &'a str,
    /// Initializer token, quotes included. Only set when exactly one token
    /// follows the name.
    pub value: Option<&'a str>,
}

/// A statement borrowed from the tokens of one source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement<'a> {
    /// No tokens after the label, or a blank line.
    Empty,
    /// Variable declaration.
    Var(Declaration<'a>),
    /// `ASSIGN <name> <expression...>`
    Assign {
        /// Target variable.
        name: &'a str,
        /// Expression tokens.
        expression: Vec<&'a str>,
    },
    /// `IF <expression...> <label>`
    If {
        /// Condition tokens.
        expression: Vec<&'a str>,
        /// Jump target when the condition is true.
        label: &'a str,
    },
    /// `GOTO <label>`
    Goto {
        /// Jump target.
        label: &'a str,
    },
    /// `PRINT <operand...>`
    Print {
        /// Operand tokens, each evaluated on its own.
        operands: Vec<&'a str>,
    },
    /// Leading keyword that is not part of BEEP. Skipped when executed.
    Unknown(&'a str),
}

impl<'a> Statement<'a> {
    /// Builds a statement from the label-stripped tokens of a line.
    pub fn parse(body: &[&'a str]) -> Result<Self> {
        let statement = match *body {
            [] => Statement::Empty,
            ["VAR", kind, name, ref rest @ ..] => Statement::Var(Declaration {
                kind,
                name,
                value: match *rest {
                    [value] => Some(value),
                    _ => None,
                },
            }),
            ["ASSIGN", name, ref expression @ ..] => Statement::Assign {
                name,
                expression: expression.to_vec(),
            },
            [keyword, ref expression @ .., label] if is_if(keyword) => {
                Statement::If {
                    expression: expression.to_vec(),
                    label,
                }
            }
            ["GOTO", label, ..] => Statement::Goto { label },
            ["PRINT", ref operands @ ..] => Statement::Print {
                operands: operands.to_vec(),
            },
            ["VAR" | "ASSIGN" | "GOTO", ..] => {
                return Err(BeepError::too_few_operands(body))
            }
            [keyword] if is_if(keyword) => {
                return Err(BeepError::too_few_operands(body))
            }
            [keyword, ..] => Statement::Unknown(keyword),
        };

        Ok(statement)
    }
}

/// `IF` is the one keyword matched regardless of case.
fn is_if(keyword: &str) -> bool {
    keyword.eq_ignore_ascii_case("IF")
}

use thiserror::Error;

/// Wrapper for Result
pub type Result<T> = std::result::Result<T, BeepError>;

#[derive(Error, Debug, PartialEq, Eq, Clone)]
/// Error that halts a BEEP program.
pub enum BeepError {
    /// A referenced variable is not defined or has no value.
    #[error("variable {0} is not defined")]
    VarNotDefined(String),

    /// A `GOTO` or `IF` target has no entry in the label table.
    #[error("label '{0}' is not defined")]
    LabelNotDefined(String),

    /// An expression or statement has the wrong number of operands.
    #[error("expression '{0}' has too few operands")]
    TooFewOperands(String),

    /// Unknown operator in a three-token expression.
    #[error("unknown operator: {0}")]
    InvalidExpression(String),

    /// An operand could not be coerced to the type its operator needs.
    #[error("{0}")]
    InvalidValueType(String),
}

impl BeepError {
    pub(crate) fn not_numeric(value: &str) -> Self {
        BeepError::InvalidValueType(format!("'{value}' is not numeric"))
    }

    pub(crate) fn too_few_operands(tokens: &[&str]) -> Self {
        BeepError::TooFewOperands(format!("[{}]", tokens.join(", ")))
    }

    /// Name of the error kind, as used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            BeepError::VarNotDefined(_) => "VarNotDefined",
            BeepError::LabelNotDefined(_) => "LabelNotDefined",
            BeepError::TooFewOperands(_) => "TooFewOperands",
            BeepError::InvalidExpression(_) => "InvalidExpression",
            BeepError::InvalidValueType(_) => "InvalidValueType",
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq, Clone)]
#[error("line {line}: {source}")]
/// A [`BeepError`] together with the 1-based line it occurred on.
pub struct LineError {
    /// 1-based line number.
    pub line: usize,
    /// Underlying error.
    pub source: BeepError,
}

#[derive(Error, Debug, PartialEq, Eq, Clone)]
/// Non-fatal problem found while scanning a program before execution.
pub enum LoadDiagnostic {
    /// A label was defined more than once. The first definition is kept.
    #[error("label {name} appears on multiple lines: {first} and {duplicate}")]
    DuplicateLabel {
        /// Label name.
        name: String,
        /// Line of the definition that is kept.
        first: usize,
        /// Line of the ignored definition.
        duplicate: usize,
    },

    /// `VAR` without both a kind and a name.
    #[error("declaration on line {0} needs a type and a name")]
    MalformedDeclaration(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_error_display() {
        let error = LineError {
            line: 3,
            source: BeepError::LabelNotDefined("NOWHERE".to_string()),
        };

        assert_eq!(error.to_string(), "line 3: label 'NOWHERE' is not defined");
        assert_eq!(error.source.kind(), "LabelNotDefined");
    }

    #[test]
    fn test_duplicate_label_display() {
        let diagnostic = LoadDiagnostic::DuplicateLabel {
            name: "LOOP".to_string(),
            first: 2,
            duplicate: 7,
        };

        assert_eq!(
            diagnostic.to_string(),
            "label LOOP appears on multiple lines: 2 and 7"
        );
    }
}

use super::value::Value;
use crate::error::LoadDiagnostic;
use log::{debug, warn};
use std::collections::BTreeMap;
use std::fmt;

/// Declared kind of a variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VarKind {
    /// `INT`
    Int,
    /// `STRING`
    String,
    /// Any other kind word, kept as written.
    Other(String),
}

impl From<&str> for VarKind {
    fn from(word: &str) -> Self {
        match word {
            "INT" => VarKind::Int,
            "STRING" => VarKind::String,
            other => VarKind::Other(other.to_string()),
        }
    }
}

impl fmt::Display for VarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VarKind::Int => write!(f, "INT"),
            VarKind::String => write!(f, "STRING"),
            VarKind::Other(kind) => write!(f, "{kind}"),
        }
    }
}

/// A declared variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    /// Kind given in the latest declaration.
    pub kind: VarKind,
    /// Current value, if the variable was initialized or assigned.
    pub value: Option<Value>,
}

/// Declared variables, keyed by case-sensitive name.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct VariableTable(BTreeMap<String, Variable>);

impl VariableTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a declaration.
    ///
    /// The kind is always overwritten. An initializer starting with `"` has
    /// its surrounding quotes stripped. Without an initializer an existing
    /// value is kept.
    pub fn declare(&mut self, kind: VarKind, name: &str, value: Option<&str>) {
        let value = value.map(|token| {
            if token.starts_with('"') {
                Value::from(token.trim_matches('"'))
            } else {
                Value::from(token)
            }
        });

        debug!("Declaring {kind} {name} = {value:?}");

        let variable = self.0.entry(name.to_string()).or_insert(Variable {
            kind: kind.clone(),
            value: None,
        });

        variable.kind = kind;
        if value.is_some() {
            variable.value = value;
        }
    }

    /// Whether `name` has been declared.
    pub fn is_declared(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Current value of `name`, if declared and given a value.
    pub fn value(&self, name: &str) -> Option<&Value> {
        self.0.get(name).and_then(|v| v.value.as_ref())
    }

    /// Sets the value of an already declared variable.
    ///
    /// Returns `false` if `name` was never declared.
    pub fn assign(&mut self, name: &str, value: Value) -> bool {
        match self.0.get_mut(name) {
            Some(variable) => {
                variable.value = Some(value);
                true
            }
            None => false,
        }
    }

    /// Variables in ascending order by name.
    pub fn sorted(&self) -> impl Iterator<Item = (&str, &Variable)> {
        self.0.iter().map(|(name, var)| (name.as_str(), var))
    }

    /// Number of declared variables.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no variables are declared.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Labels and the 1-based line they annotate.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LabelTable(BTreeMap<String, usize>);

impl LabelTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a label. A duplicate keeps the first definition and is reported.
    pub fn add(
        &mut self,
        name: &str,
        line: usize,
    ) -> Result<(), LoadDiagnostic> {
        if let Some(&first) = self.0.get(name) {
            warn!("Label {name} on line {line} already defined on line {first}");

            return Err(LoadDiagnostic::DuplicateLabel {
                name: name.to_string(),
                first,
                duplicate: line,
            });
        }

        self.0.insert(name.to_string(), line);
        Ok(())
    }

    /// 1-based line number of `name`.
    pub fn line_of(&self, name: &str) -> Option<usize> {
        self.0.get(name).copied()
    }

    /// Labels in ascending order by name.
    pub fn sorted(&self) -> impl Iterator<Item = (&str, usize)> {
        self.0.iter().map(|(name, line)| (name.as_str(), *line))
    }

    /// Number of labels.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no labels.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

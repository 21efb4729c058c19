use super::line::Line;
use super::statement::Statement;
use super::symbol::{LabelTable, VarKind, VariableTable};
use crate::error::LoadDiagnostic;
use log::{debug, info};

/// A BEEP program: its raw source lines, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    lines: Vec<String>,
}

/// Tables and diagnostics produced by scanning a [`Program`] once before
/// execution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scan {
    /// Declared variables and their initial values.
    pub variables: VariableTable,
    /// Labels and their 1-based line numbers.
    pub labels: LabelTable,
    /// Non-fatal problems, in source order.
    pub diagnostics: Vec<LoadDiagnostic>,
}

impl Program {
    /// Creates a program from its lines.
    pub fn new(lines: Vec<String>) -> Self {
        Program { lines }
    }

    /// Source lines.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Line at 0-based `index`.
    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the program has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Collects labels and variable declarations.
    pub fn scan(&self) -> Scan {
        let mut scan = Scan::default();

        for (index, raw) in self.lines.iter().enumerate() {
            let number = index + 1;
            let line = Line::parse(raw);

            if let Some(label) = line.label {
                if let Err(diagnostic) = scan.labels.add(label, number) {
                    scan.diagnostics.push(diagnostic);
                }
            }

            if line.keyword() == Some("VAR") {
                match Statement::parse(&line.body) {
                    Ok(Statement::Var(declaration)) => {
                        scan.variables.declare(
                            VarKind::from(declaration.kind),
                            declaration.name,
                            declaration.value,
                        );
                    }
                    _ => scan
                        .diagnostics
                        .push(LoadDiagnostic::MalformedDeclaration(number)),
                }
            }
        }

        info!(
            "Scanned {} lines: {} variables, {} labels",
            self.len(),
            scan.variables.len(),
            scan.labels.len()
        );
        debug!("Labels: {:?}", scan.labels);

        scan
    }
}

impl From<&str> for Program {
    fn from(source: &str) -> Self {
        Program::new(source.lines().map(str::to_string).collect())
    }
}

use super::expr::{evaluate_expression, evaluate_operand};
use super::line::Line;
use super::program::{Program, Scan};
use super::statement::Statement;
use super::symbol::{LabelTable, VarKind, VariableTable};
use crate::error::{BeepError, LineError, LoadDiagnostic, Result};
use log::{debug, error, info, trace, warn};
use std::io::Write;

/// Default maximum number of statements in a single run.
pub const DEFAULT_MAX_STATEMENTS: usize = 5000;

/// Execution settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Echo every line before it is executed.
    pub verbose: bool,
    /// Stop after this many statements.
    pub max_statements: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            verbose: false,
            max_statements: DEFAULT_MAX_STATEMENTS,
        }
    }
}

/// Why a run stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Halt {
    /// Ran past the last line.
    Completed,
    /// Hit [`Config::max_statements`].
    LoopLimit,
    /// A statement failed.
    Failed(LineError),
}

/// Result of a single run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Statements dispatched, blank lines included.
    pub statements: usize,
    /// Why execution stopped.
    pub halt: Halt,
    /// Variables as they were when execution stopped.
    pub variables: VariableTable,
}

impl Outcome {
    /// Whether the program ran to its end.
    pub fn is_completed(&self) -> bool {
        self.halt == Halt::Completed
    }
}

enum Transfer {
    Next,
    Jump(usize),
    Print(String),
}

/// Runs a [`Program`] with the tables from its [`Scan`].
#[derive(Debug, Clone)]
pub struct Executor {
    program: Program,
    scan: Scan,
    config: Config,
}

impl Executor {
    /// Scans `program` and prepares it for execution.
    pub fn new(program: Program, config: Config) -> Self {
        let scan = program.scan();

        Executor {
            program,
            scan,
            config,
        }
    }

    /// The program being executed.
    pub fn program(&self) -> &Program {
        &self.program
    }

    /// Variables as declared before execution.
    pub fn variables(&self) -> &VariableTable {
        &self.scan.variables
    }

    /// Labels found in the program.
    pub fn labels(&self) -> &LabelTable {
        &self.scan.labels
    }

    /// Problems found while scanning.
    pub fn diagnostics(&self) -> &[LoadDiagnostic] {
        &self.scan.diagnostics
    }

    /// Executes the program, writing its output to `out`.
    ///
    /// Every run starts from the scanned variables, so repeated runs are
    /// independent. Only errors writing to `out` are returned; BEEP errors
    /// end the run and are reported in [`Outcome::halt`].
    pub fn run<W: Write>(&self, out: &mut W) -> std::io::Result<Outcome> {
        let mut variables = self.scan.variables.clone();
        let mut cursor = 0;
        let mut statements = 0;

        info!("Executing {} lines", self.program.len());
        writeln!(out, "execution begins...")?;

        let halt = loop {
            let Some(raw) = self.program.line(cursor) else {
                break Halt::Completed;
            };

            if statements >= self.config.max_statements {
                warn!("Statement limit {} reached", self.config.max_statements);
                writeln!(
                    out,
                    "***Error: an infinite loop was most likely encountered"
                )?;
                break Halt::LoopLimit;
            }

            statements += 1;
            let number = cursor + 1;

            trace!("{number}: {raw}");
            if self.config.verbose {
                writeln!(out, "executing line {number}: {raw}")?;
            }

            match self.step(raw, &mut variables) {
                Ok(Transfer::Next) => cursor += 1,
                Ok(Transfer::Jump(line)) => {
                    debug!("Jumping from line {number} to line {line}");
                    cursor = line - 1;
                }
                Ok(Transfer::Print(text)) => {
                    writeln!(out, "{text}")?;
                    cursor += 1;
                }
                Err(source) => {
                    error!("Line {number}: {}: {source}", source.kind());
                    writeln!(out, "*** line {number} error detected ***")?;
                    writeln!(out, "{:10} {number} *** {source} ***", "")?;
                    break Halt::Failed(LineError {
                        line: number,
                        source,
                    });
                }
            }
        };

        writeln!(out, "execution ends, {statements} lines executed")?;
        info!("Execution stopped after {statements} statements: {halt:?}");

        Ok(Outcome {
            statements,
            halt,
            variables,
        })
    }

    fn step(&self, raw: &str, variables: &mut VariableTable) -> Result<Transfer> {
        let line = Line::parse(raw);

        match Statement::parse(&line.body)? {
            Statement::Empty => Ok(Transfer::Next),
            Statement::Var(declaration) => {
                variables.declare(
                    VarKind::from(declaration.kind),
                    declaration.name,
                    declaration.value,
                );
                Ok(Transfer::Next)
            }
            Statement::Assign { name, expression } => {
                if !variables.is_declared(name) {
                    return Err(BeepError::VarNotDefined(name.to_string()));
                }

                let value = evaluate_expression(&expression, variables)?;
                variables.assign(name, value);

                Ok(Transfer::Next)
            }
            Statement::If { expression, label } => {
                if evaluate_expression(&expression, variables)?.is_true() {
                    self.jump(label)
                } else {
                    Ok(Transfer::Next)
                }
            }
            Statement::Goto { label } => self.jump(label),
            Statement::Print { operands } => {
                let text = operands
                    .iter()
                    .map(|o| evaluate_operand(o, variables).map(|v| v.as_text()))
                    .collect::<Result<Vec<String>>>()?
                    .join(" ");

                Ok(Transfer::Print(text))
            }
            Statement::Unknown(keyword) => {
                warn!("Ignoring unknown statement {keyword}");
                Ok(Transfer::Next)
            }
        }
    }

    fn jump(&self, label: &str) -> Result<Transfer> {
        self.scan
            .labels
            .line_of(label)
            .map(Transfer::Jump)
            .ok_or_else(|| BeepError::LabelNotDefined(label.to_string()))
    }
}

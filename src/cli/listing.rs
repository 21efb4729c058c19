use crate::beep::symbol::{LabelTable, VariableTable};
use crate::beep::Program;
use crate::error::LoadDiagnostic;
use std::io::{Result, Write};
use std::path::Path;

/// Writes the numbered source listing.
pub fn write_source<W: Write>(
    out: &mut W,
    path: &Path,
    program: &Program,
) -> Result<()> {
    writeln!(out, "BEEP source code in {}:", path.display())?;

    for (index, line) in program.lines().iter().enumerate() {
        writeln!(out, "{:>3}. {}", index + 1, line)?;
    }

    Ok(())
}

/// Writes one `***Error:` line per load diagnostic.
pub fn write_diagnostics<W: Write>(
    out: &mut W,
    diagnostics: &[LoadDiagnostic],
) -> Result<()> {
    for diagnostic in diagnostics {
        writeln!(out, "***Error: {diagnostic}")?;
    }

    Ok(())
}

/// Writes variables sorted by name, with their kind and value if any.
pub fn write_variables<W: Write>(
    out: &mut W,
    variables: &VariableTable,
) -> Result<()> {
    writeln!(out, "Variables:")?;
    writeln!(out, "    {:<12} {:<9} {}", "Variable", "Type", "Value")?;

    for (name, variable) in variables.sorted() {
        let name = name.to_uppercase();
        let kind = variable.kind.to_string();

        match &variable.value {
            Some(value) => writeln!(out, "    {name:<12} {kind:<9} {value}")?,
            None => writeln!(out, "    {name:<12} {kind}")?,
        }
    }

    Ok(())
}

/// Writes labels sorted by name, with their line number.
pub fn write_labels<W: Write>(out: &mut W, labels: &LabelTable) -> Result<()> {
    writeln!(out, "Labels:")?;
    writeln!(out, "    {:<12} {}", "Label", "Statement")?;

    for (name, line) in labels.sorted() {
        writeln!(out, "    {:<12} {}", name.to_uppercase(), line)?;
    }

    Ok(())
}

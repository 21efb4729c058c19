use anyhow::Result;
use beeptools::beep::value::Value;
use beeptools::beep::{Config, Halt};
use beeptools::error::{BeepError, LineError, LoadDiagnostic};

mod common;

fn file_test(filename: &str, reference: &str) -> Result<()> {
    let (outcome, output) = common::run_script(filename, Config::default())?;

    assert!(outcome.is_completed(), "{:?}", outcome.halt);
    assert_eq!(output, reference);

    Ok(())
}

fn error_test(filename: &str, line: usize, error: BeepError) -> Result<String> {
    let (outcome, output) = common::run_script(filename, Config::default())?;

    assert_eq!(
        outcome.halt,
        Halt::Failed(LineError {
            line,
            source: error,
        })
    );

    Ok(output)
}

#[test]
fn test_assign_print() -> Result<()> {
    file_test(
        "assign_print.beep",
        "execution begins...\n6\nexecution ends, 3 lines executed\n",
    )
}

#[test]
fn test_count_loop() -> Result<()> {
    let (outcome, output) =
        common::run_script("count_loop.beep", Config::default())?;

    assert!(outcome.is_completed());
    assert_eq!(outcome.variables.value("N"), Some(&Value::Int(4)));
    assert_eq!(
        output,
        "execution begins...\nexecution ends, 10 lines executed\n"
    );

    Ok(())
}

#[test]
fn test_strings() -> Result<()> {
    file_test(
        "strings.beep",
        "execution begins...\n====\nBEEP! ====\ndone\nexecution ends, 10 lines executed\n",
    )
}

#[test]
fn test_duplicate_label() -> Result<()> {
    let program = common::get_script("duplicate_label.beep")?;
    let scan = program.scan();

    assert_eq!(scan.labels.line_of("target"), Some(4));
    assert_eq!(
        scan.diagnostics,
        vec![LoadDiagnostic::DuplicateLabel {
            name: "target".to_string(),
            first: 4,
            duplicate: 5,
        }]
    );

    file_test(
        "duplicate_label.beep",
        "execution begins...\nsecond\n1\nexecution ends, 5 lines executed\n",
    )
}

#[test]
fn test_unresolved_label() -> Result<()> {
    let output = error_test(
        "unresolved_label.beep",
        1,
        BeepError::LabelNotDefined("NOWHERE".to_string()),
    )?;

    assert!(!output.contains("unreachable"));
    assert!(output.contains("*** line 1 error detected ***"));

    Ok(())
}

#[test]
fn test_unassigned_variable() -> Result<()> {
    error_test(
        "unassigned.beep",
        2,
        BeepError::VarNotDefined("X".to_string()),
    )?;

    Ok(())
}

#[test]
fn test_bad_operand() -> Result<()> {
    let output = error_test(
        "bad_operand.beep",
        3,
        BeepError::InvalidValueType("'beep' is not numeric".to_string()),
    )?;

    assert!(output.ends_with("execution ends, 3 lines executed\n"));

    Ok(())
}

#[test]
fn test_infinite_loop() -> Result<()> {
    let (outcome, output) =
        common::run_script("infinite.beep", Config::default())?;

    assert_eq!(outcome.halt, Halt::LoopLimit);
    assert_eq!(outcome.statements, 5000);
    assert_eq!(outcome.variables.value("spins"), Some(&Value::Int(2500)));
    assert!(output
        .contains("***Error: an infinite loop was most likely encountered"));

    Ok(())
}

#[test]
fn test_custom_statement_limit() -> Result<()> {
    let config = Config {
        max_statements: 11,
        ..Config::default()
    };
    let (outcome, _) = common::run_script("infinite.beep", config)?;

    assert_eq!(outcome.halt, Halt::LoopLimit);
    assert_eq!(outcome.variables.value("spins"), Some(&Value::Int(5)));

    Ok(())
}

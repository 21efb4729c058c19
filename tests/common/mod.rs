use anyhow::Result;
use beeptools::beep::{Config, Executor, Outcome, Program};
use std::fs;
use std::path::PathBuf;

pub fn get_script_path(filename: &str) -> PathBuf {
    let mut path = PathBuf::from(file!());
    path.pop();
    path.pop();
    path.pop();
    path.push("testdata");
    path.push("beep");
    path.push(filename);

    path
}

#[allow(dead_code)]
pub fn get_script(filename: &str) -> Result<Program> {
    let source = fs::read_to_string(get_script_path(filename))?;

    Ok(Program::from(source.as_str()))
}

#[allow(dead_code)]
pub fn run_script(filename: &str, config: Config) -> Result<(Outcome, String)> {
    let executor = Executor::new(get_script(filename)?, config);

    let mut out = Vec::new();
    let outcome = executor.run(&mut out)?;

    Ok((outcome, String::from_utf8(out)?))
}

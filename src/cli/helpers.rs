use crate::beep::Program;
use anyhow::{bail, Context, Result};
use log::debug;
use std::path::{Path, PathBuf};

/// Directory holding the log files.
pub fn get_log_dir() -> PathBuf {
    std::env::temp_dir().join("beeptools")
}

/// Decodes Latin-1 bytes. Every byte is one character.
pub fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

/// Reads a BEEP program from `path`.
pub fn read_program<P: AsRef<Path>>(path: P) -> Result<Program> {
    let path = path.as_ref();

    if !path.is_file() {
        bail!("FILE EXISTENCE ERROR: {}", path.display());
    }

    let bytes = std::fs::read(path)
        .with_context(|| format!("Unable to read {}", path.display()))?;

    let program = Program::from(decode_latin1(&bytes).as_str());
    debug!("Read {} lines from {}", program.len(), path.display());

    Ok(program)
}

use super::helpers;
use anyhow::{bail, Context, Result};
use log::{info, LevelFilter};
use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

static LOG_LEVELS: [LevelFilter; 6] = [
    LevelFilter::Off,
    LevelFilter::Error,
    LevelFilter::Warn,
    LevelFilter::Info,
    LevelFilter::Debug,
    LevelFilter::Trace,
];

/// Maps the number of `-l` switches to a level filter.
pub fn level_for(verbosity: usize) -> Result<LevelFilter> {
    match LOG_LEVELS.get(verbosity) {
        Some(level) => Ok(*level),
        None => bail!(
            "Verbosity must be between 0 and {}, not {}!",
            LOG_LEVELS.len() - 1,
            verbosity
        ),
    }
}

/// Log file used when running `program`.
pub fn log_path(program: &Path) -> PathBuf {
    let stem = program
        .file_stem()
        .map_or(Cow::Borrowed("beep"), |s| s.to_string_lossy());

    helpers::get_log_dir().join(format!("{stem}.log"))
}

/// Sets up file logging for a run of `program`.
///
/// Returns the log file, or `None` if logging is off.
pub fn setup_logger(verbosity: usize, program: &Path) -> Result<Option<PathBuf>> {
    let level = level_for(verbosity)?;

    if level == LevelFilter::Off {
        return Ok(None);
    }

    fs::create_dir_all(helpers::get_log_dir())?;

    let path = log_path(program);
    let file = fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&path)
        .with_context(|| format!("Unable to open log {}", path.display()))?;

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{:.1}][{}][{}:{}] {}",
                record.level(),
                chrono::Local::now().format("%H:%M:%S.%6f"),
                record.target().rsplit("::").next().unwrap_or_default(),
                record.line().unwrap_or(0),
                message
            ));
        })
        .level(level)
        .chain(file)
        .apply()?;

    info!("Logging {} at {level}", program.display());

    Ok(Some(path))
}

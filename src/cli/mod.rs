/// Argument parsing
pub mod args;
/// Main beep code
pub mod beep;
/// Helpers
pub mod helpers;
/// Source listing and symbol tables
pub mod listing;
/// Logging setup
pub mod logging;

pub use args::Args;

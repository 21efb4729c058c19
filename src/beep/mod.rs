/// Statement executor
pub mod exec;
/// Expression evaluation
pub mod expr;
/// Tokenizer and label handling
pub mod line;
/// Program and load-time scan
pub mod program;
/// Statement parsing
pub mod statement;
/// Variable and label tables
pub mod symbol;
/// Runtime values
pub mod value;

pub use exec::{Config, Executor, Halt, Outcome};
pub use program::{Program, Scan};

use thiserror::Error;

/// Fatal parameter-file errors, reported to the user with the offending
/// 1-based line where one exists.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("line {line}: duplicate parameter {name:?}")]
    DuplicateParameter { line: usize, name: String },

    #[error("line {line}: unknown parameter {name:?}")]
    UnknownParameter { line: usize, name: String },

    #[error("line {line}: {name} has no value")]
    MissingValue { line: usize, name: String },

    #[error("line {line}: {name} expects {expected}, got {got:?}")]
    InvalidValue {
        line:     usize,
        name:     &'static str,
        expected: &'static str,
        got:      String,
    },

    #[error("line {line}: {name} value {got} is out of range")]
    OutOfRange {
        line: usize,
        name: &'static str,
        got:  String,
    },

    #[error("line {line}: unexpected trailing input")]
    TrailingInput { line: usize },

    #[error("line {line}: unknown instruction character {found:?}")]
    UnknownInstruction { line: usize, found: char },

    #[error("initial program uses instruction {0:?} outside the instruction set")]
    InstructionOutsidePool(char),

    #[error("missing required parameter {0:?}")]
    MissingParameter(&'static str),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

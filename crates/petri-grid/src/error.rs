use thiserror::Error;

/// Fatal board-file errors.  None of these are recoverable mid-run: the
/// loading layer reports them to the user and terminates gracefully.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("line {line}: unknown character {found:?} on board")]
    UnknownCharacter { line: usize, found: char },

    #[error("line {line}: row has {got} cells, expected {expected}")]
    UnevenRows {
        line:     usize,
        expected: usize,
        got:      usize,
    },

    #[error("board is empty")]
    EmptyBoard,
}

pub type GridResult<T> = Result<T, GridError>;

/// Why a line of input was not a menu selection.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChoiceError {
    #[error("not a number: {0:?}")]
    NotANumber(String),

    #[error("no menu entry {0}")]
    OutOfRange(i64),
}

#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

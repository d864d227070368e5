use thiserror::Error;

/// Classification of a fault, used when callers only care about the
/// category and not the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaultKind {
    Type,
    AssertionFailed,
    Conversion,
    Index,
    Arity,
}

/// A fault raised by a value operation or a native function.
///
/// Faults abort the native call that raised them and travel back to the
/// interpreter as the call's `Err` outcome; a native function never returns
/// a sentinel error value in place of a normal [`Value`](crate::Value).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum Fault {
    /// An operand's variant does not satisfy an operation's precondition.
    #[error("type error: {0}")]
    Type(String),
    /// The `assert` builtin's condition evaluated false; carries the
    /// user-supplied message.
    #[error("assertion failed: {0}")]
    AssertionFailed(String),
    /// A textual-to-numeric conversion could not parse its input.
    #[error("conversion error: {0}")]
    Conversion(String),
    /// An out-of-bounds list access.
    #[error("index error: {0}")]
    Index(String),
    /// A native call supplied fewer arguments than the function's declared
    /// minimum; raised by the bridge before the function body runs.
    #[error("arity error: {0}")]
    Arity(String),
}

impl Fault {
    pub fn kind(&self) -> FaultKind {
        match self {
            Fault::Type(_) => FaultKind::Type,
            Fault::AssertionFailed(_) => FaultKind::AssertionFailed,
            Fault::Conversion(_) => FaultKind::Conversion,
            Fault::Index(_) => FaultKind::Index,
            Fault::Arity(_) => FaultKind::Arity,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Fault::Type(message)
            | Fault::AssertionFailed(message)
            | Fault::Conversion(message)
            | Fault::Index(message)
            | Fault::Arity(message) => message,
        }
    }
}

pub type Result<T> = std::result::Result<T, Fault>;

//! Runtime core for the Calla language: the tagged value model, the fault
//! taxonomy, the parse-time symbol vocabulary, and the native-function
//! bridge the bytecode interpreter calls into. The lexer, compiler, and
//! instruction loop live elsewhere and consume only the interfaces
//! re-exported here.

pub mod bridge;
mod builtins;
pub mod fault;
pub mod value;
pub mod vocab;

pub use bridge::Registry;
pub use fault::{Fault, FaultKind, Result};
pub use value::{ClosureRef, NativeFn, NativeFunction, Value};
pub use vocab::{Keyword, NodeKind};

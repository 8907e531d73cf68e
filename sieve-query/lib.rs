//! Compiles structural search patterns into regex query trees.
//!
//! The compiled query is a cheap candidate filter: it matches content whose
//! literal pieces appear in order, with arbitrary content (including
//! newlines) wherever the pattern had a hole. Structural matching proper
//! happens elsewhere, on the candidates this query lets through.

mod assemble;
mod compile;
mod error;
mod eval;
mod options;
mod q;

pub use assemble::*;
pub use compile::*;
pub use error::*;
pub use eval::*;
pub use options::*;
pub use q::*;

//! Tokenizer and literal escaping for structural search patterns.
//!
//! A structural pattern is plain text interspersed with typed placeholders
//! called *holes*, for example `foo(:[args])`. This crate splits a pattern
//! into literal segments and holes, and escapes the literal segments for
//! inclusion in a regular expression.

mod escape;
mod hole;
mod sniff;
mod span;
mod tokenizer;

pub use escape::*;
pub use hole::*;
pub use sniff::*;
pub use span::*;
pub use tokenizer::*;

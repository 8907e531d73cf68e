use sieve_parser::TokenizerOptions;

use crate::JoinMode;

/// Settings for [`Compiler`](crate::Compiler).
///
/// Deserializes from a table like:
///
/// ```toml
/// ellipsis-holes = true
/// join = "any-piece"
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct CompileOptions {
    /// Treat `...` as a hole.
    pub ellipsis_holes: bool,
    /// How literal fragments are combined into the final regex.
    pub join: JoinMode,
}

impl CompileOptions {
    #[inline]
    #[must_use]
    pub fn tokenizer(&self) -> TokenizerOptions {
        TokenizerOptions {
            ellipsis_holes: self.ellipsis_holes,
        }
    }
}

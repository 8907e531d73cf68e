#[derive(Debug, Clone, thiserror::Error)]
pub enum CompileError {
    /// The assembled regex did not parse. Escaped fragments are always valid
    /// regex syntax, so this indicates a bug in the compiler.
    #[error("assembled regex {regex:?} is invalid: {error}")]
    Syntax {
        regex: String,
        #[source]
        error: Box<regex_syntax::Error>,
    },
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum MatchError {
    #[error("cannot build matcher for regex {regex:?}: {error}")]
    Regex {
        regex: String,
        #[source]
        error: regex::Error,
    },
}

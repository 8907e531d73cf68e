use sieve_parser::{escape_fragment, tokenize};

use crate::{Assembly, CompileError, CompileOptions, Q, RegexpQuery, Target, assemble};

/// Compile `pattern` with default options.
///
/// Returns `Q::Const(true)` if the pattern has no literal content, for
/// example `""` or `":[a]:[b]"`.
pub fn compile_structural_pattern(pattern: &str) -> Result<Q, CompileError> {
    Compiler::default().compile(pattern)
}

#[inline]
pub fn compile_with_options(pattern: &str, options: &CompileOptions) -> Result<Q, CompileError> {
    Compiler::new(*options).compile(pattern)
}

/// Structural pattern compiler.
///
/// Holds only its options; every call is independent, so one `Compiler` can
/// be shared between threads.
#[derive(Clone, Debug, Default)]
pub struct Compiler {
    options: CompileOptions,
}

impl Compiler {
    #[inline]
    #[must_use]
    pub fn new(options: CompileOptions) -> Self {
        Self { options }
    }

    #[inline]
    #[must_use]
    pub fn options(&self) -> &CompileOptions {
        &self.options
    }

    /// Tokenize, escape, and join the pattern without parsing the result.
    #[must_use]
    pub fn assemble(&self, pattern: &str) -> Assembly {
        let tokens = tokenize(pattern, &self.options.tokenizer());
        let fragments = tokens.texts().map(escape_fragment).collect::<Vec<_>>();
        assemble(&fragments, self.options.join)
    }

    pub fn compile(&self, pattern: &str) -> Result<Q, CompileError> {
        let assembly = self.assemble(pattern);
        if assembly.is_trivial() {
            tracing::debug!("pattern {pattern:?} has no literal content, matching everything");
            return Ok(Q::Const(true));
        }

        let hir = assembly.parse()?;
        tracing::trace!(
            connectors = assembly.connectors(),
            "compiled {pattern:?} to {assembly}"
        );

        Ok(wrap(RegexpQuery {
            regex: assembly.into_string(),
            hir,
            case_sensitive: true,
            target: Target::Content,
        }))
    }
}

/// Wrap a single compiled regex in the shape the index engine expects: a
/// disjunction of one conjunction of one leaf.
#[must_use]
pub fn wrap(regexp: RegexpQuery) -> Q {
    Q::Or(vec![Q::And(vec![Q::Regexp(regexp)])])
}

use std::fmt::Write as _;

use regex_syntax::hir::Hir;

use crate::CompileError;

/// Non-greedy "any content, across lines" inserted wherever a hole was.
pub const CONNECTOR: &str = r"(.|\s)*?";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum JoinMode {
    /// All fragments, in pattern order, separated by [`CONNECTOR`].
    #[default]
    Ordered,
    /// Any single non-empty fragment. Looser than `Ordered`, but each
    /// alternative is a plain literal, which index engines handle well.
    AnyPiece,
}

/// A regex assembled from escaped fragments, before parsing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Assembly {
    regex: String,
    fragments: Vec<String>,
    connectors: usize,
    mode: JoinMode,
}

/// Join escaped fragments into a regex.
///
/// In ordered mode, each fragment is wrapped in a capture group and a
/// [`CONNECTOR`] goes between every two fragments, so `n` fragments (from
/// `n - 1` holes) produce `n - 1` connectors. Empty fragments are kept,
/// which means adjacent holes still demand content between them.
#[must_use]
pub fn assemble<S: AsRef<str>>(fragments: &[S], mode: JoinMode) -> Assembly {
    let mut regex = String::new();
    let mut connectors = 0;

    match mode {
        JoinMode::Ordered => {
            for (i, fragment) in fragments.iter().enumerate() {
                if i != 0 {
                    regex.push_str(CONNECTOR);
                    connectors += 1;
                }
                regex.push('(');
                regex.push_str(fragment.as_ref());
                regex.push(')');
            }
        }
        JoinMode::AnyPiece => {
            let pieces = fragments
                .iter()
                .map(AsRef::as_ref)
                .filter(|fragment| !fragment.is_empty());
            for (i, fragment) in pieces.enumerate() {
                if i != 0 {
                    regex.push('|');
                }
                _ = write!(regex, "(({fragment}))");
            }
        }
    }

    Assembly {
        regex,
        fragments: fragments.iter().map(|s| s.as_ref().to_owned()).collect(),
        connectors,
        mode,
    }
}

impl Assembly {
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.regex
    }

    #[inline]
    #[must_use]
    pub fn into_string(self) -> String {
        self.regex
    }

    #[inline]
    #[must_use]
    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    /// Number of [`CONNECTOR`]s in the regex.
    #[inline]
    #[must_use]
    pub fn connectors(&self) -> usize {
        self.connectors
    }

    #[inline]
    #[must_use]
    pub fn mode(&self) -> JoinMode {
        self.mode
    }

    /// True if no fragment carries literal content. Such a regex matches
    /// everything, so there is nothing to parse.
    #[must_use]
    pub fn is_trivial(&self) -> bool {
        self.fragments.iter().all(String::is_empty)
    }

    /// Parse the regex into a syntax tree: multi-line, Unicode-aware,
    /// case-sensitive.
    pub fn parse(&self) -> Result<Hir, CompileError> {
        parse_regex(&self.regex)
    }
}

impl std::fmt::Display for Assembly {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.regex)
    }
}

pub(crate) fn parse_regex(regex: &str) -> Result<Hir, CompileError> {
    regex_syntax::ParserBuilder::new()
        .multi_line(true)
        .unicode(true)
        .case_insensitive(false)
        .build()
        .parse(regex)
        .map_err(|error| CompileError::Syntax {
            regex: regex.to_owned(),
            error: Box::new(error),
        })
}

use crate::Span;

/// The kind of placeholder a hole stands for.
///
/// The variants are listed in the order the tokenizer tries them, so that the
/// more specific forms win over the generic `:[name]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum HoleKind {
    /// `:[[name]]`
    Alphanumeric,
    /// `:[name.]`
    Punctuated,
    /// `:[name\n]`
    Newline,
    /// `:[ name]` or `:[ ]`
    Whitespace,
    /// `:[name]`
    Anything,
    /// `...`, only recognized when enabled in [`TokenizerOptions`](crate::TokenizerOptions).
    Ellipsis,
}

impl HoleKind {
    /// Human-readable description, used in diagnostics.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            HoleKind::Alphanumeric => "alphanumeric",
            HoleKind::Punctuated => "anything with punctuation",
            HoleKind::Newline => "anything with newline",
            HoleKind::Whitespace => "whitespace",
            HoleKind::Anything => "anything",
            HoleKind::Ellipsis => "ellipsis",
        }
    }
}

impl std::fmt::Display for HoleKind {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description())
    }
}

/// A hole recognized in a pattern.
///
/// The name and span only serve diagnostics. Compilation treats every hole
/// as a split point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct Hole<'a> {
    pub kind: HoleKind,
    pub name: Option<&'a str>,
    pub span: Span,
}

impl std::fmt::Display for Hole<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = self.name.unwrap_or("");
        match self.kind {
            HoleKind::Alphanumeric => write!(f, ":[[{name}]]"),
            HoleKind::Punctuated => write!(f, ":[{name}.]"),
            HoleKind::Newline => write!(f, ":[{name}\\n]"),
            HoleKind::Whitespace => write!(f, ":[ {name}]"),
            HoleKind::Anything => write!(f, ":[{name}]"),
            HoleKind::Ellipsis => f.write_str("..."),
        }
    }
}

/// Regex matching one or more whitespace characters of any kind.
pub const WHITESPACE_RUN: &str = r"[\s]+";

/// Escape every regex metacharacter in `literal`.
#[inline]
#[must_use]
pub fn escape_literal(literal: &str) -> String {
    regex_syntax::escape(literal)
}

/// Replace each maximal run of ASCII whitespace in an escaped literal with
/// [`WHITESPACE_RUN`].
///
/// The escaper never emits an escaped whitespace character, so a whitespace
/// run in the escaped text is always literal whitespace from the pattern. A
/// pattern backslash before a space escapes to `\\` followed by the space,
/// which becomes `\\[\s]+`.
#[must_use]
pub fn collapse_whitespace(escaped: &str) -> String {
    let mut buf = String::with_capacity(escaped.len());
    let mut in_run = false;
    for ch in escaped.chars() {
        if ch.is_ascii_whitespace() {
            if !in_run {
                buf.push_str(WHITESPACE_RUN);
                in_run = true;
            }
        } else {
            buf.push(ch);
            in_run = false;
        }
    }
    buf
}

/// Turn a literal segment into a regex fragment: escape first, then
/// collapse whitespace.
#[inline]
#[must_use]
pub fn escape_fragment(literal: &str) -> String {
    collapse_whitespace(&escape_literal(literal))
}

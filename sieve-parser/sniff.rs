use crate::{TokenizerOptions, tokenize};

/// True if `text` contains anything that looks like a hole, including `...`.
///
/// Callers use this to suggest structural search when a literal or regex
/// search for the same text came back empty.
#[must_use]
pub fn looks_structural(text: &str) -> bool {
    !tokenize(
        text,
        &TokenizerOptions {
            ellipsis_holes: true,
        },
    )
    .is_literal()
}

/// Join the pattern terms of a query into one structural pattern, separated
/// by single spaces. Empty terms are skipped.
#[must_use]
pub fn join_pattern_values<I, S>(values: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut buf = String::new();
    for value in values {
        let value = value.as_ref();
        if value.is_empty() {
            continue;
        }
        if !buf.is_empty() {
            buf.push(' ');
        }
        buf.push_str(value);
    }
    buf
}

use winnow::{
    Parser,
    combinator::{alt, delimited, opt},
    error::{ContextError, ErrMode},
    token::take_while,
};

use crate::{Hole, HoleKind, Span};

pub type PResult<T> = Result<T, ErrMode<ContextError>>;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TokenizerOptions {
    /// Treat `...` as an anything-hole.
    pub ellipsis_holes: bool,
}

/// Literal text between two holes (or the start/end of the pattern).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub span: Span,
}

impl Segment<'_> {
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// A pattern split on its holes.
///
/// There is always exactly one more segment than there are holes: segment
/// `i` is the text immediately before hole `i`, and the last segment is the
/// text after the last hole. Segments may be empty.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Tokens<'a> {
    segments: Vec<Segment<'a>>,
    holes: Vec<Hole<'a>>,
}

impl<'a> Tokens<'a> {
    #[inline]
    #[must_use]
    pub fn segments(&self) -> &[Segment<'a>] {
        &self.segments
    }

    #[inline]
    #[must_use]
    pub fn holes(&self) -> &[Hole<'a>] {
        &self.holes
    }

    /// True if the pattern contains no holes at all.
    #[inline]
    #[must_use]
    pub fn is_literal(&self) -> bool {
        self.holes.is_empty()
    }

    /// True if at least one segment is non-empty.
    #[must_use]
    pub fn has_literal_content(&self) -> bool {
        self.segments.iter().any(|segment| !segment.is_empty())
    }

    /// The literal text of each segment, in pattern order.
    pub fn texts(&self) -> impl ExactSizeIterator<Item = &'a str> + '_ {
        self.segments.iter().map(|segment| segment.text)
    }
}

/// Split `pattern` into literal segments and holes.
///
/// Anything that does not parse as one of the hole forms is literal text, so
/// this never fails: `:[x` or `:[x y]` simply match themselves.
#[must_use]
pub fn tokenize<'a>(pattern: &'a str, options: &TokenizerOptions) -> Tokens<'a> {
    let mut segments = Vec::new();
    let mut holes = Vec::new();

    let mut input = pattern;
    let mut segment_start = 0;

    loop {
        let Some(skip) = input.find(|ch| is_hole_start(ch, options)) else {
            break;
        };
        input = &input[skip..];

        let start = pattern.len() - input.len();
        let checkpoint = input;
        if let Ok((kind, name)) = hole(&mut input, options) {
            let end = pattern.len() - input.len();
            segments.push(Segment {
                text: &pattern[segment_start..start],
                span: Span::new(segment_start, start),
            });
            holes.push(Hole {
                kind,
                name,
                span: Span::new(start, end),
            });
            segment_start = end;
        } else {
            // Hole starts are ASCII, so skipping one byte stays on a char boundary.
            input = &checkpoint[1..];
        }
    }

    segments.push(Segment {
        text: &pattern[segment_start..],
        span: Span::new(segment_start, pattern.len()),
    });

    tracing::trace!(
        holes = holes.len(),
        segments = segments.len(),
        "tokenized {pattern:?}"
    );

    Tokens { segments, holes }
}

#[inline]
fn is_hole_start(ch: char, options: &TokenizerOptions) -> bool {
    ch == ':' || (options.ellipsis_holes && ch == '.')
}

#[inline]
fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

fn hole<'a>(input: &mut &'a str, options: &TokenizerOptions) -> PResult<(HoleKind, Option<&'a str>)> {
    if options.ellipsis_holes {
        alt((structural_hole, ellipsis_hole)).parse_next(input)
    } else {
        structural_hole(input)
    }
}

/// Holes in priority order: the most specific forms are tried before the
/// generic `:[name]`.
fn structural_hole<'a>(input: &mut &'a str) -> PResult<(HoleKind, Option<&'a str>)> {
    alt((
        alphanumeric_hole,
        punctuated_hole,
        newline_hole,
        whitespace_hole,
        anything_hole,
    ))
    .parse_next(input)
}

fn word<'a>(input: &mut &'a str) -> PResult<&'a str> {
    take_while(1.., is_word_char).parse_next(input)
}

fn alphanumeric_hole<'a>(input: &mut &'a str) -> PResult<(HoleKind, Option<&'a str>)> {
    delimited(":[[", word, "]]")
        .map(|name| (HoleKind::Alphanumeric, Some(name)))
        .parse_next(input)
}

fn punctuated_hole<'a>(input: &mut &'a str) -> PResult<(HoleKind, Option<&'a str>)> {
    delimited(":[", word, ".]")
        .map(|name| (HoleKind::Punctuated, Some(name)))
        .parse_next(input)
}

fn newline_hole<'a>(input: &mut &'a str) -> PResult<(HoleKind, Option<&'a str>)> {
    delimited(":[", word, "\\n]")
        .map(|name| (HoleKind::Newline, Some(name)))
        .parse_next(input)
}

fn whitespace_hole<'a>(input: &mut &'a str) -> PResult<(HoleKind, Option<&'a str>)> {
    delimited((":[", take_while(1.., ' ')), opt(word), ']')
        .map(|name| (HoleKind::Whitespace, name))
        .parse_next(input)
}

fn anything_hole<'a>(input: &mut &'a str) -> PResult<(HoleKind, Option<&'a str>)> {
    delimited(":[", word, ']')
        .map(|name| (HoleKind::Anything, Some(name)))
        .parse_next(input)
}

fn ellipsis_hole<'a>(input: &mut &'a str) -> PResult<(HoleKind, Option<&'a str>)> {
    "...".value((HoleKind::Ellipsis, None)).parse_next(input)
}

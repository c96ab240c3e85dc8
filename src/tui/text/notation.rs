//! Math notation segmentation: split content into text and `$$...$$` spans.
//!
//! Scanning is greedy-paired, non-nested, left to right. Delimiters are
//! consumed; an unmatched trailing `$$` and everything after it stays plain
//! text, since the scan only advances on a found closing delimiter.

use std::sync::LazyLock;

use regex::Regex;

use super::typeset;

static SPAN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\$(.*?)\$\$").expect("notation span pattern is valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MathDisplay {
    Inline,
    Block,
}

/// Segment of a content string: either plain text or a math span
/// (delimiter-stripped). Segments cover the input exactly once, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Segment<'a> {
    Text(&'a str),
    Math {
        source: &'a str,
        display: MathDisplay,
    },
}

/// The whole trimmed input as a single `$$...$$` span with no inner `$$`,
/// or None.
fn full_block_span(input: &str) -> Option<&str> {
    let trimmed = input.trim();
    let inner = trimmed.strip_prefix("$$")?.strip_suffix("$$")?;
    if inner.contains("$$") {
        return None;
    }
    Some(inner)
}

/// Split `input` into text and math segments.
///
/// When `block_mode` is set and the entire input is exactly one math span, the
/// result is a single block-display segment (full-width rendering instead of
/// inline within a text run).
pub(crate) fn split_segments(input: &str, block_mode: bool) -> Vec<Segment<'_>> {
    if block_mode && let Some(source) = full_block_span(input) {
        return vec![Segment::Math {
            source,
            display: MathDisplay::Block,
        }];
    }

    let mut segments = Vec::new();
    let mut last = 0;
    for m in SPAN_RE.find_iter(input) {
        if m.start() > last {
            segments.push(Segment::Text(&input[last..m.start()]));
        }
        segments.push(Segment::Math {
            source: &input[m.start() + 2..m.end() - 2],
            display: MathDisplay::Inline,
        });
        last = m.end();
    }
    if last < input.len() {
        segments.push(Segment::Text(&input[last..]));
    }
    segments
}

/// A segment ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Rendered {
    Text(String),
    Math {
        text: String,
        display: MathDisplay,
    },
    /// Typesetting failed; carries the raw notation source so the user can
    /// see exactly which fragment is malformed.
    Error { raw: String },
}

/// Segment `input` and typeset each math span. A typesetting failure replaces
/// only the failing segment with [`Rendered::Error`]; other segments and all
/// text are unaffected. Never panics or returns an error itself.
pub(crate) fn render(input: &str, block_mode: bool) -> Vec<Rendered> {
    split_segments(input, block_mode)
        .into_iter()
        .map(|segment| match segment {
            Segment::Text(text) => Rendered::Text(text.to_string()),
            Segment::Math { source, display } => {
                let typeset = match display {
                    MathDisplay::Inline => typeset::typeset_inline(source),
                    MathDisplay::Block => typeset::typeset_block(source),
                };
                match typeset {
                    Ok(text) => Rendered::Math { text, display },
                    Err(e) => {
                        log::debug!("notation typesetting failed on {:?}: {}", source, e);
                        Rendered::Error {
                            raw: source.to_string(),
                        }
                    }
                }
            }
        })
        .collect()
}

//! Text utilities: math notation segmentation, typesetting, and line wrapping.

pub(crate) mod notation;
pub(crate) mod typeset;

pub(crate) use notation::{MathDisplay, Rendered, render};

/// Split text into display lines respecting embedded newlines, then wrap each
/// line to `width` columns. Uses textwrap for correct UTF-8 handling.
pub(crate) fn wrap_lines(s: &str, width: usize) -> Vec<String> {
    let mut out = Vec::new();
    for line in s.split('\n') {
        if line.is_empty() {
            out.push(String::new());
        } else if width == 0 {
            out.push(line.to_string());
        } else {
            out.extend(textwrap::wrap(line, width).into_iter().map(|c| c.into_owned()));
        }
    }
    out
}

#[cfg(test)]
mod tests;

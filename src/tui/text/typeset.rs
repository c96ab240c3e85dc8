//! Plain-text math typesetting: convert LaTeX-style notation source into
//! Unicode suitable for a terminal cell grid.
//!
//! This is the typesetting collaborator behind [`super::notation::render`].
//! Malformed notation (unknown command, unbalanced braces, dangling script)
//! fails with [`TypesetError`]; the caller isolates the failure per segment.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum TypesetError {
    #[error("unknown command \\{0}")]
    UnknownCommand(String),
    #[error("unbalanced braces")]
    UnbalancedBraces,
    #[error("'{0}' without operand")]
    DanglingScript(char),
    #[error("\\{0} missing {{...}} argument")]
    MissingArgument(&'static str),
}

/// Commands rendered as a single Unicode symbol.
const SYMBOLS: &[(&str, &str)] = &[
    ("alpha", "α"),
    ("beta", "β"),
    ("gamma", "γ"),
    ("delta", "δ"),
    ("epsilon", "ε"),
    ("theta", "θ"),
    ("lambda", "λ"),
    ("mu", "μ"),
    ("pi", "π"),
    ("sigma", "σ"),
    ("phi", "φ"),
    ("omega", "ω"),
    ("Delta", "Δ"),
    ("Sigma", "Σ"),
    ("Omega", "Ω"),
    ("pm", "±"),
    ("mp", "∓"),
    ("times", "×"),
    ("div", "÷"),
    ("cdot", "·"),
    ("leq", "≤"),
    ("geq", "≥"),
    ("neq", "≠"),
    ("approx", "≈"),
    ("equiv", "≡"),
    ("infty", "∞"),
    ("sum", "∑"),
    ("prod", "∏"),
    ("int", "∫"),
    ("to", "→"),
    ("rightarrow", "→"),
    ("leftarrow", "←"),
    ("partial", "∂"),
    ("nabla", "∇"),
    ("in", "∈"),
    ("subset", "⊂"),
    ("cup", "∪"),
    ("cap", "∩"),
    ("forall", "∀"),
    ("exists", "∃"),
    ("degree", "°"),
    // Sizing/spacing commands that have no terminal equivalent: dropped.
    ("left", ""),
    ("right", ""),
    ("quad", " "),
    ("qquad", "  "),
];

const SUPERSCRIPTS: &[(char, char)] = &[
    ('0', '⁰'),
    ('1', '¹'),
    ('2', '²'),
    ('3', '³'),
    ('4', '⁴'),
    ('5', '⁵'),
    ('6', '⁶'),
    ('7', '⁷'),
    ('8', '⁸'),
    ('9', '⁹'),
    ('+', '⁺'),
    ('-', '⁻'),
    ('=', '⁼'),
    ('(', '⁽'),
    (')', '⁾'),
    ('n', 'ⁿ'),
    ('i', 'ⁱ'),
];

const SUBSCRIPTS: &[(char, char)] = &[
    ('0', '₀'),
    ('1', '₁'),
    ('2', '₂'),
    ('3', '₃'),
    ('4', '₄'),
    ('5', '₅'),
    ('6', '₆'),
    ('7', '₇'),
    ('8', '₈'),
    ('9', '₉'),
    ('+', '₊'),
    ('-', '₋'),
    ('=', '₌'),
    ('(', '₍'),
    (')', '₎'),
    ('a', 'ₐ'),
    ('e', 'ₑ'),
    ('x', 'ₓ'),
    ('n', 'ₙ'),
    ('i', 'ᵢ'),
];

/// Typeset a math span for inline display within surrounding text.
pub(crate) fn typeset_inline(src: &str) -> Result<String, TypesetError> {
    typeset(src)
}

/// Typeset a math span for standalone block display. Same conversion as
/// inline; centering is the caller's layout concern.
pub(crate) fn typeset_block(src: &str) -> Result<String, TypesetError> {
    typeset(src)
}

fn typeset(src: &str) -> Result<String, TypesetError> {
    let chars: Vec<char> = src.chars().collect();
    let mut out = String::with_capacity(src.len());
    let mut depth = 0usize;
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            '\\' => {
                i += 1;
                i = render_command(&chars, i, &mut out)?;
            }
            '^' => {
                i = render_script(&chars, i + 1, &mut out, '^', SUPERSCRIPTS)?;
            }
            '_' => {
                i = render_script(&chars, i + 1, &mut out, '_', SUBSCRIPTS)?;
            }
            '{' => {
                depth += 1;
                i += 1;
            }
            '}' => {
                if depth == 0 {
                    return Err(TypesetError::UnbalancedBraces);
                }
                depth -= 1;
                i += 1;
            }
            c => {
                out.push(c);
                i += 1;
            }
        }
    }

    if depth != 0 {
        return Err(TypesetError::UnbalancedBraces);
    }
    Ok(out)
}

/// Render `\command` starting at the char after the backslash.
/// Returns the index after the consumed input.
fn render_command(chars: &[char], i: usize, out: &mut String) -> Result<usize, TypesetError> {
    // Escaped single char: "\{", "\}", "\$", "\\" and thin spaces "\,", "\;".
    if let Some(&c) = chars.get(i)
        && !c.is_ascii_alphabetic()
    {
        match c {
            '{' | '}' | '$' | '%' | '&' => out.push(c),
            '\\' => out.push('\n'),
            ',' | ';' | '!' | ' ' => out.push(' '),
            other => return Err(TypesetError::UnknownCommand(other.to_string())),
        }
        return Ok(i + 1);
    }

    let start = i;
    let mut end = i;
    while end < chars.len() && chars[end].is_ascii_alphabetic() {
        end += 1;
    }
    if end == start {
        return Err(TypesetError::UnknownCommand(String::new()));
    }
    let name: String = chars[start..end].iter().collect();

    match name.as_str() {
        "frac" => {
            let (numerator, end) = read_group(chars, end, "frac")?;
            let (denominator, end) = read_group(chars, end, "frac")?;
            out.push_str(&format!(
                "{}/{}",
                parenthesize(&typeset_chars(&numerator)?),
                parenthesize(&typeset_chars(&denominator)?)
            ));
            Ok(end)
        }
        "sqrt" => {
            let (radicand, end) = read_group(chars, end, "sqrt")?;
            out.push('√');
            let inner = typeset_chars(&radicand)?;
            if inner.chars().count() > 1 {
                out.push_str(&format!("({})", inner));
            } else {
                out.push_str(&inner);
            }
            Ok(end)
        }
        _ => {
            for (cmd, symbol) in SYMBOLS {
                if *cmd == name {
                    out.push_str(symbol);
                    return Ok(end);
                }
            }
            Err(TypesetError::UnknownCommand(name))
        }
    }
}

/// Render a `^` or `_` operand (brace group or single char) starting at `i`.
/// Maps to Unicode super/subscript characters when every operand char has a
/// mapping, otherwise falls back to `^(...)` / `_(...)`.
fn render_script(
    chars: &[char],
    i: usize,
    out: &mut String,
    marker: char,
    table: &[(char, char)],
) -> Result<usize, TypesetError> {
    let (operand, end) = match chars.get(i) {
        Some(&'{') => {
            let (group, end) = read_group(chars, i, "script")
                .map_err(|_| TypesetError::UnbalancedBraces)?;
            (typeset_chars(&group)?, end)
        }
        Some(&c) if c != '^' && c != '_' && c != '}' => (c.to_string(), i + 1),
        _ => return Err(TypesetError::DanglingScript(marker)),
    };
    if operand.is_empty() {
        return Err(TypesetError::DanglingScript(marker));
    }

    let mapped: Option<String> = operand
        .chars()
        .map(|c| table.iter().find(|(from, _)| *from == c).map(|(_, to)| *to))
        .collect();
    match mapped {
        Some(s) => out.push_str(&s),
        None => out.push_str(&format!("{}({})", marker, operand)),
    }
    Ok(end)
}

/// Read a `{...}` group starting at `i` (which must point at `{`), honoring
/// nesting. Returns the inner chars and the index after the closing brace.
fn read_group(
    chars: &[char],
    i: usize,
    command: &'static str,
) -> Result<(Vec<char>, usize), TypesetError> {
    if chars.get(i) != Some(&'{') {
        return Err(TypesetError::MissingArgument(command));
    }
    let mut depth = 1usize;
    let mut j = i + 1;
    while j < chars.len() {
        match chars[j] {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Ok((chars[i + 1..j].to_vec(), j + 1));
                }
            }
            _ => {}
        }
        j += 1;
    }
    Err(TypesetError::UnbalancedBraces)
}

fn typeset_chars(chars: &[char]) -> Result<String, TypesetError> {
    typeset(&chars.iter().collect::<String>())
}

/// Wrap multi-char operands in parentheses so "a+b"/"2" reads ambiguity-free.
fn parenthesize(s: &str) -> String {
    if s.chars().count() > 1 {
        format!("({})", s)
    } else {
        s.to_string()
    }
}

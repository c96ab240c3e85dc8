use super::notation::{MathDisplay, Rendered, Segment, render, split_segments};
use super::typeset::{TypesetError, typeset_block, typeset_inline};
use super::wrap_lines;

/// Restore delimiters and concatenate; must reconstruct the original input.
fn reconstruct(segments: &[Segment<'_>]) -> String {
    segments
        .iter()
        .map(|s| match s {
            Segment::Text(t) => t.to_string(),
            Segment::Math { source, .. } => format!("$${}$$", source),
        })
        .collect()
}

#[test]
fn split_empty_input() {
    assert!(split_segments("", false).is_empty());
    assert!(split_segments("", true).is_empty());
}

#[test]
fn split_plain_text_only() {
    let segs = split_segments("solve for x", false);
    assert_eq!(segs, vec![Segment::Text("solve for x")]);
}

#[test]
fn split_full_span_block_mode() {
    let segs = split_segments("$$x^2 + 1$$", true);
    assert_eq!(
        segs,
        vec![Segment::Math {
            source: "x^2 + 1",
            display: MathDisplay::Block,
        }]
    );
}

#[test]
fn split_full_span_without_block_mode_is_inline() {
    let segs = split_segments("$$x^2 + 1$$", false);
    assert_eq!(
        segs,
        vec![Segment::Math {
            source: "x^2 + 1",
            display: MathDisplay::Inline,
        }]
    );
}

#[test]
fn block_mode_ignored_for_mixed_content() {
    // Not a single full-string span: falls through to inline scanning.
    let segs = split_segments("$$a$$ and $$b$$", true);
    assert_eq!(segs.len(), 3);
    assert!(matches!(
        segs[0],
        Segment::Math {
            display: MathDisplay::Inline,
            ..
        }
    ));
}

#[test]
fn split_mixed_text_and_math() {
    let input = "before $$a$$ middle $$b$$ after";
    let segs = split_segments(input, false);
    assert_eq!(
        segs,
        vec![
            Segment::Text("before "),
            Segment::Math {
                source: "a",
                display: MathDisplay::Inline,
            },
            Segment::Text(" middle "),
            Segment::Math {
                source: "b",
                display: MathDisplay::Inline,
            },
            Segment::Text(" after"),
        ]
    );
    assert_eq!(reconstruct(&segs), input);
}

#[test]
fn split_unterminated_delimiter_is_text() {
    let segs = split_segments("$$unterminated", false);
    assert_eq!(segs, vec![Segment::Text("$$unterminated")]);
}

#[test]
fn split_trailing_unmatched_delimiter_stays_text() {
    let segs = split_segments("a $$x$$ then $$broken", false);
    assert_eq!(
        segs,
        vec![
            Segment::Text("a "),
            Segment::Math {
                source: "x",
                display: MathDisplay::Inline,
            },
            Segment::Text(" then $$broken"),
        ]
    );
}

#[test]
fn split_adjacent_spans() {
    let input = "$$a$$$$b$$";
    let segs = split_segments(input, false);
    assert_eq!(segs.len(), 2);
    assert_eq!(reconstruct(&segs), input);
}

#[test]
fn split_covers_input_exactly_once() {
    for input in [
        "",
        "plain",
        "$$x$$",
        "a $$x$$ b",
        "$$a$$$$b$$",
        "tail $$open",
        "$$a$$ mid $$b$$",
        "unicode é $$\\pi$$ end",
    ] {
        assert_eq!(reconstruct(&split_segments(input, false)), input);
    }
}

#[test]
fn split_is_pure() {
    let input = "before $$a$$ after";
    assert_eq!(split_segments(input, true), split_segments(input, true));
    assert_eq!(render(input, false), render(input, false));
}

#[test]
fn render_typesets_math() {
    let out = render("area: $$\\pi r^2$$.", false);
    assert_eq!(
        out,
        vec![
            Rendered::Text("area: ".to_string()),
            Rendered::Math {
                text: "π r²".to_string(),
                display: MathDisplay::Inline,
            },
            Rendered::Text(".".to_string()),
        ]
    );
}

#[test]
fn render_block_mode() {
    let out = render("$$\\frac{a}{b}$$", true);
    assert_eq!(
        out,
        vec![Rendered::Math {
            text: "a/b".to_string(),
            display: MathDisplay::Block,
        }]
    );
}

#[test]
fn render_isolates_failures_per_segment() {
    let out = render("ok $$x^2$$ mid $$\\nosuchcmd$$ end", false);
    assert_eq!(
        out,
        vec![
            Rendered::Text("ok ".to_string()),
            Rendered::Math {
                text: "x²".to_string(),
                display: MathDisplay::Inline,
            },
            Rendered::Text(" mid ".to_string()),
            Rendered::Error {
                raw: "\\nosuchcmd".to_string(),
            },
            Rendered::Text(" end".to_string()),
        ]
    );
}

#[test]
fn render_block_failure_carries_raw_source() {
    let out = render("$${unclosed$$", true);
    assert_eq!(
        out,
        vec![Rendered::Error {
            raw: "{unclosed".to_string(),
        }]
    );
}

#[test]
fn typeset_symbols() {
    assert_eq!(typeset_inline("\\alpha + \\beta").unwrap(), "α + β");
    assert_eq!(typeset_inline("a \\neq b").unwrap(), "a ≠ b");
    assert_eq!(typeset_inline("x \\to \\infty").unwrap(), "x → ∞");
}

#[test]
fn typeset_fraction() {
    assert_eq!(typeset_inline("\\frac{1}{2}").unwrap(), "1/2");
    assert_eq!(typeset_inline("\\frac{a+b}{2}").unwrap(), "(a+b)/2");
}

#[test]
fn typeset_sqrt() {
    assert_eq!(typeset_inline("\\sqrt{2}").unwrap(), "√2");
    assert_eq!(typeset_inline("\\sqrt{x+1}").unwrap(), "√(x+1)");
}

#[test]
fn typeset_scripts() {
    assert_eq!(typeset_inline("x^2").unwrap(), "x²");
    assert_eq!(typeset_inline("x^{10}").unwrap(), "x¹⁰");
    assert_eq!(typeset_inline("a_1").unwrap(), "a₁");
    // Unmappable operand falls back to explicit notation.
    assert_eq!(typeset_inline("e^{-y}").unwrap(), "e^(-y)");
}

#[test]
fn typeset_braces_group_silently() {
    assert_eq!(typeset_inline("{ab}c").unwrap(), "abc");
}

#[test]
fn typeset_escapes() {
    assert_eq!(typeset_inline("\\{x\\}").unwrap(), "{x}");
    assert_eq!(typeset_inline("a\\,b").unwrap(), "a b");
}

#[test]
fn typeset_unknown_command_fails() {
    assert_eq!(
        typeset_inline("\\nosuchcmd"),
        Err(TypesetError::UnknownCommand("nosuchcmd".to_string()))
    );
}

#[test]
fn typeset_unbalanced_braces_fail() {
    assert_eq!(typeset_inline("{x"), Err(TypesetError::UnbalancedBraces));
    assert_eq!(typeset_inline("x}"), Err(TypesetError::UnbalancedBraces));
    assert_eq!(
        typeset_inline("\\frac{1}{2"),
        Err(TypesetError::UnbalancedBraces)
    );
}

#[test]
fn typeset_dangling_script_fails() {
    assert_eq!(typeset_inline("x^"), Err(TypesetError::DanglingScript('^')));
    assert_eq!(typeset_inline("x_"), Err(TypesetError::DanglingScript('_')));
}

#[test]
fn typeset_missing_frac_argument_fails() {
    assert_eq!(
        typeset_inline("\\frac"),
        Err(TypesetError::MissingArgument("frac"))
    );
}

#[test]
fn typeset_block_matches_inline_conversion() {
    assert_eq!(
        typeset_block("\\sum_{i} x_i").unwrap(),
        typeset_inline("\\sum_{i} x_i").unwrap()
    );
}

#[test]
fn typeset_empty_source_ok() {
    assert_eq!(typeset_inline("").unwrap(), "");
}

#[test]
fn wrap_lines_preserves_newlines() {
    assert_eq!(wrap_lines("line1\nline2", 100), ["line1", "line2"]);
}

#[test]
fn wrap_lines_wraps_long_line() {
    assert_eq!(wrap_lines("hello world test", 8), ["hello", "world", "test"]);
}

#[test]
fn wrap_lines_empty_lines_kept() {
    assert_eq!(wrap_lines("a\n\nb", 100), ["a", "", "b"]);
}

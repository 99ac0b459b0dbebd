//! Unified diff rendering

use crossterm::style::Stylize;
use similar::{ChangeTag, TextDiff};

use super::theme::colors;

/// Line-numbered unified diff of `expected` (a) against `actual` (b).
///
/// Only changed lines and `context` lines around them are shown.
pub fn render_unified_diff(
    path: &str,
    expected: &str,
    actual: &str,
    context: usize,
    color: bool,
) -> String {
    let diff = TextDiff::from_lines(expected, actual);
    let lines = expected.lines().count().max(actual.lines().count()).max(1);
    let width = lines.to_string().len();

    let mut out = String::new();
    push_line(&mut out, &format!("--- a/{} (expected)", path), Style::Header, color);
    push_line(&mut out, &format!("+++ b/{} (actual)", path), Style::Header, color);

    for (i, group) in diff.grouped_ops(context).iter().enumerate() {
        if i > 0 {
            push_line(&mut out, &format!("{:>w$} {:>w$} ...", "", "", w = width), Style::Dim, color);
        }
        for op in group {
            for change in diff.iter_changes(op) {
                let (old_no, new_no, sign, style) = match change.tag() {
                    ChangeTag::Delete => (change.old_index(), None, '-', Style::Removed),
                    ChangeTag::Insert => (None, change.new_index(), '+', Style::Added),
                    ChangeTag::Equal => (change.old_index(), change.new_index(), ' ', Style::Dim),
                };
                let col = |n: Option<usize>| {
                    n.map(|n| format!("{:>w$}", n + 1, w = width))
                        .unwrap_or_else(|| " ".repeat(width))
                };
                let value = change.value().trim_end_matches(['\n', '\r']);
                let line = format!("{} {} {} {}", col(old_no), col(new_no), sign, value);
                push_line(&mut out, &line, style, color);
            }
        }
    }

    out
}

#[derive(Debug, Clone, Copy)]
enum Style {
    Header,
    Added,
    Removed,
    Dim,
}

fn push_line(out: &mut String, line: &str, style: Style, color: bool) {
    if color {
        let styled = match style {
            Style::Header => line.with(colors::INFO),
            Style::Added => line.with(colors::SUCCESS),
            Style::Removed => line.with(colors::ERROR),
            Style::Dim => line.with(colors::DIM),
        };
        out.push_str(&styled.to_string());
    } else {
        out.push_str(line);
    }
    out.push('\n');
}

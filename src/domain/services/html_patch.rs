//! Parser-free text-region patching for entry HTML
//!
//! Everything here is literal substring search. The entry file is produced
//! by a bundler with a known shape, so a full HTML parser is not needed.

use std::ops::Range;

use thiserror::Error;

use crate::domain::entities::{FLAGS_END, FLAGS_START};

const HEAD_TAG: &str = "<head>";
const TITLE_OPEN: &str = "<title>";
const TITLE_CLOSE: &str = "</title>";

/// Where the flags block sits in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockSpan {
    Absent,
    /// Byte range from the start marker through the end marker
    Present(Range<usize>),
    Malformed(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatchError {
    #[error("no <title> element")]
    MissingTitle,
    #[error("no <head> tag")]
    MissingHead,
    #[error("{0}")]
    Malformed(&'static str),
}

/// Locate the first flags block.
pub fn locate_block(html: &str) -> BlockSpan {
    locate_block_from(html, 0)
}

fn locate_block_from(html: &str, from: usize) -> BlockSpan {
    let hay = &html[from..];
    match (hay.find(FLAGS_START), hay.find(FLAGS_END)) {
        (None, None) => BlockSpan::Absent,
        (None, Some(_)) => BlockSpan::Malformed("end marker without start marker"),
        (Some(_), None) => BlockSpan::Malformed("start marker without end marker"),
        (Some(start), Some(end)) if end < start => {
            BlockSpan::Malformed("end marker before start marker")
        }
        (Some(start), Some(_)) => {
            let after_start = start + FLAGS_START.len();
            match hay[after_start..].find(FLAGS_END) {
                Some(rel_end) => {
                    let end = after_start + rel_end + FLAGS_END.len();
                    BlockSpan::Present(from + start..from + end)
                }
                None => BlockSpan::Malformed("start marker without end marker"),
            }
        }
    }
}

/// Number of start markers in the document.
pub fn count_blocks(html: &str) -> usize {
    html.matches(FLAGS_START).count()
}

/// Content of the first `<title>` element, if any.
pub fn title(html: &str) -> Option<&str> {
    let open = html.find(TITLE_OPEN)? + TITLE_OPEN.len();
    let close = html[open..].find(TITLE_CLOSE)? + open;
    Some(&html[open..close])
}

/// Replace the content of the first `<title>` element.
pub fn replace_title(html: &str, new_title: &str) -> Result<String, PatchError> {
    let open = html.find(TITLE_OPEN).ok_or(PatchError::MissingTitle)? + TITLE_OPEN.len();
    let close = html[open..]
        .find(TITLE_CLOSE)
        .ok_or(PatchError::MissingTitle)?
        + open;

    let mut out = String::with_capacity(html.len() + new_title.len());
    out.push_str(&html[..open]);
    out.push_str(new_title);
    out.push_str(&html[close..]);
    Ok(out)
}

/// Replace the existing flags block with `block`, or insert it after `<head>`.
///
/// Any further blocks left over from stale runs are removed, so the result
/// always holds exactly one.
pub fn upsert_block(html: &str, block: &str) -> Result<String, PatchError> {
    let first = match locate_block(html) {
        BlockSpan::Malformed(msg) => return Err(PatchError::Malformed(msg)),
        BlockSpan::Absent => return insert_after_head(html, block),
        BlockSpan::Present(span) => span,
    };

    let mut out = String::with_capacity(html.len() + block.len());
    out.push_str(&html[..first.start]);
    out.push_str(block);

    let mut cursor = first.end;
    loop {
        match locate_block_from(html, cursor) {
            BlockSpan::Present(span) => {
                let gap = &html[cursor..span.start];
                // drop the newline that separated the stale block from the previous one
                out.push_str(gap.strip_suffix('\n').unwrap_or(gap));
                cursor = span.end;
            }
            BlockSpan::Absent => break,
            BlockSpan::Malformed(msg) => return Err(PatchError::Malformed(msg)),
        }
    }
    out.push_str(&html[cursor..]);
    Ok(out)
}

fn insert_after_head(html: &str, block: &str) -> Result<String, PatchError> {
    let at = html.find(HEAD_TAG).ok_or(PatchError::MissingHead)? + HEAD_TAG.len();

    let mut out = String::with_capacity(html.len() + block.len() + 1);
    out.push_str(&html[..at]);
    out.push('\n');
    out.push_str(block);
    out.push_str(&html[at..]);
    Ok(out)
}

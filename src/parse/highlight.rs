use std::sync::LazyLock;

use regex::Regex;

static HIGHLIGHT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[\[(.*?)\]\]").unwrap_or_else(|_| unreachable!("highlight pattern is valid"))
});

/// A run of message body text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    Plain(&'a str),
    /// Text that was wrapped in `[[...]]`, brackets stripped
    Highlight(&'a str),
}

impl<'a> Segment<'a> {
    pub fn text(&self) -> &'a str {
        match self {
            Segment::Plain(s) | Segment::Highlight(s) => s,
        }
    }
}

/// Split body text into plain and highlighted runs.
///
/// Matching is non-greedy and does not nest; an unclosed `[[` stays plain.
/// Empty plain runs are omitted.
pub fn highlight_segments(text: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut last = 0;
    for caps in HIGHLIGHT_RE.captures_iter(text) {
        let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        if whole.start() > last {
            segments.push(Segment::Plain(&text[last..whole.start()]));
        }
        segments.push(Segment::Highlight(inner.as_str()));
        last = whole.end();
    }
    if last < text.len() {
        segments.push(Segment::Plain(&text[last..]));
    }
    segments
}

/// Body text with the `[[`/`]]` markers removed
pub fn strip_markers(text: &str) -> String {
    highlight_segments(text).iter().map(Segment::text).collect()
}

//! Inline markup: bold, italic, inline code, strikethrough, links.
//!
//! Produces a rendering-agnostic span sequence; the presentation layer maps
//! spans to whatever styling it has. Malformed markup never fails: unmatched
//! markers stay literal text.

use serde::{Deserialize, Serialize};

/// One styled run within a block's leaf text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InlineSpan {
    Text { text: String },
    Bold { text: String },
    Italic { text: String },
    Code { text: String },
    Strikethrough { text: String },
    Link { text: String, url: String },
}

impl InlineSpan {
    pub fn text(t: impl Into<String>) -> Self {
        InlineSpan::Text { text: t.into() }
    }

    pub fn bold(t: impl Into<String>) -> Self {
        InlineSpan::Bold { text: t.into() }
    }

    pub fn italic(t: impl Into<String>) -> Self {
        InlineSpan::Italic { text: t.into() }
    }

    pub fn code(t: impl Into<String>) -> Self {
        InlineSpan::Code { text: t.into() }
    }

    pub fn strikethrough(t: impl Into<String>) -> Self {
        InlineSpan::Strikethrough { text: t.into() }
    }

    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        InlineSpan::Link {
            text: text.into(),
            url: url.into(),
        }
    }
}

fn flush(plain: &mut String, spans: &mut Vec<InlineSpan>) {
    if !plain.is_empty() {
        spans.push(InlineSpan::text(std::mem::take(plain)));
    }
}

/// Delimited span like `**bold**` or `~~gone~~`. Content must be non-empty,
/// otherwise the marker stays literal.
fn delimited(rest: &str, marker: &str) -> Option<(String, usize)> {
    let inner = rest.strip_prefix(marker)?;
    let end = inner.find(marker)?;
    if end == 0 {
        return None;
    }
    Some((inner[..end].to_string(), marker.len() * 2 + end))
}

/// Emphasis with a single-char marker. Requires a word boundary before the
/// opening marker and non-space content edges, so `snake_case_name` and
/// `2 * 3 * 4` stay literal.
fn emphasis(rest: &str, marker: char, prev: Option<char>) -> Option<(String, usize)> {
    if prev.is_some_and(|c| c.is_alphanumeric()) {
        return None;
    }
    let inner = rest.strip_prefix(marker)?;
    let end = inner.find(marker)?;
    if end == 0 {
        return None;
    }
    let content = &inner[..end];
    if content.starts_with(' ') || content.ends_with(' ') {
        return None;
    }
    Some((content.to_string(), 1 + end + 1))
}

/// Explicit `[text](url)` link. The url must be non-empty and contain no
/// whitespace.
fn explicit_link(rest: &str) -> Option<(InlineSpan, usize)> {
    let inner = rest.strip_prefix('[')?;
    let close = inner.find("](")?;
    let label = &inner[..close];
    let after = &inner[close + 2..];
    let end = after.find(')')?;
    let url = &after[..end];
    if url.is_empty() || url.contains(char::is_whitespace) {
        return None;
    }
    Some((InlineSpan::link(label, url), 1 + close + 2 + end + 1))
}

/// Bare URL starting at the current position. Trailing sentence punctuation
/// is left outside the link.
fn bare_url(rest: &str, prev: Option<char>) -> Option<(InlineSpan, usize)> {
    if !rest.starts_with("http://") && !rest.starts_with("https://") {
        return None;
    }
    if prev.is_some_and(|c| c.is_alphanumeric()) {
        return None;
    }
    let end = rest
        .find(|c: char| c.is_whitespace() || matches!(c, '<' | '>' | '"' | ')' | ']'))
        .unwrap_or(rest.len());
    let url = rest[..end].trim_end_matches(['.', ',', ';', ':', '!', '?']);
    if url.len() <= "https://".len() {
        return None;
    }
    Some((InlineSpan::link(url, url), url.len()))
}

/// Resolution order at each position: inline code, bold, strikethrough,
/// explicit link, italic, bare URL. Code wins first so its contents are
/// exempt from further expansion; bold precedes italic so `**` is never
/// read as two italics; explicit links precede autolink so they are not
/// double-wrapped.
fn match_span(rest: &str, prev: Option<char>) -> Option<(InlineSpan, usize)> {
    if let Some((text, used)) = delimited(rest, "`") {
        return Some((InlineSpan::code(text), used));
    }
    if let Some((text, used)) = delimited(rest, "**") {
        return Some((InlineSpan::bold(text), used));
    }
    if let Some((text, used)) = delimited(rest, "~~") {
        return Some((InlineSpan::strikethrough(text), used));
    }
    if let Some(hit) = explicit_link(rest) {
        return Some(hit);
    }
    for marker in ['*', '_'] {
        if let Some((text, used)) = emphasis(rest, marker, prev) {
            return Some((InlineSpan::italic(text), used));
        }
    }
    bare_url(rest, prev)
}

/// Expand one block's leaf text into inline spans. A leading `* ` that
/// survived list detection is substituted with a bullet glyph rather than
/// being treated as emphasis.
pub fn parse_inline(text: &str) -> Vec<InlineSpan> {
    let mut spans = Vec::new();
    let mut plain = String::new();

    let text = match text.strip_prefix("* ") {
        Some(rest) => {
            plain.push_str("\u{2022} ");
            rest
        }
        None => text,
    };

    let mut i = 0;
    while i < text.len() {
        let prev = text[..i].chars().next_back();
        if let Some((span, used)) = match_span(&text[i..], prev) {
            flush(&mut plain, &mut spans);
            spans.push(span);
            i += used;
        } else if let Some(ch) = text[i..].chars().next() {
            plain.push(ch);
            i += ch.len_utf8();
        } else {
            break;
        }
    }
    flush(&mut plain, &mut spans);
    spans
}

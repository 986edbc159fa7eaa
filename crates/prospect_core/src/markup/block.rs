//! Block assembly: fold classified lines into an ordered block sequence.
//!
//! One open accumulator at a time, threaded through a single pass as an
//! explicit tagged union. The sequence is rebuilt from scratch for every
//! render; blocks are never mutated after creation.

use serde::{Deserialize, Serialize};

use crate::markup::line::{classify, LineKind};

/// One structurally classified unit of a rendered message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    Heading {
        level: u8,
        text: String,
    },
    BulletList {
        items: Vec<String>,
    },
    NumberedList {
        items: Vec<String>,
    },
    Table {
        headers: Option<Vec<String>>,
        rows: Vec<Vec<String>>,
    },
    CodeBlock {
        language: Option<String>,
        code: String,
    },
    Blockquote {
        lines: Vec<String>,
    },
    KeyValue {
        key: String,
        value: String,
    },
    Checkbox {
        checked: bool,
        text: String,
    },
    HorizontalRule,
    Paragraph {
        text: String,
    },
}

/// The currently open multi-line accumulator.
#[derive(Debug)]
enum Open {
    None,
    Paragraph(Vec<String>),
    Bullet(Vec<String>),
    Numbered(Vec<String>),
    Table {
        headers: Option<Vec<String>>,
        rows: Vec<Vec<String>>,
    },
    Quote(Vec<String>),
}

/// Finalize the open accumulator into the output. Empty runs (e.g. a blank
/// line after a blank line) produce no block.
fn flush(open: &mut Open, out: &mut Vec<ContentBlock>) {
    match std::mem::replace(open, Open::None) {
        Open::None => {}
        Open::Paragraph(lines) => {
            let text = lines.join("\n");
            let text = text.trim();
            if !text.is_empty() {
                out.push(ContentBlock::Paragraph {
                    text: text.to_string(),
                });
            }
        }
        Open::Bullet(items) => {
            if !items.is_empty() {
                out.push(ContentBlock::BulletList { items });
            }
        }
        Open::Numbered(items) => {
            if !items.is_empty() {
                out.push(ContentBlock::NumberedList { items });
            }
        }
        Open::Table { headers, rows } => {
            if headers.is_some() || !rows.is_empty() {
                out.push(ContentBlock::Table { headers, rows });
            }
        }
        Open::Quote(lines) => {
            if !lines.is_empty() {
                out.push(ContentBlock::Blockquote { lines });
            }
        }
    }
}

/// Parse full message text into an ordered block sequence. Pure and
/// deterministic: identical input always yields an identical sequence.
pub fn parse_blocks(text: &str) -> Vec<ContentBlock> {
    let mut out = Vec::new();
    let mut open = Open::None;
    // Fence interiors are taken verbatim, no re-classification.
    let mut code: Option<(Option<String>, Vec<String>)> = None;
    // Set by a separator line; a table row opening right after it becomes the header.
    let mut prev_was_separator = false;

    for raw in text.split('\n') {
        if let Some((_, lines)) = code.as_mut() {
            if raw.trim().starts_with("```") {
                let (language, lines) = code.take().unwrap_or_default();
                out.push(ContentBlock::CodeBlock {
                    language,
                    code: lines.join("\n"),
                });
            } else {
                lines.push(raw.to_string());
            }
            prev_was_separator = false;
            continue;
        }

        let kind = classify(raw);
        let is_separator = matches!(kind, LineKind::TableSeparator);
        match kind {
            LineKind::Blank => flush(&mut open, &mut out),
            LineKind::CodeFence { language } => {
                flush(&mut open, &mut out);
                code = Some((language, Vec::new()));
            }
            LineKind::TableSeparator => {
                // Swallowed inside an open table; otherwise only closes
                // whatever was open and primes header detection.
                if !matches!(open, Open::Table { .. }) {
                    flush(&mut open, &mut out);
                }
            }
            LineKind::TableRow { cells } => {
                if let Open::Table { rows, .. } = &mut open {
                    rows.push(cells);
                } else {
                    flush(&mut open, &mut out);
                    open = if prev_was_separator {
                        Open::Table {
                            headers: Some(cells),
                            rows: Vec::new(),
                        }
                    } else {
                        Open::Table {
                            headers: None,
                            rows: vec![cells],
                        }
                    };
                }
            }
            LineKind::Bullet { text } => {
                if let Open::Bullet(items) = &mut open {
                    items.push(text);
                } else {
                    flush(&mut open, &mut out);
                    open = Open::Bullet(vec![text]);
                }
            }
            LineKind::Numbered { text } => {
                if let Open::Numbered(items) = &mut open {
                    items.push(text);
                } else {
                    flush(&mut open, &mut out);
                    open = Open::Numbered(vec![text]);
                }
            }
            LineKind::Blockquote { text } => {
                if let Open::Quote(lines) = &mut open {
                    lines.push(text);
                } else {
                    flush(&mut open, &mut out);
                    open = Open::Quote(vec![text]);
                }
            }
            LineKind::Paragraph { text } => {
                if let Open::Paragraph(lines) = &mut open {
                    lines.push(text);
                } else {
                    flush(&mut open, &mut out);
                    open = Open::Paragraph(vec![text]);
                }
            }
            LineKind::Heading { level, text } => {
                flush(&mut open, &mut out);
                out.push(ContentBlock::Heading { level, text });
            }
            LineKind::KeyValue { key, value } => {
                flush(&mut open, &mut out);
                out.push(ContentBlock::KeyValue { key, value });
            }
            LineKind::Checkbox { checked, text } => {
                flush(&mut open, &mut out);
                out.push(ContentBlock::Checkbox { checked, text });
            }
            LineKind::HorizontalRule => {
                flush(&mut open, &mut out);
                out.push(ContentBlock::HorizontalRule);
            }
        }
        prev_was_separator = is_separator;
    }

    // An unterminated fence closes at end of input.
    if let Some((language, lines)) = code.take() {
        out.push(ContentBlock::CodeBlock {
            language,
            code: lines.join("\n"),
        });
    }
    flush(&mut open, &mut out);
    out
}

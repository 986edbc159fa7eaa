//! Line classification: one raw line to exactly one [LineKind].
//!
//! Classification is an ordered cascade; the first classifier that matches
//! wins. The order is a contract: later classifiers assume earlier ones have
//! already failed (e.g. the checkbox classifier only ever sees `- [` lines
//! because the bullet classifier rejects them first).

/// Classified form of one raw line. Code-fence lines toggle code mode in the
/// block assembler rather than contributing content themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    Blank,
    Heading { level: u8, text: String },
    Bullet { text: String },
    Numbered { text: String },
    TableRow { cells: Vec<String> },
    TableSeparator,
    CodeFence { language: Option<String> },
    KeyValue { key: String, value: String },
    HorizontalRule,
    Blockquote { text: String },
    Checkbox { checked: bool, text: String },
    Paragraph { text: String },
}

type Classifier = fn(&str) -> Option<LineKind>;

/// Evaluation order is part of the contract: heading, bullet, numbered,
/// table row (only when not a separator), table separator, code fence,
/// key-value, horizontal rule, blockquote, checkbox. Anything else is a
/// paragraph.
const CLASSIFIERS: &[Classifier] = &[
    heading,
    bullet,
    numbered,
    table_row,
    table_separator,
    code_fence,
    key_value,
    horizontal_rule,
    blockquote,
    checkbox,
];

/// Classify one line (already split on newlines, code-block interiors
/// excluded by the caller).
pub fn classify(line: &str) -> LineKind {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return LineKind::Blank;
    }
    for classifier in CLASSIFIERS {
        if let Some(kind) = classifier(trimmed) {
            return kind;
        }
    }
    LineKind::Paragraph {
        text: trimmed.to_string(),
    }
}

fn heading(line: &str) -> Option<LineKind> {
    let level = line.bytes().take_while(|b| *b == b'#').count();
    if !(1..=6).contains(&level) {
        return None;
    }
    let rest = line[level..].strip_prefix(' ')?;
    Some(LineKind::Heading {
        level: level as u8,
        text: rest.trim().to_string(),
    })
}

fn bullet(line: &str) -> Option<LineKind> {
    // Checkbox syntax shares the `- ` prefix; leave it for the checkbox arm.
    if checkbox(line).is_some() {
        return None;
    }
    let rest = line
        .strip_prefix("- ")
        .or_else(|| line.strip_prefix("* "))?;
    Some(LineKind::Bullet {
        text: rest.trim().to_string(),
    })
}

fn numbered(line: &str) -> Option<LineKind> {
    let digits = line.bytes().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 {
        return None;
    }
    let rest = &line[digits..];
    let rest = rest
        .strip_prefix('.')
        .or_else(|| rest.strip_prefix(')'))?
        .strip_prefix(' ')?;
    Some(LineKind::Numbered {
        text: rest.trim().to_string(),
    })
}

/// Split a `|`-delimited line into trimmed cells, dropping the empty boundary
/// cells produced by leading/trailing pipes. None unless at least one
/// internal delimiter yields two or more non-empty cells.
fn split_cells(line: &str) -> Option<Vec<String>> {
    if !line.contains('|') {
        return None;
    }
    let mut cells: Vec<String> = line.split('|').map(|c| c.trim().to_string()).collect();
    while cells.first().is_some_and(|c| c.is_empty()) {
        cells.remove(0);
    }
    while cells.last().is_some_and(|c| c.is_empty()) {
        cells.pop();
    }
    if cells.len() < 2 || cells.iter().any(|c| c.is_empty()) {
        return None;
    }
    Some(cells)
}

fn separator_cell(cell: &str) -> bool {
    let body = cell.strip_prefix(':').unwrap_or(cell);
    let body = body.strip_suffix(':').unwrap_or(body);
    !body.is_empty() && body.bytes().all(|b| b == b'-')
}

fn table_row(line: &str) -> Option<LineKind> {
    let cells = split_cells(line)?;
    if cells.iter().all(|c| separator_cell(c)) {
        return None; // separator lines match the next classifier
    }
    Some(LineKind::TableRow { cells })
}

fn table_separator(line: &str) -> Option<LineKind> {
    let cells = split_cells(line)?;
    cells
        .iter()
        .all(|c| separator_cell(c))
        .then_some(LineKind::TableSeparator)
}

fn code_fence(line: &str) -> Option<LineKind> {
    let rest = line.strip_prefix("```")?;
    let language = rest.trim();
    Some(LineKind::CodeFence {
        language: (!language.is_empty()).then(|| language.to_string()),
    })
}

/// `Key: value` with a short plain key. The mandatory `": "` delimiter keeps
/// URLs (`https://...`) and prose sentences in the paragraph arm.
fn key_value(line: &str) -> Option<LineKind> {
    let (key, value) = line.split_once(": ")?;
    let key = key.trim();
    let value = value.trim();
    if key.is_empty() || value.is_empty() {
        return None;
    }
    if key.len() > 40 || key.contains('`') || key.contains(':') {
        return None;
    }
    if key.split_whitespace().count() > 4 {
        return None;
    }
    Some(LineKind::KeyValue {
        key: key.to_string(),
        value: value.to_string(),
    })
}

fn horizontal_rule(line: &str) -> Option<LineKind> {
    let mut bytes = line.bytes();
    let first = bytes.next()?;
    if !matches!(first, b'-' | b'*' | b'_') {
        return None;
    }
    (line.len() >= 3 && bytes.all(|b| b == first)).then_some(LineKind::HorizontalRule)
}

fn blockquote(line: &str) -> Option<LineKind> {
    let rest = line.strip_prefix('>')?;
    Some(LineKind::Blockquote {
        text: rest.strip_prefix(' ').unwrap_or(rest).to_string(),
    })
}

fn checkbox(line: &str) -> Option<LineKind> {
    let rest = line
        .strip_prefix("- ")
        .or_else(|| line.strip_prefix("* "))?
        .strip_prefix('[')?;
    let (checked, rest) = if let Some(r) = rest.strip_prefix(' ') {
        (false, r)
    } else if let Some(r) = rest.strip_prefix('x').or_else(|| rest.strip_prefix('X')) {
        (true, r)
    } else {
        return None;
    };
    let rest = rest.strip_prefix(']')?;
    if !rest.is_empty() && !rest.starts_with(' ') {
        return None;
    }
    Some(LineKind::Checkbox {
        checked,
        text: rest.trim().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_line() {
        assert_eq!(classify(""), LineKind::Blank);
        assert_eq!(classify("   "), LineKind::Blank);
    }

    #[test]
    fn heading_levels() {
        assert_eq!(
            classify("# Title"),
            LineKind::Heading {
                level: 1,
                text: "Title".to_string()
            }
        );
        assert_eq!(
            classify("### Sub"),
            LineKind::Heading {
                level: 3,
                text: "Sub".to_string()
            }
        );
    }

    #[test]
    fn seven_hashes_is_paragraph() {
        assert!(matches!(
            classify("####### too deep"),
            LineKind::Paragraph { .. }
        ));
    }

    #[test]
    fn hash_without_space_is_paragraph() {
        assert!(matches!(classify("#hashtag"), LineKind::Paragraph { .. }));
    }

    #[test]
    fn bullet_dash_and_star() {
        assert_eq!(
            classify("- first item"),
            LineKind::Bullet {
                text: "first item".to_string()
            }
        );
        assert_eq!(
            classify("* starred"),
            LineKind::Bullet {
                text: "starred".to_string()
            }
        );
    }

    #[test]
    fn bullet_does_not_swallow_checkbox() {
        assert_eq!(
            classify("- [ ] apply online"),
            LineKind::Checkbox {
                checked: false,
                text: "apply online".to_string()
            }
        );
        assert_eq!(
            classify("- [x] pay fee"),
            LineKind::Checkbox {
                checked: true,
                text: "pay fee".to_string()
            }
        );
    }

    #[test]
    fn bracket_bullet_that_is_not_checkbox() {
        assert_eq!(
            classify("- [draft] notes"),
            LineKind::Bullet {
                text: "[draft] notes".to_string()
            }
        );
    }

    #[test]
    fn numbered_dot_and_paren() {
        assert_eq!(
            classify("1. first"),
            LineKind::Numbered {
                text: "first".to_string()
            }
        );
        assert_eq!(
            classify("12) twelfth"),
            LineKind::Numbered {
                text: "twelfth".to_string()
            }
        );
    }

    #[test]
    fn number_without_marker_is_paragraph() {
        assert!(matches!(classify("2024 intake"), LineKind::Paragraph { .. }));
    }

    #[test]
    fn table_row_cells_trimmed_boundaries_dropped() {
        assert_eq!(
            classify("| College | Seats |"),
            LineKind::TableRow {
                cells: vec!["College".to_string(), "Seats".to_string()]
            }
        );
        assert_eq!(
            classify("a | b"),
            LineKind::TableRow {
                cells: vec!["a".to_string(), "b".to_string()]
            }
        );
    }

    #[test]
    fn single_cell_pipe_is_not_a_row() {
        assert!(matches!(classify("|cell|"), LineKind::Paragraph { .. }));
    }

    #[test]
    fn separator_is_not_a_row() {
        assert_eq!(classify("|---|---|"), LineKind::TableSeparator);
        assert_eq!(classify("| :--- | ---: |"), LineKind::TableSeparator);
    }

    #[test]
    fn code_fence_with_and_without_language() {
        assert_eq!(
            classify("```rust"),
            LineKind::CodeFence {
                language: Some("rust".to_string())
            }
        );
        assert_eq!(classify("```"), LineKind::CodeFence { language: None });
    }

    #[test]
    fn key_value_pair() {
        assert_eq!(
            classify("Deadline: 30 June"),
            LineKind::KeyValue {
                key: "Deadline".to_string(),
                value: "30 June".to_string()
            }
        );
    }

    #[test]
    fn url_is_not_key_value() {
        assert!(matches!(
            classify("https://www.pec.ac.in"),
            LineKind::Paragraph { .. }
        ));
    }

    #[test]
    fn long_sentence_with_colon_is_paragraph() {
        assert!(matches!(
            classify("The committee announced the following after long deliberation: nothing"),
            LineKind::Paragraph { .. }
        ));
    }

    #[test]
    fn horizontal_rules() {
        assert_eq!(classify("---"), LineKind::HorizontalRule);
        assert_eq!(classify("*****"), LineKind::HorizontalRule);
        assert_eq!(classify("___"), LineKind::HorizontalRule);
    }

    #[test]
    fn two_dashes_is_paragraph() {
        assert!(matches!(classify("--"), LineKind::Paragraph { .. }));
    }

    #[test]
    fn blockquote_with_and_without_space() {
        assert_eq!(
            classify("> quoted"),
            LineKind::Blockquote {
                text: "quoted".to_string()
            }
        );
        assert_eq!(
            classify(">tight"),
            LineKind::Blockquote {
                text: "tight".to_string()
            }
        );
    }

    #[test]
    fn plain_text_is_paragraph() {
        assert_eq!(
            classify("admission starts in June"),
            LineKind::Paragraph {
                text: "admission starts in June".to_string()
            }
        );
    }

    #[test]
    fn classification_is_deterministic() {
        let line = "| a | b |";
        assert_eq!(classify(line), classify(line));
    }
}

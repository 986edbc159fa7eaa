//! Terminal rendering for answers.
//!
//! Uses:
//! - `console` for colors (respects NO_COLOR, auto-disables when piped)
//! - `comfy-table` for table blocks
//! - `indicatif` for the waiting spinner
//!
//! Answer text runs through the block parser, then each block renders with
//! inline markup resolved. Citations print as a footer, deduplicated and
//! linked when `PROSPECT_DOCS_URL` is set.

use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use prospect_core::{aggregate, parse_blocks, parse_inline, Citation, ContentBlock, InlineSpan};

// ── Generic helpers ────────────────────────────────────────────────

pub fn error(text: &str) {
    eprintln!("{} {}", style("✗").red(), style(text).bright());
}

pub fn dim(text: &str) {
    println!("{}", style(text).dim());
}

/// Print a key-value pair with styled key.
pub fn kv(key: &str, value: &str) {
    println!("  {} {}", style(key).cyan().bold(), value);
}

/// Create a spinner for the in-flight question.
pub fn spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(spinner_style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}")
    {
        spinner.set_style(spinner_style);
    }
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(std::time::Duration::from_millis(80));
    spinner
}

// ── Answer rendering ───────────────────────────────────────────────

/// Render one assistant answer: parsed blocks, then the citation footer.
pub fn render_answer(text: &str, sources: &[Citation]) {
    for block in parse_blocks(text) {
        render_block(&block);
    }
    let docs_base = std::env::var("PROSPECT_DOCS_URL").ok();
    let lines = citation_lines(sources, docs_base.as_deref());
    if !lines.is_empty() {
        println!();
        println!("{}", style("Sources").dim().bold());
        for line in lines {
            println!("  {}", style(line).dim());
        }
    }
}

fn render_block(block: &ContentBlock) {
    match block {
        ContentBlock::Heading { level, text } => {
            let rendered = render_inline(text);
            if *level <= 2 {
                println!("\n{}", style(rendered).bold().cyan());
            } else {
                println!("\n{}", style(rendered).bold());
            }
        }
        ContentBlock::Paragraph { text } => {
            println!("{}", render_inline(text));
        }
        ContentBlock::BulletList { items } => {
            for item in items {
                println!("  {} {}", style("•").cyan(), render_inline(item));
            }
        }
        ContentBlock::NumberedList { items } => {
            for (n, item) in items.iter().enumerate() {
                println!(
                    "  {} {}",
                    style(format!("{}.", n + 1)).cyan(),
                    render_inline(item)
                );
            }
        }
        ContentBlock::Table { headers, rows } => {
            println!("{}", build_table(headers.as_deref(), rows));
        }
        ContentBlock::CodeBlock { language, code } => {
            render_code(language.as_deref(), code);
        }
        ContentBlock::Blockquote { lines } => {
            for line in lines {
                println!("  {} {}", style("│").dim(), style(render_inline(line)).italic());
            }
        }
        ContentBlock::KeyValue { key, value } => {
            println!("  {} {}", style(format!("{key}:")).cyan().bold(), render_inline(value));
        }
        ContentBlock::Checkbox { checked, text } => {
            let mark = if *checked {
                style("[x]").green()
            } else {
                style("[ ]").dim()
            };
            println!("  {} {}", mark, render_inline(text));
        }
        ContentBlock::HorizontalRule => {
            println!("{}", style("─".repeat(40)).dim());
        }
    }
}

fn build_table(headers: Option<&[String]>, rows: &[Vec<String>]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    if let Some(headers) = headers {
        table.set_header(
            headers
                .iter()
                .map(|h| {
                    Cell::new(h)
                        .fg(Color::Cyan)
                        .add_attribute(comfy_table::Attribute::Bold)
                })
                .collect::<Vec<_>>(),
        );
    }
    for row in rows {
        table.add_row(row.iter().map(|c| Cell::new(render_inline(c))));
    }
    table
}

/// Resolve inline markup into a styled terminal string.
pub fn render_inline(text: &str) -> String {
    let mut out = String::new();
    for span in parse_inline(text) {
        match span {
            InlineSpan::Text { text } => out.push_str(&text),
            InlineSpan::Bold { text } => out.push_str(&style(text).bold().to_string()),
            InlineSpan::Italic { text } => out.push_str(&style(text).italic().to_string()),
            InlineSpan::Code { text } => out.push_str(&style(text).yellow().to_string()),
            InlineSpan::Strikethrough { text } => {
                out.push_str(&style(text).strikethrough().to_string())
            }
            InlineSpan::Link { text, url } => {
                out.push_str(&style(text).blue().underlined().to_string());
                out.push_str(&style(format!(" ({url})")).dim().to_string());
            }
        }
    }
    out
}

// ── Code blocks ────────────────────────────────────────────────────

const RUST_KEYWORDS: &[&str] = &[
    "fn", "let", "mut", "pub", "use", "mod", "struct", "enum", "impl", "trait", "match", "if",
    "else", "for", "while", "loop", "return", "async", "await", "const", "static",
];

const PYTHON_KEYWORDS: &[&str] = &[
    "def", "class", "import", "from", "return", "if", "elif", "else", "for", "while", "with",
    "try", "except", "lambda", "None", "True", "False", "async", "await",
];

const JS_KEYWORDS: &[&str] = &[
    "function", "const", "let", "var", "return", "if", "else", "for", "while", "class", "import",
    "export", "async", "await", "new", "this",
];

fn keywords_for(language: Option<&str>) -> &'static [&'static str] {
    match language {
        Some("rust" | "rs") => RUST_KEYWORDS,
        Some("python" | "py") => PYTHON_KEYWORDS,
        Some("javascript" | "js" | "typescript" | "ts") => JS_KEYWORDS,
        _ => &[],
    }
}

fn render_code(language: Option<&str>, code: &str) {
    let keywords = keywords_for(language);
    let label = language.unwrap_or("text");
    println!("{}", style(format!("┌─ {label}")).dim());
    for (n, line) in code.lines().enumerate() {
        println!(
            "{} {}",
            style(format!("{:>3} │", n + 1)).dim(),
            highlight_line(line, keywords)
        );
    }
    println!("{}", style("└─").dim());
}

/// Per-line highlighter: comments dim, strings green, numbers yellow,
/// keywords cyan. Word splitting only, no real lexing.
fn highlight_line(line: &str, keywords: &[&str]) -> String {
    let trimmed = line.trim_start();
    if trimmed.starts_with("//") || trimmed.starts_with('#') {
        return style(line).dim().to_string();
    }
    let mut out = String::new();
    for token in tokenize_code(line) {
        match token {
            CodeToken::Word(w) if keywords.contains(&w) => {
                out.push_str(&style(w).cyan().to_string());
            }
            CodeToken::Word(w) if w.chars().all(|c| c.is_ascii_digit()) && !w.is_empty() => {
                out.push_str(&style(w).yellow().to_string());
            }
            CodeToken::Word(w) => out.push_str(w),
            CodeToken::Str(s) => out.push_str(&style(s).green().to_string()),
            CodeToken::Other(o) => out.push_str(o),
        }
    }
    out
}

enum CodeToken<'a> {
    Word(&'a str),
    Str(&'a str),
    Other(&'a str),
}

/// Split a line into words, quoted strings, and everything else.
fn tokenize_code(line: &str) -> Vec<CodeToken<'_>> {
    let bytes = line.as_bytes();
    let mut tokens = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        let c = bytes[i];
        if c == b'"' || c == b'\'' {
            // String literal up to the matching quote, or end of line.
            let end = line[i + 1..]
                .find(c as char)
                .map(|p| i + 1 + p + 1)
                .unwrap_or(line.len());
            tokens.push(CodeToken::Str(&line[i..end]));
            i = end;
        } else if c.is_ascii_alphanumeric() || c == b'_' {
            let end = line[i..]
                .find(|ch: char| !ch.is_ascii_alphanumeric() && ch != '_')
                .map(|p| i + p)
                .unwrap_or(line.len());
            tokens.push(CodeToken::Word(&line[i..end]));
            i = end;
        } else {
            let end = line[i..]
                .find(|ch: char| ch.is_ascii_alphanumeric() || ch == '_' || ch == '"' || ch == '\'')
                .map(|p| i + p)
                .unwrap_or(line.len());
            tokens.push(CodeToken::Other(&line[i..end]));
            i = end;
        }
    }
    tokens
}

// ── Citations ──────────────────────────────────────────────────────

/// Deduplicated citation footer lines, one per source document.
fn citation_lines(sources: &[Citation], docs_base: Option<&str>) -> Vec<String> {
    aggregate(sources)
        .into_iter()
        .map(|c| {
            let mut line = c.source_id.clone();
            if !c.pages.is_empty() {
                let pages: Vec<String> = c.pages.iter().map(|p| p.to_string()).collect();
                line.push_str(&format!(" (p. {})", pages.join(", ")));
            }
            if let Some(base) = docs_base {
                line.push_str(&format!(" <{}>", c.reference_link(base)));
            }
            line
        })
        .collect()
}

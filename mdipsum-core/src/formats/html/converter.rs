//! Markdown to HTML body conversion
//!
//! The converter is an ordered list of regex substitutions over the generated markdown,
//! not a parser: each pass sees the output of the previous one, so order is part of the
//! contract.
//!
//! 1. ATX headings (`###`, `##`, `#`)
//! 2. Setext headings (`=` underline is h1, `-` underline is h2)
//! 3. Strong emphasis (`**text**`, `__text__`)
//! 4. Emphasis (`_text_`), after strong so only single underscores remain
//! 5. Fenced code blocks, then inline code
//! 6. `* ` list items, with runs of items wrapped in `<ul>`
//! 7. Inline links `[label](url)`
//! 8. Paragraph wrapping of bare lines that follow a blank line
//!
//! Reference-style links (`[label][N]` and `[N]: url`) are left as text.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use tracing::debug;

static ATX_H3: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^### (.*)$").unwrap());
static ATX_H2: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^## (.*)$").unwrap());
static ATX_H1: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^# (.*)$").unwrap());
static SETEXT_H1: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^(.+)\n=+$").unwrap());
static SETEXT_H2: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^(.+)\n-+$").unwrap());
static STRONG_STARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());
static STRONG_UNDERSCORES: Lazy<Regex> = Lazy::new(|| Regex::new(r"__(.+?)__").unwrap());
static EM: Lazy<Regex> = Lazy::new(|| Regex::new(r"_(.+?)_").unwrap());
static FENCED_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)```([A-Za-z0-9+-]*)\n(.*?)\n?```").unwrap());
static INLINE_CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"`([^`\n]+)`").unwrap());
static LIST_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^\* (.*)$").unwrap());
static LINK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[([^\]\n]+)\]\(([^)\s]+)\)").unwrap());

/// Tags that already open a block and are never wrapped in `<p>`.
const BLOCK_PREFIXES: &[&str] = &[
    "<h1", "<h2", "<h3", "<h4", "<h5", "<h6", "<ul", "</ul", "<li", "<pre", "<p", "<blockquote",
];

/// Convert generated markdown into an HTML fragment (no document wrapper).
pub fn markdown_to_html_body(markdown: &str) -> String {
    let html = ATX_H3.replace_all(markdown, "<h3>${1}</h3>");
    let html = ATX_H2.replace_all(&html, "<h2>${1}</h2>");
    let html = ATX_H1.replace_all(&html, "<h1>${1}</h1>");
    let html = SETEXT_H1.replace_all(&html, "<h1>${1}</h1>");
    let html = SETEXT_H2.replace_all(&html, "<h2>${1}</h2>");

    let html = STRONG_STARS.replace_all(&html, "<strong>${1}</strong>");
    let html = STRONG_UNDERSCORES.replace_all(&html, "<strong>${1}</strong>");
    let html = EM.replace_all(&html, "<em>${1}</em>");

    let html = FENCED_CODE.replace_all(&html, |caps: &Captures| {
        let code = escape_code(&caps[2]);
        match &caps[1] {
            "" => format!("<pre><code>{code}</code></pre>"),
            language => format!(r#"<pre><code class="language-{language}">{code}</code></pre>"#),
        }
    });
    let html = INLINE_CODE.replace_all(&html, |caps: &Captures| {
        format!("<code>{}</code>", escape_code(&caps[1]))
    });

    let html = LIST_ITEM.replace_all(&html, "<li>${1}</li>");
    let html = wrap_list_items(&html);
    let html = LINK.replace_all(&html, r#"<a href="${2}">${1}</a>"#);

    let html = wrap_paragraphs(&html);
    debug!(
        markdown_len = markdown.len(),
        html_len = html.len(),
        "converted markdown body"
    );
    html
}

/// Wrap each run of consecutive `<li>` lines in a `<ul>`.
fn wrap_list_items(html: &str) -> String {
    let mut lines = Vec::new();
    let mut in_list = false;
    for line in html.lines() {
        let is_item = line.starts_with("<li>");
        if is_item && !in_list {
            lines.push("<ul>");
            in_list = true;
        } else if !is_item && in_list {
            lines.push("</ul>");
            in_list = false;
        }
        lines.push(line);
    }
    if in_list {
        lines.push("</ul>");
    }
    rejoin(lines, html)
}

/// Wrap bare lines that start a new block. The document start counts as a blank line.
fn wrap_paragraphs(html: &str) -> String {
    let mut lines = Vec::new();
    let mut after_blank = true;
    for line in html.lines() {
        let blank = line.trim().is_empty();
        if !blank && after_blank && !is_block(line) {
            lines.push(format!("<p>{line}</p>"));
        } else {
            lines.push(line.to_string());
        }
        after_blank = blank;
    }
    rejoin(lines, html)
}

fn is_block(line: &str) -> bool {
    BLOCK_PREFIXES.iter().any(|prefix| line.starts_with(prefix))
}

/// Join lines back together, keeping the source's trailing newline.
fn rejoin<S: AsRef<str>>(lines: Vec<S>, source: &str) -> String {
    let mut out = lines
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join("\n");
    if source.ends_with('\n') {
        out.push('\n');
    }
    out
}

fn escape_code(code: &str) -> String {
    code.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

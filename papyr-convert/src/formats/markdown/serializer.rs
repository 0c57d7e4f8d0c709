//! Markup → Markdown serializer (export)
//!
//! A pass reducer over the editor markup subset, applied in a fixed order:
//! headings, paragraphs, inline styles, lists, then a sweep that strips
//! whatever tags remain and normalizes whitespace. List items are
//! renumbered by their position inside the matched block — any numbering
//! baked into the item text is ignored.
//!
//! Like the fallback parser this is a pure text transducer and never fails;
//! markup it does not recognize simply loses its tags in the final sweep.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static H1: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<h1[^>]*>(.*?)</h1>").unwrap());
static H2: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<h2[^>]*>(.*?)</h2>").unwrap());
static H3: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<h3[^>]*>(.*?)</h3>").unwrap());
static H4: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<h4[^>]*>(.*?)</h4>").unwrap());
static PARAGRAPH: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<p[^>]*>(.*?)</p>").unwrap());
static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<b[^>]*>(.*?)</b>").unwrap());
static STRONG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<strong[^>]*>(.*?)</strong>").unwrap());
static ITALIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<i[^>]*>(.*?)</i>").unwrap());
static EMPHASIS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<em[^>]*>(.*?)</em>").unwrap());
static UNDERLINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<u[^>]*>(.*?)</u>").unwrap());
static ORDERED_LIST: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<ol[^>]*>(.*?)</ol>").unwrap());
static UNORDERED_LIST: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<ul[^>]*>(.*?)</ul>").unwrap());
static LIST_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<li[^>]*>(.*?)</li>").unwrap());
static ANY_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").unwrap());
static EXTRA_NEWLINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").unwrap());

/// Serialize editor markup to Markdown.
pub fn markup_to_markdown(markup: &str) -> String {
    let text = H1.replace_all(markup, "# $1\n\n");
    let text = H2.replace_all(&text, "## $1\n\n");
    let text = H3.replace_all(&text, "### $1\n\n");
    let text = H4.replace_all(&text, "#### $1\n\n");
    let text = PARAGRAPH.replace_all(&text, "$1\n\n");
    let text = BOLD.replace_all(&text, "**$1**");
    let text = STRONG.replace_all(&text, "**$1**");
    let text = ITALIC.replace_all(&text, "*$1*");
    let text = EMPHASIS.replace_all(&text, "*$1*");
    let text = UNDERLINE.replace_all(&text, "__$1__");
    let text = ORDERED_LIST.replace_all(&text, |caps: &Captures| {
        render_items(&caps[1], |index| format!("{}. ", index + 1))
    });
    let text = UNORDERED_LIST.replace_all(&text, |caps: &Captures| {
        render_items(&caps[1], |_| "- ".to_string())
    });
    let text = ANY_TAG.replace_all(&text, "");
    let text = EXTRA_NEWLINES.replace_all(&text, "\n\n");
    text.trim().to_string()
}

/// Extract `<li>` contents from a list block and render one line per item.
fn render_items(block: &str, marker: impl Fn(usize) -> String) -> String {
    let lines: Vec<String> = LIST_ITEM
        .captures_iter(block)
        .enumerate()
        .map(|(index, caps)| format!("{}{}", marker(index), &caps[1]))
        .collect();
    format!("{}\n\n", lines.join("\n"))
}

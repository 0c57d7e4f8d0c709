//! Fallback Markdown → markup converter
//!
//! A small, ordered pass pipeline used when the session has no renderer
//! capability. Each pass is a pure text transducer: full document string
//! in, full document string out, applied strictly in table order so the
//! interactions between passes (bold before italic, lists before line
//! breaks) are explicit and testable one pass at a time.
//!
//! This converter never fails. Any internal pass error degrades to a
//! literal error paragraph so the caller always has content to show.

use crate::error::ConvertError;
use crate::markup::{strip_empty_paragraphs, MARKDOWN_ERROR_PLACEHOLDER};
use once_cell::sync::Lazy;
use regex::Regex;

/// One transformation pass over the whole document text.
pub(crate) struct Pass {
    pub name: &'static str,
    pub apply: fn(&str) -> Result<String, ConvertError>,
}

/// The pipeline, in application order. Ordering is load-bearing: italic
/// must run after bold has consumed `**` pairs, list wrapping must run
/// before newlines become `<br>`, and the empty-paragraph sweep is last.
pub(crate) const PASSES: &[Pass] = &[
    Pass { name: "headings", apply: headings },
    Pass { name: "bold", apply: bold },
    Pass { name: "italic", apply: italic },
    Pass { name: "underline", apply: underline },
    Pass { name: "unordered-lists", apply: unordered_lists },
    Pass { name: "ordered-lists", apply: ordered_lists },
    Pass { name: "blank-lines", apply: blank_lines },
    Pass { name: "line-breaks", apply: line_breaks },
    Pass { name: "strip-empty-paragraphs", apply: strip_empties },
];

/// Convert Markdown source to the editor markup subset.
pub fn markdown_to_markup(source: &str) -> String {
    convert_with(source, PASSES)
}

/// Run a pass table over the source, degrading any failure to the error
/// placeholder. Callers always get markup, never an error.
pub(crate) fn convert_with(source: &str, passes: &[Pass]) -> String {
    match run_passes(source, passes) {
        Ok(markup) => markup,
        Err(err) => {
            log::warn!("fallback markdown conversion failed: {err}");
            MARKDOWN_ERROR_PLACEHOLDER.to_string()
        }
    }
}

fn run_passes(source: &str, passes: &[Pass]) -> Result<String, ConvertError> {
    let mut text = source.to_string();
    for pass in passes {
        text = (pass.apply)(&text).map_err(|err| {
            ConvertError::ParseError(format!("{} pass failed: {err}", pass.name))
        })?;
    }
    Ok(text)
}

static H4: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^#### (.*)$").unwrap());
static H3: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^### (.*)$").unwrap());
static H2: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^## (.*)$").unwrap());
static H1: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^# (.*)$").unwrap());
static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());
static ITALIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*(.*?)\*").unwrap());
static UNDERLINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"__(.*?)__").unwrap());
static UNORDERED_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^- (.*)$").unwrap());
static ORDERED_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^\d+\. (.*)$").unwrap());

/// Heading lines, longest prefix first so `####` is never half-consumed as
/// a shorter heading.
fn headings(input: &str) -> Result<String, ConvertError> {
    let text = H4.replace_all(input, "<h4>$1</h4>");
    let text = H3.replace_all(&text, "<h3>$1</h3>");
    let text = H2.replace_all(&text, "<h2>$1</h2>");
    let text = H1.replace_all(&text, "<h1>$1</h1>");
    Ok(text.into_owned())
}

fn bold(input: &str) -> Result<String, ConvertError> {
    Ok(BOLD.replace_all(input, "<b>$1</b>").into_owned())
}

/// Runs after [`bold`]; a stray `*` next to converted bold text can still
/// mis-tokenize. Kept as-is.
fn italic(input: &str) -> Result<String, ConvertError> {
    Ok(ITALIC.replace_all(input, "<i>$1</i>").into_owned())
}

fn underline(input: &str) -> Result<String, ConvertError> {
    Ok(UNDERLINE.replace_all(input, "<u>$1</u>").into_owned())
}

/// Each list line becomes its own single-item list. Adjacent items are not
/// merged; the editor treats consecutive lists the same way.
fn unordered_lists(input: &str) -> Result<String, ConvertError> {
    Ok(UNORDERED_ITEM
        .replace_all(input, "<ul><li>$1</li></ul>")
        .into_owned())
}

fn ordered_lists(input: &str) -> Result<String, ConvertError> {
    Ok(ORDERED_ITEM
        .replace_all(input, "<ol><li>$1</li></ol>")
        .into_owned())
}

fn blank_lines(input: &str) -> Result<String, ConvertError> {
    Ok(input.replace("\n\n", "<p></p>"))
}

fn line_breaks(input: &str) -> Result<String, ConvertError> {
    Ok(input.replace('\n', "<br>"))
}

fn strip_empties(input: &str) -> Result<String, ConvertError> {
    Ok(strip_empty_paragraphs(input))
}

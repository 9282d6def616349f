//! Markdown rendering for note previews.
//!
//! Rendering never fails from the caller's point of view: [`render_or_raw`]
//! falls back to the unrendered text when a [`Renderer`] reports an error.

use crate::error::Result;
use crate::store::write_atomic;
use log::warn;
use pulldown_cmark::{html, Options, Parser};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
#[error("Render failed: {0}")]
pub struct RenderError(pub String);

/// Turns note text into markup.
pub trait Renderer {
    fn render(&self, text: &str) -> std::result::Result<String, RenderError>;
}

/// CommonMark to HTML with tables, footnotes, strikethrough and task lists.
#[derive(Debug, Default, Clone, Copy)]
pub struct MarkdownRenderer;

impl Renderer for MarkdownRenderer {
    fn render(&self, text: &str) -> std::result::Result<String, RenderError> {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_FOOTNOTES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options.insert(Options::ENABLE_TASKLISTS);

        let parser = Parser::new_ext(text, options);
        let mut output = String::with_capacity(text.len() * 3 / 2);
        html::write_html_fmt(&mut output, parser).map_err(|e| RenderError(e.to_string()))?;
        Ok(output)
    }
}

/// Rendered markup, or `text` untouched if rendering fails.
pub fn render_or_raw<R: Renderer + ?Sized>(renderer: &R, text: &str) -> String {
    match renderer.render(text) {
        Ok(markup) => markup,
        Err(err) => {
            warn!("{}, showing raw text", err);
            text.to_string()
        }
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// A standalone HTML page for one note.
pub fn preview_document<R: Renderer + ?Sized>(renderer: &R, title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n</head>\n<body>\n{}</body>\n</html>\n",
        escape_html(title),
        render_or_raw(renderer, body)
    )
}

/// Writes [`preview_document`] to `path`.
pub fn write_preview<R: Renderer + ?Sized>(
    renderer: &R,
    title: &str,
    body: &str,
    path: &Path,
) -> Result<()> {
    let document = preview_document(renderer, title, body);
    write_atomic(path, document.as_bytes())
}

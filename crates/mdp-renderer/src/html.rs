//! HTML output for the overridden rendering rules.

use std::fmt::Write;

use crate::heading::{slugify, split_anchor};
use crate::highlight::Highlighter;
use crate::util::escape_html;

/// Render a code block.
///
/// Known languages are highlighted; unknown languages and untagged blocks
/// fall back to escaped plain text. The wrapper is the same in every case.
pub(crate) fn code_block(
    highlighter: Highlighter,
    lang: Option<&str>,
    content: &str,
    out: &mut String,
) {
    let body = lang
        .and_then(|lang| highlighter.highlight(lang, content))
        .unwrap_or_else(|| escape_html(content));

    match lang {
        Some(lang) => write!(
            out,
            r#"<pre><code class="hljs {}">{body}</code></pre>"#,
            escape_html(lang)
        )
        .unwrap(),
        None => write!(out, r#"<pre><code class="hljs">{body}</code></pre>"#).unwrap(),
    }
    out.push('\n');
}

/// Render a heading from its already-rendered inline HTML.
///
/// The inline HTML is escaped by the markdown writer already, so only raw
/// quotes (from inline HTML) need guarding inside the `id` attribute.
pub(crate) fn heading(level: u8, inner_html: &str, out: &mut String) {
    let (text, id) = match split_anchor(inner_html) {
        (text, Some(anchor)) => (text, anchor.replace('"', "&quot;")),
        (text, None) => (text, slugify(text)),
    };
    writeln!(out, r#"<h{level} id="{id}">{text}</h{level}>"#).unwrap();
}

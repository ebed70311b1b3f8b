//! Markdown to HTML rendering for the mdp catalog.
//!
//! This crate provides [`MarkdownRenderer`], a thin layer over pulldown-cmark's
//! HTML writer that overrides two rendering rules:
//!
//! - **Code blocks** are highlighted with syntect when the fence language is
//!   known and always wrapped in `<pre><code class="hljs {lang}">`.
//! - **Headings** carry an `id` attribute, taken from a trailing `{anchor}`
//!   directive or derived from the heading text.
//!
//! Everything else renders exactly as [`pulldown_cmark::html::push_html`] would.
//!
//! # Example
//!
//! ```
//! use mdp_renderer::MarkdownRenderer;
//!
//! let renderer = MarkdownRenderer::new();
//! let html = renderer.render("## Install {setup}\n\nRun it.");
//! assert_eq!(html, "<h2 id=\"setup\">Install</h2>\n<p>Run it.</p>\n");
//! ```

mod heading;
mod highlight;
mod html;
mod renderer;
mod util;

pub use heading::{slugify, split_anchor};
pub use highlight::Highlighter;
pub use renderer::MarkdownRenderer;
pub use util::escape_html;

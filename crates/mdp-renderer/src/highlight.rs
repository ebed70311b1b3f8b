//! Syntax highlighting for fenced code blocks.

use std::sync::LazyLock;

use syntect::html::{ClassStyle, ClassedHTMLGenerator};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

/// Bundled syntax definitions, loaded once per process.
static SYNTAXES: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);

/// Class prefix for highlighted spans (`<span class="hljs-keyword">`).
const CLASS_STYLE: ClassStyle = ClassStyle::SpacedPrefixed { prefix: "hljs-" };

/// Class-based HTML highlighter.
///
/// Emits `<span class="hljs-…">` markup so that any highlight.js-compatible
/// stylesheet can theme the output. Cheap to copy; the syntax set is shared.
#[derive(Clone, Copy)]
pub struct Highlighter {
    syntaxes: &'static SyntaxSet,
}

impl Highlighter {
    /// Create a highlighter backed by the bundled syntax definitions.
    #[must_use]
    pub fn new() -> Self {
        Self {
            syntaxes: &SYNTAXES,
        }
    }

    /// Highlight `code` as `language`.
    ///
    /// Languages are matched by file extension or by name, case-insensitively
    /// (`rs`, `rust` and `Rust` all match). Returns `None` if the language is
    /// unknown or the grammar fails on the input, in which case callers fall
    /// back to escaped plain text.
    #[must_use]
    pub fn highlight(&self, language: &str, code: &str) -> Option<String> {
        let syntax = self.syntaxes.find_syntax_by_token(language)?;
        let mut generator =
            ClassedHTMLGenerator::new_with_class_style(syntax, self.syntaxes, CLASS_STYLE);
        for line in LinesWithEndings::from(code) {
            generator
                .parse_html_for_line_which_includes_newline(line)
                .ok()?;
        }
        Some(generator.finalize())
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}

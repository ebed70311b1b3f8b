//! Markdown renderer with overridden code block and heading rules.

use pulldown_cmark::{CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd, html};

use crate::highlight::Highlighter;
use crate::util::heading_level_to_num;

/// Markdown to HTML converter.
///
/// Configured once and shared read-only; rendering takes `&self`, so a single
/// instance can serve many threads.
#[derive(Clone)]
pub struct MarkdownRenderer {
    highlighter: Highlighter,
    gfm: bool,
}

impl MarkdownRenderer {
    /// Create a new renderer with GFM enabled by default.
    #[must_use]
    pub fn new() -> Self {
        Self {
            highlighter: Highlighter::new(),
            gfm: true,
        }
    }

    /// Enable or disable GitHub Flavored Markdown features.
    ///
    /// GFM is enabled by default. When enabled, the parser supports:
    /// - Tables
    /// - Strikethrough (`~~text~~`)
    /// - Task lists (`- [ ] item`)
    #[must_use]
    pub fn with_gfm(mut self, enabled: bool) -> Self {
        self.gfm = enabled;
        self
    }

    /// Get parser options based on GFM configuration.
    #[must_use]
    pub fn parser_options(&self) -> Options {
        if self.gfm {
            Options::ENABLE_TABLES
                | Options::ENABLE_STRIKETHROUGH
                | Options::ENABLE_TASKLISTS
                | Options::ENABLE_GFM
        } else {
            Options::empty()
        }
    }

    /// Render markdown text to HTML.
    #[must_use]
    pub fn render(&self, markdown: &str) -> String {
        let parser = Parser::new_ext(markdown, self.parser_options());
        let mut output = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut output, Overrides::new(parser, self.highlighter));
        output
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Event adapter that replaces code blocks and headings with pre-rendered HTML.
///
/// All other events pass through untouched to pulldown-cmark's HTML writer.
struct Overrides<I> {
    events: I,
    highlighter: Highlighter,
}

impl<I> Overrides<I> {
    fn new(events: I, highlighter: Highlighter) -> Self {
        Self {
            events,
            highlighter,
        }
    }
}

impl<'a, I> Overrides<I>
where
    I: Iterator<Item = Event<'a>>,
{
    /// Consume a code block up to its end tag and render it.
    fn code_block(&mut self, kind: &CodeBlockKind<'a>) -> Event<'a> {
        let lang = match kind {
            CodeBlockKind::Fenced(info) => info.split_whitespace().next(),
            CodeBlockKind::Indented => None,
        };

        let mut content = String::new();
        for event in self.events.by_ref() {
            match event {
                Event::Text(text) => content.push_str(&text),
                Event::End(TagEnd::CodeBlock) => break,
                _ => {}
            }
        }
        let content = content.strip_suffix('\n').unwrap_or(&content);

        let mut out = String::new();
        crate::html::code_block(self.highlighter, lang, content, &mut out);
        Event::Html(CowStr::from(out))
    }

    /// Consume a heading up to its end tag and render it.
    fn heading(&mut self, level: u8) -> Event<'a> {
        let inner: Vec<Event<'a>> = self
            .events
            .by_ref()
            .take_while(|event| !matches!(event, Event::End(TagEnd::Heading(_))))
            .collect();

        let mut inner_html = String::new();
        html::push_html(&mut inner_html, inner.into_iter());

        let mut out = String::new();
        crate::html::heading(level, inner_html.trim(), &mut out);
        Event::Html(CowStr::from(out))
    }
}

impl<'a, I> Iterator for Overrides<I>
where
    I: Iterator<Item = Event<'a>>,
{
    type Item = Event<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.events.next()? {
            Event::Start(Tag::CodeBlock(kind)) => Some(self.code_block(&kind)),
            Event::Start(Tag::Heading { level, .. }) => {
                Some(self.heading(heading_level_to_num(level)))
            }
            event => Some(event),
        }
    }
}

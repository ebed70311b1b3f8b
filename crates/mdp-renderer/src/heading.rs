//! Heading anchor resolution.
//!
//! A heading may end with an explicit anchor directive (`## Setup {install}`).
//! Headings without one get an id derived from their text by [`slugify`].

use std::sync::LazyLock;

use regex::Regex;

/// Trailing `{anchor-id}` directive, with any whitespace before it.
static ANCHOR_DIRECTIVE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\{([^}]+)\}$").unwrap());

/// Runs of characters that are not allowed in a derived anchor.
///
/// Allowed: ASCII alphanumerics and `_`, Cyrillic (with Ukrainian letters),
/// CJK ideographs, Hiragana, Katakana (with the prolonged sound mark and
/// iteration marks), Hangul compatibility jamo and Hangul syllables.
static NON_ANCHOR_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"[^0-9A-Za-z_",
        r"А-яіІїЇєЄ",
        r"\x{4e00}-\x{9eff}一-龠",
        r"ぁ-ゔァ-ヴー々〆〤",
        r"\x{3130}-\x{318f}\x{ac00}-\x{d7af}",
        r"]+",
    ))
    .unwrap()
});

/// Split a trailing anchor directive off heading text.
///
/// Returns the visible text and the directive content, if any.
///
/// # Examples
///
/// ```
/// use mdp_renderer::split_anchor;
///
/// assert_eq!(split_anchor("Title {custom-id}"), ("Title", Some("custom-id")));
/// assert_eq!(split_anchor("Plain title"), ("Plain title", None));
/// ```
pub fn split_anchor(text: &str) -> (&str, Option<&str>) {
    match ANCHOR_DIRECTIVE.captures(text) {
        Some(caps) => {
            let (Some(whole), Some(id)) = (caps.get(0), caps.get(1)) else {
                return (text, None);
            };
            (&text[..whole.start()], Some(id.as_str()))
        }
        None => (text, None),
    }
}

/// Derive an anchor id from heading text.
///
/// Lowercases the text and replaces every run of disallowed characters with a
/// single `-`. Leading and trailing hyphens are kept, so `What?` becomes `what-`.
///
/// # Examples
///
/// ```
/// use mdp_renderer::slugify;
///
/// assert_eq!(slugify("Hello World"), "hello-world");
/// assert_eq!(slugify("Привет, мир"), "привет-мир");
/// ```
#[must_use]
pub fn slugify(text: &str) -> String {
    NON_ANCHOR_RUN
        .replace_all(&text.to_lowercase(), "-")
        .into_owned()
}

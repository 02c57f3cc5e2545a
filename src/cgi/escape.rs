//! HTML entity escaping.
//!
//! Untrusted text becomes [`SafeHtml`] only through [`escape_html`]. Markup
//! the program generates itself is wrapped with [`SafeHtml::trusted`]. The
//! page template accepts nothing else, so a value cannot reach the output
//! unescaped or be escaped twice.

use std::fmt;

/// Markup that is safe to embed verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SafeHtml(String);

impl SafeHtml {
    /// Wrap markup produced from internal, non-request data.
    pub fn trusted(markup: impl Into<String>) -> Self {
        Self(markup.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for SafeHtml {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Escape `&`, `<`, `>`, `"` and `'` as HTML entities.
pub fn escape_html(raw: &str) -> SafeHtml {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    SafeHtml(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escapes_markup_characters() {
        let escaped = escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#);
        assert_eq!(
            escaped.as_str(),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#039;Jerry&#039;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(escape_html("a=1&b=2").as_str(), "a=1&amp;b=2");
        assert_eq!(escape_html("203.0.113.5").as_str(), "203.0.113.5");
        assert_eq!(escape_html("").as_str(), "");
    }

    #[test]
    fn test_existing_entities_are_escaped_again() {
        // Input is raw text, so an entity in it is literal text.
        assert_eq!(escape_html("&lt;").as_str(), "&amp;lt;");
    }

    #[test]
    fn test_non_ascii_passthrough() {
        assert_eq!(escape_html("héllo ✓").as_str(), "héllo ✓");
    }
}

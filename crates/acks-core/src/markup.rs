//! HTML fragments that are safe to insert into a page
//!
//! Formatters build [`Markup`] from literal templates and escaped data. The
//! only way to smuggle unescaped text in is [`Markup::raw`], which callers use
//! for stored content they trust.

use std::fmt;
use std::sync::LazyLock;

use regex::{Captures, Regex};

static COMMENTS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").expect("valid comment pattern"));
static TAGS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<.*?>").expect("valid tag pattern"));
static ENTITIES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(#[0-9]+|#[xX][0-9a-fA-F]+|[a-zA-Z]+);").expect("valid entity pattern")
});

/// A markup-safe HTML fragment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Markup(String);

impl Markup {
    /// The empty fragment; the grid renders it as a blank cell
    pub fn empty() -> Self {
        Self(String::new())
    }

    /// Wrap text that is already markup-safe without escaping it
    pub fn raw(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    /// Escape plain text into a fragment
    pub fn text(text: &str) -> Self {
        Self(escape(text))
    }

    pub fn push(&mut self, other: Markup) {
        self.0.push_str(&other.0);
    }

    /// Append a literal template piece
    pub fn push_raw(&mut self, html: &str) {
        self.0.push_str(html);
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromIterator<Markup> for Markup {
    fn from_iter<I: IntoIterator<Item = Markup>>(iter: I) -> Self {
        let mut out = Markup::empty();
        for part in iter {
            out.push(part);
        }
        out
    }
}

/// HTML-escape text for element content and quoted attribute values
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Reduce stored HTML to plain text: drop comments and tags, collapse
/// whitespace runs to single spaces, then decode character references.
pub fn strip_tags(html: &str) -> String {
    let without_comments = COMMENTS.replace_all(html, "");
    let without_tags = TAGS.replace_all(&without_comments, "");
    let collapsed = without_tags.split_whitespace().collect::<Vec<_>>().join(" ");
    unescape(&collapsed)
}

fn unescape(text: &str) -> String {
    ENTITIES
        .replace_all(text, |caps: &Captures| {
            let entity = &caps[1];
            decode_entity(entity).unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

fn decode_entity(entity: &str) -> Option<String> {
    if let Some(numeric) = entity.strip_prefix('#') {
        let code = match numeric.strip_prefix(&['x', 'X'][..]) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => numeric.parse().ok()?,
        };
        return char::from_u32(code).map(String::from);
    }
    let decoded = match entity {
        "amp" => "&",
        "lt" => "<",
        "gt" => ">",
        "quot" => "\"",
        "apos" => "'",
        "nbsp" => "\u{a0}",
        _ => return None,
    };
    Some(decoded.to_string())
}

use std::fmt;

/// One supported article markup format: extension, display name, and the
/// rendering rule for a single header-field line.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd)]
pub enum Format {
    Markdown,
    Restructured,
    Plain,
}

impl Format {
    /// Registry order, which is also the extension sort order (md < rst < txt)
    /// and therefore the interactive menu order.
    pub const ALL: [Format; 3] = [Format::Markdown, Format::Restructured, Format::Plain];

    pub fn extension(self) -> &'static str {
        match self {
            Format::Markdown => "md",
            Format::Restructured => "rst",
            Format::Plain => "txt",
        }
    }

    /// Header-line prefix for one metadata field, e.g. "Title:" for Markdown
    /// or ":title:" for reStructuredText. The caller appends a space and the
    /// field value.
    pub fn field_line(self, field: &str) -> String {
        match self {
            Format::Markdown => format!("{}:", title_case(field)),
            Format::Restructured => format!(":{field}:"),
            Format::Plain => format!(":{}:", title_case(field)),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Markdown => write!(f, "Markdown"),
            Format::Restructured => write!(f, "reStructuredText"),
            Format::Plain => write!(f, "AsciiDoc"),
        }
    }
}

fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}

/// Metadata for the article being scaffolded. Built once per run from user
/// input and derived values, never mutated afterwards.
#[derive(Debug, Clone)]
pub struct ArticleMeta {
    pub date: String,
    pub category: String,
    pub tags: String,
    pub title: String,
    pub status: String,
    pub summary: String,
    pub slug: String,
}

impl ArticleMeta {
    /// Field name/value pairs in declaration order; header rendering sorts
    /// them by name before emitting lines.
    pub fn fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("date", &self.date),
            ("category", &self.category),
            ("tags", &self.tags),
            ("title", &self.title),
            ("status", &self.status),
            ("summary", &self.summary),
            ("slug", &self.slug),
        ]
    }
}

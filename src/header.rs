use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::Result;
use chrono::Local;

use crate::category;
use crate::model::{ArticleMeta, Format};
use crate::ui::Console;

// Characters swapped for hyphens when deriving a slug from a title.
const SLUG_STRIP: &[char] = &[
    '\\', '*', '"', '?', ' ', '!', '§', ',', ';', '.', '/', ':', '|', '=',
];

/// Really basic slugify: lowercase, swap the punctuation set for hyphens,
/// trim hyphens at both ends, then drop each hyphen whose immediate
/// predecessor is one too (first character always kept).
pub fn slugify(title: &str) -> String {
    let replaced: String = title
        .to_lowercase()
        .chars()
        .map(|c| if SLUG_STRIP.contains(&c) { '-' } else { c })
        .collect();
    let trimmed: Vec<char> = replaced.trim_matches('-').chars().collect();

    trimmed
        .iter()
        .enumerate()
        .filter(|&(i, &c)| c != '-' || i == 0 || trimmed[i - 1] != '-')
        .map(|(_, &c)| c)
        .collect()
}

/// Collect article metadata, prompting in a fixed order: category menu,
/// then title, then summary. Date, status, slug and the (empty) tags field
/// are filled in without prompting.
pub fn build_header<R: BufRead, W: Write>(
    root: &Path,
    format: Format,
    console: &mut Console<R, W>,
) -> Result<(ArticleMeta, String)> {
    let date = Local::now().format("%Y-%m-%d %H:%M").to_string();
    let category = category::pick_category(root, console)?;
    let title = console.prompt("\n- Title: ")?;
    let summary = console.prompt("\n- Summary: ")?;
    let slug = slugify(&title);

    let meta = ArticleMeta {
        date,
        category,
        tags: String::new(),
        title,
        status: "draft".to_string(),
        summary,
        slug,
    };
    let header = render_header(&meta, format);
    Ok((meta, header))
}

/// One header line per metadata field, sorted alphabetically by field name.
/// Empty values still get their line, trailing space included.
pub fn render_header(meta: &ArticleMeta, format: Format) -> String {
    let mut fields = meta.fields();
    fields.sort_by_key(|&(name, _)| name);

    let mut header = String::new();
    for (name, value) in fields {
        header.push_str(&format.field_line(name));
        header.push(' ');
        header.push_str(value);
        header.push('\n');
    }
    header
}

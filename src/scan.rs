use std::collections::BTreeSet;
use std::fs;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use lazy_static::lazy_static;
use regex::Regex;
use walkdir::WalkDir;

use crate::model::Format;
use crate::ui::Console;

lazy_static! {
    static ref CATEGORY_LINE: Regex = Regex::new("(?i)category:").unwrap();
}

/// Every regular file under `root`, recursively, with no extension filtering.
/// Lazy and restartable: each call builds a fresh walk. Unreadable directory
/// entries are skipped.
pub fn articles(root: &Path) -> impl Iterator<Item = PathBuf> {
    WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
}

/// Count existing articles per registered extension and pick the majority
/// format. When all counters are equal (no articles yet, or a perfect tie)
/// the choice is deferred to an interactive menu instead of an arbitrary
/// winner.
pub fn detect_format<R: BufRead, W: Write>(
    root: &Path,
    console: &mut Console<R, W>,
) -> Result<Format> {
    let mut counts = [0usize; Format::ALL.len()];
    for path in articles(root) {
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            continue;
        };
        if let Some(pos) = Format::ALL.iter().position(|f| f.extension() == ext) {
            counts[pos] += 1;
        }
    }

    let format = if counts.iter().all(|&count| count == counts[0]) {
        pick_format(console)?
    } else {
        // Partial tie: the first format in registry order wins.
        let mut best = 0;
        for (pos, &count) in counts.iter().enumerate() {
            if count > counts[best] {
                best = pos;
            }
        }
        Format::ALL[best]
    };

    console.say(&format!("You write in {format}, good!"))?;
    Ok(format)
}

fn pick_format<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<Format> {
    console.say("No article written, pick your format:")?;
    for (pos, format) in Format::ALL.iter().enumerate() {
        console.say(&format!("  {}: {}", pos + 1, format))?;
    }
    let pick = console.pick(Format::ALL.len())?;
    Ok(Format::ALL[pick - 1])
}

/// Distinct categories claimed by existing articles, sorted alphabetically.
/// Per article, the first line containing `category:` (any case) yields the
/// text after the line's first colon. Every article is expected to carry such
/// a line; one without it aborts the run.
pub fn existing_categories(root: &Path) -> Result<Vec<String>> {
    let mut categories = BTreeSet::new();
    for path in articles(root) {
        let text =
            fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
        let line = text
            .lines()
            .find(|line| CATEGORY_LINE.is_match(line))
            .with_context(|| format!("no category field in {}", path.display()))?;
        let value = line.splitn(2, ':').nth(1).unwrap_or("").trim();
        categories.insert(value.to_string());
    }
    Ok(categories.into_iter().collect())
}

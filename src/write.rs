use std::fs;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::model::{ArticleMeta, Format};
use crate::ui::Console;

const BODY_HINT: &str = "Start your article here, and don't forget to add tags!\n";
const BODY_THANKS: &str = "Thanks for using pelistart :-)\n";

/// Write the article file at content-root/category/slug.ext. An existing
/// file is only replaced when the user answers exactly "yes"; any other
/// answer leaves it untouched and returns its path, so the run can still
/// open it in the editor.
pub fn create_file<R: BufRead, W: Write>(
    root: &Path,
    meta: &ArticleMeta,
    header: &str,
    format: Format,
    console: &mut Console<R, W>,
) -> Result<PathBuf> {
    let path = root
        .join(&meta.category)
        .join(format!("{}.{}", meta.slug, format.extension()));

    if path.exists() {
        let answer =
            console.prompt("Article file already exists, do you want to overwrite it? (yes/NO) ")?;
        if answer != "yes" {
            return Ok(path);
        }
    }

    let mut contents = String::with_capacity(header.len() + BODY_HINT.len() + BODY_THANKS.len() + 1);
    contents.push_str(header);
    contents.push('\n');
    contents.push_str(BODY_HINT);
    contents.push_str(BODY_THANKS);
    fs::write(&path, contents).with_context(|| format!("writing {}", path.display()))?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::Cancelled;
    use std::io::Cursor;
    use tempfile::tempdir;

    fn console(input: &str) -> Console<Cursor<&str>, Vec<u8>> {
        Console::new(Cursor::new(input), Vec::new())
    }

    fn sample_meta() -> ArticleMeta {
        ArticleMeta {
            date: "2026-08-06 09:30".to_string(),
            category: "notes".to_string(),
            tags: String::new(),
            title: "Hello".to_string(),
            status: "draft".to_string(),
            summary: "hi".to_string(),
            slug: "hello".to_string(),
        }
    }

    #[test]
    fn writes_header_blank_line_and_boilerplate() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("notes")).unwrap();

        let meta = sample_meta();
        let mut c = console("");
        let path =
            create_file(dir.path(), &meta, "Title: Hello\n", Format::Markdown, &mut c).unwrap();

        assert_eq!(path, dir.path().join("notes/hello.md"));
        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(
            written,
            "Title: Hello\n\nStart your article here, and don't forget to add tags!\nThanks for using pelistart :-)\n"
        );
    }

    #[test]
    fn extension_follows_the_chosen_format() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("notes")).unwrap();

        let meta = sample_meta();
        let mut c = console("");
        let path =
            create_file(dir.path(), &meta, ":title: Hello\n", Format::Restructured, &mut c)
                .unwrap();
        assert_eq!(path, dir.path().join("notes/hello.rst"));
    }

    #[test]
    fn declined_overwrite_leaves_the_file_alone() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("notes")).unwrap();
        let existing = dir.path().join("notes/hello.md");
        fs::write(&existing, "old contents\n").unwrap();

        let meta = sample_meta();
        for answer in ["no\n", "NO\n", "Yes\n", "y\n", "\n", " yes \n"] {
            let mut c = console(answer);
            let path =
                create_file(dir.path(), &meta, "Title: Hello\n", Format::Markdown, &mut c).unwrap();
            assert_eq!(path, existing);
            assert_eq!(fs::read_to_string(&existing).unwrap(), "old contents\n");
        }
    }

    #[test]
    fn exact_yes_overwrites() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("notes")).unwrap();
        let existing = dir.path().join("notes/hello.md");
        fs::write(&existing, "old contents\n").unwrap();

        let meta = sample_meta();
        let mut c = console("yes\n");
        create_file(dir.path(), &meta, "Title: Hello\n", Format::Markdown, &mut c).unwrap();
        assert!(
            fs::read_to_string(&existing)
                .unwrap()
                .starts_with("Title: Hello\n")
        );
    }

    #[test]
    fn cancelled_overwrite_prompt_propagates() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("notes")).unwrap();
        fs::write(dir.path().join("notes/hello.md"), "old\n").unwrap();

        let meta = sample_meta();
        let mut c = console("");
        let err =
            create_file(dir.path(), &meta, "Title: Hello\n", Format::Markdown, &mut c).unwrap_err();
        assert!(err.is::<Cancelled>());
    }

    #[test]
    fn missing_category_directory_is_a_write_error() {
        let dir = tempdir().unwrap();

        let meta = sample_meta();
        let mut c = console("");
        let err =
            create_file(dir.path(), &meta, "Title: Hello\n", Format::Markdown, &mut c).unwrap_err();
        assert!(err.to_string().contains("writing"));
    }
}

mod category;
mod cli;
mod edit;
mod header;
mod model;
mod scan;
mod ui;
mod write;

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use cli::Cli;
use ui::{Cancelled, Console};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) if err.is::<Cancelled>() => {
            // user closed stdin mid-prompt; same exit as the happy path
            println!("Quitting...");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("ERROR: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Resolve and check the content root once, up front
    let root = cli.resolve_root();
    cli::ensure_root(&root)?;

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());
    let path = scaffold(&root, &mut console)?;

    edit::open_in_editor(cli.editor.as_deref(), &path)
}

/// Detect the format, collect the header, write the file. Returns the path
/// handed to the editor — the pre-existing one when an overwrite is declined.
fn scaffold<R: BufRead, W: Write>(root: &Path, console: &mut Console<R, W>) -> Result<PathBuf> {
    let format = scan::detect_format(root, console)?;
    let (meta, header) = header::build_header(root, format, console)?;
    write::create_file(root, &meta, &header, format, console)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;
    use tempfile::tempdir;

    #[test]
    fn scaffold_on_empty_root_end_to_end() {
        let dir = tempdir().unwrap();
        // format 1 (Markdown), create-new category "notes", title, summary
        let input = "1\n1\nnotes\nHello, World!\nJust saying hi\n";
        let mut console = Console::new(Cursor::new(input), Vec::new());

        let path = scaffold(dir.path(), &mut console).unwrap();
        assert_eq!(path, dir.path().join("notes/hello-world.md"));

        let written = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = written.lines().collect();
        assert_eq!(lines[0], "Category: notes");
        assert!(lines[1].starts_with("Date: "));
        assert_eq!(lines[2], "Slug: hello-world");
        assert_eq!(lines[3], "Status: draft");
        assert_eq!(lines[4], "Summary: Just saying hi");
        assert_eq!(lines[5], "Tags: ");
        assert_eq!(lines[6], "Title: Hello, World!");
        assert_eq!(lines[7], "");
        assert_eq!(
            lines[8],
            "Start your article here, and don't forget to add tags!"
        );
        assert_eq!(lines[9], "Thanks for using pelistart :-)");
        assert_eq!(lines.len(), 10);
    }

    #[test]
    fn second_run_reuses_detected_format_and_category() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("notes")).unwrap();
        fs::write(
            dir.path().join("notes/first.md"),
            "Category: notes\nTitle: First\n",
        )
        .unwrap();

        // Markdown has a strict majority now, so no format menu; the
        // category menu lists "notes" at 1
        let input = "1\nSecond Post\nAnother summary\n";
        let mut console = Console::new(Cursor::new(input), Vec::new());

        let path = scaffold(dir.path(), &mut console).unwrap();
        assert_eq!(path, dir.path().join("notes/second-post.md"));
    }

    #[test]
    fn cancellation_mid_flow_writes_nothing() {
        let dir = tempdir().unwrap();
        // pick Markdown, then close stdin at the category menu
        let input = "1\n";
        let mut console = Console::new(Cursor::new(input), Vec::new());

        let err = scaffold(dir.path(), &mut console).unwrap_err();
        assert!(err.is::<Cancelled>());
        assert_eq!(scan::articles(dir.path()).count(), 0);
    }
}

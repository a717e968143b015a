use std::{env, path::Path, process::Command};

use anyhow::{Context, Result};

/// Launch the editor as a blocking foreground child with the article path as
/// its only argument, inheriting our stdio. The editor's exit status is not
/// inspected; only a failure to spawn is an error.
pub fn open_in_editor(editor: Option<&str>, path: &Path) -> Result<()> {
    let editor_cmd = resolve_editor(editor);

    Command::new(&editor_cmd)
        .arg(path)
        .status()
        .with_context(|| format!("failed to spawn {} for {}", editor_cmd, path.display()))?;
    Ok(())
}

/// Flag beats $EDITOR beats the fixed /usr/bin/vi fallback.
fn resolve_editor(editor: Option<&str>) -> String {
    editor
        .map(|s| s.to_string())
        .or_else(|| env::var("EDITOR").ok())
        .unwrap_or_else(|| "/usr/bin/vi".to_string())
}

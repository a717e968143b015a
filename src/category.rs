use std::fs;
use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::scan;
use crate::ui::Console;

/// Menu over the categories found in existing articles, with a trailing
/// "create a new one" entry. Creating a category also creates its directory
/// under the content root; that side effect failing is fatal.
pub fn pick_category<R: BufRead, W: Write>(
    root: &Path,
    console: &mut Console<R, W>,
) -> Result<String> {
    let categories = scan::existing_categories(root)?;

    console.say("\n- Pick a category for your article:")?;
    for (pos, category) in categories.iter().enumerate() {
        console.say(&format!("  {}: {}", pos + 1, category))?;
    }
    console.say(&format!("  {}: [Create a new one]", categories.len() + 1))?;

    let pick = console.pick(categories.len() + 1)?;
    if pick == categories.len() + 1 {
        let name = console.prompt("- New category: ")?;
        let dir = root.join(&name);
        fs::create_dir(&dir).with_context(|| format!("could not create {}", dir.display()))?;
        console.say("  has been created!")?;
        return Ok(name);
    }

    Ok(categories[pick - 1].clone())
}

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // PATH = 'content' (or double-quoted) in pelicanconf.py
    static ref CONF_CONTENT_PATH: Regex =
        Regex::new(r#"(?m)^\s*PATH\s*=\s*['"]([^'"]+)['"]"#).unwrap();
}

#[derive(Parser, Debug)]
#[command(
    name = "pelistart",
    version,
    about = "Scaffold a new Pelican article and open it in your editor"
)]
pub struct Cli {
    /// Content root directory (default: PATH from ./pelicanconf.py, else content/)
    #[arg(short, long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Editor to open the article with (default: $EDITOR, else /usr/bin/vi)
    #[arg(long, value_name = "CMD")]
    pub editor: Option<String>,
}

impl Cli {
    pub fn resolve_root(&self) -> PathBuf {
        if let Some(dir) = &self.root {
            return dir.clone();
        }
        root_from_pelicanconf()
    }
}

fn root_from_pelicanconf() -> PathBuf {
    match fs::read_to_string("pelicanconf.py") {
        Ok(conf) => {
            if let Some(path) = content_path_from_conf(&conf) {
                return PathBuf::from(path);
            }
            println!("WARN: Pelican configuration does not contain a content dir...");
            println!("WARN: trying to use: content/");
        }
        Err(_) => {
            println!("WARN: are you sure you are in a Pelican directory?");
            println!("WARN: some stuff may not work as expected...");
        }
    }
    PathBuf::from("content/")
}

fn content_path_from_conf(conf: &str) -> Option<&str> {
    CONF_CONTENT_PATH
        .captures(conf)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Content directory check, run once at startup: create the directory when
/// it is missing, abort when that fails.
pub fn ensure_root(root: &Path) -> Result<()> {
    if root.exists() {
        return Ok(());
    }
    println!("WARN: content directory {} does not exist!", root.display());
    println!("Let me take the liberty to create it...");
    fs::create_dir(root).with_context(|| format!("could not create {}", root.display()))?;
    println!("  done!");
    Ok(())
}

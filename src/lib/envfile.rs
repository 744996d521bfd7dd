use anyhow::{bail, Result};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

pub fn load(path: &Path) -> Result<HashMap<String, String>> {
    if !path.exists() {
        bail!("{} file not found", path.display());
    }

    let contents = fs::read_to_string(path)?;

    Ok(parse(&contents))
}

// Parses KEY=VALUE and KEY="VALUE" lines. Comments, blank lines and
// lines without a `=` are skipped. Last write wins on duplicate keys.
fn parse(contents: &str) -> HashMap<String, String> {
    let mut vars = HashMap::new();

    for line in contents.lines() {
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some((key, value)) = line.split_once('=') {
            vars.insert(key.trim().to_string(), unquote(value.trim()).to_string());
        }
    }

    vars
}

fn unquote(value: &str) -> &str {
    if value.len() >= 2
        && ((value.starts_with('"') && value.ends_with('"'))
            || (value.starts_with('\'') && value.ends_with('\'')))
    {
        return &value[1..value.len() - 1];
    }

    value
}

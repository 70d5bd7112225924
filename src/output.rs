use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

/// Overwrite `path` with the questions as a pretty-printed JSON array plus a trailing newline.
pub fn write_questions(path: &Path, questions: &[String]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {:?}", parent))?;
    }
    let mut json = serde_json::to_string_pretty(questions)?;
    json.push('\n');
    fs::write(path, json).with_context(|| format!("Failed to write {:?}", path))?;
    info!(path = %path.display(), count = questions.len(), "wrote questions");
    Ok(())
}

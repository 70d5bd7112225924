pub mod cards;
pub mod tsv;

use std::path::Path;

use tracing::info;

use crate::clean;
use crate::db;
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Sqlite,
    Tsv,
    Cards,
}

impl SourceKind {
    /// Pick the reader from the file extension; anything unrecognised is treated as SQLite.
    pub fn detect(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("tsv") => SourceKind::Tsv,
            Some("cards") => SourceKind::Cards,
            _ => SourceKind::Sqlite,
        }
    }

    fn cleaner(self) -> fn(&str) -> Option<String> {
        match self {
            SourceKind::Sqlite => clean::clean_db_value,
            SourceKind::Cards => clean::clean_card_value,
            SourceKind::Tsv => keep,
        }
    }
}

fn keep(s: &str) -> Option<String> {
    Some(s.to_string())
}

/// Outcome of one run, before writing.
#[derive(Debug)]
pub struct Extraction {
    pub extracted: usize,
    pub questions: Vec<String>,
}

/// Read raw candidates from `path`, clean them and drop duplicates.
pub fn extract(path: &Path) -> Result<Extraction> {
    let kind = SourceKind::detect(path);
    info!(source = %path.display(), ?kind, "reading source");

    let candidates = match kind {
        SourceKind::Sqlite => db::read_candidates(db::connect(path)?),
        SourceKind::Tsv => tsv::read_questions(path)?,
        SourceKind::Cards => cards::read_fields(path)?,
    };

    let cleaned = clean::clean_all(&candidates, kind.cleaner());
    info!(raw = candidates.len(), cleaned = cleaned.len(), "cleaned candidates");

    Ok(Extraction {
        extracted: candidates.len(),
        questions: clean::dedupe(cleaned),
    })
}

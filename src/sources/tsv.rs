use std::path::Path;

use crate::error::{Result, SourceError};

/// Column holding the question text in a deck export.
const QUESTION_COLUMN: usize = 1;

pub fn read_questions(path: &Path) -> Result<Vec<String>> {
    let text = std::fs::read_to_string(path)?;
    parse(&text)
}

/// Second column of every data row, skipping the header and short rows.
pub fn parse(text: &str) -> Result<Vec<String>> {
    let lines: Vec<&str> = text
        .split('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .filter(|l| !l.is_empty())
        .collect();
    if lines.len() < 2 {
        return Err(SourceError::EmptyTsv);
    }

    let questions = lines[1..]
        .iter()
        .filter_map(|line| line.split('\t').nth(QUESTION_COLUMN))
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .map(str::to_string)
        .collect();
    Ok(questions)
}

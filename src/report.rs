use std::fmt;

use crate::sources::Extraction;

/// Counts printed once the output file is written.
pub struct Summary {
    pub extracted: usize,
    pub unique: usize,
}

impl Summary {
    pub fn of(extraction: &Extraction) -> Self {
        Summary {
            extracted: extraction.extracted,
            unique: extraction.questions.len(),
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "extracted_cells={} unique_questions={}",
            self.extracted, self.unique
        )
    }
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("{0} not found inside archive")]
    MissingEntry(String),

    #[error("TSV seems empty")]
    EmptyTsv,
}

pub type Result<T> = std::result::Result<T, SourceError>;

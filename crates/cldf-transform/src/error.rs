use cldf_ingest::IngestError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransformError {
    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error("parameter '{parameter}' has no Sheet_Column")]
    MissingSheetColumn { parameter: String },

    #[error("row {row} references unindexed language '{glottocode}'")]
    UnknownLanguage { row: String, glottocode: String },
}

pub type Result<T> = std::result::Result<T, TransformError>;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("empty citation key in source reference '{0}'")]
    EmptyCitationKey(String),
    #[error("unterminated page range in source reference '{0}'")]
    UnterminatedPages(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;

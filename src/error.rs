use thiserror::Error;

use crate::include::{GrammarError, IncludeError};

#[derive(Error, Debug)]
pub enum Error {
    #[error("Grammar error: {0}")]
    Grammar(#[from] GrammarError),
    #[error("Include error: {0}")]
    Include(#[from] IncludeError),
    #[error("Internal error: {0}")]
    Internal(String),
}

pub type DslResult<T> = Result<T, Error>;

// エラー作成用のヘルパー関数
impl Error {
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Error::Internal(message.into())
    }
}

use thiserror::Error;

use crate::ai::AnalyzerError;
use crate::db::DatabaseError;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Email {id} not found")]
    NotFound { id: i32 },

    #[error("Analysis failed: {0}")]
    Analysis(#[from] AnalyzerError),

    #[error("Storage failed: {0}")]
    Store(#[from] DatabaseError),
}

impl PipelineError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, PipelineError::NotFound { .. })
    }
}

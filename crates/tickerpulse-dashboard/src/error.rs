use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("datasets have not been loaded")]
    NotLoaded,

    #[error("datasets are already loaded; reload the session to refresh them")]
    AlreadyLoaded,

    #[error("date index {index} is outside the axis (last index {max_index})")]
    RangeOutOfBounds { index: usize, max_index: usize },

    #[error("date range selection is disabled: {reason}")]
    RangeDisabled { reason: String },
}

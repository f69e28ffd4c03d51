use thiserror::Error;

/// Errors raised while constructing snapshot data.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GridError {
    #[error("grid dimensions {width}x{height} do not match {cells} cells")]
    DimensionMismatch {
        width: usize,
        height: usize,
        cells: usize,
    },

    #[error("grid must have non-zero dimensions")]
    Empty,
}

use thiserror::Error;

/// Errors raised by the fallible field operations.
///
/// The grid is left untouched whenever one of these is returned.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("cannot seed {count} live cells into a {width}x{height} field")]
    SeedCountTooLarge {
        count: usize,
        width: usize,
        height: usize,
    },

    #[error("cell ({row}, {col}) is outside the {width}x{height} field")]
    OutOfBounds {
        row: usize,
        col: usize,
        width: usize,
        height: usize,
    },
}

//! Validation errors.

/// An error returned by [`chunk`](crate::chunk()) and [`chunk_vec`](crate::chunk_vec()) before any group is produced.
#[derive(Debug, Eq, PartialEq, Clone, Copy, thiserror::Error)]
pub enum ChunkError {
    /// The input has no elements.
    #[error("cannot chunk an empty input")]
    EmptyInput,
    /// The chunk size is zero.
    #[error("chunk size must be at least 1")]
    InvalidChunkSize,
    /// The chunk size is larger than the input, so the first chunk would already overrun it.
    #[error("chunk size {size} is out of range for an input of length {len}")]
    OutOfRange {
        /// Requested chunk size.
        size: usize,
        /// Length of the input.
        len: usize,
    },
}

use thiserror::Error;

/// Every violation of a container contract maps to one of these two kinds.
/// Failures are reported at the offending call, never deferred or clamped
#[derive(Debug, Copy, Clone, Eq, PartialEq, Error)]
pub enum Error {
    /// An index was not valid for the container's current size
    #[error("index {index} out of range for length {len}")]
    OutOfRange { index: usize, len: usize },

    /// An operation requiring at least one element ran on an empty container
    #[error("container is empty")]
    Empty,
}

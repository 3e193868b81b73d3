use thiserror::Error;

/// Recoverable conditions reported by container operations.
///
/// No operation in this crate terminates the process; a rejected operation
/// returns one of these variants and leaves the container unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ListError {
    /// A delete or remove was attempted on a container with no nodes.
    #[error("container is empty")]
    Empty,

    /// A 1-based position outside the valid range for the operation.
    ///
    /// Position 0 is always invalid; insertion accepts positions up to
    /// `len + 1`, removal up to `len`.
    #[error("invalid position {0}")]
    InvalidPosition(usize),
}

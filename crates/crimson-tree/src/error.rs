//! Error surface for cursor misuse.

use thiserror::Error;

/// Failures raised by [`Cursor`](crate::Cursor) operations.
///
/// Removal of an absent value is not an error; `RbTree::remove` reports it
/// through its `bool` return instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CursorError {
    /// `next` was called with no element left to yield.
    #[error("cursor exhausted")]
    Exhausted,
    /// `remove` was called while the cursor was not on an element.
    #[error("cursor not positioned on an element")]
    InvalidState,
}

//! Error handling for tree operations.
//!
//! The tree has exactly two failure modes: a lookup (or cursor step) that
//! finds nothing, and an attempt to merge trees built with different
//! branching factors. Everything else is infallible; duplicate inserts and
//! absent deletes are deliberate no-ops surfaced as `bool`, not errors.
//!
//! A convenience [`Result<T>`] alias is re-exported so that callers can
//! write `Result<&T>` instead of `core::result::Result<&T, TreeError>`.

use core::fmt;

/// The canonical error type for all tree operations.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TreeError {
    /// The requested item is not in the tree, or a cursor was advanced past
    /// its final item.
    NotFound,

    /// Two trees can only be merged when they share a branching factor.
    OrderMismatch {
        /// Order of the left operand.
        left: usize,
        /// Order of the right operand.
        right: usize,
    },
}

impl fmt::Display for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeError::NotFound => write!(f, "item not found"),
            TreeError::OrderMismatch {
                left,
                right,
            } => {
                write!(f, "order mismatch: {left} vs {right}")
            }
        }
    }
}

impl core::error::Error for TreeError {}

/// A specialised [`Result`] type for tree operations.
pub type Result<T> = core::result::Result<T, TreeError>;

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn display_messages_are_human_readable() {
        assert_eq!(TreeError::NotFound.to_string(), "item not found");
        assert_eq!(
            TreeError::OrderMismatch {
                left: 3,
                right: 8
            }
            .to_string(),
            "order mismatch: 3 vs 8"
        );
    }

    #[test]
    fn error_is_copy_and_comparable() {
        let e = TreeError::NotFound;
        let f = e;
        assert_eq!(e, f);
        assert_ne!(
            e,
            TreeError::OrderMismatch {
                left: 2,
                right: 4
            }
        );
    }
}

//! Error types for outranking operations.

use thiserror::Error;

use crate::entity::EntityKind;

/// Errors returned by the splice engine and group construction.
///
/// The greedy matcher has no failure modes and never returns this type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OutrankError {
    /// The promotion count exceeds the size of the low group.
    #[error("promote_count {promote_count} exceeds low group size {low_len}")]
    InvalidArgument {
        /// Requested number of promoted entities.
        promote_count: usize,
        /// Size of the low group the count was checked against.
        low_len: usize,
    },

    /// A group was built from entities of more than one kind.
    #[error("group of {expected} entities cannot contain {found} entity {label:?}")]
    MixedKinds {
        /// Kind of the group.
        expected: EntityKind,
        /// Kind of the offending entity.
        found: EntityKind,
        /// Label of the offending entity.
        label: String,
    },
}

/// Result type alias for outranking operations.
pub type Result<T> = std::result::Result<T, OutrankError>;

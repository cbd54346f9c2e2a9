//! Weighted entity model.
//!
//! Entities are immutable weighted records of one of two kinds:
//!
//! - **Primary** (sponsor): may be outranked.
//! - **Secondary** (shareholder): contributes weight toward outranking.
//!
//! A [`Group`] is an ordered, single-kind sequence of entities. The
//! algorithms in [`splice`](crate::splice) and [`matching`](crate::matching)
//! only depend on the [`Weighted`] trait, so callers may also supply
//! their own record types.

mod group;
mod types;

pub use group::{partition, Group};
pub use types::{total_weight, Entity, EntityKind, Total, Weight, Weighted};

//! Splice-reorder engine.
//!
//! Places the heaviest members of a high group ahead of a fixed low
//! block, followed by the remaining high-group members:
//!
//! ```text
//! promoted (top K of high, by weight) ++ low[K..] ++ rest of high
//! ```
//!
//! The count `K` is bounded by the size of the low group. Under the
//! default [`LowTail::SkipPromoted`] policy the first `K` low entries are
//! displaced from the output and returned separately, so no entity is
//! ever lost.

mod config;
mod engine;

pub use config::{LowTail, SpliceConfig};
pub use engine::{reorder, SpliceEngine, SpliceResult};

//! Greedy outrank matching.
//!
//! Determines, for each entity of an ordered low group, which disjoint
//! run of high-group entities collectively outweighs it. Accumulation
//! follows the high group's order and strict inequality is required:
//! a running sum equal to the low entity's weight does not outrank it.
//!
//! Matched high-group entities are consumed exactly once. A low entity
//! that cannot be outranked consumes nothing.

mod matcher;
mod pool;
mod types;

pub use matcher::{match_outranks, OutrankMatcher};
pub use pool::AvailablePool;
pub use types::{MatchReport, MatchResult};

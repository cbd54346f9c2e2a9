//! End-to-end ranking flow.
//!
//! Packages the usual sequence of steps:
//!
//! 1. Optionally splice the heaviest secondaries ahead of the primaries
//! 2. Split the combined ordering back into primaries and secondaries
//! 3. Run the greedy matcher over the split groups
//!
//! Independent inputs (one per building, say) can be ranked as a batch,
//! in parallel with the `parallel` feature.

mod config;
mod runner;

pub use config::RankConfig;
pub use runner::{RankInput, RankOutcome, RankPipeline};

//! Weight-based outranking of sponsor and shareholder records.
//!
//! Entities carry a share count. Heavier accumulated weight outranks
//! lighter weight, even when the lighter entities were listed first.
//! The crate provides:
//!
//! - **Entity model**: immutable weighted records, single-kind groups and
//!   the [`Weighted`](entity::Weighted) trait the algorithms are generic over.
//! - **Splice**: promotes the heaviest members of a high group ahead of a
//!   fixed low block.
//! - **Matching**: greedy first-fit allocation of disjoint runs of high
//!   entities whose combined weight strictly exceeds each low entity.
//! - **Pipeline**: splice, split by kind and match in one call, for a
//!   single input or a batch of independent inputs.
//!
//! # Architecture
//!
//! Every operation is a pure, synchronous function of its inputs. No
//! state survives between calls and no text is formatted by the
//! algorithms; results are structured data owned by the caller.
//! Diagnostics go through [`tracing`]; install a subscriber to see them.
//!
//! # Example
//!
//! ```
//! use u_outrank::entity::Entity;
//! use u_outrank::matching::match_outranks;
//! use u_outrank::splice::reorder;
//!
//! let sponsors = vec![Entity::primary("1A", 300), Entity::primary("3D", 900)];
//! let holders = vec![
//!     Entity::secondary("1C", 300),
//!     Entity::secondary("1D", 400),
//!     Entity::secondary("1E", 500),
//! ];
//!
//! let results = match_outranks(&sponsors, &holders);
//! assert_eq!(results[0].outranked_by.len(), 2);
//!
//! let combined = reorder(&sponsors, &holders, 1).unwrap();
//! assert_eq!(combined[0].label(), "1E");
//! ```

pub mod entity;
pub mod error;
pub mod matching;
pub mod pipeline;
pub mod splice;

pub use error::{OutrankError, Result};

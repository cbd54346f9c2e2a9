//! Splice-reorder execution.
//!
//! # Algorithm
//!
//! 1. Check `promote_count <= low.len()`
//! 2. Stably sort the high group by weight, descending (ties keep input order)
//! 3. Output `promoted ++ low[promote_count..] ++ remaining_high`

use std::cmp::Reverse;

use tracing::debug;

use super::config::{LowTail, SpliceConfig};
use crate::entity::Weighted;
use crate::error::Result;

/// Result of a splice.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpliceResult<T> {
    /// The combined ordering.
    pub sequence: Vec<T>,

    /// Number of high-group entities placed at the front of `sequence`.
    pub promoted: usize,

    /// Low-group entries left out of `sequence` under
    /// [`LowTail::SkipPromoted`]. Empty under [`LowTail::KeepAll`].
    pub displaced: Vec<T>,
}

impl<T> SpliceResult<T> {
    /// The promoted high-group prefix of the sequence.
    pub fn promoted_slice(&self) -> &[T] {
        &self.sequence[..self.promoted]
    }
}

/// Splice-reorder runner.
pub struct SpliceEngine;

impl SpliceEngine {
    /// Promotes the heaviest high-group entities ahead of the low group.
    ///
    /// # Errors
    ///
    /// Returns [`OutrankError::InvalidArgument`](crate::OutrankError::InvalidArgument)
    /// when `config.promote_count` exceeds `low.len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_outrank::entity::Entity;
    /// use u_outrank::splice::{SpliceConfig, SpliceEngine};
    ///
    /// let low = vec![Entity::primary("L1", 1), Entity::primary("L2", 1)];
    /// let high = vec![Entity::secondary("H1", 5), Entity::secondary("H2", 20)];
    ///
    /// let result = SpliceEngine::run(&low, &high, &SpliceConfig::new(1)).unwrap();
    /// let labels: Vec<_> = result.sequence.iter().map(|e| e.label()).collect();
    /// assert_eq!(labels, vec!["H2", "L2", "H1"]);
    /// assert_eq!(result.displaced[0].label(), "L1");
    /// ```
    pub fn run<T: Weighted + Clone>(
        low: &[T],
        high: &[T],
        config: &SpliceConfig,
    ) -> Result<SpliceResult<T>> {
        config.validate(low.len())?;

        let order = if config.sort_high {
            sort_indices_descending(high)
        } else {
            (0..high.len()).collect()
        };

        let promoted = config.promote_count.min(high.len());
        let low_start = match config.low_tail {
            LowTail::SkipPromoted => config.promote_count,
            LowTail::KeepAll => 0,
        };

        let mut sequence = Vec::with_capacity(high.len() + low.len() - low_start);
        sequence.extend(order[..promoted].iter().map(|&i| high[i].clone()));
        sequence.extend_from_slice(&low[low_start..]);
        sequence.extend(order[promoted..].iter().map(|&i| high[i].clone()));

        let displaced = low[..low_start].to_vec();

        debug!(
            event = "splice",
            low = low.len(),
            high = high.len(),
            promoted,
            displaced = displaced.len(),
        );

        Ok(SpliceResult {
            sequence,
            promoted,
            displaced,
        })
    }
}

/// Reorders `low` and `high` with the canonical policy: stable
/// descending sort of `high`, promote `promote_count`, drop the same
/// number of leading `low` entries.
///
/// # Errors
///
/// Returns [`OutrankError::InvalidArgument`](crate::OutrankError::InvalidArgument)
/// when `promote_count > low.len()`.
///
/// # Examples
///
/// ```
/// use u_outrank::entity::Entity;
/// use u_outrank::splice::reorder;
///
/// let low = vec![
///     Entity::primary("L1", 0),
///     Entity::primary("L2", 0),
///     Entity::primary("L3", 0),
/// ];
/// let high = vec![
///     Entity::secondary("H1", 5),
///     Entity::secondary("H2", 20),
///     Entity::secondary("H3", 10),
/// ];
/// let out = reorder(&low, &high, 2).unwrap();
/// let labels: Vec<_> = out.iter().map(|e| e.label()).collect();
/// assert_eq!(labels, vec!["H2", "H3", "L3", "H1"]);
///
/// assert!(reorder(&low, &high, 4).is_err());
/// ```
pub fn reorder<T: Weighted + Clone>(low: &[T], high: &[T], promote_count: usize) -> Result<Vec<T>> {
    SpliceEngine::run(low, high, &SpliceConfig::new(promote_count)).map(|r| r.sequence)
}

/// Indices of `items` ordered by weight, heaviest first.
///
/// `sort_by_key` is stable, so equal weights keep their input order.
fn sort_indices_descending<T: Weighted>(items: &[T]) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..items.len()).collect();
    indices.sort_by_key(|&i| Reverse(items[i].weight()));
    indices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Entity;
    use crate::error::OutrankError;

    fn labels(items: &[Entity]) -> Vec<&str> {
        items.iter().map(|e| e.label()).collect()
    }

    fn low3() -> Vec<Entity> {
        vec![
            Entity::primary("L1", 100),
            Entity::primary("L2", 200),
            Entity::primary("L3", 300),
        ]
    }

    fn high3() -> Vec<Entity> {
        vec![
            Entity::secondary("H1", 5),
            Entity::secondary("H2", 20),
            Entity::secondary("H3", 10),
        ]
    }

    #[test]
    fn test_reorder_canonical_scenario() {
        let out = reorder(&low3(), &high3(), 2).unwrap();
        assert_eq!(labels(&out), vec!["H2", "H3", "L3", "H1"]);
    }

    #[test]
    fn test_reorder_rejects_count_above_low_len() {
        let err = reorder(&low3(), &high3(), 4).unwrap_err();
        assert_eq!(
            err,
            OutrankError::InvalidArgument {
                promote_count: 4,
                low_len: 3,
            }
        );
    }

    #[test]
    fn test_reorder_zero_promotes_nothing() {
        let out = reorder(&low3(), &high3(), 0).unwrap();
        assert_eq!(labels(&out), vec!["L1", "L2", "L3", "H2", "H3", "H1"]);
    }

    #[test]
    fn test_reorder_count_equals_low_len() {
        let out = reorder(&low3(), &high3(), 3).unwrap();
        assert_eq!(labels(&out), vec!["H2", "H3", "H1"]);
    }

    #[test]
    fn test_promote_count_larger_than_high_group() {
        let high = vec![Entity::secondary("H1", 5)];
        let result = SpliceEngine::run(&low3(), &high, &SpliceConfig::new(2)).unwrap();
        assert_eq!(result.promoted, 1);
        assert_eq!(labels(&result.sequence), vec!["H1", "L3"]);
        assert_eq!(labels(&result.displaced), vec!["L1", "L2"]);
    }

    #[test]
    fn test_stable_sort_on_equal_weights() {
        let high = vec![
            Entity::secondary("a", 500),
            Entity::secondary("b", 900),
            Entity::secondary("c", 500),
            Entity::secondary("d", 500),
        ];
        let low = vec![Entity::primary("x", 1); 3];
        let out = reorder(&low, &high, 3).unwrap();
        assert_eq!(labels(&out[..3]), vec!["b", "a", "c"]);
        assert_eq!(out.last().unwrap().label(), "d");
    }

    #[test]
    fn test_keep_all_is_permutation() {
        let config = SpliceConfig::new(2).with_low_tail(LowTail::KeepAll);
        let result = SpliceEngine::run(&low3(), &high3(), &config).unwrap();
        assert_eq!(
            labels(&result.sequence),
            vec!["H2", "H3", "L1", "L2", "L3", "H1"]
        );
        assert!(result.displaced.is_empty());
    }

    #[test]
    fn test_unsorted_high_keeps_given_order() {
        let config = SpliceConfig::new(2).with_sort_high(false);
        let result = SpliceEngine::run(&low3(), &high3(), &config).unwrap();
        assert_eq!(labels(&result.sequence), vec!["H1", "H2", "L3", "H3"]);
        assert_eq!(labels(result.promoted_slice()), vec!["H1", "H2"]);
    }

    #[test]
    fn test_displaced_plus_sequence_covers_inputs() {
        let result = SpliceEngine::run(&low3(), &high3(), &SpliceConfig::new(2)).unwrap();
        assert_eq!(result.sequence.len() + result.displaced.len(), 6);
        assert_eq!(labels(&result.displaced), vec!["L1", "L2"]);
    }

    #[test]
    fn test_empty_inputs() {
        let empty: Vec<Entity> = vec![];
        assert!(reorder(&empty, &empty, 0).unwrap().is_empty());
        let out = reorder(&empty, &high3(), 0).unwrap();
        assert_eq!(labels(&out), vec!["H2", "H3", "H1"]);
    }

    #[test]
    fn test_inputs_untouched() {
        let low = low3();
        let high = high3();
        let _ = reorder(&low, &high, 2).unwrap();
        assert_eq!(labels(&high), vec!["H1", "H2", "H3"]);
        assert_eq!(labels(&low), vec!["L1", "L2", "L3"]);
    }
}

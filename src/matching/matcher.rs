//! Greedy first-fit outrank matching.
//!
//! # Algorithm
//!
//! For each low entity, in the given order:
//!
//! 1. Walk the available pool in order, accumulating weight
//! 2. Stop as soon as the running sum strictly exceeds the low entity's weight
//! 3. On success, emit a match and remove the walked entities from the pool
//! 4. Otherwise record the low entity as unmatched; the pool is untouched
//!
//! The allocation is deliberately greedy: earlier low entities get first
//! claim on the pool, and no smaller or alternative combination is ever
//! searched for.

use tracing::debug;

use super::pool::AvailablePool;
use super::types::{MatchReport, MatchResult};
use crate::entity::Weighted;

/// Greedy outrank matcher.
pub struct OutrankMatcher;

impl OutrankMatcher {
    /// Matches every low entity against the high pool and reports
    /// matches, unmatched low entities and the leftover pool.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_outrank::entity::Entity;
    /// use u_outrank::matching::OutrankMatcher;
    ///
    /// let sponsors = vec![Entity::primary("3D", 900), Entity::primary("3G", 1000)];
    /// let holders = vec![
    ///     Entity::secondary("1C", 300),
    ///     Entity::secondary("1D", 400),
    ///     Entity::secondary("1E", 500),
    ///     Entity::secondary("1F", 100),
    /// ];
    ///
    /// let report = OutrankMatcher::run(&sponsors, &holders);
    /// assert_eq!(report.matches.len(), 1);
    /// assert_eq!(report.matches[0].total, 1200);
    /// assert_eq!(report.unmatched[0].label(), "3G");
    /// assert_eq!(report.leftover[0].label(), "1F");
    /// ```
    pub fn run<T: Weighted + Clone>(low: &[T], high: &[T]) -> MatchReport<T> {
        let mut pool = AvailablePool::new(high);
        let mut matches = Vec::new();
        let mut unmatched = Vec::new();

        for (index, primary) in low.iter().enumerate() {
            match pool.claim(primary.weight()) {
                Some((claimed, total)) => {
                    debug!(
                        event = "outranked",
                        index,
                        weight = primary.weight(),
                        group_size = claimed.len(),
                        total = %total,
                        remaining = pool.len(),
                    );
                    matches.push(MatchResult {
                        primary: primary.clone(),
                        outranked_by: claimed.to_vec(),
                        total,
                    });
                }
                None => {
                    debug!(
                        event = "not_outranked",
                        index,
                        weight = primary.weight(),
                        remaining = pool.len(),
                    );
                    unmatched.push(primary.clone());
                }
            }
        }

        MatchReport {
            matches,
            unmatched,
            leftover: pool.available().to_vec(),
        }
    }
}

/// Returns, for each low entity that can be outranked, the group of
/// high entities that outranks it.
///
/// Low entities without a match produce no result. An empty low or
/// high group yields an empty result.
///
/// # Examples
///
/// ```
/// use u_outrank::entity::Entity;
/// use u_outrank::matching::match_outranks;
///
/// let low = vec![Entity::primary("1A", 1000), Entity::primary("1B", 150)];
/// let high = vec![Entity::secondary("1C", 100), Entity::secondary("1D", 100)];
///
/// let results = match_outranks(&low, &high);
/// assert_eq!(results.len(), 1);
/// assert_eq!(results[0].primary.label(), "1B");
/// assert_eq!(results[0].total, 200);
/// ```
pub fn match_outranks<T: Weighted + Clone>(low: &[T], high: &[T]) -> Vec<MatchResult<T>> {
    OutrankMatcher::run(low, high).matches
}

//! Splice → partition → match execution.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::info;

use super::config::RankConfig;
use crate::entity::{partition, Entity};
use crate::error::Result;
use crate::matching::{MatchReport, OutrankMatcher};
use crate::splice::{SpliceEngine, SpliceResult};

/// One independent ranking problem, e.g. a single building.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankInput {
    /// Caller-chosen name, carried into logs.
    pub name: String,
    /// Entities that may be outranked, in priority order.
    pub primaries: Vec<Entity>,
    /// Entities that contribute weight, in accumulation order.
    pub secondaries: Vec<Entity>,
}

impl RankInput {
    /// Creates a named ranking input.
    pub fn new(name: impl Into<String>, primaries: Vec<Entity>, secondaries: Vec<Entity>) -> Self {
        Self {
            name: name.into(),
            primaries,
            secondaries,
        }
    }
}

/// Result of a pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankOutcome {
    /// The combined ordering, when a splice step was configured.
    pub ordering: Option<SpliceResult<Entity>>,
    /// The matcher's report over the (possibly reordered) groups.
    pub report: MatchReport<Entity>,
}

/// Runs the full ranking flow.
///
/// With a splice step configured, the primaries and secondaries are
/// spliced, the combined ordering is split back by kind, and the split
/// groups are matched. Without one, the inputs are matched directly.
pub struct RankPipeline;

impl RankPipeline {
    /// Ranks one set of primaries against one set of secondaries.
    ///
    /// # Errors
    ///
    /// Returns [`OutrankError::InvalidArgument`](crate::OutrankError::InvalidArgument)
    /// when the splice promotion count exceeds the number of primaries.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_outrank::entity::Entity;
    /// use u_outrank::pipeline::{RankConfig, RankPipeline};
    ///
    /// let sponsors = vec![Entity::primary("1A", 300), Entity::primary("1B", 400)];
    /// let holders = vec![
    ///     Entity::secondary("1C", 100),
    ///     Entity::secondary("2C", 900),
    ///     Entity::secondary("1D", 200),
    /// ];
    ///
    /// let outcome = RankPipeline::run(&sponsors, &holders, &RankConfig::promote(1)).unwrap();
    /// let ordering = outcome.ordering.unwrap();
    /// assert_eq!(ordering.sequence[0].label(), "2C");
    ///
    /// // 1A was displaced; 1B is outranked by 2C alone.
    /// let m = &outcome.report.matches[0];
    /// assert_eq!(m.primary.label(), "1B");
    /// assert_eq!(m.total, 900);
    /// ```
    pub fn run(
        primaries: &[Entity],
        secondaries: &[Entity],
        config: &RankConfig,
    ) -> Result<RankOutcome> {
        let outcome = match &config.splice {
            Some(splice) => {
                let ordering = SpliceEngine::run(primaries, secondaries, splice)?;
                let (low, high) = partition(ordering.sequence.iter().cloned());
                let report = OutrankMatcher::run(low.as_slice(), high.as_slice());
                RankOutcome {
                    ordering: Some(ordering),
                    report,
                }
            }
            None => RankOutcome {
                ordering: None,
                report: OutrankMatcher::run(primaries, secondaries),
            },
        };
        Ok(outcome)
    }

    /// Ranks a named input, logging its summary.
    pub fn run_input(input: &RankInput, config: &RankConfig) -> Result<RankOutcome> {
        info!(
            event = "rank_start",
            name = %input.name,
            primaries = input.primaries.len(),
            secondaries = input.secondaries.len(),
            promote_count = config.splice.as_ref().map(|s| s.promote_count),
        );

        let outcome = Self::run(&input.primaries, &input.secondaries, config)?;

        info!(
            event = "rank_end",
            name = %input.name,
            matched = outcome.report.matched_count(),
            unmatched = outcome.report.unmatched.len(),
            consumed = outcome.report.consumed_count(),
            leftover = outcome.report.leftover.len(),
        );
        Ok(outcome)
    }

    /// Ranks independent inputs, one result per input in input order.
    ///
    /// Each input is ranked on its own copies of its groups, so a failure
    /// in one input does not affect the others. With the `parallel`
    /// feature and [`RankConfig::parallel`] set, inputs are ranked on the
    /// rayon thread pool.
    pub fn run_batch(inputs: &[RankInput], config: &RankConfig) -> Vec<Result<RankOutcome>> {
        #[cfg(feature = "parallel")]
        {
            if config.parallel {
                return inputs
                    .par_iter()
                    .map(|input| Self::run_input(input, config))
                    .collect();
            }
        }

        inputs
            .iter()
            .map(|input| Self::run_input(input, config))
            .collect()
    }
}

//! Rank pipeline configuration.

use crate::splice::SpliceConfig;

/// Configuration for [`RankPipeline`](super::RankPipeline).
///
/// # Defaults
///
/// ```
/// use u_outrank::pipeline::RankConfig;
///
/// let config = RankConfig::default();
/// assert!(config.splice.is_none());
/// assert!(config.parallel);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_outrank::pipeline::RankConfig;
/// use u_outrank::splice::LowTail;
///
/// let config = RankConfig::promote(16)
///     .with_low_tail(LowTail::KeepAll)
///     .with_parallel(false);
/// assert_eq!(config.splice.as_ref().map(|s| s.promote_count), Some(16));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankConfig {
    /// Splice step run before matching. `None` matches the inputs as given.
    pub splice: Option<SpliceConfig>,

    /// Whether batches are ranked in parallel using rayon.
    ///
    /// Only takes effect with the `parallel` feature enabled.
    pub parallel: bool,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            splice: None,
            parallel: true,
        }
    }
}

impl RankConfig {
    /// Matches the inputs in their given order, without a splice step.
    pub fn match_only() -> Self {
        Self::default()
    }

    /// Splices `promote_count` secondaries ahead of the primaries before
    /// matching.
    pub fn promote(promote_count: usize) -> Self {
        Self {
            splice: Some(SpliceConfig::new(promote_count)),
            ..Self::default()
        }
    }

    /// Sets the splice step.
    pub fn with_splice(mut self, splice: SpliceConfig) -> Self {
        self.splice = Some(splice);
        self
    }

    /// Removes the splice step.
    pub fn without_splice(mut self) -> Self {
        self.splice = None;
        self
    }

    /// Sets the low-group tail policy, adding a default splice step if
    /// none is configured.
    pub fn with_low_tail(mut self, tail: crate::splice::LowTail) -> Self {
        self.splice = Some(self.splice.unwrap_or_default().with_low_tail(tail));
        self
    }

    /// Enables or disables parallel batch ranking.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

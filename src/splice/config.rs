//! Splice configuration.

use crate::error::{OutrankError, Result};

/// What happens to the low group's leading entries when high-group
/// entities are promoted ahead of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum LowTail {
    /// The first `promote_count` low entries are displaced: the output
    /// carries `low[promote_count..]`. Displaced entries are reported
    /// separately by [`SpliceEngine::run`](super::SpliceEngine::run).
    #[default]
    SkipPromoted,

    /// The whole low group is kept, so the output is a permutation of
    /// both inputs.
    KeepAll,
}

/// Configuration for the splice-reorder engine.
///
/// # Examples
///
/// ```
/// use u_outrank::splice::{LowTail, SpliceConfig};
///
/// let config = SpliceConfig::new(5).with_low_tail(LowTail::KeepAll);
/// assert_eq!(config.promote_count, 5);
/// assert!(config.sort_high);
/// assert!(config.validate(16).is_ok());
/// assert!(config.validate(4).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpliceConfig {
    /// Number of high-group entities placed ahead of the low group.
    ///
    /// Must not exceed the size of the low group.
    pub promote_count: usize,

    /// Treatment of the low group's leading entries.
    pub low_tail: LowTail,

    /// Whether the high group is stably sorted by weight, descending,
    /// before promotion. When `false` the given order is used as is.
    pub sort_high: bool,
}

impl Default for SpliceConfig {
    fn default() -> Self {
        Self {
            promote_count: 0,
            low_tail: LowTail::SkipPromoted,
            sort_high: true,
        }
    }
}

impl SpliceConfig {
    /// Creates a configuration promoting `promote_count` entities with
    /// default settings.
    pub fn new(promote_count: usize) -> Self {
        Self {
            promote_count,
            ..Self::default()
        }
    }

    /// Sets the promotion count.
    pub fn with_promote_count(mut self, n: usize) -> Self {
        self.promote_count = n;
        self
    }

    /// Sets the low-group tail policy.
    pub fn with_low_tail(mut self, tail: LowTail) -> Self {
        self.low_tail = tail;
        self
    }

    /// Enables or disables sorting the high group by weight.
    pub fn with_sort_high(mut self, sort: bool) -> Self {
        self.sort_high = sort;
        self
    }

    /// Checks the promotion count against the size of the low group.
    pub fn validate(&self, low_len: usize) -> Result<()> {
        if self.promote_count > low_len {
            return Err(OutrankError::InvalidArgument {
                promote_count: self.promote_count,
                low_len,
            });
        }
        Ok(())
    }
}

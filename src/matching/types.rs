//! Matcher result types.

use std::fmt;

use crate::entity::{Entity, Total, Weighted};

/// A primary entity together with the secondary entities that
/// collectively outrank it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchResult<T> {
    /// The outranked entity.
    pub primary: T,

    /// The entities whose accumulated weight exceeds `primary`, in pool order.
    pub outranked_by: Vec<T>,

    /// Accumulated weight of `outranked_by`. Always strictly greater
    /// than the primary's weight.
    pub total: Total,
}

impl<T: Weighted> MatchResult<T> {
    /// By how much the accumulated weight exceeds the primary's weight.
    pub fn margin(&self) -> Total {
        self.total - Total::from(self.primary.weight())
    }
}

impl fmt::Display for MatchResult<Entity> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.outranked_by.iter().map(|e| e.label()).collect();
        write!(
            f,
            "Shareholders {} outrank Sponsor apartment {} with sum {} > {}.",
            names.join(", "),
            self.primary.label(),
            self.total,
            self.primary.weight()
        )
    }
}

/// Full outcome of a matcher run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchReport<T> {
    /// Successful matches, in the order of their primaries in the low group.
    pub matches: Vec<MatchResult<T>>,

    /// Low-group entities that could not be outranked, in input order.
    pub unmatched: Vec<T>,

    /// High-group entities never consumed by a match, in input order.
    pub leftover: Vec<T>,
}

impl<T> MatchReport<T> {
    /// Number of low-group entities that were outranked.
    pub fn matched_count(&self) -> usize {
        self.matches.len()
    }

    /// Number of high-group entities consumed across all matches.
    pub fn consumed_count(&self) -> usize {
        self.matches.iter().map(|m| m.outranked_by.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_report_line() {
        let m = MatchResult {
            primary: Entity::primary("1A", 300),
            outranked_by: vec![
                Entity::secondary("1C", 100),
                Entity::secondary("1D", 200),
                Entity::secondary("1E", 300),
            ],
            total: 600,
        };
        assert_eq!(
            m.to_string(),
            "Shareholders 1C, 1D, 1E outrank Sponsor apartment 1A with sum 600 > 300."
        );
    }

    #[test]
    fn test_margin() {
        let m = MatchResult {
            primary: Entity::primary("3D", 900),
            outranked_by: vec![Entity::secondary("x", 1200)],
            total: 1200,
        };
        assert_eq!(m.margin(), 300);
    }

    #[test]
    fn test_report_counts() {
        let report = MatchReport {
            matches: vec![MatchResult {
                primary: Entity::primary("p", 1),
                outranked_by: vec![Entity::secondary("a", 1), Entity::secondary("b", 1)],
                total: 2,
            }],
            unmatched: vec![Entity::primary("q", 10)],
            leftover: vec![],
        };
        assert_eq!(report.matched_count(), 1);
        assert_eq!(report.consumed_count(), 2);
    }
}

//! Single-kind ordered groups.

use crate::error::{OutrankError, Result};

use super::types::{total_weight, Entity, EntityKind, Total};

/// An ordered sequence of entities that all share one [`EntityKind`].
///
/// Order is significant: it defines accumulation order for the matcher
/// and tie order for the splice engine's stable sort.
///
/// # Examples
///
/// ```
/// use u_outrank::entity::{Entity, EntityKind, Group};
///
/// let sponsors = Group::new(
///     EntityKind::Primary,
///     vec![Entity::primary("1A", 300), Entity::primary("1B", 400)],
/// )
/// .unwrap();
/// assert_eq!(sponsors.len(), 2);
/// assert_eq!(sponsors.total_weight(), 700);
///
/// let mixed = Group::new(
///     EntityKind::Primary,
///     vec![Entity::primary("1A", 300), Entity::secondary("1C", 100)],
/// );
/// assert!(mixed.is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    kind: EntityKind,
    members: Vec<Entity>,
}

impl Group {
    /// Builds a group, rejecting any member whose kind differs from `kind`.
    pub fn new(kind: EntityKind, members: Vec<Entity>) -> Result<Self> {
        if let Some(bad) = members.iter().find(|e| e.kind() != kind) {
            return Err(OutrankError::MixedKinds {
                expected: kind,
                found: bad.kind(),
                label: bad.label().to_string(),
            });
        }
        Ok(Self { kind, members })
    }

    /// Creates an empty group of the given kind.
    pub fn empty(kind: EntityKind) -> Self {
        Self {
            kind,
            members: Vec::new(),
        }
    }

    /// Builds a group of primary entities from `(label, weight)` pairs.
    pub fn primaries<L: Into<String>>(rows: impl IntoIterator<Item = (L, u64)>) -> Self {
        Self {
            kind: EntityKind::Primary,
            members: rows
                .into_iter()
                .map(|(label, weight)| Entity::primary(label, weight))
                .collect(),
        }
    }

    /// Builds a group of secondary entities from `(label, weight)` pairs.
    pub fn secondaries<L: Into<String>>(rows: impl IntoIterator<Item = (L, u64)>) -> Self {
        Self {
            kind: EntityKind::Secondary,
            members: rows
                .into_iter()
                .map(|(label, weight)| Entity::secondary(label, weight))
                .collect(),
        }
    }

    /// Returns the kind shared by every member.
    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    /// Returns the members in order.
    pub fn as_slice(&self) -> &[Entity] {
        &self.members
    }

    /// Iterates over the members in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Entity> {
        self.members.iter()
    }

    /// Returns the number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns `true` if the group has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Sum of all member weights.
    pub fn total_weight(&self) -> Total {
        total_weight(&self.members)
    }

    /// Consumes the group and returns its members.
    pub fn into_vec(self) -> Vec<Entity> {
        self.members
    }
}

impl AsRef<[Entity]> for Group {
    fn as_ref(&self) -> &[Entity] {
        &self.members
    }
}

impl<'a> IntoIterator for &'a Group {
    type Item = &'a Entity;
    type IntoIter = std::slice::Iter<'a, Entity>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}

/// Splits a mixed sequence back into its primary and secondary groups,
/// preserving relative order within each.
///
/// Used after a splice to recover the two matcher inputs from the
/// combined ordering.
///
/// # Examples
///
/// ```
/// use u_outrank::entity::{partition, Entity};
///
/// let combined = vec![
///     Entity::secondary("2C", 900),
///     Entity::primary("1B", 400),
///     Entity::secondary("1C", 100),
/// ];
/// let (primaries, secondaries) = partition(combined);
/// assert_eq!(primaries.len(), 1);
/// let labels: Vec<_> = secondaries.iter().map(|e| e.label()).collect();
/// assert_eq!(labels, vec!["2C", "1C"]);
/// ```
pub fn partition(sequence: impl IntoIterator<Item = Entity>) -> (Group, Group) {
    let mut primaries = Group::empty(EntityKind::Primary);
    let mut secondaries = Group::empty(EntityKind::Secondary);
    for entity in sequence {
        match entity.kind() {
            EntityKind::Primary => primaries.members.push(entity),
            EntityKind::Secondary => secondaries.members.push(entity),
        }
    }
    (primaries, secondaries)
}

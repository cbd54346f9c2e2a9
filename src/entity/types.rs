//! Core entity types and the [`Weighted`] trait.

use std::fmt;

/// Share count carried by a single entity.
pub type Weight = u64;

/// Accumulated weight of several entities.
///
/// Wider than [`Weight`] so summing any number of entities cannot overflow.
pub type Total = u128;

/// Anything that carries a weight the outranking algorithms can compare
/// and accumulate.
///
/// The matcher and splice engine are generic over this trait so callers
/// can rank their own record types without converting to [`Entity`].
///
/// # Examples
///
/// ```
/// use u_outrank::entity::{Weight, Weighted};
///
/// struct Unit {
///     shares: u64,
/// }
///
/// impl Weighted for Unit {
///     fn weight(&self) -> Weight {
///         self.shares
///     }
/// }
///
/// assert_eq!(Unit { shares: 250 }.weight(), 250);
/// ```
pub trait Weighted {
    /// Returns the weight of this item.
    fn weight(&self) -> Weight;
}

impl<T: Weighted + ?Sized> Weighted for &T {
    fn weight(&self) -> Weight {
        (**self).weight()
    }
}

/// Classification of an entity.
///
/// Carries no ranking semantics by itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EntityKind {
    /// A record that may be outranked (a sponsor).
    Primary,
    /// A record whose weight contributes to outranking (a shareholder).
    Secondary,
}

impl EntityKind {
    /// Domain name of the kind, capitalized for display.
    pub fn display_name(self) -> &'static str {
        match self {
            EntityKind::Primary => "Sponsor",
            EntityKind::Secondary => "Shareholder",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Primary => f.write_str("sponsor"),
            EntityKind::Secondary => f.write_str("shareholder"),
        }
    }
}

/// A weighted record.
///
/// Immutable once constructed: fields are only reachable through
/// accessors.
///
/// # Examples
///
/// ```
/// use u_outrank::entity::{Entity, EntityKind};
///
/// let unit = Entity::primary("1A", 300);
/// assert_eq!(unit.kind(), EntityKind::Primary);
/// assert_eq!(unit.label(), "1A");
/// assert_eq!(unit.weight(), 300);
/// assert_eq!(unit.to_string(), "Sponsor 1A (Shares: 300)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entity {
    kind: EntityKind,
    label: String,
    weight: Weight,
}

impl Entity {
    /// Creates an entity of the given kind.
    pub fn new(kind: EntityKind, label: impl Into<String>, weight: Weight) -> Self {
        Self {
            kind,
            label: label.into(),
            weight,
        }
    }

    /// Creates a [`EntityKind::Primary`] entity.
    pub fn primary(label: impl Into<String>, weight: Weight) -> Self {
        Self::new(EntityKind::Primary, label, weight)
    }

    /// Creates a [`EntityKind::Secondary`] entity.
    pub fn secondary(label: impl Into<String>, weight: Weight) -> Self {
        Self::new(EntityKind::Secondary, label, weight)
    }

    /// Returns the kind of this entity.
    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    /// Returns the identifier of this entity.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the share count of this entity.
    pub fn weight(&self) -> Weight {
        self.weight
    }
}

impl Weighted for Entity {
    fn weight(&self) -> Weight {
        self.weight
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} (Shares: {})",
            self.kind.display_name(),
            self.label,
            self.weight
        )
    }
}

/// Sums the weights of `items` without overflow.
pub fn total_weight<T: Weighted>(items: &[T]) -> Total {
    items.iter().map(|item| Total::from(item.weight())).sum()
}

//! The eight archetypes and the octant table that maps onto them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ElcError;

/// Binarized position on one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Level {
    #[serde(rename = "H")]
    High,
    #[serde(rename = "L")]
    Low,
}

impl Level {
    pub fn letter(self) -> char {
        match self {
            Level::High => 'H',
            Level::Low => 'L',
        }
    }
}

/// Levels on (E, I, PI), in that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Octant {
    pub e: Level,
    pub i: Level,
    pub pi: Level,
}

impl Octant {
    pub const fn new(e: Level, i: Level, pi: Level) -> Self {
        Self { e, i, pi }
    }
}

/// Renders as `H/L/L`.
impl fmt::Display for Octant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.e.letter(), self.i.letter(), self.pi.letter())
    }
}

/// Result archetype.  Serialized as its lowercase slug.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Archetype {
    Rocket,
    Cloud,
    Guardian,
    Island,
    Bureaucrat,
    Priest,
    Void,
    Circle,
}

impl Archetype {
    pub const ALL: [Archetype; 8] = [
        Archetype::Rocket,
        Archetype::Cloud,
        Archetype::Guardian,
        Archetype::Island,
        Archetype::Bureaucrat,
        Archetype::Priest,
        Archetype::Void,
        Archetype::Circle,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Archetype::Rocket => "rocket",
            Archetype::Cloud => "cloud",
            Archetype::Guardian => "guardian",
            Archetype::Island => "island",
            Archetype::Bureaucrat => "bureaucrat",
            Archetype::Priest => "priest",
            Archetype::Void => "void",
            Archetype::Circle => "circle",
        }
    }

    /// The octant this archetype occupies in the lookup table.
    pub fn octant(self) -> Octant {
        use Level::{High as H, Low as L};
        match self {
            Archetype::Rocket => Octant::new(H, L, L),
            Archetype::Cloud => Octant::new(L, H, L),
            Archetype::Guardian => Octant::new(L, L, H),
            Archetype::Island => Octant::new(H, H, L),
            Archetype::Bureaucrat => Octant::new(H, L, H),
            Archetype::Priest => Octant::new(L, H, H),
            Archetype::Void => Octant::new(L, L, L),
            Archetype::Circle => Octant::new(H, H, H),
        }
    }

    /// Table lookup from an octant.
    ///
    /// Every octant is covered; the `Option` keeps the caller's fallback
    /// path explicit.
    pub fn from_octant(octant: Octant) -> Option<Self> {
        use Level::{High as H, Low as L};
        let archetype = match (octant.e, octant.i, octant.pi) {
            (H, L, L) => Archetype::Rocket,
            (L, H, L) => Archetype::Cloud,
            (L, L, H) => Archetype::Guardian,
            (H, H, L) => Archetype::Island,
            (H, L, H) => Archetype::Bureaucrat,
            (L, H, H) => Archetype::Priest,
            (L, L, L) => Archetype::Void,
            (H, H, H) => Archetype::Circle,
        };
        Some(archetype)
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Archetype {
    type Err = ElcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.slug() == s)
            .ok_or_else(|| ElcError::UnknownArchetype(s.to_string()))
    }
}

// ============================================================================
// Tests
// ============================================================================

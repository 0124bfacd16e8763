//! Algorithm identifiers and strategy selection.

use std::fmt;
use std::str::FromStr;

use crate::{AStar, BreadthFirst, GreedyBestFirst, PathSearch};

/// Identifier of a path search strategy.
///
/// A closed enumeration: a constructed value is always valid, so
/// unrecognized identifiers can only surface while parsing configuration,
/// where they fail loudly (see [`FromStr`]).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Algorithm {
    BreadthFirst,
    GreedyBestFirst,
    #[cfg_attr(feature = "serde", serde(rename = "astar"))]
    AStar,
}

impl Algorithm {
    /// Every selectable algorithm.
    pub const ALL: [Algorithm; 3] = [
        Algorithm::BreadthFirst,
        Algorithm::GreedyBestFirst,
        Algorithm::AStar,
    ];

    /// Canonical identifier, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Self::BreadthFirst => "breadth-first",
            Self::GreedyBestFirst => "greedy-best-first",
            Self::AStar => "astar",
        }
    }

    /// Instantiate the strategy this identifier selects.
    pub fn strategy(self) -> Box<dyn PathSearch> {
        match self {
            Self::BreadthFirst => Box::new(BreadthFirst),
            Self::GreedyBestFirst => Box::new(GreedyBestFirst),
            Self::AStar => Box::new(AStar),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "breadth-first" => Ok(Self::BreadthFirst),
            "greedy-best-first" => Ok(Self::GreedyBestFirst),
            "astar" => Ok(Self::AStar),
            other => Err(ParseAlgorithmError(other.to_string())),
        }
    }
}

/// An unrecognized algorithm identifier — a configuration error, meant to
/// be surfaced at startup rather than defaulted away.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseAlgorithmError(String);

impl fmt::Display for ParseAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown algorithm identifier {:?}, expected one of: breadth-first, greedy-best-first, astar",
            self.0
        )
    }
}

impl std::error::Error for ParseAlgorithmError {}

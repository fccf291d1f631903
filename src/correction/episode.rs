use std::fmt;

use super::transitions::{State, TransitionTable};

/// A consecutive pair of an episode with no valid direct transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gap {
    /// Position of `origin` in the episode.
    pub position: usize,
    pub origin: State,
    pub destination: State,
}

impl Gap {
    pub fn is_self_gap(&self) -> bool {
        self.origin == self.destination
    }
}

impl fmt::Display for Gap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} @{}", self.origin, self.destination, self.position)
    }
}

/// Scan `episode` once and return every invalid consecutive pair, in order.
pub fn find_gaps(table: &TransitionTable, episode: &[State]) -> Vec<Gap> {
    episode
        .windows(2)
        .enumerate()
        .filter(|(_, pair)| !table.is_valid(pair[0], pair[1]))
        .map(|(position, pair)| Gap {
            position,
            origin: pair[0],
            destination: pair[1],
        })
        .collect()
}

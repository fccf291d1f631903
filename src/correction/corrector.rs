use std::collections::BTreeMap;
use std::fmt;

use malachite_bigint::BigUint;

use super::episode::{Gap, find_gaps};
use super::observer::{NoTrace, SearchObserver, TracingObserver};
use super::transitions::{State, TransitionTable};
use crate::config::CorrectorConfig;
use crate::error::{ExerciseError, Result};

/// Outcome of correcting an episode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Correction {
    /// Every consecutive pair was already a valid transition.
    NotNeeded,
    /// `gap` has no valid walk within the depth bound.
    Irreparable { gap: Gap },
    /// Number of ways to bridge all gaps at once.
    Ways(BigUint),
}

impl Correction {
    /// The number of corrections, if the episode had gaps and all were repairable.
    pub fn ways(&self) -> Option<&BigUint> {
        match self {
            Correction::Ways(n) => Some(n),
            _ => None,
        }
    }
}

/// Numeric form: `-1` when no correction is needed, `0` when irreparable.
impl fmt::Display for Correction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Correction::NotNeeded => write!(f, "-1"),
            Correction::Irreparable { .. } => write!(f, "0"),
            Correction::Ways(n) => write!(f, "{n}"),
        }
    }
}

/// Counts the ways an episode's gaps can be bridged by bounded valid walks.
#[derive(Debug, Clone, Copy, Default)]
pub struct GapCorrector {
    self_gap_empty_path: bool,
    trace: bool,
}

impl GapCorrector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &CorrectorConfig) -> Self {
        Self {
            self_gap_empty_path: config.self_gap_empty_path,
            trace: config.trace,
        }
    }

    /// Count the empty walk as one correction of a gap whose endpoints coincide.
    pub fn with_self_gap_empty_path(mut self, enabled: bool) -> Self {
        self.self_gap_empty_path = enabled;
        self
    }

    pub fn with_trace(mut self, enabled: bool) -> Self {
        self.trace = enabled;
        self
    }

    /// Correct `episode`, allowing up to `max_depth` intermediate states per gap.
    pub fn correct(
        &self,
        table: &TransitionTable,
        episode: &[State],
        max_depth: u32,
    ) -> Result<Correction> {
        if self.trace {
            self.correct_with(table, episode, max_depth, &mut TracingObserver)
        } else {
            self.correct_with(table, episode, max_depth, &mut NoTrace)
        }
    }

    /// Same as [`correct`](Self::correct), reporting progress to `observer`.
    ///
    /// Gaps are counted in episode order and the first one without a walk
    /// stops the computation.
    pub fn correct_with<O: SearchObserver>(
        &self,
        table: &TransitionTable,
        episode: &[State],
        max_depth: u32,
        observer: &mut O,
    ) -> Result<Correction> {
        if episode.is_empty() {
            return Err(ExerciseError::EmptyEpisode);
        }

        let gaps = find_gaps(table, episode);
        for gap in &gaps {
            observer.gap_found(gap);
        }
        if gaps.is_empty() {
            return Ok(Correction::NotNeeded);
        }

        let mut total = BigUint::from(1u32);
        for gap in gaps {
            let paths = self.walks_with(table, &gap, max_depth, observer);
            if paths == zero() {
                return Ok(Correction::Irreparable { gap });
            }
            total *= paths;
        }
        Ok(Correction::Ways(total))
    }

    /// Number of valid walks bridging `gap` with 1..=`max_depth + 1` edges.
    pub fn walks(&self, table: &TransitionTable, gap: &Gap, max_depth: u32) -> BigUint {
        self.walks_with(table, gap, max_depth, &mut NoTrace)
    }

    // Layered breadth-first expansion. Each frontier entry carries how many
    // distinct walks of the current length end on that state, so revisits
    // and walks through the destination are counted without enumerating them.
    fn walks_with<O: SearchObserver>(
        &self,
        table: &TransitionTable,
        gap: &Gap,
        max_depth: u32,
        observer: &mut O,
    ) -> BigUint {
        let mut paths = zero();
        if self.self_gap_empty_path && gap.is_self_gap() {
            paths += BigUint::from(1u32);
        }

        let mut frontier: BTreeMap<State, BigUint> =
            BTreeMap::from([(gap.origin, BigUint::from(1u32))]);

        for edges in 1..=max_depth.saturating_add(1) {
            let mut next: BTreeMap<State, BigUint> = BTreeMap::new();
            for (&state, count) in &frontier {
                for successor in table.successors(state) {
                    *next.entry(successor).or_insert_with(zero) += count.clone();
                }
            }

            let arrivals = next.get(&gap.destination).cloned().unwrap_or_else(zero);
            observer.layer_expanded(gap, edges, next.len(), &arrivals);
            paths += arrivals;

            if next.is_empty() {
                break;
            }
            frontier = next;
        }

        observer.gap_counted(gap, &paths);
        paths
    }
}

/// Count the corrections of `episode` under the relation given by `transitions`.
///
/// Unlisted pairs are invalid. Returns [`Correction::NotNeeded`] when the
/// episode has no gap and [`Correction::Irreparable`] when some gap cannot be
/// bridged with at most `max_depth` intermediate states.
pub fn count_corrections<I>(
    state_count: u32,
    transitions: I,
    episode: &[State],
    max_depth: u32,
) -> Result<Correction>
where
    I: IntoIterator<Item = ((State, State), bool)>,
{
    let table = TransitionTable::from_entries(state_count, transitions)?;
    GapCorrector::new().correct(&table, episode, max_depth)
}

fn zero() -> BigUint {
    BigUint::from(0u32)
}

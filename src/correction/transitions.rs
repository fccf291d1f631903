use crate::error::{ExerciseError, Result};

/// A state identifier in `1..=state_count`.
pub type State = u32;

/// Directed transition-validity relation over the states `1..=state_count`.
///
/// Lookups are total: any pair never marked valid, including pairs naming a
/// state outside the universe, answers `false`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionTable {
    state_count: u32,
    // Row-major `state_count x state_count` validity matrix.
    valid: Vec<bool>,
}

impl TransitionTable {
    /// Create a table over `1..=state_count` with every transition invalid.
    pub fn new(state_count: u32) -> Result<Self> {
        if state_count < 1 {
            return Err(ExerciseError::EmptyStateSpace(state_count));
        }
        let n = state_count as usize;
        Ok(Self {
            state_count,
            valid: vec![false; n * n],
        })
    }

    /// Build a table from `((from, to), valid)` entries. Later entries for the
    /// same pair overwrite earlier ones.
    pub fn from_entries<I>(state_count: u32, entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = ((State, State), bool)>,
    {
        let mut table = Self::new(state_count)?;
        for ((from, to), valid) in entries {
            table.set(from, to, valid)?;
        }
        Ok(table)
    }

    /// Build a table where exactly the given pairs are valid.
    pub fn from_valid_pairs<I>(state_count: u32, pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (State, State)>,
    {
        Self::from_entries(state_count, pairs.into_iter().map(|pair| (pair, true)))
    }

    /// Mark `from -> to` as valid or invalid.
    pub fn set(&mut self, from: State, to: State, valid: bool) -> Result<()> {
        let idx = self
            .index(from, to)
            .ok_or(ExerciseError::TransitionOutOfRange {
                from,
                to,
                state_count: self.state_count,
            })?;
        self.valid[idx] = valid;
        Ok(())
    }

    pub fn state_count(&self) -> u32 {
        self.state_count
    }

    /// Whether `from -> to` is a valid transition. Out-of-range states are never valid.
    pub fn is_valid(&self, from: State, to: State) -> bool {
        self.index(from, to).is_some_and(|idx| self.valid[idx])
    }

    /// States reachable from `from` in one valid transition, in ascending order.
    pub fn successors(&self, from: State) -> impl Iterator<Item = State> + '_ {
        (1..=self.state_count).filter(move |&to| self.is_valid(from, to))
    }

    fn contains(&self, state: State) -> bool {
        (1..=self.state_count).contains(&state)
    }

    fn index(&self, from: State, to: State) -> Option<usize> {
        if !self.contains(from) || !self.contains(to) {
            return None;
        }
        let n = self.state_count as usize;
        Some((from as usize - 1) * n + (to as usize - 1))
    }
}

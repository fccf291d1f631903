//! Hooks into the bounded walk search.
//!
//! The corrector reports its progress to a [`SearchObserver`]. [`NoTrace`]
//! ignores everything and is what [`GapCorrector`](super::GapCorrector)
//! uses unless tracing is switched on, in which case [`TracingObserver`]
//! forwards each step to the `tracing` crate.

use malachite_bigint::BigUint;
use tracing::{debug, trace};

use super::episode::Gap;

/// Receives diagnostic events from the corrector. Every method defaults to a no-op.
pub trait SearchObserver {
    /// A gap was found while scanning the episode.
    fn gap_found(&mut self, _gap: &Gap) {}

    /// One breadth-first layer was expanded for `gap`.
    ///
    /// `edges` is the walk length of the layer, `frontier` the number of
    /// distinct states it reached and `arrivals` how many walks of that
    /// length end on the destination.
    fn layer_expanded(&mut self, _gap: &Gap, _edges: u32, _frontier: usize, _arrivals: &BigUint) {}

    /// The bounded walk count for `gap` is final.
    fn gap_counted(&mut self, _gap: &Gap, _paths: &BigUint) {}
}

/// Observer that discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoTrace;

impl SearchObserver for NoTrace {}

/// Observer that emits structured `tracing` events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl SearchObserver for TracingObserver {
    fn gap_found(&mut self, gap: &Gap) {
        debug!(
            position = gap.position,
            origin = gap.origin,
            destination = gap.destination,
            "gap found"
        );
    }

    fn layer_expanded(&mut self, gap: &Gap, edges: u32, frontier: usize, arrivals: &BigUint) {
        trace!(
            origin = gap.origin,
            destination = gap.destination,
            edges,
            frontier,
            arrivals = %arrivals,
            "layer expanded"
        );
    }

    fn gap_counted(&mut self, gap: &Gap, paths: &BigUint) {
        debug!(
            origin = gap.origin,
            destination = gap.destination,
            paths = %paths,
            "gap counted"
        );
    }
}

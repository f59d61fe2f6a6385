use crate::weights::map::WeightMap;
use std::sync::Arc;

/// Monotonic id assigned to each dispatched input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
pub struct InputSeq(pub u64);

/// Owner of the committed [`WeightMap`].
///
/// Readers take an `Arc` snapshot; a commit swaps the whole map in one step, so a reader never
/// observes a partial update. A result is accepted only if its sequence id is newer than the last
/// committed one, which keeps a slow, older resolution from overwriting a newer one.
#[derive(Clone, Debug)]
pub struct WeightState {
    current: Arc<WeightMap>,
    last_dispatched: u64,
    last_committed: u64,
}

impl WeightState {
    /// Start from `initial`; no input has been dispatched or committed yet.
    pub fn new(initial: WeightMap) -> Self {
        Self {
            current: Arc::new(initial),
            last_dispatched: 0,
            last_committed: 0,
        }
    }

    /// Reserve the next sequence id for a new input.
    pub fn dispatch(&mut self) -> InputSeq {
        self.last_dispatched += 1;
        InputSeq(self.last_dispatched)
    }

    /// Commit `weights` computed for `seq`. Returns false (and keeps the current map) when a
    /// result with an equal or newer id was already committed.
    pub fn commit(&mut self, seq: InputSeq, weights: WeightMap) -> bool {
        if seq.0 <= self.last_committed {
            return false;
        }
        self.current = Arc::new(weights);
        self.last_committed = seq.0;
        true
    }

    /// True when a newer input has been dispatched after `seq`.
    pub fn is_superseded(&self, seq: InputSeq) -> bool {
        seq.0 < self.last_dispatched
    }

    /// Snapshot of the committed weights.
    pub fn current(&self) -> Arc<WeightMap> {
        Arc::clone(&self.current)
    }

    /// Id of the last committed result, if any.
    pub fn committed_seq(&self) -> Option<InputSeq> {
        (self.last_committed > 0).then_some(InputSeq(self.last_committed))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/weights/state.rs"]
mod tests;

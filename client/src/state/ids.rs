//! Record identifier generation.
//!
//! Ids are millisecond timestamps, bumped past the last issued id so two
//! additions inside the same millisecond still get distinct values. The
//! generator is seeded with the largest id already persisted, which keeps new
//! ids unique across reloads even if the clock steps backwards.

#[cfg(test)]
#[path = "ids_test.rs"]
mod ids_test;

use super::models::RecordId;
use crate::util::clock;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IdGenerator {
    last: RecordId,
}

impl IdGenerator {
    /// Generator whose next id is strictly greater than `floor`.
    #[must_use]
    pub fn seeded(floor: RecordId) -> Self {
        Self { last: floor }
    }

    /// Raise the floor to at least `id`.
    pub fn observe(&mut self, id: RecordId) {
        self.last = self.last.max(id);
    }

    /// Next id given the current clock reading.
    pub fn next_at(&mut self, now_ms: u64) -> RecordId {
        let id = now_ms.max(self.last.saturating_add(1));
        self.last = id;
        id
    }

    pub fn next_id(&mut self) -> RecordId {
        self.next_at(clock::now_millis())
    }
}

//! Time Source and ID Generation

use std::cell::Cell;
use std::rc::Rc;

use chrono::{DateTime, Duration, Utc};

use crate::domain::ItemId;

/// Source of "now" for timestamps and ids
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock. In the browser chrono reads `Date.now()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Hand-driven clock for tests. Clones share the same instant.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Rc<Cell<DateTime<Utc>>>,
}

impl ManualClock {
    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            now: Rc::new(Cell::new(now)),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    pub fn set(&self, now: DateTime<Utc>) {
        self.now.set(now);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        self.now.get()
    }
}

/// Millisecond-timestamp ids that never repeat within a session.
///
/// Two creates inside the same millisecond (or a clock stepping back)
/// get `last + 1` instead of a duplicate.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: ItemId,
}

impl IdGenerator {
    /// Start above every id already in use
    pub fn seeded(existing: impl IntoIterator<Item = ItemId>) -> Self {
        Self {
            last: existing.into_iter().max().unwrap_or(0),
        }
    }

    pub fn next(&mut self, now: DateTime<Utc>) -> ItemId {
        let millis = u64::try_from(now.timestamp_millis()).unwrap_or(0);
        let id = millis.max(self.last.saturating_add(1));
        self.last = id;
        id
    }
}

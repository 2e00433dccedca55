// src/providers/mock.rs

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use chrono::{Duration, NaiveDateTime};

use super::{Clock, IdSource};

/// A clock that only moves when told to.
///
/// Clones share the same underlying time, so a test can keep a handle after
/// passing a clone into a board.
#[derive(Debug, Clone)]
pub struct FixedClock {
    now: Arc<Mutex<NaiveDateTime>>,
}

impl FixedClock {
    pub fn new(now: NaiveDateTime) -> Self {
        Self {
            now: Arc::new(Mutex::new(now)),
        }
    }

    pub fn set(&self, now: NaiveDateTime) {
        *self.now.lock().unwrap() = now;
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap();
        *now += by;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        *self.now.lock().unwrap()
    }
}

/// Hands out queued ids first, then counter-based ids (`00000001…`,
/// `00000002…`) padded to the length of a real generated id.
#[derive(Debug, Clone, Default)]
pub struct SequenceIdSource {
    queued: Arc<Mutex<VecDeque<String>>>,
    counter: Arc<Mutex<u64>>,
}

impl SequenceIdSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let source = Self::new();
        source.queue(ids);
        source
    }

    pub fn queue<I, S>(&self, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut queued = self.queued.lock().unwrap();
        queued.extend(ids.into_iter().map(Into::into));
    }
}

impl IdSource for SequenceIdSource {
    fn generate(&self) -> String {
        if let Some(id) = self.queued.lock().unwrap().pop_front() {
            return id;
        }

        let mut counter = self.counter.lock().unwrap();
        *counter += 1;
        format!("{:08x}{}", *counter, "0".repeat(24))
    }
}

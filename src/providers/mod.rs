// src/providers/mod.rs

//! Injected sources of time and identifiers.
//!
//! The board never reads the system clock or a random generator directly;
//! it goes through these traits so tests can pin both down.

use std::fmt::Debug;

use chrono::{Local, NaiveDateTime};
use uuid::Uuid;

pub mod mock;

/// Supplies the default creation timestamp for new nodes.
pub trait Clock: Send + Sync + Debug {
    fn now(&self) -> NaiveDateTime;
}

/// Supplies high-entropy hex strings used as node ids.
pub trait IdSource: Send + Sync + Debug {
    fn generate(&self) -> String;
}

/// Local wall-clock time via `chrono`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Random v4 UUIDs rendered as 32 lowercase hex characters.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdSource;

impl IdSource for UuidIdSource {
    fn generate(&self) -> String {
        Uuid::new_v4().simple().to_string()
    }
}

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Task id generation

use crate::task::TaskId;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use uuid::Uuid;

/// Generates unique task identifiers
pub trait IdGen: Clone + Send + Sync {
    fn next(&self) -> TaskId;
}

/// UUID v4 generator for production use
#[derive(Clone, Copy, Debug, Default)]
pub struct UuidIdGen;

impl IdGen for UuidIdGen {
    fn next(&self) -> TaskId {
        TaskId::from(Uuid::new_v4())
    }
}

/// Sequential generator for testing
///
/// Produces `00000000-0000-0000-0000-000000000001`, `...0002`, and so on.
#[derive(Clone, Debug)]
pub struct SequentialIdGen {
    counter: Arc<AtomicU64>,
}

impl SequentialIdGen {
    pub fn new() -> Self {
        Self {
            counter: Arc::new(AtomicU64::new(1)),
        }
    }
}

impl Default for SequentialIdGen {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGen for SequentialIdGen {
    fn next(&self) -> TaskId {
        let n = self.counter.fetch_add(1, Ordering::SeqCst);
        TaskId::from(Uuid::from_u128(u128::from(n)))
    }
}

#[cfg(test)]
#[path = "id_tests.rs"]
mod tests;

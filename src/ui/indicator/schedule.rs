// SPDX-License-Identifier: MPL-2.0
//! Fire-and-forget delayed tasks.
//!
//! Tasks are never cancelled. Whoever handles a fired task checks the current
//! state and ignores it if it no longer applies.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

/// Identifies a scheduled task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskToken(u64);

impl TaskToken {
    fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskAction {
    /// The display duration elapsed.
    AutoHide,
    /// Start the icon animation.
    AnimateIcon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledTask {
    pub token: TaskToken,
    pub due: Instant,
    pub action: TaskAction,
}

/// Pending tasks ordered by due time.
#[derive(Debug, Default)]
pub struct Scheduler {
    pending: Vec<ScheduledTask>,
}

impl Scheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `action` at `due` and returns its token.
    pub fn schedule(&mut self, due: Instant, action: TaskAction) -> TaskToken {
        let token = TaskToken::next();
        let task = ScheduledTask { token, due, action };
        // Keep insertion order among tasks due at the same instant.
        let index = self.pending.partition_point(|pending| pending.due <= due);
        self.pending.insert(index, task);
        token
    }

    /// Due time of the earliest pending task.
    #[must_use]
    pub fn next_due(&self) -> Option<Instant> {
        self.pending.first().map(|task| task.due)
    }

    /// Removes and returns the earliest task if it is due at `now`.
    pub fn pop_due(&mut self, now: Instant) -> Option<ScheduledTask> {
        if self.next_due()? <= now {
            Some(self.pending.remove(0))
        } else {
            None
        }
    }

    #[must_use]
    pub fn is_scheduled(&self, token: TaskToken) -> bool {
        self.pending.iter().any(|task| task.token == token)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

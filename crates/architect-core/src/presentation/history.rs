//! Bounded list of recent builds, most recent first.

use std::collections::VecDeque;

use architect_types::build::Build;

/// Number of builds retained.
pub const HISTORY_CAPACITY: usize = 5;

#[derive(Debug, Clone, Default)]
pub struct BuildHistory {
    entries: VecDeque<Build>,
}

impl BuildHistory {
    pub fn new() -> Self {
        Self {
            entries: VecDeque::with_capacity(HISTORY_CAPACITY),
        }
    }

    /// Insert at the front, evicting the oldest entry past capacity.
    pub fn push(&mut self, build: Build) {
        self.entries.push_front(build);
        self.entries.truncate(HISTORY_CAPACITY);
    }

    /// The most recently inserted build.
    pub fn current(&self) -> Option<&Build> {
        self.entries.front()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Build> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

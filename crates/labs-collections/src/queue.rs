//! FIFO string queue.
//!
//! Items leave the queue in the order they arrived. There is no capacity
//! bound and no blocking: an empty queue answers `None`.

use std::collections::VecDeque;
use std::fmt;

use log::trace;

/// A first-in-first-out queue of strings, backed by a [`VecDeque`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueueLab {
    items: VecDeque<String>,
}

impl QueueLab {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `item` to the back of the queue.
    pub fn enqueue(&mut self, item: impl Into<String>) {
        let item = item.into();
        trace!("queue push {item:?}");
        self.items.push_back(item);
    }

    /// Removes and returns the oldest item.
    pub fn dequeue(&mut self) -> Option<String> {
        self.items.pop_front()
    }

    /// Returns the oldest item without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&str> {
        self.items.front().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates front to back.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for QueueLab {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for QueueLab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::fmt_list(f, self.iter())
    }
}

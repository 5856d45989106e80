//! Integer set.

use std::collections::HashSet;
use std::fmt;

use log::trace;

/// A set of unique integers, backed by a [`HashSet`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SetLab {
    items: HashSet<i32>,
}

impl SetLab {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `item` if it is not already present.
    ///
    /// Returns `false` and leaves the set untouched for a duplicate.
    pub fn add(&mut self, item: i32) -> bool {
        let added = self.items.insert(item);
        trace!("set add {item}: added={added}");
        added
    }

    /// Removes `item`; a missing item is not an error.
    pub fn remove(&mut self, item: i32) -> bool {
        self.items.remove(&item)
    }

    #[must_use]
    pub fn contains(&self, item: i32) -> bool {
        self.items.contains(&item)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn sorted(&self) -> Vec<i32> {
        let mut items: Vec<_> = self.items.iter().copied().collect();
        items.sort_unstable();
        items
    }
}

impl FromIterator<i32> for SetLab {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for SetLab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::fmt_list(f, self.sorted())
    }
}

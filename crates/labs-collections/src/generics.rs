//! A single-slot generic holder.
//!
//! The holder stores at most one value of any type and hands it back
//! unchanged.
//!
//! ```
//! use labs_collections::GenericHolder;
//!
//! let mut holder = GenericHolder::new();
//! holder.load("Revature");
//! assert_eq!(holder.get(), Some(&"Revature"));
//! ```

use std::fmt;

/// Holds at most one value of type `T`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenericHolder<T> {
    data: Option<T>,
}

impl<T> GenericHolder<T> {
    /// Creates an empty holder.
    #[must_use]
    pub const fn new() -> Self {
        Self { data: None }
    }

    /// Stores `value`, returning whatever was held before.
    pub fn load(&mut self, value: T) -> Option<T> {
        self.data.replace(value)
    }

    /// Returns a reference to the held value, or `None` if nothing was loaded.
    #[must_use]
    pub const fn get(&self) -> Option<&T> {
        self.data.as_ref()
    }

    /// Moves the held value out, leaving the holder empty.
    pub fn take(&mut self) -> Option<T> {
        self.data.take()
    }

    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        self.data.is_some()
    }
}

impl<T> Default for GenericHolder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<T> for GenericHolder<T> {
    fn from(value: T) -> Self {
        Self { data: Some(value) }
    }
}

/// A small record used to show that the holder works with user types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    name: String,
    age: u32,
}

impl Person {
    #[must_use]
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn age(&self) -> u32 {
        self.age
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Person{{name='{}', age={}}}", self.name, self.age)
    }
}

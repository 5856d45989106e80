//! Collection labs
//!
//! Thin wrappers over the standard containers: a generic single-value
//! holder, an integer-to-string map, an integer set and a FIFO string queue.

#![warn(missing_debug_implementations)]
#![warn(rust_2018_idioms)]

pub mod generics;
pub mod map;
pub mod queue;
pub mod set;

pub use generics::{GenericHolder, Person};
pub use map::MapLab;
pub use queue::QueueLab;
pub use set::SetLab;

use std::fmt;

/// Write items as `[a, b, c]`
pub(crate) fn fmt_list<I>(f: &mut fmt::Formatter<'_>, items: I) -> fmt::Result
where
    I: IntoIterator,
    I::Item: fmt::Display,
{
    f.write_str("[")?;
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    f.write_str("]")
}

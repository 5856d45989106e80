//! Console exercises built on the collection labs
//!
//! The shopping cart command loop, the letter frequency counter, the
//! delicatessen ticket queue and the walkthrough scripts for each lab. All
//! of them write to any [`std::io::Write`] so callers choose where the
//! transcript goes.

pub mod cart;
pub mod deli;
pub mod demo;
pub mod letters;

pub use cart::{CartSession, Reply, run_session};
pub use deli::{Ticket, run_deli, serve_line};
pub use demo::{run_generics_demo, run_map_demo, run_queue_demo, run_set_demo};
pub use letters::{count_letters, render_frequencies, render_frequencies_json};

//! Delicatessen ticket queue
//!
//! Customers line up in a [`QueueLab`] and receive consecutive ticket
//! numbers in the order they arrived.

use std::fmt;
use std::io::Write;

use labs_collections::QueueLab;
use labs_core::LabError;
use log::debug;

pub const DEFAULT_CUSTOMERS: usize = 12;
pub const DEFAULT_FIRST_TICKET: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub customer: String,
    pub number: u64,
}

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} gets ticket number: {}", self.customer, self.number)
    }
}

/// Queue up `Customer 1` through `Customer <customers>`
#[must_use]
pub fn line_up(customers: usize) -> QueueLab {
    (1..=customers).map(|n| format!("Customer {n}")).collect()
}

/// Drain the queue, handing out tickets from `first_ticket` upward
pub fn serve_line(queue: &mut QueueLab, first_ticket: u32) -> Vec<Ticket> {
    let mut tickets = Vec::with_capacity(queue.len());
    let mut number = u64::from(first_ticket);
    while let Some(customer) = queue.dequeue() {
        debug!("{customer} served, {} still waiting", queue.len());
        tickets.push(Ticket { customer, number });
        number += 1;
    }
    tickets
}

/// Line up `customers`, serve them and print each ticket
///
/// # Errors
///
/// Returns `LabError::Io` if writing fails
pub fn run_deli<W: Write>(
    customers: usize,
    first_ticket: u32,
    output: &mut W,
) -> Result<(), LabError> {
    let mut queue = line_up(customers);
    for ticket in serve_line(&mut queue, first_ticket) {
        writeln!(output, "{ticket}")?;
    }
    Ok(())
}

//! Grocery store shopping cart
//!
//! A [`CartSession`] applies parsed commands to the cart and returns the
//! text to show the shopper. [`run_session`] drives it from line-oriented
//! input.

use std::collections::BTreeMap;
use std::io::{self, BufRead, Write};

use labs_core::{LabError, usage};
use labs_parser::{CartCommand, parse_command};
use log::{debug, info};

pub const WELCOME: &str = "Welcome to the Grocery Store!";
pub const PROMPT: &str = "\nEnter your command: ";
pub const FAREWELL: &str = "Thank you for shopping with us!";

/// Output of one executed command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub stdout: String,
    /// Set once the shopper has left the store
    pub finished: bool,
}

impl Reply {
    fn line(text: String) -> Self {
        Self {
            stdout: text + "\n",
            finished: false,
        }
    }
}

/// Cart contents: item name to quantity
#[derive(Debug, Default)]
pub struct CartSession {
    cart: BTreeMap<String, i32>,
    finished: bool,
}

impl CartSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Execute one command against the cart
    ///
    /// # Errors
    ///
    /// Returns `LabError::QuantityOverflow` if an ADD would push the stored
    /// quantity past `i32::MAX` (or below `i32::MIN`); the cart is unchanged
    pub fn execute(&mut self, command: &CartCommand) -> Result<Reply, LabError> {
        let reply = match command {
            CartCommand::Add { item, quantity } => {
                let current = self.quantity(item);
                let total = current
                    .checked_add(*quantity)
                    .ok_or_else(|| LabError::quantity_overflow(item, *quantity))?;
                self.cart.insert(item.clone(), total);
                debug!("cart {item}: {current} -> {total}");
                Reply::line(format!("Added {quantity} of {item} to the cart."))
            }
            CartCommand::Remove { item } => {
                if self.cart.remove(item).is_some() {
                    debug!("cart {item}: removed");
                    Reply::line(format!("{item} removed from the cart."))
                } else {
                    Reply::line(format!("{item} is not in the cart."))
                }
            }
            CartCommand::Get { item } => {
                Reply::line(format!("{item} quantity: {}", self.quantity(item)))
            }
            CartCommand::Checkout => Reply::line(self.checkout()),
            CartCommand::Exit => {
                self.finished = true;
                Reply {
                    stdout: format!("{FAREWELL}\n"),
                    finished: true,
                }
            }
        };
        Ok(reply)
    }

    fn checkout(&self) -> String {
        let mut text = String::from("\nItems in your cart:");
        if self.cart.is_empty() {
            text.push_str("\nYour cart is empty.");
        }
        for (item, quantity) in &self.cart {
            text.push_str(&format!("\n{item}: {quantity}"));
        }
        text
    }

    /// Quantity of `item`, zero when absent
    #[must_use]
    pub fn quantity(&self, item: &str) -> i32 {
        self.cart.get(item).copied().unwrap_or(0)
    }

    /// Items in name order
    pub fn items(&self) -> impl Iterator<Item = (&str, i32)> {
        self.cart.iter().map(|(item, quantity)| (item.as_str(), *quantity))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cart.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.finished
    }
}

/// Read one line without its terminator, replacing malformed UTF-8
fn read_line_lossy<R: BufRead>(
    input: &mut R,
    buf: &mut Vec<u8>,
) -> io::Result<Option<String>> {
    buf.clear();
    if input.read_until(b'\n', buf)? == 0 {
        return Ok(None);
    }
    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }
    Ok(Some(String::from_utf8_lossy(buf).into_owned()))
}

/// Run the interactive cart loop until EXIT or end of input
///
/// Bad input is reported to the shopper and leaves the cart unchanged.
/// Bytes that are not valid UTF-8 are replaced with U+FFFD.
///
/// # Errors
///
/// Returns `LabError::Io` if reading input or writing output fails
pub fn run_session<R: BufRead, W: Write>(
    mut input: R,
    output: &mut W,
) -> Result<CartSession, LabError> {
    let mut session = CartSession::new();
    info!("cart session started");

    writeln!(output, "{WELCOME}")?;
    writeln!(
        output,
        "Commands: {}, {}, {}, CHECKOUT, EXIT",
        usage::ADD,
        usage::REMOVE,
        usage::GET
    )?;

    let mut buf = Vec::new();
    while !session.is_finished() {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        let Some(line) = read_line_lossy(&mut input, &mut buf)? else {
            info!("input closed before EXIT");
            break;
        };

        let result = match parse_command(&line) {
            Ok(Some(command)) => session.execute(&command),
            Ok(None) => continue,
            Err(e) => Err(e),
        };

        match result {
            Ok(reply) => output.write_all(reply.stdout.as_bytes())?,
            Err(e) if e.is_recoverable() => {
                debug!(
                    "{}: {e} (input {line:?}, column {:?})",
                    e.code(),
                    e.span().map(|s| s.column())
                );
                writeln!(output, "{e}")?;
            }
            Err(e) => return Err(e),
        }
    }

    info!("cart session ended with {} item(s)", session.len());
    Ok(session)
}

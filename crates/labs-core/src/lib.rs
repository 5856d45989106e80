//! Shared types for the collection labs
//!
//! Holds the error type every crate reports through and the byte span used
//! to point at the offending part of a command line.

/// Byte range of a token within one input line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// One-based column of the first byte, for log lines
    #[must_use]
    pub const fn column(&self) -> usize {
        self.start + 1
    }
}

/// Usage strings printed when a cart command has the wrong argument count
pub mod usage {
    pub const ADD: &str = "ADD <item> <quantity>";
    pub const REMOVE: &str = "REMOVE <item>";
    pub const GET: &str = "GET <item>";
}

/// Error types for the labs and exercises
///
/// The display text of the input variants is exactly what the cart prints
/// back to the shopper.
#[derive(thiserror::Error, Debug)]
pub enum LabError {
    #[error("Invalid command. Use: {usage}")]
    InvalidUsage { usage: &'static str, span: Span },

    #[error("Quantity must be a number.")]
    InvalidQuantity { text: String, span: Span },

    #[error("Unknown command. Please try again.")]
    UnknownCommand { name: String, span: Span },

    #[error("Command contains an unprintable character.")]
    InvalidCharacter { text: String, span: Span },

    #[error("Quantity for {item} would pass {limit}.")]
    QuantityOverflow { item: String, limit: i32 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl LabError {
    #[must_use]
    pub const fn invalid_usage(usage: &'static str, span: Span) -> Self {
        Self::InvalidUsage { usage, span }
    }

    #[must_use]
    pub fn invalid_quantity(text: &str, span: Span) -> Self {
        Self::InvalidQuantity {
            text: text.to_string(),
            span,
        }
    }

    #[must_use]
    pub fn unknown_command(name: &str, span: Span) -> Self {
        Self::UnknownCommand {
            name: name.to_string(),
            span,
        }
    }

    #[must_use]
    pub fn invalid_character(text: &str, span: Span) -> Self {
        Self::InvalidCharacter {
            text: text.to_string(),
            span,
        }
    }

    /// Overflow while adding `delta`; the sign picks which bound was crossed
    #[must_use]
    pub fn quantity_overflow(item: &str, delta: i32) -> Self {
        Self::QuantityOverflow {
            item: item.to_string(),
            limit: if delta < 0 { i32::MIN } else { i32::MAX },
        }
    }

    /// Stable identifier for log output
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidUsage { .. } => "ERR_USAGE",
            Self::InvalidQuantity { .. } => "ERR_QUANTITY",
            Self::UnknownCommand { .. } => "ERR_UNKNOWN_COMMAND",
            Self::InvalidCharacter { .. } => "ERR_CHARACTER",
            Self::QuantityOverflow { .. } => "ERR_OVERFLOW",
            Self::Io(_) => "ERR_IO",
        }
    }

    /// Span of the offending input, if the error came from a command line
    #[must_use]
    pub const fn span(&self) -> Option<Span> {
        match self {
            Self::InvalidUsage { span, .. }
            | Self::InvalidQuantity { span, .. }
            | Self::UnknownCommand { span, .. }
            | Self::InvalidCharacter { span, .. } => Some(*span),
            Self::QuantityOverflow { .. } | Self::Io(_) => None,
        }
    }

    /// Whether the error is bad user input the cart loop can report and
    /// continue past
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Io(_))
    }
}

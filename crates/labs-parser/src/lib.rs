//! Parser for shopping-cart command lines
//!
//! Turns the token stream from `labs-lexer` into a [`CartCommand`]. The
//! keyword is case-insensitive; item names are kept exactly as typed.

use labs_core::{LabError, Span, usage};
use labs_lexer::{Lexer, SpannedToken, Token};
use log::debug;

/// A parsed cart command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartCommand {
    /// ADD <item> <quantity>
    Add { item: String, quantity: i32 },
    /// REMOVE <item>
    Remove { item: String },
    /// GET <item>
    Get { item: String },
    /// CHECKOUT - list the cart contents
    Checkout,
    /// EXIT - leave the store
    Exit,
}

impl CartCommand {
    #[must_use]
    pub const fn keyword(&self) -> &'static str {
        match self {
            Self::Add { .. } => "ADD",
            Self::Remove { .. } => "REMOVE",
            Self::Get { .. } => "GET",
            Self::Checkout => "CHECKOUT",
            Self::Exit => "EXIT",
        }
    }
}

pub struct Parser {
    input: String,
    tokens: Vec<SpannedToken>,
}

impl Parser {
    /// Create a new parser for one command line
    ///
    /// # Errors
    ///
    /// Returns `LabError::InvalidCharacter` if the line contains a control
    /// character other than whitespace
    pub fn new(input: &str) -> Result<Self, LabError> {
        let mut lexer = Lexer::new(input);
        let tokens: Vec<SpannedToken> = lexer
            .tokenize()
            .into_iter()
            .filter(|token| token.token != Token::Eof)
            .collect();

        if let Some(bad) = tokens.iter().find(|token| token.token == Token::Error) {
            return Err(LabError::invalid_character(&bad.text, bad.span));
        }

        Ok(Self {
            input: input.to_string(),
            tokens,
        })
    }

    /// Parse the line into a command
    ///
    /// Returns `Ok(None)` for a blank line.
    ///
    /// # Errors
    ///
    /// Returns `LabError` for a wrong argument count, a non-numeric
    /// quantity or an unknown keyword
    pub fn parse(&self) -> Result<Option<CartCommand>, LabError> {
        let Some(first) = self.tokens.first() else {
            return Ok(None);
        };

        let command = match first.text.to_uppercase().as_str() {
            "ADD" => {
                let [_, item, quantity] = self.expect_args::<3>(usage::ADD)?;
                CartCommand::Add {
                    item: item.text.clone(),
                    quantity: parse_quantity(quantity)?,
                }
            }
            "REMOVE" => {
                let [_, item] = self.expect_args::<2>(usage::REMOVE)?;
                CartCommand::Remove {
                    item: item.text.clone(),
                }
            }
            "GET" => {
                let [_, item] = self.expect_args::<2>(usage::GET)?;
                CartCommand::Get {
                    item: item.text.clone(),
                }
            }
            "CHECKOUT" => CartCommand::Checkout,
            "EXIT" => CartCommand::Exit,
            _ => return Err(LabError::unknown_command(&first.text, first.span)),
        };

        debug!("parsed {:?} from {:?}", command, self.input);
        Ok(Some(command))
    }

    fn expect_args<const N: usize>(
        &self,
        usage: &'static str,
    ) -> Result<&[SpannedToken; N], LabError> {
        <&[SpannedToken; N]>::try_from(self.tokens.as_slice())
            .map_err(|_| LabError::invalid_usage(usage, self.line_span()))
    }

    fn line_span(&self) -> Span {
        let start = self.tokens.first().map_or(0, |token| token.span.start);
        let end = self.tokens.last().map_or(start, |token| token.span.end);
        Span::new(start, end)
    }

    /// Get access to the tokens (useful for debugging)
    #[must_use]
    pub fn tokens(&self) -> &[SpannedToken] {
        &self.tokens
    }
}

fn parse_quantity(token: &SpannedToken) -> Result<i32, LabError> {
    if token.token != Token::Number {
        return Err(LabError::invalid_quantity(&token.text, token.span));
    }
    token
        .text
        .parse()
        .map_err(|_| LabError::invalid_quantity(&token.text, token.span))
}

/// Parse one command line
///
/// # Errors
///
/// See [`Parser::parse`]
pub fn parse_command(line: &str) -> Result<Option<CartCommand>, LabError> {
    Parser::new(line)?.parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_ok(line: &str) -> CartCommand {
        parse_command(line).unwrap().unwrap()
    }

    #[test]
    fn test_add_command() {
        assert_eq!(
            parse_ok("ADD apple 3"),
            CartCommand::Add {
                item: "apple".to_string(),
                quantity: 3
            }
        );
    }

    #[test]
    fn test_keyword_case_insensitive() {
        assert_eq!(
            parse_ok("remove Milk"),
            CartCommand::Remove {
                item: "Milk".to_string()
            }
        );
        assert_eq!(parse_ok("Get bread").keyword(), "GET");
        assert_eq!(parse_ok("checkout"), CartCommand::Checkout);
        assert_eq!(parse_ok("eXiT"), CartCommand::Exit);
    }

    #[test]
    fn test_blank_line() {
        assert_eq!(parse_command("").unwrap(), None);
        assert_eq!(parse_command("   \t").unwrap(), None);
    }

    #[test]
    fn test_wrong_argument_count() {
        let test_cases = vec![
            ("ADD apple", usage::ADD),
            ("ADD apple 3 extra", usage::ADD),
            ("REMOVE", usage::REMOVE),
            ("REMOVE a b", usage::REMOVE),
            ("GET", usage::GET),
        ];

        for (input, expected) in test_cases {
            match parse_command(input) {
                Err(LabError::InvalidUsage { usage, .. }) => assert_eq!(usage, expected),
                other => panic!("Expected usage error for {input:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_non_numeric_quantity() {
        let error = parse_command("ADD apple lots").unwrap_err();
        assert_eq!(error.to_string(), "Quantity must be a number.");
        assert_eq!(error.span(), Some(Span::new(10, 14)));
    }

    #[test]
    fn test_quantity_out_of_range() {
        let error = parse_command("ADD apple 99999999999").unwrap_err();
        assert!(matches!(error, LabError::InvalidQuantity { .. }));
    }

    #[test]
    fn test_signed_quantity() {
        assert_eq!(
            parse_ok("ADD apple -2"),
            CartCommand::Add {
                item: "apple".to_string(),
                quantity: -2
            }
        );
    }

    #[test]
    fn test_numeric_item_name() {
        assert_eq!(
            parse_ok("GET 42"),
            CartCommand::Get {
                item: "42".to_string()
            }
        );
    }

    #[test]
    fn test_checkout_ignores_extra_words() {
        assert_eq!(parse_ok("CHECKOUT now please"), CartCommand::Checkout);
    }

    #[test]
    fn test_leading_and_trailing_spaces_are_ignored() {
        assert_eq!(
            parse_ok(" ADD a 1"),
            CartCommand::Add {
                item: "a".to_string(),
                quantity: 1
            }
        );
        assert_eq!(
            parse_ok("\tGET a  "),
            CartCommand::Get {
                item: "a".to_string()
            }
        );
    }

    #[test]
    fn test_control_character_rejected() {
        match parse_command("ADD a\u{1b}b 1") {
            Err(LabError::InvalidCharacter { text, span }) => {
                assert_eq!(text, "\u{1b}");
                assert_eq!(span, Span::new(5, 6));
            }
            other => panic!("Expected invalid character, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_command() {
        match parse_command("BUY apple") {
            Err(LabError::UnknownCommand { name, span }) => {
                assert_eq!(name, "BUY");
                assert_eq!(span, Span::new(0, 3));
            }
            other => panic!("Expected unknown command, got {other:?}"),
        }
    }
}

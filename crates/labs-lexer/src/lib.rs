//! Lexical analysis for shopping-cart commands
//!
//! Splits one command line into whitespace-separated tokens using logos.

use labs_core::Span;
use logos::Logos;

/// Cart command tokens
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    /// Signed decimal integer - must outrank Word on equal-length matches
    #[regex(r"[+-]?[0-9]+", priority = 3)]
    Number,

    /// Any other run of printable characters (keywords and item names)
    #[regex(r"[^\x00-\x20\x7F]+", priority = 1)]
    Word,

    /// End of input
    Eof,

    /// Control character outside the skipped whitespace
    Error,
}

/// Token with location information
#[derive(Debug, Clone)]
pub struct SpannedToken {
    pub token: Token,
    pub span: Span,
    pub text: String,
}

/// Lexer that produces tokens with spans
pub struct Lexer<'input> {
    lexer: logos::Lexer<'input, Token>,
    input: &'input str,
}

impl<'input> Lexer<'input> {
    #[must_use]
    pub fn new(input: &'input str) -> Self {
        Self {
            lexer: Token::lexer(input),
            input,
        }
    }

    /// Get the next token with span information
    pub fn next_token(&mut self) -> SpannedToken {
        match self.lexer.next() {
            Some(result) => {
                let span = self.lexer.span();
                SpannedToken {
                    token: result.unwrap_or(Token::Error),
                    span: Span::new(span.start, span.end),
                    text: self.input[span].to_string(),
                }
            }
            None => SpannedToken {
                token: Token::Eof,
                span: Span::new(self.input.len(), self.input.len()),
                text: String::new(),
            },
        }
    }

    /// Tokenize the entire input, ending with a single `Eof`
    pub fn tokenize(&mut self) -> Vec<SpannedToken> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let is_eof = token.token == Token::Eof;
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        tokens
    }
}

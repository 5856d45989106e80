//! Integration tests for lexer + parser + cart session
//! Tests command lines flowing through to cart state

use labs_core::LabError;
use labs_exercises::CartSession;
use labs_lexer::{Lexer, Token};
use labs_parser::{CartCommand, Parser};

fn execute_line(session: &mut CartSession, line: &str) -> Result<String, LabError> {
    let parser = Parser::new(line)?;
    match parser.parse()? {
        Some(command) => Ok(session.execute(&command)?.stdout),
        None => Ok(String::new()),
    }
}

#[test]
fn test_lexer_tokens_feed_parser() {
    let tokens = Lexer::new("ADD oat-milk 2").tokenize();
    assert_eq!(tokens[1].token, Token::Word);
    assert_eq!(tokens[2].token, Token::Number);

    let parser = Parser::new("ADD oat-milk 2").unwrap();
    assert_eq!(parser.tokens().len(), 3);
    assert_eq!(
        parser.parse().unwrap(),
        Some(CartCommand::Add {
            item: "oat-milk".to_string(),
            quantity: 2
        })
    );
}

#[test]
fn test_add_get_remove_sequence() {
    let mut session = CartSession::new();

    assert_eq!(
        execute_line(&mut session, "ADD bread 1").unwrap(),
        "Added 1 of bread to the cart.\n"
    );
    assert_eq!(
        execute_line(&mut session, "get bread").unwrap(),
        "bread quantity: 1\n"
    );
    assert_eq!(
        execute_line(&mut session, "REMOVE bread").unwrap(),
        "bread removed from the cart.\n"
    );
    assert_eq!(
        execute_line(&mut session, "GET bread").unwrap(),
        "bread quantity: 0\n"
    );
}

#[test]
fn test_input_errors_leave_cart_unchanged() {
    let mut session = CartSession::new();
    execute_line(&mut session, "ADD cheese 2").unwrap();

    for line in ["ADD cheese", "ADD cheese two", "REMOVE", "SHOUT cheese"] {
        let error = execute_line(&mut session, line).unwrap_err();
        assert!(error.is_recoverable(), "{line:?} should be recoverable");
    }

    assert_eq!(session.quantity("cheese"), 2);
    assert_eq!(session.len(), 1);
}

#[test]
fn test_item_names_are_case_sensitive() {
    let mut session = CartSession::new();
    execute_line(&mut session, "ADD Apple 1").unwrap();
    execute_line(&mut session, "ADD apple 2").unwrap();

    let items: Vec<_> = session.items().collect();
    assert_eq!(items, [("Apple", 1), ("apple", 2)]);
}

#[test]
fn test_negative_quantity_reduces_total() {
    let mut session = CartSession::new();
    execute_line(&mut session, "ADD soup 5").unwrap();
    assert_eq!(
        execute_line(&mut session, "ADD soup -2").unwrap(),
        "Added -2 of soup to the cart.\n"
    );
    assert_eq!(session.quantity("soup"), 3);
}

#[test]
fn test_blank_line_is_ignored() {
    let mut session = CartSession::new();
    assert_eq!(execute_line(&mut session, "  ").unwrap(), "");
    assert!(session.is_empty());
}

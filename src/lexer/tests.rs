//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and variables
//! - Numeric literals (integers and floats)
//! - String literals with escape sequences
//! - Operators and punctuation
//! - Comments
//! - Error cases

use super::{lexer::tokenize, tokens::TokenKind};

#[test]
fn test_tokenize_keywords() {
    let source = "si alors ou vrai faux fonction".to_string();
    let tokens = tokenize(source, Some("test.lutin".to_string())).unwrap();

    for (index, keyword) in ["si", "alors", "ou", "vrai", "faux", "fonction"]
        .iter()
        .enumerate()
    {
        assert_eq!(tokens[index].kind, TokenKind::Keyword);
        assert_eq!(tokens[index].value, *keyword);
    }
    assert_eq!(tokens[6].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_variables() {
    let source = "foo bar baz_123 _souligne CamelCase".to_string();
    let tokens = tokenize(source, Some("test.lutin".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Variable);
    assert_eq!(tokens[0].value, "foo");
    assert_eq!(tokens[1].kind, TokenKind::Variable);
    assert_eq!(tokens[1].value, "bar");
    assert_eq!(tokens[2].kind, TokenKind::Variable);
    assert_eq!(tokens[2].value, "baz_123");
    assert_eq!(tokens[3].kind, TokenKind::Variable);
    assert_eq!(tokens[3].value, "_souligne");
    assert_eq!(tokens[4].kind, TokenKind::Variable);
    assert_eq!(tokens[4].value, "CamelCase");
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_keyword_prefix_is_still_a_variable() {
    let source = "sirop fonctionne vraiment".to_string();
    let tokens = tokenize(source, Some("test.lutin".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Variable);
    assert_eq!(tokens[0].value, "sirop");
    assert_eq!(tokens[1].kind, TokenKind::Variable);
    assert_eq!(tokens[1].value, "fonctionne");
    assert_eq!(tokens[2].kind, TokenKind::Variable);
    assert_eq!(tokens[2].value, "vraiment");
}

#[test]
fn test_tokenize_numbers() {
    let source = "42 3.14 0 100.5".to_string();
    let tokens = tokenize(source, Some("test.lutin".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].value, "42");
    assert_eq!(tokens[1].kind, TokenKind::Number);
    assert_eq!(tokens[1].value, "3.14");
    assert_eq!(tokens[2].kind, TokenKind::Number);
    assert_eq!(tokens[2].value, "0");
    assert_eq!(tokens[3].kind, TokenKind::Number);
    assert_eq!(tokens[3].value, "100.5");
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_strings() {
    let source = r#""bonjour" "le monde" """#.to_string();
    let tokens = tokenize(source, Some("test.lutin".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].value, "bonjour");
    assert_eq!(tokens[1].kind, TokenKind::String);
    assert_eq!(tokens[1].value, "le monde");
    assert_eq!(tokens[2].kind, TokenKind::String);
    assert_eq!(tokens[2].value, "");
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_string_escapes() {
    let source = r#""ligne\nsuivante" "tab\tla" "barre\\""#.to_string();
    let tokens = tokenize(source, Some("test.lutin".to_string())).unwrap();

    assert_eq!(tokens[0].value, "ligne\nsuivante");
    assert_eq!(tokens[1].value, "tab\tla");
    assert_eq!(tokens[2].value, "barre\\");
}

#[test]
fn test_tokenize_operators() {
    let source = "+ - * / % == != < > <= >= = && ||".to_string();
    let tokens = tokenize(source, Some("test.lutin".to_string())).unwrap();

    for (index, operator) in [
        "+", "-", "*", "/", "%", "==", "!=", "<", ">", "<=", ">=", "=", "&&", "||",
    ]
    .iter()
    .enumerate()
    {
        assert_eq!(tokens[index].kind, TokenKind::Operator);
        assert_eq!(tokens[index].value, *operator);
    }
    assert_eq!(tokens[14].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_punctuation() {
    let source = "( ) { } , ;".to_string();
    let tokens = tokenize(source, Some("test.lutin".to_string())).unwrap();

    for (index, punctuation) in ["(", ")", "{", "}", ",", ";"].iter().enumerate() {
        assert_eq!(tokens[index].kind, TokenKind::Punctuation);
        assert_eq!(tokens[index].value, *punctuation);
    }
    assert_eq!(tokens[6].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_comments() {
    let source = "x = 5 // ceci est un commentaire\ny = 10".to_string();
    let tokens = tokenize(source, Some("test.lutin".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Variable);
    assert_eq!(tokens[0].value, "x");
    assert_eq!(tokens[1].kind, TokenKind::Operator);
    assert_eq!(tokens[2].kind, TokenKind::Number);
    assert_eq!(tokens[2].value, "5");
    assert_eq!(tokens[3].kind, TokenKind::Variable);
    assert_eq!(tokens[3].value, "y");
    assert_eq!(tokens[4].kind, TokenKind::Operator);
    assert_eq!(tokens[5].kind, TokenKind::Number);
    assert_eq!(tokens[5].value, "10");
    assert_eq!(tokens[6].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_simple_program() {
    let source = "si x > 2 alors vrai ou faux".to_string();
    let tokens = tokenize(source, Some("test.lutin".to_string())).unwrap();

    assert_eq!(tokens.len(), 9); // si, x, >, 2, alors, vrai, ou, faux, EOF
    assert_eq!(tokens[0].kind, TokenKind::Keyword);
    assert_eq!(tokens[0].value, "si");
    assert_eq!(tokens[1].kind, TokenKind::Variable);
    assert_eq!(tokens[2].kind, TokenKind::Operator);
    assert_eq!(tokens[3].kind, TokenKind::Number);
    assert_eq!(tokens[4].kind, TokenKind::Keyword);
    assert_eq!(tokens[5].kind, TokenKind::Keyword);
    assert_eq!(tokens[6].kind, TokenKind::Keyword);
    assert_eq!(tokens[7].kind, TokenKind::Keyword);
    assert_eq!(tokens[8].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_positions() {
    let source = "ab + cd".to_string();
    let tokens = tokenize(source, Some("test.lutin".to_string())).unwrap();

    assert_eq!(tokens[0].position.0, 0);
    assert_eq!(tokens[1].position.0, 3);
    assert_eq!(tokens[2].position.0, 5);
}

#[test]
fn test_tokenize_unrecognised_token() {
    let source = "x = @".to_string();
    let result = tokenize(source, Some("test.lutin".to_string()));

    assert!(result.is_err());
    assert_eq!(result.unwrap_err().get_error_name(), "UnrecognisedToken");
}

#[test]
fn test_tokenize_whitespace_handling() {
    let source = "  x   =   42  ".to_string();
    let tokens = tokenize(source, Some("test.lutin".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Variable);
    assert_eq!(tokens[1].kind, TokenKind::Operator);
    assert_eq!(tokens[2].kind, TokenKind::Number);
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_empty_source() {
    let source = "".to_string();
    let tokens = tokenize(source, Some("test.lutin".to_string())).unwrap();

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::EOF);
}

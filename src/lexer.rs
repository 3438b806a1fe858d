//! Lexical analysis for human-readable ABI signatures.
//!
//! Tokenization uses logos. The signature grammar has exactly six token
//! shapes: five single-character structural tokens and identifier runs.
//! Whitespace separates tokens and is skipped during lexing.
//!
//! # Design
//!
//! - `Token` — structural delimiters plus `Ident` fragments
//! - Lexing is total: every character is whitespace, structural, or part of
//!   an identifier run, so no input string fails to tokenize
//! - [`TokenStream`] wraps the logos cursor with the one-token lookahead the
//!   recursive descent parser needs

use logos::{Lexer, Logos};
use std::fmt;

/// Signature token.
///
/// Anything that is not a structural character or whitespace lexes as an
/// [`Token::Ident`]: type names (`uint256`), parameter names (`to`), and any
/// other fragment. The lexer splits text; it does not validate it.
#[derive(Logos, Debug, Clone, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    /// Delimiter `(`
    #[token("(")]
    LParen,
    /// Delimiter `)`
    #[token(")")]
    RParen,
    /// Delimiter `[`
    #[token("[")]
    LBracket,
    /// Delimiter `]`
    #[token("]")]
    RBracket,
    /// Separator `,`
    #[token(",")]
    Comma,
    /// Maximal run of non-structural, non-whitespace characters.
    #[regex(r"[^ \t\r\n\f()\[\],]+", |lex| lex.slice().to_string())]
    Ident(String),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::LParen => f.write_str("("),
            Token::RParen => f.write_str(")"),
            Token::LBracket => f.write_str("["),
            Token::RBracket => f.write_str("]"),
            Token::Comma => f.write_str(","),
            Token::Ident(name) => f.write_str(name),
        }
    }
}

/// Lazy token cursor with one-token lookahead.
///
/// [`peek`] returns the upcoming token without consuming it; repeated peeks
/// return the identical token until [`next`] advances past it. `None` is the
/// end-of-input sentinel for both methods.
///
/// The stream is stateful and single-caller; it holds only the lexer cursor
/// and the lookahead slot.
///
/// [`peek`]: TokenStream::peek
/// [`next`]: TokenStream::next
pub struct TokenStream<'src> {
    lexer: Lexer<'src, Token>,
    lookahead: Option<Option<Token>>,
}

impl<'src> TokenStream<'src> {
    /// Create a stream over a signature string.
    pub fn new(source: &'src str) -> Self {
        Self {
            lexer: Token::lexer(source),
            lookahead: None,
        }
    }

    /// Peek at the next token without consuming it.
    pub fn peek(&mut self) -> Option<&Token> {
        if self.lookahead.is_none() {
            let token = self.scan();
            self.lookahead = Some(token);
        }
        self.lookahead.as_ref()?.as_ref()
    }

    /// Return and consume the next token.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<Token> {
        match self.lookahead.take() {
            Some(token) => token,
            None => self.scan(),
        }
    }

    fn scan(&mut self) -> Option<Token> {
        self.lexer.find_map(Result::ok)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(source: &str) -> Vec<Token> {
        Token::lexer(source).filter_map(Result::ok).collect()
    }

    fn ident(name: &str) -> Token {
        Token::Ident(name.to_string())
    }

    #[test]
    fn structural_tokens_are_single_characters() {
        assert_eq!(
            lex("()[],"),
            vec![
                Token::LParen,
                Token::RParen,
                Token::LBracket,
                Token::RBracket,
                Token::Comma,
            ]
        );
    }

    #[test]
    fn idents_split_on_structure_and_whitespace() {
        assert_eq!(
            lex("transfer(address to,uint256)"),
            vec![
                ident("transfer"),
                Token::LParen,
                ident("address"),
                ident("to"),
                Token::Comma,
                ident("uint256"),
                Token::RParen,
            ]
        );
    }

    #[test]
    fn whitespace_never_appears_inside_a_token() {
        assert_eq!(
            lex("  uint256 \t [ ] "),
            vec![ident("uint256"), Token::LBracket, Token::RBracket]
        );
    }

    #[test]
    fn empty_input_lexes_to_nothing() {
        assert!(lex("").is_empty());
        assert!(lex(" \t\r\n").is_empty());
    }

    #[test]
    fn peek_is_stable_until_next() {
        let mut stream = TokenStream::new("a b");
        assert_eq!(stream.peek(), Some(&ident("a")));
        assert_eq!(stream.peek(), Some(&ident("a")));
        assert_eq!(stream.next(), Some(ident("a")));
        assert_eq!(stream.peek(), Some(&ident("b")));
        assert_eq!(stream.next(), Some(ident("b")));
        assert_eq!(stream.peek(), None);
        assert_eq!(stream.next(), None);
    }

    #[test]
    fn next_without_peek_advances() {
        let mut stream = TokenStream::new("(a)");
        assert_eq!(stream.next(), Some(Token::LParen));
        assert_eq!(stream.next(), Some(ident("a")));
        assert_eq!(stream.next(), Some(Token::RParen));
        assert_eq!(stream.next(), None);
    }

    #[test]
    fn display_round_trips_source_text() {
        for source in ["(", ")", "[", "]", ",", "uint256"] {
            let mut stream = TokenStream::new(source);
            let token = stream.next().expect("one token");
            assert_eq!(token.to_string(), source);
        }
    }
}

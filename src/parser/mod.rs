//! Recursive descent parser for human-readable ABI signatures.
//!
//! The parser drives a [`TokenStream`] to build the ordered list of
//! canonical parameter type descriptors. Grammar:
//!
//! ```text
//! signature := [ name ] "(" params ")" | params      ; name discarded
//! params    := [ param { "," param } ]
//! param     := ( simple | tuple ) [ name ]           ; name discarded
//! tuple     := "(" params ")" [ "[" "]" ]
//! simple    := IDENT [ "[" "]" ]
//! ```
//!
//! Parameter lists terminate at the closing delimiter or at end of input;
//! an unclosed list yields the parameters seen so far, and tokens after the
//! top-level `)` are ignored. A comma must introduce another parameter, so
//! `f(uint256,)` fails, while leading and doubled commas are consumed as
//! stray separators.

mod error;

pub use error::{ParseError, ParseErrorKind, Result};

use crate::lexer::{Token, TokenStream};

/// Default bound on tuple nesting depth.
///
/// Nesting in real signatures is shallow; the bound exists so adversarial
/// input cannot exhaust the stack through recursion.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Parser for one human-readable ABI signature.
///
/// Construction positions the token stream at the signature's opening `(`;
/// everything before it is the function name and is discarded. [`parse`]
/// then produces the canonical parameter type descriptors in source order.
///
/// [`parse`]: SignatureParser::parse
pub struct SignatureParser<'src> {
    stream: TokenStream<'src>,
    max_depth: usize,
}

impl<'src> SignatureParser<'src> {
    /// Create a parser over a signature string.
    pub fn new(signature: &'src str) -> Self {
        Self::with_max_depth(signature, DEFAULT_MAX_DEPTH)
    }

    /// Create a parser with an explicit bound on tuple nesting depth.
    pub fn with_max_depth(signature: &'src str, max_depth: usize) -> Self {
        let mut stream = TokenStream::new(signature);
        // Skip the function name: everything before the first '('. The '('
        // itself stays in the stream for parse().
        while !matches!(stream.peek(), Some(Token::LParen) | None) {
            stream.next();
        }
        Self { stream, max_depth }
    }

    /// Parse the parameter list into canonical type descriptors.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] on an empty parameter slot, a `[` without an
    /// immediate `]`, or tuple nesting beyond the configured maximum. No
    /// partial list is returned on failure.
    pub fn parse(mut self) -> Result<Vec<String>> {
        if matches!(self.stream.peek(), Some(Token::LParen)) {
            self.stream.next(); // consume '('
        }
        self.parse_parameters(&Token::RParen, 0)
    }

    /// Parse parameters up to `end` or end of input; consumes `end`.
    fn parse_parameters(&mut self, end: &Token, depth: usize) -> Result<Vec<String>> {
        let mut parameters = Vec::new();
        loop {
            match self.stream.peek() {
                None => break,
                Some(token) if token == end => {
                    self.stream.next(); // consume the closing delimiter
                    break;
                }
                Some(Token::Comma) => {
                    self.stream.next(); // consume ','
                    if self.at_end_of_list(end) {
                        // The comma introduced an empty parameter slot.
                        return Err(ParseError::unexpected_token(
                            self.stream.peek(),
                            "in parameter position",
                        ));
                    }
                }
                Some(_) => parameters.push(self.parse_parameter(depth)?),
            }
        }
        Ok(parameters)
    }

    fn at_end_of_list(&mut self, end: &Token) -> bool {
        self.stream.peek().map_or(true, |token| token == end)
    }

    /// Parse a single parameter and discard its trailing name, if any.
    fn parse_parameter(&mut self, depth: usize) -> Result<String> {
        let descriptor = match self.stream.peek() {
            Some(Token::LParen) => self.parse_tuple(depth)?,
            found @ (Some(Token::RParen | Token::Comma) | None) => {
                return Err(ParseError::unexpected_token(found, "in parameter position"));
            }
            Some(_) => self.parse_simple_type()?,
        };
        // A bare identifier after the type is the parameter name; canonical
        // descriptors carry types only.
        if matches!(self.stream.peek(), Some(Token::Ident(_))) {
            self.stream.next();
        }
        Ok(descriptor)
    }

    /// Parse a tuple parameter: `(` params `)` with an optional `[]` suffix.
    fn parse_tuple(&mut self, depth: usize) -> Result<String> {
        if depth >= self.max_depth {
            return Err(ParseError::nesting_too_deep(self.max_depth));
        }
        self.stream.next(); // consume '('
        let members = self.parse_parameters(&Token::RParen, depth + 1)?;
        let mut descriptor = format!("({})", members.join(","));
        if self.parse_array_suffix()? {
            descriptor.push_str("[]");
        }
        Ok(descriptor)
    }

    /// Parse a simple type: one token taken verbatim, optional `[]` suffix.
    ///
    /// The base token is not validated against any type table; whatever text
    /// it lexed as becomes the descriptor.
    fn parse_simple_type(&mut self) -> Result<String> {
        let token = self
            .stream
            .next()
            .ok_or_else(|| ParseError::unexpected_token(None, "in parameter position"))?;
        let mut descriptor = token.to_string();
        if self.parse_array_suffix()? {
            descriptor.push_str("[]");
        }
        Ok(descriptor)
    }

    /// Consume a `[` `]` suffix if present.
    ///
    /// A `[` not immediately followed by `]` (e.g. a fixed-size `[3]`) is
    /// rejected.
    fn parse_array_suffix(&mut self) -> Result<bool> {
        if !matches!(self.stream.peek(), Some(Token::LBracket)) {
            return Ok(false);
        }
        self.stream.next(); // consume '['
        match self.stream.next() {
            Some(Token::RBracket) => Ok(true),
            found => Err(ParseError::malformed_array_suffix(found.as_ref())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(signature: &str) -> Vec<String> {
        SignatureParser::new(signature).parse().expect("parse failed")
    }

    #[test]
    fn function_name_is_skipped_up_to_the_opening_paren() {
        assert_eq!(parse("transfer(address,uint256)"), ["address", "uint256"]);
    }

    #[test]
    fn input_without_a_paren_is_all_name() {
        assert_eq!(parse(""), Vec::<String>::new());
        assert_eq!(parse("uint256 address"), Vec::<String>::new());
    }

    #[test]
    fn leading_tuple_is_not_mistaken_for_the_parameter_list() {
        assert_eq!(parse("f((a,b),c)"), ["(a,b)", "c"]);
    }

    #[test]
    fn no_semantic_validation_of_type_names() {
        assert_eq!(parse("f(notatype,123)"), ["notatype", "123"]);
    }

    #[test]
    fn nesting_at_the_limit_parses() {
        let params = SignatureParser::with_max_depth("f(((a)))", 2)
            .parse()
            .expect("two levels fit a limit of two");
        assert_eq!(params, ["((a))"]);
    }

    #[test]
    fn nesting_beyond_the_limit_fails() {
        let error = SignatureParser::with_max_depth("f((((a))))", 2)
            .parse()
            .expect_err("three levels exceed a limit of two");
        assert_eq!(error.kind, ParseErrorKind::NestingTooDeep);
    }
}

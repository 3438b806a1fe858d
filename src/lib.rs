//! # abi-signature
//!
//! Parses "human-readable" ABI function signatures into the ordered list of
//! canonical parameter type strings a binary ABI decoder expects.
//!
//! ```text
//! "transfer(address to, uint256 amount)"
//!         │ lexer ─ Token stream with one-token lookahead
//!         ▼
//! transfer ( address to , uint256 amount )
//!         │ parser ─ recursive descent over parameters
//!         ▼
//! ["address", "uint256"]
//! ```
//!
//! The function name and parameter names are discarded; tuples become
//! parenthesized member lists and dynamic arrays keep their `[]` suffix.
//! The parser checks grammar shape only — type names are not validated
//! against any known-type table.
//!
//! ## Usage
//!
//! ```
//! use abi_signature::parse_signature;
//!
//! let params = parse_signature("transfer(address to, uint256 amount)")?;
//! assert_eq!(params, ["address", "uint256"]);
//!
//! let params = parse_signature("swap((address,uint256)[] orders, bool strict)")?;
//! assert_eq!(params, ["(address,uint256)[]", "bool"]);
//! # Ok::<(), abi_signature::ParseError>(())
//! ```

pub mod lexer;
pub mod parser;

pub use lexer::{Token, TokenStream};
pub use parser::{ParseError, ParseErrorKind, Result, SignatureParser, DEFAULT_MAX_DEPTH};

/// Parse a human-readable ABI signature into canonical type descriptors.
///
/// Convenience wrapper over [`SignatureParser`] with the default nesting
/// limit.
///
/// # Errors
///
/// Returns a [`ParseError`] for grammar violations; see [`ParseErrorKind`]
/// for the cases.
pub fn parse_signature(signature: &str) -> Result<Vec<String>> {
    SignatureParser::new(signature).parse()
}

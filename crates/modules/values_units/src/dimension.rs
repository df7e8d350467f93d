//! Validation of literal CSS dimension strings via the `cssparser` tokenizer.

use crate::ParseError;
use cssparser::{Parser, ParserInput, Token};

/// A parsed CSS `<dimension>`: numeric value plus unit identifier.
#[derive(Clone, Debug, PartialEq)]
pub struct Dimension {
    pub value: f32,
    pub unit: String,
}

/// Parse a string that must consist of exactly one CSS `<dimension>` token
/// (`100vw`, `768px`, `60em`, …).
///
/// Used to validate user-supplied page-width literals and breakpoint widths
/// handed back by the host theme before they are interpolated into rules.
///
/// # Errors
/// Returns [`ParseError::UnexpectedToken`] when the input does not start with
/// a `<dimension>`, and [`ParseError::TrailingInput`] when anything follows
/// the token.
pub fn parse_dimension(input: &str) -> Result<Dimension, ParseError> {
    let mut parser_input = ParserInput::new(input);
    let mut parser = Parser::new(&mut parser_input);
    let dimension = match parser.next() {
        Ok(token) => match token.clone() {
            Token::Dimension { value, unit, .. } => Dimension {
                value,
                unit: unit.as_ref().to_owned(),
            },
            _ => return Err(ParseError::UnexpectedToken),
        },
        Err(_) => return Err(ParseError::UnexpectedToken),
    };
    if parser.is_exhausted() {
        Ok(dimension)
    } else {
        Err(ParseError::TrailingInput)
    }
}

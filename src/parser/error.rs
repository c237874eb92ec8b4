use super::locations::Span;
use super::tokenizer::TokenType;

/// A non-fatal problem found while parsing. The parser records these in
/// discovery order and keeps going.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("expected next token to be {expected}, got {found} instead ({span})")]
    UnexpectedToken {
        expected: TokenType,
        found: TokenType,
        span: Span,
    },
    #[error("could not parse {literal:?} as integer ({span})")]
    InvalidInteger { literal: String, span: Span },
    #[error("no parse rule for {kind} found ({span})")]
    NoParseRule { kind: TokenType, span: Span },
}

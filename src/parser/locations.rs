use super::ast::*;
use super::error::Error;
use super::tokenizer::Token;

#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

pub trait Locatable {
    fn span(&self) -> Span;
}

/// Source range of a token or node. `end` points one past the last character.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct Span {
    pub start: Location,
    pub end: Location,
}

impl Span {
    pub fn new(start_line: usize, start_col: usize, end_line: usize, end_col: usize) -> Self {
        Self {
            start: Location {
                line: start_line,
                column: start_col,
            },
            end: Location {
                line: end_line,
                column: end_col,
            },
        }
    }

    pub fn till<R: Locatable>(&self, other: &R) -> Self {
        Self {
            start: self.start,
            end: other.span().end,
        }
    }

    pub fn or<R: Locatable>(&self, other: &Option<R>) -> Self {
        match other {
            Some(r) => self.till(r),
            None => *self,
        }
    }
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.start)
    }
}

impl Locatable for Token {
    fn span(&self) -> Span {
        self.span
    }
}

impl Locatable for Identifier {
    fn span(&self) -> Span {
        self.token.span()
    }
}

impl Locatable for Expression {
    fn span(&self) -> Span {
        match self {
            Self::Identifier(ident) => ident.span(),
            Self::Integer(lit) => lit.token.span(),
            Self::Boolean(lit) => lit.token.span(),
        }
    }
}

impl Locatable for Statement {
    fn span(&self) -> Span {
        match self {
            Self::Let(s) => s.token.span().till(&s.name).or(&s.value),
            Self::Return(s) => s.token.span().or(&s.value),
            Self::Expression(s) => s.token.span().till(&s.value),
        }
    }
}

impl Locatable for Error {
    fn span(&self) -> Span {
        match self {
            Self::UnexpectedToken { span, .. } => *span,
            Self::InvalidInteger { span, .. } => *span,
            Self::NoParseRule { span, .. } => *span,
        }
    }
}

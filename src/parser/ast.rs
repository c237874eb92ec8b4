use super::tokenizer::{Token, TokenType as TT};

/// Anything in the tree that can name the token it was introduced by.
pub trait Node {
    fn token_literal(&self) -> &str;
}

/// Root of a parsed source text. Statements are kept in source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Node for Program {
    fn token_literal(&self) -> &str {
        match self.statements.first() {
            Some(statement) => statement.token_literal(),
            None => "",
        }
    }
}

impl std::fmt::Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for statement in &self.statements {
            write!(f, "{}", statement)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Let(LetStatement),
    Return(ReturnStatement),
    Expression(ExpressionStatement),
}

impl Node for Statement {
    fn token_literal(&self) -> &str {
        match self {
            Self::Let(s) => &s.token.lexeme,
            Self::Return(s) => &s.token.lexeme,
            Self::Expression(s) => &s.token.lexeme,
        }
    }
}

impl std::fmt::Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Let(s) => {
                write!(f, "{} {} = ", s.token.lexeme, s.name)?;
                if let Some(value) = &s.value {
                    write!(f, "{}", value)?;
                }
                write!(f, ";")
            }
            Self::Return(s) => {
                write!(f, "{} ", s.token.lexeme)?;
                if let Some(value) = &s.value {
                    write!(f, "{}", value)?;
                }
                write!(f, ";")
            }
            Self::Expression(s) => write!(f, "{}", s.value),
        }
    }
}

/// `let <name> = <value>`. The value is absent when it failed to parse.
#[derive(Debug, Clone, PartialEq)]
pub struct LetStatement {
    pub token: Token,
    pub name: Identifier,
    pub value: Option<Expression>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStatement {
    pub token: Token,
    pub value: Option<Expression>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStatement {
    pub token: Token,
    pub value: Expression,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Identifier(Identifier),
    Integer(IntegerLiteral),
    Boolean(BooleanLiteral),
}

impl Node for Expression {
    fn token_literal(&self) -> &str {
        match self {
            Self::Identifier(e) => &e.token.lexeme,
            Self::Integer(e) => &e.token.lexeme,
            Self::Boolean(e) => &e.token.lexeme,
        }
    }
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Identifier(e) => write!(f, "{}", e),
            Self::Integer(e) => write!(f, "{}", e.token.lexeme),
            Self::Boolean(e) => write!(f, "{}", e.token.lexeme),
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct Identifier {
    pub token: Token,
    pub name: String,
}

impl std::fmt::Debug for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Identifier(\"{}\")", self.name)
    }
}

impl std::fmt::Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl Node for Identifier {
    fn token_literal(&self) -> &str {
        &self.token.lexeme
    }
}

impl From<Token> for Identifier {
    fn from(value: Token) -> Self {
        match value.typ {
            TT::IDENT => Self {
                name: value.lexeme.clone(),
                token: value,
            },
            _ => unreachable!(),
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct IntegerLiteral {
    pub token: Token,
    pub value: i64,
}

impl std::fmt::Debug for IntegerLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "IntegerLiteral({})", self.value)
    }
}

#[derive(Clone, PartialEq)]
pub struct BooleanLiteral {
    pub token: Token,
    pub value: bool,
}

impl std::fmt::Debug for BooleanLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BooleanLiteral({})", self.value)
    }
}

// # ========================= START OF THE GRAMMAR =========================
//
// program: statement* EOF
// statement: let_stmt | return_stmt | expression_stmt
// let_stmt: 'let' IDENT '=' expression [';']
// return_stmt: 'return' expression [';']
// expression_stmt: expression [';']
// expression: IDENT | INT | 'true' | 'false'
//
// Upper case names denote token kinds, quoted strings denote keywords.

use log::{debug, trace};
use once_cell::sync::Lazy;

use super::ast::*;
use super::error::Error;
use super::locations::{Locatable, Span};
use super::tokenizer::{Token, TokenType as TT};

static END_OF_STREAM: Lazy<Token> = Lazy::new(|| Token::new(TT::EOF, "", Span::default()));

/// Binding strength an expression is parsed at. Only the loosest level
/// exists while expressions are single literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum Precedence {
    Lowest,
}

type PrefixRule<'a> = fn(&mut Parser<'a>) -> Option<Expression>;

pub fn parse(input: &[Token]) -> (Program, Vec<Error>) {
    Parser::new(input).parse_program()
}

/// Token-window parser over a token slice. One instance parses one program;
/// `parse_program` consumes it and hands back the tree together with every
/// diagnostic recorded on the way.
pub struct Parser<'a> {
    tokens: &'a [Token],
    position: usize,
    errors: Vec<Error>,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            position: 0,
            errors: vec![],
        }
    }

    pub fn parse_program(mut self) -> (Program, Vec<Error>) {
        trace!("Parsing {} tokens", self.tokens.len());
        let mut program = Program::default();
        while !self.cur_is(TT::EOF) {
            if let Some(statement) = self.parse_statement() {
                trace!("Parsed statement at {}", statement.span());
                program.statements.push(statement);
            }
            self.advance();
        }
        debug!(
            "Parsed {} statements with {} errors",
            program.statements.len(),
            self.errors.len()
        );
        (program, self.errors)
    }

    // A stream without a trailing EOF reads as if it had one.
    fn cur_token(&self) -> &'a Token {
        self.tokens.get(self.position).unwrap_or(&*END_OF_STREAM)
    }

    fn peek_token(&self) -> &'a Token {
        self.tokens.get(self.position + 1).unwrap_or(&*END_OF_STREAM)
    }

    fn cur_is(&self, typ: TT) -> bool {
        self.cur_token().typ == typ
    }

    fn peek_is(&self, typ: TT) -> bool {
        self.peek_token().typ == typ
    }

    fn advance(&mut self) {
        if !self.cur_is(TT::EOF) {
            self.position += 1;
        }
    }

    fn expect_peek(&mut self, typ: TT) -> bool {
        if self.peek_is(typ) {
            self.advance();
            true
        } else {
            let found = self.peek_token();
            self.report_error(Error::UnexpectedToken {
                expected: typ,
                found: found.typ,
                span: found.span(),
            });
            false
        }
    }

    fn report_error(&mut self, error: Error) {
        debug!("Parse error: {}", error);
        self.errors.push(error);
    }

    // Skips the rest of a malformed statement. Stops on its `;`, or right
    // before the end of input or the start of the next statement, so the
    // caller's `advance` lands on whatever follows.
    fn synchronize(&mut self) {
        while !self.cur_is(TT::SEMICOLON)
            && !self.peek_is(TT::EOF)
            && !self.peek_is(TT::LET)
            && !self.peek_is(TT::RETURN)
        {
            self.advance();
        }
    }

    fn skip_semicolon(&mut self) {
        if self.peek_is(TT::SEMICOLON) {
            self.advance();
        }
    }

    // statement: let_stmt | return_stmt | expression_stmt
    fn parse_statement(&mut self) -> Option<Statement> {
        match self.cur_token().typ {
            TT::LET => self.parse_let_statement(),
            TT::RETURN => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    // let_stmt: 'let' IDENT '=' expression [';']
    fn parse_let_statement(&mut self) -> Option<Statement> {
        let token = self.cur_token().clone();
        if !self.expect_peek(TT::IDENT) {
            self.synchronize();
            return None;
        }
        let name = Identifier::from(self.cur_token().clone());
        if !self.expect_peek(TT::ASSIGN) {
            self.synchronize();
            return None;
        }
        self.advance();
        let value = self.parse_expression(Precedence::Lowest);
        self.skip_semicolon();
        Some(Statement::Let(LetStatement { token, name, value }))
    }

    // return_stmt: 'return' expression [';']
    fn parse_return_statement(&mut self) -> Option<Statement> {
        let token = self.cur_token().clone();
        self.advance();
        let value = self.parse_expression(Precedence::Lowest);
        self.skip_semicolon();
        Some(Statement::Return(ReturnStatement { token, value }))
    }

    // expression_stmt: expression [';']
    fn parse_expression_statement(&mut self) -> Option<Statement> {
        let token = self.cur_token().clone();
        let value = self.parse_expression(Precedence::Lowest);
        self.skip_semicolon();
        value.map(|value| Statement::Expression(ExpressionStatement { token, value }))
    }

    // expression: IDENT | INT | 'true' | 'false'
    fn parse_expression(&mut self, precedence: Precedence) -> Option<Expression> {
        let token = self.cur_token();
        trace!("Parsing expression at {} ({:?})", token, precedence);
        match prefix_rule(token.typ) {
            Some(rule) => rule(self),
            None => {
                self.report_error(Error::NoParseRule {
                    kind: token.typ,
                    span: token.span(),
                });
                None
            }
        }
    }

    fn parse_identifier(&mut self) -> Option<Expression> {
        Some(Expression::Identifier(Identifier::from(
            self.cur_token().clone(),
        )))
    }

    fn parse_integer_literal(&mut self) -> Option<Expression> {
        let token = self.cur_token().clone();
        match token.lexeme.parse::<i64>() {
            Ok(value) => Some(Expression::Integer(IntegerLiteral { token, value })),
            Err(_) => {
                self.report_error(Error::InvalidInteger {
                    literal: token.lexeme.clone(),
                    span: token.span(),
                });
                None
            }
        }
    }

    fn parse_boolean(&mut self) -> Option<Expression> {
        let token = self.cur_token().clone();
        let value = token.typ == TT::TRUE;
        Some(Expression::Boolean(BooleanLiteral { token, value }))
    }
}

fn prefix_rule<'a>(typ: TT) -> Option<PrefixRule<'a>> {
    match typ {
        TT::IDENT => Some(Parser::parse_identifier),
        TT::INT => Some(Parser::parse_integer_literal),
        TT::TRUE | TT::FALSE => Some(Parser::parse_boolean),
        _ => None,
    }
}

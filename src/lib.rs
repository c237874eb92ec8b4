use log::trace;
use std::sync::Arc;

mod parser;
pub use parser::tokenizer::{tokenize_file, tokenize_string, Token, TokenType, Tokenizer};
pub use parser::{
    parse, BooleanLiteral, Error, Expression, ExpressionStatement, Identifier, IntegerLiteral,
    LetStatement, Locatable, Location, Node, Parser, Program, ReturnStatement, Span, Statement,
};

mod interpreter;
pub use interpreter::{evaluate, native_bool_to_object, Object, ObjectType, FALSE, NULL, TRUE};

/// Tokenizes, parses and evaluates `source`. Evaluation only happens when
/// parsing produced no diagnostics.
pub fn run(source: &str) -> Result<Option<Arc<Object>>, Vec<Error>> {
    trace!("Tokenizing {source:?}");
    let tokens = tokenize_string(source);
    let (program, errors) = parse(&tokens);
    if !errors.is_empty() {
        return Err(errors);
    }
    trace!("Interpreting {program:?}");
    Ok(evaluate(&program))
}

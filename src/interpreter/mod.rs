use log::trace;
use std::sync::Arc;

use crate::parser::{Expression, Program, Statement};

mod object;
pub use object::{native_bool_to_object, Object, ObjectType, FALSE, NULL, TRUE};

/// Evaluates every statement in order and yields the value of the last one.
///
/// `None` means the last statement has no evaluation rule yet (`let`,
/// `return`, bare identifiers) and is distinct from the `NULL` value.
pub fn evaluate(program: &Program) -> Option<Arc<Object>> {
    trace!("Evaluating {} statements", program.statements.len());
    evaluate_statements(&program.statements)
}

fn evaluate_statements(statements: &[Statement]) -> Option<Arc<Object>> {
    let mut result = None;
    for statement in statements {
        result = evaluate_statement(statement);
    }
    result
}

fn evaluate_statement(statement: &Statement) -> Option<Arc<Object>> {
    match statement {
        Statement::Expression(stmt) => evaluate_expr(&stmt.value),
        Statement::Let(_) => None,
        Statement::Return(_) => None,
    }
}

fn evaluate_expr(expression: &Expression) -> Option<Arc<Object>> {
    match expression {
        Expression::Integer(lit) => Some(Arc::new(Object::Integer(lit.value))),
        Expression::Boolean(lit) => Some(native_bool_to_object(lit.value)),
        Expression::Identifier(_) => None,
    }
}

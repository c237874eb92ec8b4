use super::{error::Error, parse, tokenize_string, Locatable, Node, Program, Statement, Token};
use super::{Expression, Span, TokenType as TT};

fn parse_string(input: &str) -> (Program, Vec<Error>) {
    let tokens = tokenize_string(input);
    parse(&tokens)
}

fn parse_clean(input: &str) -> Program {
    let (program, errors) = parse_string(input);
    assert!(
        errors.is_empty(),
        "\nFailed to parse \"{}\" cleanly:\n{}\n",
        input,
        errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    );
    program
}

fn parse_tree_matches(input: &str, tree_repr: &str) {
    let program = parse_clean(input);
    let result_repr = format!("{program:?}");
    assert!(
        result_repr.contains(tree_repr),
        "\nFailed to parse \"{}\":\nexpected \"{}\" somewhere in \"{}\"\n",
        input,
        tree_repr,
        result_repr
    )
}

fn assert_raises_error(input: &str, msg: &str) {
    let (_, errors) = parse_string(input);
    assert!(!errors.is_empty(), "expected an error parsing \"{input}\"");
    let err = errors.first().unwrap();
    assert_eq!(msg, err.to_string().as_str());
}

fn kinds(input: &str) -> Vec<TT> {
    tokenize_string(input).iter().map(|t| t.kind()).collect()
}

#[test]
fn test_tokenizer_statements() {
    let tokens = tokenize_string("let five = 5;\nlet ten = 10;");
    let expected = [
        (TT::LET, "let"),
        (TT::IDENT, "five"),
        (TT::ASSIGN, "="),
        (TT::INT, "5"),
        (TT::SEMICOLON, ";"),
        (TT::LET, "let"),
        (TT::IDENT, "ten"),
        (TT::ASSIGN, "="),
        (TT::INT, "10"),
        (TT::SEMICOLON, ";"),
        (TT::EOF, ""),
    ];
    assert_eq!(tokens.len(), expected.len());
    for (token, (typ, lexeme)) in tokens.iter().zip(expected) {
        assert_eq!(token.kind(), typ);
        assert_eq!(token.literal(), lexeme);
    }
}

#[test]
fn test_tokenizer_operators() {
    assert_eq!(
        kinds("== != = ! + - * / < > , ; ( ) { }"),
        vec![
            TT::EQ,
            TT::NOT_EQ,
            TT::ASSIGN,
            TT::BANG,
            TT::PLUS,
            TT::MINUS,
            TT::ASTERISK,
            TT::SLASH,
            TT::LT,
            TT::GT,
            TT::COMMA,
            TT::SEMICOLON,
            TT::LPAREN,
            TT::RPAREN,
            TT::LBRACE,
            TT::RBRACE,
            TT::EOF,
        ]
    );
    assert_eq!(kinds("a==b"), vec![TT::IDENT, TT::EQ, TT::IDENT, TT::EOF]);
}

#[test]
fn test_tokenizer_keywords() {
    assert_eq!(
        kinds("fn let true false if else return"),
        vec![
            TT::FUNCTION,
            TT::LET,
            TT::TRUE,
            TT::FALSE,
            TT::IF,
            TT::ELSE,
            TT::RETURN,
            TT::EOF,
        ]
    );
    assert_eq!(kinds("letter"), vec![TT::IDENT, TT::EOF]);
    assert_eq!(kinds("returns if_x"), vec![TT::IDENT, TT::IDENT, TT::EOF]);
}

#[test]
fn test_tokenizer_illegal_characters() {
    let tokens = tokenize_string("@ x é");
    assert_eq!(tokens[0], Token::new(TT::ILLEGAL, "@", Span::default()));
    assert_eq!(tokens[1].kind(), TT::IDENT);
    assert_eq!(tokens[2], Token::new(TT::ILLEGAL, "é", Span::default()));
    assert_eq!(tokens[3].kind(), TT::EOF);
}

#[test]
fn test_tokenizer_empty_input() {
    assert_eq!(kinds(""), vec![TT::EOF]);
    assert_eq!(kinds("  \n\t "), vec![TT::EOF]);
}

#[test]
fn test_tokenizer_spans() {
    let tokens = tokenize_string("let x = 5;\n  foobar");
    assert_eq!(tokens[0].span(), Span::new(1, 1, 1, 4));
    assert_eq!(tokens[1].span(), Span::new(1, 5, 1, 6));
    assert_eq!(tokens[3].span(), Span::new(1, 9, 1, 10));
    assert_eq!(tokens[5].span(), Span::new(2, 3, 2, 9));
}

#[test]
fn test_let_statements() {
    let program = parse_clean("let x = 5;\nlet y = 10;\nlet foobar = 838383;\n");
    assert_eq!(program.statements.len(), 3);
    for (statement, name) in program.statements.iter().zip(["x", "y", "foobar"]) {
        assert_eq!(statement.token_literal(), "let");
        match statement {
            Statement::Let(s) => {
                assert_eq!(s.name.name, name);
                assert_eq!(s.name.token_literal(), name);
            }
            _ => panic!("expected a let statement, got {statement:?}"),
        }
    }
    parse_tree_matches("let x = 5;", "value: Some(Integer(IntegerLiteral(5)))");
    parse_tree_matches("let y = true;", "value: Some(Boolean(BooleanLiteral(true)))");
    parse_tree_matches("let foobar = y;", "value: Some(Identifier(Identifier(\"y\")))");
}

#[test]
fn test_return_statements() {
    let program = parse_clean("return 5;\nreturn 10;\nreturn 993322;\n");
    assert_eq!(program.statements.len(), 3);
    for statement in program.statements.iter() {
        assert!(matches!(statement, Statement::Return(_)));
        assert_eq!(statement.token_literal(), "return");
    }
    parse_tree_matches("return 993322;", "Return(ReturnStatement");
    parse_tree_matches("return x", "value: Some(Identifier(Identifier(\"x\")))");
}

#[test]
fn test_identifier_expression() {
    let program = parse_clean("foobar;");
    assert_eq!(program.statements.len(), 1);
    match &program.statements[0] {
        Statement::Expression(s) => match &s.value {
            Expression::Identifier(ident) => {
                assert_eq!(ident.name, "foobar");
                assert_eq!(ident.token_literal(), "foobar");
            }
            other => panic!("expected an identifier, got {other:?}"),
        },
        other => panic!("expected an expression statement, got {other:?}"),
    }
}

#[test]
fn test_integer_literal_expression() {
    let program = parse_clean("5");
    assert_eq!(program.statements.len(), 1);
    match &program.statements[0] {
        Statement::Expression(s) => match &s.value {
            Expression::Integer(lit) => {
                assert_eq!(lit.value, 5);
                assert_eq!(s.value.token_literal(), "5");
            }
            other => panic!("expected an integer literal, got {other:?}"),
        },
        other => panic!("expected an expression statement, got {other:?}"),
    }
    parse_tree_matches("9223372036854775807;", "IntegerLiteral(9223372036854775807)");
}

#[test]
fn test_boolean_expression() {
    parse_tree_matches("true;", "Boolean(BooleanLiteral(true))");
    parse_tree_matches("false", "Boolean(BooleanLiteral(false))");
    let program = parse_clean("true; false;");
    assert_eq!(program.statements.len(), 2);
}

#[test]
fn test_terminator_is_optional() {
    let program = parse_clean("let a = 1 let b = 2\nreturn a\nb");
    assert_eq!(program.statements.len(), 4);
    assert_eq!(program.to_string(), "let a = 1;let b = 2;return a;b");
}

#[test]
fn test_program_display() {
    let program = parse_clean("let myVar = anotherVar;");
    assert_eq!(program.to_string(), "let myVar = anotherVar;");
    let program = parse_clean("return true; 5; x");
    assert_eq!(program.to_string(), "return true;5x");
    assert_eq!(program.token_literal(), "return");
    assert_eq!(Program::default().token_literal(), "");
}

#[test]
fn test_statement_spans() {
    let program = parse_clean("let x = 5;\nreturn foobar;");
    assert_eq!(program.statements[0].span(), Span::new(1, 1, 1, 10));
    assert_eq!(program.statements[1].span(), Span::new(2, 1, 2, 14));
}

#[test]
fn test_missing_assign() {
    assert_raises_error(
        "let x 5;",
        "expected next token to be ASSIGN, got INT instead (line 1, column 7)",
    );
}

#[test]
fn test_missing_identifier() {
    assert_raises_error(
        "let = 5;",
        "expected next token to be IDENT, got ASSIGN instead (line 1, column 5)",
    );
    assert_raises_error(
        "let 5 = 5;",
        "expected next token to be IDENT, got INT instead (line 1, column 5)",
    );
}

#[test]
fn test_recovery_after_malformed_let() {
    let (program, errors) = parse_string("let x 5; let y = 10; let = 3; return y;");
    assert_eq!(errors.len(), 2);
    assert_eq!(program.statements.len(), 2);
    assert_eq!(program.to_string(), "let y = 10;return y;");
}

#[test]
fn test_recovery_without_terminator() {
    let (program, errors) = parse_string("let x\nlet y = 1;\nlet z\nreturn 2");
    assert_eq!(errors.len(), 2);
    assert_eq!(program.to_string(), "let y = 1;return 2;");
}

#[test]
fn test_integer_overflow() {
    assert_raises_error(
        "99999999999999999999",
        "could not parse \"99999999999999999999\" as integer (line 1, column 1)",
    );
    let (program, errors) = parse_string("let big = 99999999999999999999; 7");
    assert_eq!(errors.len(), 1);
    assert_eq!(program.statements.len(), 2);
    match &program.statements[0] {
        Statement::Let(s) => assert!(s.value.is_none()),
        other => panic!("expected a let statement, got {other:?}"),
    }
    assert_eq!(program.to_string(), "let big = ;7");
}

#[test]
fn test_no_parse_rule() {
    assert_raises_error("+", "no parse rule for PLUS found (line 1, column 1)");
    assert_raises_error("@;", "no parse rule for ILLEGAL found (line 1, column 1)");
    assert_raises_error(";", "no parse rule for SEMICOLON found (line 1, column 1)");
    assert_raises_error("return ;", "no parse rule for SEMICOLON found (line 1, column 8)");
}

#[test]
fn test_one_error_per_bad_expression_statement() {
    let (program, errors) = parse_string("-; 5;");
    assert_eq!(errors.len(), 1);
    assert_eq!(program.statements.len(), 1);
    parse_tree_matches("5;", "IntegerLiteral(5)");
}

#[test]
fn test_empty_program() {
    let program = parse_clean("");
    assert!(program.statements.is_empty());
}

#[test]
fn test_stream_without_end_marker() {
    let mut tokens = tokenize_string("let x = 5;");
    tokens.pop();
    let (program, errors) = parse(&tokens);
    assert!(errors.is_empty());
    assert_eq!(program.to_string(), "let x = 5;");

    let (program, errors) = parse(&[]);
    assert!(errors.is_empty());
    assert!(program.statements.is_empty());
}

#[test]
fn test_error_span() {
    let (_, errors) = parse_string("let a = 1;\nlet b 2;");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].span(), Span::new(2, 7, 2, 8));
}

use super::locations::Span;
use const_format::concatcp;
use derivative::Derivative;
use log::trace;
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;

#[derive(Clone, Derivative)]
#[derivative(Debug, PartialEq)]
pub struct Token {
    pub(crate) typ: TokenType,
    pub(crate) lexeme: String,
    #[derivative(Debug = "ignore", PartialEq = "ignore")]
    pub(crate) span: Span,
}

impl Token {
    pub fn new(typ: TokenType, lexeme: &str, span: Span) -> Self {
        Self {
            typ,
            lexeme: lexeme.to_string(),
            span,
        }
    }
    pub fn kind(&self) -> TokenType {
        self.typ
    }
    pub fn literal(&self) -> &str {
        &self.lexeme
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}('{}')", self.typ, self.lexeme)
    }
}

#[allow(non_camel_case_types)]
#[allow(clippy::upper_case_acronyms)]
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TokenType {
    ILLEGAL,
    EOF,
    IDENT,
    INT,
    ASSIGN,
    PLUS,
    MINUS,
    BANG,
    ASTERISK,
    SLASH,
    LT,
    GT,
    EQ,
    NOT_EQ,
    COMMA,
    SEMICOLON,
    LPAREN,
    RPAREN,
    LBRACE,
    RBRACE,
    FUNCTION,
    LET,
    TRUE,
    FALSE,
    IF,
    ELSE,
    RETURN,
}

impl std::fmt::Display for TokenType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

const EQ: (&str, TokenType) = ("==", TokenType::EQ);
const NOT_EQ: (&str, TokenType) = ("!=", TokenType::NOT_EQ);
const ASSIGN: (&str, TokenType) = ("=", TokenType::ASSIGN);
const PLUS: (&str, TokenType) = ("+", TokenType::PLUS);
const MINUS: (&str, TokenType) = ("-", TokenType::MINUS);
const BANG: (&str, TokenType) = ("!", TokenType::BANG);
const ASTERISK: (&str, TokenType) = ("*", TokenType::ASTERISK);
const SLASH: (&str, TokenType) = ("/", TokenType::SLASH);
const LT: (&str, TokenType) = ("<", TokenType::LT);
const GT: (&str, TokenType) = (">", TokenType::GT);
const COMMA: (&str, TokenType) = (",", TokenType::COMMA);
const SEMICOLON: (&str, TokenType) = (";", TokenType::SEMICOLON);
const LPAREN: (&str, TokenType) = ("(", TokenType::LPAREN);
const RPAREN: (&str, TokenType) = (")", TokenType::RPAREN);
const LBRACE: (&str, TokenType) = ("{", TokenType::LBRACE);
const RBRACE: (&str, TokenType) = ("}", TokenType::RBRACE);

// Two-character operators come first so they win over their prefixes.
const SIMPLE_TOKENS: [(&str, TokenType); 16] = [
    EQ, NOT_EQ, ASSIGN, PLUS, MINUS, BANG, ASTERISK, SLASH, LT, GT, COMMA, SEMICOLON, LPAREN,
    RPAREN, LBRACE, RBRACE,
];

macro_rules! alternative {
    ($t:expr) => {{
        $t
    }};
    ($t:expr, $($ts:expr),+) => {{
        concatcp!($t, "|", alternative!($($ts),+))
    }}
}

macro_rules! group {
    ($($ts:expr),+) => {{
        concatcp!(r"(", alternative!($($ts),+), ")")
    }}
}

const S_WHITESPACE: &str = r"^[ \t\r\n]+";
const S_NAME: &str = r"^[A-Za-z_][A-Za-z0-9_]*";
const S_NUMBER: &str = r"^[0-9]+";
const S_KEYWORDS: &str = concatcp!(
    "^",
    group!("fn", "let", "true", "false", "if", "else", "return"),
    r"\b"
);

static WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(S_WHITESPACE).expect("Error compiling regex."));
static NAME: Lazy<Regex> = Lazy::new(|| Regex::new(S_NAME).expect("Error compiling regex."));
static NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(S_NUMBER).expect("Error compiling regex."));
static KEYWORDS: Lazy<Regex> =
    Lazy::new(|| Regex::new(S_KEYWORDS).expect("Error compiling regex."));

fn keyword(lexeme: &str) -> TokenType {
    match lexeme {
        "fn" => TokenType::FUNCTION,
        "let" => TokenType::LET,
        "true" => TokenType::TRUE,
        "false" => TokenType::FALSE,
        "if" => TokenType::IF,
        "else" => TokenType::ELSE,
        "return" => TokenType::RETURN,
        _ => TokenType::IDENT,
    }
}

/// Turns source text into tokens. Never fails: characters that start no
/// token become single `ILLEGAL` tokens.
pub struct Tokenizer {
    tokens: Vec<Token>,
    line: usize,
    column: usize,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer {
    pub fn new() -> Self {
        Self {
            tokens: vec![],
            line: 1,
            column: 1,
        }
    }

    pub fn tokenize(&mut self, input: &str) {
        let mut rest = input;
        while !rest.is_empty() {
            let consumed = self.next_token(rest);
            rest = &rest[consumed..];
        }
    }

    pub fn finalize(mut self) -> Vec<Token> {
        let here = Span::new(self.line, self.column, self.line, self.column);
        self.tokens.push(Token::new(TokenType::EOF, "", here));
        trace!("Tokenized {} tokens", self.tokens.len());
        self.tokens
    }

    /// Consumes one token (or one run of whitespace) from the front of
    /// `rest` and returns its length in bytes.
    fn next_token(&mut self, rest: &str) -> usize {
        if let Some(m) = WHITESPACE.find(rest) {
            self.skip(m.as_str());
            return m.end();
        }
        if let Some(m) = KEYWORDS.find(rest) {
            return self.push(keyword(m.as_str()), m.as_str());
        }
        if let Some(m) = NAME.find(rest) {
            return self.push(TokenType::IDENT, m.as_str());
        }
        if let Some(m) = NUMBER.find(rest) {
            return self.push(TokenType::INT, m.as_str());
        }
        for (lexeme, tok_type) in SIMPLE_TOKENS {
            if rest.starts_with(lexeme) {
                return self.push(tok_type, lexeme);
            }
        }
        let len = rest.chars().next().map_or(1, char::len_utf8);
        self.push(TokenType::ILLEGAL, &rest[..len])
    }

    fn skip(&mut self, whitespace: &str) {
        for chr in whitespace.chars() {
            if chr == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }

    fn push(&mut self, typ: TokenType, lexeme: &str) -> usize {
        let start = self.column;
        self.column += lexeme.chars().count();
        let span = Span::new(self.line, start, self.line, self.column);
        self.tokens.push(Token::new(typ, lexeme, span));
        lexeme.len()
    }
}

pub fn tokenize_string(input: &str) -> Vec<Token> {
    let mut tokenizer = Tokenizer::new();
    tokenizer.tokenize(input);
    tokenizer.finalize()
}

pub fn tokenize_file<P>(path: P) -> Result<Vec<Token>, String>
where
    P: AsRef<Path> + std::fmt::Display,
{
    match std::fs::read_to_string(&path) {
        Ok(source) => Ok(tokenize_string(&source)),
        Err(_) => Err(format!("{} not found. No such file or directory.", &path)),
    }
}

//! Expression tokens
//!
//! Pure data produced by the lexer. No validation logic or display
//! concerns beyond rendering a token for output.

use std::fmt;

/// Lexical class of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Binary operator: one of `+ - * / ^`
    Operator,
    /// The assignment sign `=`
    Assignment,
    /// The statement terminator `;`
    Delimiter,
    /// Opening parenthesis `(`
    LeftParen,
    /// Closing parenthesis `)`
    RightParen,
    /// Integer or decimal literal like `5` or `10.25`
    Number,
    /// Identifier: letter or underscore, then letters, digits, underscores
    Var,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Operator => "Operator",
            TokenKind::Assignment => "Assignment",
            TokenKind::Delimiter => "Delimiter",
            TokenKind::LeftParen => "Left Paren",
            TokenKind::RightParen => "Right Paren",
            TokenKind::Number => "Number",
            TokenKind::Var => "Var",
        };
        f.write_str(name)
    }
}

/// A classified, contiguous substring of the source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// The exact substring the token was matched from
    pub lexeme: String,
}

impl Token {
    pub fn new<S: Into<String>>(kind: TokenKind, lexeme: S) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
        }
    }

    /// The validator matches parentheses and the terminator by lexeme,
    /// not kind, so these helpers compare the literal text.
    pub fn is_open_paren(&self) -> bool {
        self.lexeme == "("
    }

    pub fn is_close_paren(&self) -> bool {
        self.lexeme == ")"
    }

    pub fn is_terminator(&self) -> bool {
        self.lexeme == ";"
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.lexeme)
    }
}

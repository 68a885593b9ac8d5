//! Expression Syntax Checker
//!
//! A lexical tokenizer and lightweight syntactic validator for a small
//! assignment-expression language: `ident = expr ;` with the binary
//! operators `+ - * / ^`, parentheses, numeric literals, and identifiers.
//!
//! This library provides:
//! - Tokenization of raw source text into classified tokens
//! - Structural validation (parenthesis balance, semicolon termination,
//!   operator/operand adjacency) without building a parse tree
//! - A single pure entry point, [`process`], for any front-end to drive

pub mod lexer;
pub mod validation;

// Re-exports for clean public API
pub use lexer::{LexError, Token, TokenKind, tokenize};
pub use validation::{ValidationError, validate};

/// Outcome of checking one expression.
///
/// `tokens` is `None` only when lexing itself failed; a sequence that lexed
/// but failed validation is still returned so callers can show it alongside
/// the message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxReport {
    pub tokens: Option<Vec<Token>>,
    pub message: String,
}

impl SyntaxReport {
    /// True when the message reports a problem rather than success.
    pub fn has_error(&self) -> bool {
        self.message.contains("Syntax error")
    }
}

/// Tokenize and validate one expression.
///
/// This is the main entry point. It never panics and produces a well-formed
/// report for every input, including the empty string; repeated calls on the
/// same input yield identical reports.
pub fn process(input: &str) -> SyntaxReport {
    let tokens = match tokenize(input) {
        Ok(tokens) => tokens,
        Err(error) => {
            return SyntaxReport {
                tokens: None,
                message: format!("Syntax error: {error}"),
            };
        }
    };

    let message = match validate(&tokens) {
        Ok(()) => "No syntax errors found.".to_string(),
        Err(error) => format!("Syntax error: {error}"),
    };

    SyntaxReport {
        tokens: Some(tokens),
        message,
    }
}

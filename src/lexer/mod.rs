//! Expression Lexer
//!
//! Converts raw source text into a sequence of classified tokens by trying
//! an ordered table of anchored rules at each position. Whitespace runs are
//! consumed but never emitted; an unmatched position fails immediately with
//! the verbatim remainder of the input.

pub mod token;

pub use token::{Token, TokenKind};

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Lexing failure: no rule matched at the current position.
///
/// Carries the unconsumed remainder of the input starting at that position,
/// reported verbatim in diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    pub remainder: String,
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unrecognized token starting at '{}'", self.remainder)
    }
}

impl std::error::Error for LexError {}

/// One lexical rule: an anchored pattern and the kind it produces.
/// `kind` is `None` for matches that are consumed but not emitted.
struct Rule {
    pattern: Regex,
    kind: Option<TokenKind>,
}

/// Rule order is match precedence. Numbers are listed before identifiers;
/// identifiers cannot begin with a digit, so the overlap is currently
/// unreachable, but the ordering keeps the scanner deterministic if the
/// grammar grows.
static RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    let rule = |pattern: &str, kind: Option<TokenKind>| Rule {
        pattern: Regex::new(pattern).expect("lexer rule pattern is valid"),
        kind,
    };

    vec![
        rule(r"^\s+", None),
        rule(r"^[+\-*/^]", Some(TokenKind::Operator)),
        rule(r"^=", Some(TokenKind::Assignment)),
        rule(r"^;", Some(TokenKind::Delimiter)),
        rule(r"^\(", Some(TokenKind::LeftParen)),
        rule(r"^\)", Some(TokenKind::RightParen)),
        rule(r"^\d+(\.\d+)?", Some(TokenKind::Number)),
        rule(r"^[a-zA-Z_][a-zA-Z0-9_]*", Some(TokenKind::Var)),
    ]
});

/// Tokenize an expression into classified tokens.
///
/// The input is trimmed as a whole before scanning; interior whitespace is
/// skipped between tokens. Each position is consumed exactly once, left to
/// right, with no backtracking. A whitespace-only or empty input yields an
/// empty sequence, not an error.
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    let source = input.trim();
    let mut tokens = Vec::new();
    let mut position = 0;

    while position < source.len() {
        let rest = &source[position..];
        let matched = RULES
            .iter()
            .find_map(|rule| rule.pattern.find(rest).map(|m| (m.as_str(), rule.kind)));

        let Some((lexeme, kind)) = matched else {
            log::debug!("lexing failed at byte {position}");
            return Err(LexError {
                remainder: rest.to_string(),
            });
        };

        if let Some(kind) = kind {
            tokens.push(Token::new(kind, lexeme));
        }
        position += lexeme.len();
    }

    log::debug!("lexed {} tokens from {} bytes", tokens.len(), source.len());
    Ok(tokens)
}

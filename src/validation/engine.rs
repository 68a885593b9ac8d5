//! Validation Engine
//!
//! Structural checks over a token sequence, separated from lexing concerns.
//! The checks run in a fixed order and the first violation short-circuits
//! the rest; no error correction or partial recovery is attempted.

use std::fmt;

use crate::lexer::{Token, TokenKind};

/// A structural violation found in a token sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    NoTokens,
    MissingSemicolon,
    UnmatchedParenthesis,
    UnbalancedParenthesis,
    OperatorWithoutLeftOperand,
    MissingOperatorBetweenOperands,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            ValidationError::NoTokens => "No tokens found.",
            ValidationError::MissingSemicolon => "Missing semicolon at the end.",
            ValidationError::UnmatchedParenthesis => "Unmatched parenthesis",
            ValidationError::UnbalancedParenthesis => "Unbalanced parenthesis",
            ValidationError::OperatorWithoutLeftOperand => "Operator without left operand.",
            ValidationError::MissingOperatorBetweenOperands => {
                "Missing operator between operands."
            }
        };
        f.write_str(text)
    }
}

impl std::error::Error for ValidationError {}

/// Validate a token sequence against the structural rules.
///
/// Checks, in order: the sequence is non-empty, the last token is the `;`
/// terminator, parentheses are balanced, and operators/operands alternate
/// correctly. The first failing check determines the result.
pub fn validate(tokens: &[Token]) -> Result<(), ValidationError> {
    let last = tokens.last().ok_or(ValidationError::NoTokens)?;

    // Lexeme equality on purpose: any token spelled ";" terminates.
    if !last.is_terminator() {
        return Err(ValidationError::MissingSemicolon);
    }

    check_balanced_parentheses(tokens)?;
    check_operators_and_operands(tokens)?;

    log::debug!("validated {} tokens, no violations", tokens.len());
    Ok(())
}

/// Scan for parenthesis problems with a stack of open parens.
///
/// A premature `)` (empty stack) is "unmatched"; opens left over after the
/// full scan are "unbalanced". When an input has both problems, whichever
/// the scan reaches first wins.
fn check_balanced_parentheses(tokens: &[Token]) -> Result<(), ValidationError> {
    let mut open = Vec::new();

    for token in tokens {
        if token.is_open_paren() {
            open.push(token.lexeme.as_str());
        } else if token.is_close_paren() {
            if open.pop() != Some("(") {
                return Err(ValidationError::UnmatchedParenthesis);
            }
        }
    }

    if open.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::UnbalancedParenthesis)
    }
}

/// What the adjacency scan saw immediately before the current token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Previous {
    None,
    OperandLike,
    OperatorLike,
    Other,
}

/// Forbid two operators or two operands standing next to each other.
fn check_operators_and_operands(tokens: &[Token]) -> Result<(), ValidationError> {
    let mut previous = Previous::None;

    for token in tokens {
        previous = transition(previous, token.kind)?;
    }

    Ok(())
}

/// One step of the adjacency state machine.
///
/// `=` counts as operator-like on both sides: a leading `=`, or any
/// operator directly after one, has no left operand. Parentheses and the
/// terminator reset the chain, so an operand right after `)` is not
/// treated as following another operand.
fn transition(previous: Previous, kind: TokenKind) -> Result<Previous, ValidationError> {
    match kind {
        TokenKind::Operator | TokenKind::Assignment => match previous {
            Previous::None | Previous::OperatorLike => {
                Err(ValidationError::OperatorWithoutLeftOperand)
            }
            _ => Ok(Previous::OperatorLike),
        },
        TokenKind::Var | TokenKind::Number => match previous {
            Previous::OperandLike => Err(ValidationError::MissingOperatorBetweenOperands),
            _ => Ok(Previous::OperandLike),
        },
        TokenKind::Delimiter | TokenKind::LeftParen | TokenKind::RightParen => {
            Ok(Previous::Other)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;

    fn tokens(input: &str) -> Vec<Token> {
        tokenize(input).expect("test input lexes")
    }

    #[test]
    fn test_validate_simple_assignment() {
        assert_eq!(validate(&tokens("x = 5;")), Ok(()));
    }

    #[test]
    fn test_validate_full_expression() {
        assert_eq!(validate(&tokens("x = (5 + 3) * y_2 / 1.5;")), Ok(()));
    }

    #[test]
    fn test_empty_sequence() {
        assert_eq!(validate(&[]), Err(ValidationError::NoTokens));
    }

    #[test]
    fn test_missing_terminator() {
        assert_eq!(
            validate(&tokens("x = 5")),
            Err(ValidationError::MissingSemicolon)
        );
    }

    #[test]
    fn test_terminator_checked_before_parens() {
        // Both problems present; the termination check runs first.
        assert_eq!(
            validate(&tokens("x = (5 + 3")),
            Err(ValidationError::MissingSemicolon)
        );
    }

    #[test]
    fn test_unbalanced_open_paren() {
        assert_eq!(
            validate(&tokens("x = (5 + 3;")),
            Err(ValidationError::UnbalancedParenthesis)
        );
    }

    #[test]
    fn test_unmatched_close_paren() {
        assert_eq!(
            validate(&tokens("x = 5) + 3;")),
            Err(ValidationError::UnmatchedParenthesis)
        );
    }

    #[test]
    fn test_close_before_open_is_unmatched() {
        // One open and one close overall, but the close comes first.
        assert_eq!(
            validate(&tokens("x = )5 + 3(;")),
            Err(ValidationError::UnmatchedParenthesis)
        );
    }

    #[test]
    fn test_leading_operator() {
        assert_eq!(
            validate(&tokens("+ x = 5;")),
            Err(ValidationError::OperatorWithoutLeftOperand)
        );
    }

    #[test]
    fn test_operator_after_assignment() {
        assert_eq!(
            validate(&tokens("x = + 5;")),
            Err(ValidationError::OperatorWithoutLeftOperand)
        );
    }

    #[test]
    fn test_double_operator() {
        assert_eq!(
            validate(&tokens("x = 5 + * 3;")),
            Err(ValidationError::OperatorWithoutLeftOperand)
        );
    }

    #[test]
    fn test_double_assignment() {
        assert_eq!(
            validate(&tokens("x = = 5;")),
            Err(ValidationError::OperatorWithoutLeftOperand)
        );
    }

    #[test]
    fn test_adjacent_numbers() {
        assert_eq!(
            validate(&tokens("x = 5 3;")),
            Err(ValidationError::MissingOperatorBetweenOperands)
        );
    }

    #[test]
    fn test_adjacent_identifiers() {
        assert_eq!(
            validate(&tokens("x = a b;")),
            Err(ValidationError::MissingOperatorBetweenOperands)
        );
    }

    #[test]
    fn test_close_paren_resets_adjacency() {
        // An operand right after ")" follows a non-operand token, so the
        // adjacency rule does not fire; the parens here are balanced, so
        // the sequence passes as a whole.
        assert_eq!(validate(&tokens("x = (5) 3;")), Ok(()));
    }

    #[test]
    fn test_adjacency_inside_parens() {
        assert_eq!(
            validate(&tokens("x = (5 3);")),
            Err(ValidationError::MissingOperatorBetweenOperands)
        );
    }

    #[test]
    fn test_error_messages_are_distinct() {
        let errors = [
            ValidationError::NoTokens,
            ValidationError::MissingSemicolon,
            ValidationError::UnmatchedParenthesis,
            ValidationError::UnbalancedParenthesis,
            ValidationError::OperatorWithoutLeftOperand,
            ValidationError::MissingOperatorBetweenOperands,
        ];

        for (i, a) in errors.iter().enumerate() {
            for b in errors.iter().skip(i + 1) {
                assert_ne!(a.to_string(), b.to_string());
            }
        }
    }
}

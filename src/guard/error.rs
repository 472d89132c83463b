//! Guard lexing and parsing errors.

use crate::guard::token::TokenKind;
use thiserror::Error;

/// Result type alias for guard lexing and parsing.
pub type GuardResult<T> = Result<T, GuardError>;

/// Errors raised while turning a guard string into an expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuardError {
    /// A character that cannot start any token.
    #[error("unexpected character {ch:?} at offset {offset}")]
    Lex { ch: char, offset: usize },

    /// The token stream does not match the guard grammar.
    #[error("expected {}, found {found} at offset {offset}", join_kinds(.expected))]
    UnexpectedToken {
        expected: Vec<TokenKind>,
        found: TokenKind,
        offset: usize,
    },

    /// `not` and parentheses nested deeper than the parser accepts.
    #[error("guard nests deeper than {limit} levels at offset {offset}")]
    NestingTooDeep { limit: usize, offset: usize },
}

impl GuardError {
    /// Character offset the error points at.
    pub fn offset(&self) -> usize {
        match self {
            Self::Lex { offset, .. }
            | Self::UnexpectedToken { offset, .. }
            | Self::NestingTooDeep { offset, .. } => *offset,
        }
    }
}

fn join_kinds(kinds: &[TokenKind]) -> String {
    match kinds {
        [] => "nothing".to_string(),
        [only] => only.to_string(),
        [init @ .., last] => {
            let init: Vec<String> = init.iter().map(ToString::to_string).collect();
            format!("{} or {}", init.join(", "), last)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lex_error_message_names_character() {
        let err = GuardError::Lex { ch: '$', offset: 2 };
        assert_eq!(err.to_string(), "unexpected character '$' at offset 2");
        assert_eq!(err.offset(), 2);
    }

    #[test]
    fn unexpected_token_message_lists_alternatives() {
        let err = GuardError::UnexpectedToken {
            expected: vec![TokenKind::Name, TokenKind::Not, TokenKind::LParen],
            found: TokenKind::End,
            offset: 5,
        };
        assert_eq!(
            err.to_string(),
            "expected NAME, NOT or LPAREN, found END at offset 5"
        );
    }

    #[test]
    fn unexpected_token_message_with_single_alternative() {
        let err = GuardError::UnexpectedToken {
            expected: vec![TokenKind::RParen],
            found: TokenKind::End,
            offset: 2,
        };
        assert_eq!(err.to_string(), "expected RPAREN, found END at offset 2");
    }

    #[test]
    fn nesting_message_names_limit() {
        let err = GuardError::NestingTooDeep { limit: 256, offset: 257 };
        assert_eq!(
            err.to_string(),
            "guard nests deeper than 256 levels at offset 257"
        );
        assert_eq!(err.offset(), 257);
    }
}

//! Tokens produced by the guard lexer.

use std::fmt;

/// Kind of a guard token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Name,
    And,
    Or,
    Not,
    LParen,
    RParen,
    End,
}

impl TokenKind {
    /// Look up a complete identifier run in the keyword table.
    ///
    /// Returns `None` for anything that is not exactly `and`, `or` or `not`,
    /// so `andy` or `organization` stay plain names.
    pub fn keyword(text: &str) -> Option<Self> {
        match text {
            "and" => Some(Self::And),
            "or" => Some(Self::Or),
            "not" => Some(Self::Not),
            _ => None,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Name => "NAME",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Not => "NOT",
            Self::LParen => "LPAREN",
            Self::RParen => "RPAREN",
            Self::End => "END",
        };
        f.write_str(text)
    }
}

/// A single lexed token.
///
/// `position` is the character offset at which the token ends. Only `Name`
/// tokens carry text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    position: usize,
    kind: TokenKind,
    name: Option<String>,
}

impl Token {
    /// Create a `Name` token.
    pub fn name(position: usize, name: impl Into<String>) -> Self {
        Self {
            position,
            kind: TokenKind::Name,
            name: Some(name.into()),
        }
    }

    /// Create a token that carries no text. `kind` must not be `Name`.
    pub fn punct(position: usize, kind: TokenKind) -> Self {
        debug_assert!(kind != TokenKind::Name, "name tokens need text");
        Self {
            position,
            kind,
            name: None,
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Identifier text, present only for `Name` tokens.
    pub fn text(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{}:{}", self.position, name),
            None => write!(f, "{}:{}", self.position, self.kind),
        }
    }
}

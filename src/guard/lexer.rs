//! Lexer for guard strings.
//!
//! Identifiers are read as a maximal run of ASCII letters and digits before
//! the keyword table is consulted, so a name that merely starts with `and`,
//! `or` or `not` is never split into a keyword and a remainder.

use crate::guard::error::{GuardError, GuardResult};
use crate::guard::token::{Token, TokenKind};

/// Converts a guard string into tokens, one at a time.
///
/// # Example
///
/// ```rust
/// use statechart::guard::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::new("andy or not b");
/// let first = lexer.next_token().unwrap();
/// assert_eq!(first.kind(), TokenKind::Name);
/// assert_eq!(first.text(), Some("andy"));
/// assert_eq!(lexer.next_token().unwrap().kind(), TokenKind::Or);
/// ```
#[derive(Debug, Clone)]
pub struct Lexer {
    chars: Vec<char>,
    pos: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Self {
            chars: input.chars().collect(),
            pos: 0,
        }
    }

    /// Character offset of the next unread character.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Read the next token.
    ///
    /// Once the input is exhausted every call returns `End` at the same
    /// position.
    pub fn next_token(&mut self) -> GuardResult<Token> {
        self.skip_whitespace();

        let Some(&ch) = self.chars.get(self.pos) else {
            return Ok(Token::punct(self.pos, TokenKind::End));
        };

        match ch {
            '(' => {
                self.pos += 1;
                Ok(Token::punct(self.pos, TokenKind::LParen))
            }
            ')' => {
                self.pos += 1;
                Ok(Token::punct(self.pos, TokenKind::RParen))
            }
            c if is_identifier_char(c) => Ok(self.identifier()),
            other => Err(GuardError::Lex {
                ch: other,
                offset: self.pos,
            }),
        }
    }

    fn skip_whitespace(&mut self) {
        while self
            .chars
            .get(self.pos)
            .is_some_and(|c| c.is_whitespace())
        {
            self.pos += 1;
        }
    }

    fn identifier(&mut self) -> Token {
        let start = self.pos;
        while self
            .chars
            .get(self.pos)
            .is_some_and(|&c| is_identifier_char(c))
        {
            self.pos += 1;
        }
        let text: String = self.chars[start..self.pos].iter().collect();

        match TokenKind::keyword(&text) {
            Some(kind) => Token::punct(self.pos, kind),
            None => Token::name(self.pos, text),
        }
    }
}

fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

/// Lex a whole guard string, ending with exactly one `End` token.
pub fn tokenize(input: &str) -> GuardResult<Vec<Token>> {
    let mut lexer = Lexer::new(input);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token()?;
        let done = token.kind() == TokenKind::End;
        tokens.push(token);
        if done {
            return Ok(tokens);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<TokenKind> {
        tokenize(input)
            .unwrap()
            .into_iter()
            .map(|t| t.kind())
            .collect()
    }

    #[test]
    fn lexes_operators_and_parentheses() {
        assert_eq!(
            kinds("not (x and y) or z"),
            vec![
                TokenKind::Not,
                TokenKind::LParen,
                TokenKind::Name,
                TokenKind::And,
                TokenKind::Name,
                TokenKind::RParen,
                TokenKind::Or,
                TokenKind::Name,
                TokenKind::End,
            ]
        );
    }

    #[test]
    fn positions_mark_token_ends() {
        let tokens = tokenize("ab and (c)").unwrap();
        let positions: Vec<usize> = tokens.iter().map(|t| t.position()).collect();
        assert_eq!(positions, vec![2, 6, 8, 9, 10, 10]);
    }

    #[test]
    fn keyword_prefixed_identifiers_are_names() {
        for input in ["andy", "organization", "another", "notify", "a", "o", "n", "or1"] {
            let tokens = tokenize(input).unwrap();
            assert_eq!(tokens.len(), 2, "{input}");
            assert_eq!(tokens[0].kind(), TokenKind::Name, "{input}");
            assert_eq!(tokens[0].text(), Some(input));
        }
    }

    #[test]
    fn keywords_are_case_sensitive() {
        assert_eq!(kinds("AND"), vec![TokenKind::Name, TokenKind::End]);
    }

    #[test]
    fn identifiers_may_start_with_digits() {
        let tokens = tokenize("2fast").unwrap();
        assert_eq!(tokens[0].text(), Some("2fast"));
    }

    #[test]
    fn no_whitespace_needed_around_parentheses() {
        assert_eq!(
            kinds("(x)and(y)"),
            vec![
                TokenKind::LParen,
                TokenKind::Name,
                TokenKind::RParen,
                TokenKind::And,
                TokenKind::LParen,
                TokenKind::Name,
                TokenKind::RParen,
                TokenKind::End,
            ]
        );
    }

    #[test]
    fn empty_and_blank_input_yield_only_end() {
        assert_eq!(kinds(""), vec![TokenKind::End]);
        assert_eq!(kinds(" \t\n"), vec![TokenKind::End]);
    }

    #[test]
    fn end_is_idempotent() {
        let mut lexer = Lexer::new("x ");
        assert_eq!(lexer.next_token().unwrap().kind(), TokenKind::Name);
        let first_end = lexer.next_token().unwrap();
        let second_end = lexer.next_token().unwrap();
        assert_eq!(first_end.kind(), TokenKind::End);
        assert_eq!(first_end, second_end);
        assert_eq!(lexer.position(), 2);
    }

    #[test]
    fn invalid_character_reports_offset() {
        assert_eq!(
            tokenize("x $"),
            Err(GuardError::Lex { ch: '$', offset: 2 })
        );
    }

    #[test]
    fn offsets_count_characters_not_bytes() {
        assert_eq!(
            tokenize("x é"),
            Err(GuardError::Lex { ch: 'é', offset: 2 })
        );
        assert_eq!(
            tokenize("é"),
            Err(GuardError::Lex { ch: 'é', offset: 0 })
        );
    }

    #[test]
    fn underscore_is_not_an_identifier_character() {
        assert_eq!(
            tokenize("is_open"),
            Err(GuardError::Lex { ch: '_', offset: 2 })
        );
    }
}

//! Recursive-descent parser for guard strings.
//!
//! ```text
//! expr   := term (OR term)*
//! term   := factor (AND factor)*
//! factor := NAME | NOT factor | LPAREN expr RPAREN
//! ```

use crate::guard::error::{GuardError, GuardResult};
use crate::guard::expr::GuardExpr;
use crate::guard::lexer::Lexer;
use crate::guard::token::{Token, TokenKind};
use tracing::trace;

/// Deepest run of nested `not` and parentheses a guard may contain.
pub const MAX_NESTING: usize = 256;

/// Parser for a single guard string.
///
/// A parser is consumed by [`Parser::parse`]; build a fresh one per string.
pub struct Parser {
    lexer: Lexer,
    current: Token,
    depth: usize,
}

impl Parser {
    /// Create a parser positioned on the first token of `input`.
    pub fn new(input: &str) -> GuardResult<Self> {
        let mut lexer = Lexer::new(input);
        let current = lexer.next_token()?;
        Ok(Self {
            lexer,
            current,
            depth: 0,
        })
    }

    /// Parse the whole input as one expression.
    pub fn parse(mut self) -> GuardResult<GuardExpr> {
        let expr = self.expr()?;
        self.expect(TokenKind::End)?;
        Ok(expr)
    }

    fn advance(&mut self) -> GuardResult<()> {
        self.current = self.lexer.next_token()?;
        Ok(())
    }

    fn expect(&mut self, kind: TokenKind) -> GuardResult<()> {
        if self.current.kind() != kind {
            return Err(self.unexpected(vec![kind]));
        }
        if kind != TokenKind::End {
            self.advance()?;
        }
        Ok(())
    }

    fn unexpected(&self, expected: Vec<TokenKind>) -> GuardError {
        GuardError::UnexpectedToken {
            expected,
            found: self.current.kind(),
            offset: self.current.position(),
        }
    }

    /// Run `f` one nesting level deeper, failing past [`MAX_NESTING`].
    fn nested<T>(&mut self, f: impl FnOnce(&mut Self) -> GuardResult<T>) -> GuardResult<T> {
        if self.depth >= MAX_NESTING {
            return Err(GuardError::NestingTooDeep {
                limit: MAX_NESTING,
                offset: self.current.position(),
            });
        }
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    fn expr(&mut self) -> GuardResult<GuardExpr> {
        let mut operands = vec![self.term()?];
        while self.current.kind() == TokenKind::Or {
            self.advance()?;
            operands.push(self.term()?);
        }
        Ok(collapse(operands, GuardExpr::Or))
    }

    fn term(&mut self) -> GuardResult<GuardExpr> {
        let mut operands = vec![self.factor()?];
        while self.current.kind() == TokenKind::And {
            self.advance()?;
            operands.push(self.factor()?);
        }
        Ok(collapse(operands, GuardExpr::And))
    }

    fn factor(&mut self) -> GuardResult<GuardExpr> {
        match self.current.kind() {
            TokenKind::Name => {
                let name = self.current.text().unwrap_or_default().to_string();
                self.advance()?;
                Ok(GuardExpr::Condition(name))
            }
            TokenKind::Not => self.nested(|p| {
                p.advance()?;
                Ok(GuardExpr::not(p.factor()?))
            }),
            TokenKind::LParen => self.nested(|p| {
                p.advance()?;
                let inner = p.expr()?;
                p.expect(TokenKind::RParen)?;
                Ok(GuardExpr::parenthesized(inner))
            }),
            _ => Err(self.unexpected(vec![
                TokenKind::Name,
                TokenKind::Not,
                TokenKind::LParen,
            ])),
        }
    }
}

fn collapse(mut operands: Vec<GuardExpr>, composite: fn(Vec<GuardExpr>) -> GuardExpr) -> GuardExpr {
    if operands.len() == 1 {
        if let Some(single) = operands.pop() {
            return single;
        }
    }
    composite(operands)
}

/// Parse a guard string into an expression.
///
/// # Example
///
/// ```rust
/// use statechart::guard::{parse_guard, GuardExpr};
///
/// let expr = parse_guard("x or y and z").unwrap();
/// assert_eq!(
///     expr,
///     GuardExpr::Or(vec![
///         GuardExpr::condition("x"),
///         GuardExpr::And(vec![GuardExpr::condition("y"), GuardExpr::condition("z")]),
///     ])
/// );
/// ```
pub fn parse_guard(input: &str) -> GuardResult<GuardExpr> {
    let expr = Parser::new(input)?.parse()?;
    trace!(guard = input, "guard_parsed");
    Ok(expr)
}

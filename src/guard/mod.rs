//! Guard expression sublanguage.
//!
//! Guards are boolean expressions over named conditions, written as strings on
//! transitions:
//!
//! ```text
//! expr   ::= term ("or" term)*
//! term   ::= factor ("and" factor)*
//! factor ::= NAME | "not" factor | "(" expr ")"
//! NAME   ::= [A-Za-z0-9]+   (except "and", "or", "not")
//! ```
//!
//! The language has no values, literals or comparisons; conditions are opaque
//! names evaluated elsewhere. Parsing is pure and every call builds a fresh
//! tree.

mod error;
mod expr;
mod lexer;
mod parser;
mod token;

pub use error::{GuardError, GuardResult};
pub use expr::GuardExpr;
pub use lexer::{tokenize, Lexer};
pub use parser::{parse_guard, Parser, MAX_NESTING};
pub use token::{Token, TokenKind};

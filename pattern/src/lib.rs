mod lexer;
mod parser;

use parser::Parser;
use std::str::FromStr;

pub use lexer::TokenError;
pub use lexer::TokenKind;
pub use parser::SyntaxError;

/// A parsed pattern in the flattened notation: literal characters,
/// `|` alternation, postfix `*` and parenthesized grouping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    pub expression: Expression,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    Term(Term),
    Alternation(Term, Box<Expression>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Term {
    /// Derives only the empty string, as in `a|`, `(|a)` or `()`.
    Empty,
    Factor(Factor),
    Concatenation(Factor, Box<Term>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Factor {
    Atom(Atom),
    ZeroOrMore(Atom),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Atom {
    Char(char),
    Parentheses(Box<Expression>),
}

impl FromStr for Pattern {
    type Err = SyntaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Parser::new(s).parse()
    }
}

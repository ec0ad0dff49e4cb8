use crate::Symbol;
use std::fmt;

/// A single `symbol -> body` rule. The body may be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Production {
    pub symbol: Symbol,
    pub body: String,
}

impl Production {
    pub fn new(symbol: Symbol, body: impl Into<String>) -> Self {
        Self {
            symbol,
            body: body.into(),
        }
    }
}

impl fmt::Display for Production {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.symbol, self.body)
    }
}

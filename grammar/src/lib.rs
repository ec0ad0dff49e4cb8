//! Derivation of a linear grammar from a restricted regular-expression
//! notation: concatenation, infix `+` for alternatives, postfix `*` and
//! parenthesized grouping.
//!
//! The expression is rewritten in two passes. OR groups are replaced with
//! fresh non-terminals until no `+` remains, then starred groups are replaced
//! with self-recursive non-terminals. The rules emitted by both passes are
//! assembled into a [`Grammar`] whose start rule derives what is left of the
//! expression.

mod assembly;
mod production;
mod reduce;
mod source;
mod symbol;

pub use assembly::Grammar;
pub use assembly::GrammarFormat;
pub use assembly::LinearGrammar;
pub use assembly::assemble;
pub use production::Production;
pub use reduce::DedupScope;
pub use reduce::KLEENE_STAR;
pub use reduce::KleeneSymbols;
pub use reduce::OR_OPERATOR;
pub use reduce::ReduceError;
pub use reduce::Reduction;
pub use reduce::reduce_kleene;
pub use reduce::reduce_or;
pub use source::Source;
pub use source::SourceError;
pub use symbol::Symbol;
pub use symbol::SymbolGenerator;
use thiserror::Error;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DerivationOptions {
    pub dedup: DedupScope,
    pub kleene: KleeneSymbols,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeriveError {
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error(transparent)]
    Reduce(#[from] ReduceError),
}

/// Derives the grammar for input `content`: a terminal line, a newline, then
/// the expression.
pub fn derive(content: &str, options: DerivationOptions) -> Result<Grammar, DeriveError> {
    let source = Source::parse(content)?;
    let or = reduce_or(source.expression, SymbolGenerator::new(), options.dedup)?;
    let kleene = reduce_kleene(&or.expression, or.symbols.clone(), options.kleene);
    Ok(assemble(source.terminals, or, kleene))
}

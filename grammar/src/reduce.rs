use crate::Production;
use crate::SymbolGenerator;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use std::collections::HashSet;
use thiserror::Error;

/// Infix operator separating alternatives.
pub const OR_OPERATOR: char = '+';
/// Postfix operator for zero or more repetitions.
pub const KLEENE_STAR: char = '*';

/// A run of atoms joined by `+`, optionally wrapped in parentheses, or a single
/// parenthesized run directly followed by `+`.
static OR_GROUP: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\(?([a-zA-Z_0-9](?:\+?[a-zA-Z_0-9])+)\)?|\(([a-zA-Z_0-9]+)\)\+")
        .expect("OR group pattern is valid")
});

/// A bare or parenthesized alphanumeric run directly followed by `*`.
static KLEENE_GROUP: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\(?([a-zA-Z_0-9]+\)?)\*").expect("Kleene group pattern is valid")
});

/// How far duplicate detection reaches while reducing OR groups.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DedupScope {
    /// Only matches repeated within a single scan are skipped.
    #[default]
    Scan,
    /// A group seen in any earlier scan is replaced by the symbol it was given.
    Global,
}

/// When the symbol counter moves during Kleene reduction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KleeneSymbols {
    /// Every group found in the scan shares one symbol; the counter moves once
    /// after the scan.
    #[default]
    PerScan,
    /// Each distinct group gets its own symbol.
    PerMatch,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReduceError {
    #[error("no OR group can be reduced in '{0}'")]
    Stalled(String),
}

/// Result of one reduction phase: the rewritten expression, the symbol counter
/// after the phase and the productions emitted, in discovery order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reduction {
    pub expression: String,
    pub symbols: SymbolGenerator,
    pub rules: Vec<Production>,
}

/// Replaces every OR group with a fresh non-terminal until no `+` is left.
///
/// Each scan runs over a snapshot of the expression taken when the scan
/// starts, while replacements are applied to the live expression. A scan that
/// changes nothing while a `+` remains is reported as [`ReduceError::Stalled`].
pub fn reduce_or(
    expression: &str,
    mut symbols: SymbolGenerator,
    scope: DedupScope,
) -> Result<Reduction, ReduceError> {
    let mut expression = expression.to_string();
    let mut rules = Vec::new();
    let mut known: HashMap<String, String> = HashMap::new();

    while expression.contains(OR_OPERATOR) {
        let snapshot = expression.clone();
        let mut seen = HashSet::new();

        for group in OR_GROUP.find_iter(&snapshot).map(|m| m.as_str()) {
            if symbols.is_allocated(group) || !seen.insert(group) {
                continue;
            }
            if let Some(symbol) = known.get(group) {
                expression = expression.replace(group, symbol);
                continue;
            }

            let symbol = symbols.allocate();
            rules.extend(
                alternatives(group)
                    .into_iter()
                    .map(|alternative| Production::new(symbol.clone(), alternative)),
            );
            expression = expression.replace(group, symbol.as_str());
            if scope == DedupScope::Global {
                known.insert(group.to_string(), symbol.to_string());
            }
        }

        if expression == snapshot {
            return Err(ReduceError::Stalled(expression));
        }
    }

    Ok(Reduction {
        expression,
        symbols,
        rules,
    })
}

/// Replaces every starred group with a self-recursive non-terminal, in a
/// single scan.
pub fn reduce_kleene(
    expression: &str,
    mut symbols: SymbolGenerator,
    policy: KleeneSymbols,
) -> Reduction {
    let snapshot = expression.to_string();
    let mut expression = expression.to_string();
    let mut rules = Vec::new();
    let mut seen = HashSet::new();

    for group in KLEENE_GROUP.find_iter(&snapshot).map(|m| m.as_str()) {
        if !seen.insert(group) {
            continue;
        }

        let symbol = symbols.peek();
        let body = strip_parens(group);
        let body = body.split(KLEENE_STAR).next().unwrap_or_default();
        rules.push(Production::new(symbol.clone(), format!("{body}{symbol}")));
        rules.push(Production::new(symbol.clone(), ""));
        expression = expression.replace(group, symbol.as_str());

        if policy == KleeneSymbols::PerMatch {
            symbols.advance();
        }
    }

    if policy == KleeneSymbols::PerScan {
        symbols.advance();
    }

    Reduction {
        expression,
        symbols,
        rules,
    }
}

pub(crate) fn strip_parens(text: &str) -> String {
    text.replace(['(', ')'], "")
}

/// The pieces of an OR group, parentheses removed. Empty trailing pieces left
/// by a `(x)+` group are dropped.
fn alternatives(group: &str) -> Vec<String> {
    let mut pieces: Vec<String> = strip_parens(group)
        .split(OR_OPERATOR)
        .map(str::to_string)
        .collect();
    while pieces.last().is_some_and(|piece| piece.is_empty()) {
        pieces.pop();
    }
    pieces
}

use crate::Production;
use crate::Reduction;
use crate::Symbol;
use crate::reduce::strip_parens;

/// A derived linear grammar. Built once by [`assemble`] and never changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grammar {
    /// Every symbol heading at least one production, in allocation order. The
    /// start symbol is not included.
    pub non_terminals: Vec<Symbol>,
    pub terminals: String,
    pub start: Symbol,
    /// Right-hand side of the start rule.
    pub expression: String,
    pub or_rules: Vec<Production>,
    pub kleene_rules: Vec<Production>,
}

pub fn assemble(terminals: &str, or: Reduction, kleene: Reduction) -> Grammar {
    let mut non_terminals: Vec<Symbol> = Vec::new();
    for rule in or.rules.iter().chain(&kleene.rules) {
        if !non_terminals.contains(&rule.symbol) {
            non_terminals.push(rule.symbol.clone());
        }
    }

    Grammar {
        non_terminals,
        terminals: terminals.to_string(),
        start: Symbol::start(),
        expression: kleene.expression,
        or_rules: or.rules,
        kleene_rules: kleene.rules,
    }
}

/// A textual shape a [`Grammar`] can be written in.
pub trait GrammarFormat {
    /// File extension of the written artifact, dot included.
    fn extension(&self) -> &'static str;

    fn render(&self, grammar: &Grammar) -> String;
}

/// One rule per line, preceded by the symbol declarations:
///
/// ```text
/// S,A
/// t1,t2
/// S
/// S -> A
/// A -> a
/// A -> b
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearGrammar;

impl GrammarFormat for LinearGrammar {
    fn extension(&self) -> &'static str {
        ".gld"
    }

    fn render(&self, grammar: &Grammar) -> String {
        let declarations: Vec<&str> = std::iter::once(&grammar.start)
            .chain(&grammar.non_terminals)
            .map(Symbol::as_str)
            .collect();

        let mut lines = vec![
            declarations.join(","),
            grammar.terminals.clone(),
            grammar.start.to_string(),
            format!("{} -> {}", grammar.start, grammar.expression),
        ];
        lines.extend(
            grammar
                .or_rules
                .iter()
                .chain(&grammar.kleene_rules)
                .map(ToString::to_string),
        );

        strip_parens(&lines.join("\n"))
    }
}

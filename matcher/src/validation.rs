use crate::PartialMatch;
use pattern::Atom;
use pattern::Expression;
use pattern::Factor;
use pattern::Pattern;
use pattern::Term;
use std::collections::HashSet;

/// Extends a partial match by every way a pattern node can consume the input
/// following it.
pub trait Validation {
    fn validate<'a>(&self, old: &PartialMatch<'a>) -> HashSet<PartialMatch<'a>>;

    fn validate_all<'a>(&self, matches: HashSet<PartialMatch<'a>>) -> HashSet<PartialMatch<'a>> {
        matches
            .iter()
            .flat_map(|old_match| self.validate(old_match))
            .collect()
    }
}

impl Validation for Pattern {
    fn validate<'a>(&self, initial: &PartialMatch<'a>) -> HashSet<PartialMatch<'a>> {
        self.expression.validate(initial)
    }
}

impl Validation for Expression {
    fn validate<'a>(&self, old: &PartialMatch<'a>) -> HashSet<PartialMatch<'a>> {
        match self {
            Expression::Term(term) => term.validate(old),
            Expression::Alternation(term, expr) => {
                let mut new = term.validate(old);
                new.extend(expr.validate(old));
                new
            }
        }
    }
}

impl Validation for Term {
    fn validate<'a>(&self, old: &PartialMatch<'a>) -> HashSet<PartialMatch<'a>> {
        match self {
            Term::Empty => HashSet::from([old.clone()]),
            Term::Factor(factor) => factor.validate(old),
            Term::Concatenation(factor, term) => term.validate_all(factor.validate(old)),
        }
    }
}

impl Validation for Factor {
    fn validate<'a>(&self, old: &PartialMatch<'a>) -> HashSet<PartialMatch<'a>> {
        match self {
            Factor::Atom(atom) => atom.validate(old),
            Factor::ZeroOrMore(atom) => {
                let mut new = HashSet::from([old.clone()]);
                let mut current_input = HashSet::from([old.clone()]);
                while !current_input.is_empty() {
                    // Matches seen before cannot lead anywhere new, and an atom
                    // deriving the empty string would otherwise loop forever.
                    current_input = atom
                        .validate_all(current_input)
                        .into_iter()
                        .filter(|m| !new.contains(m))
                        .collect();
                    new.extend(current_input.clone());
                }
                new
            }
        }
    }
}

impl Validation for Atom {
    fn validate<'a>(&self, old: &PartialMatch<'a>) -> HashSet<PartialMatch<'a>> {
        let mut new = HashSet::new();
        match self {
            Atom::Char(c) => {
                if old.original.chars().nth(old.span.end) == Some(*c) {
                    new.insert(old.clone().advance_end_by(1));
                }
            }
            Atom::Parentheses(expr) => {
                new.extend(expr.validate(old));
            }
        }
        new
    }
}

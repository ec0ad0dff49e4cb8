mod validation;

use pattern::Pattern;
use std::collections::HashSet;
use std::str::FromStr;
use validation::Validation;

pub use pattern::SyntaxError;

/// The operator the source notation uses for alternation.
pub const OR_OPERATOR: char = '+';
/// The alternation operator understood by [`Pattern`].
pub const ALTERNATION: char = '|';

/// Rewrites every OR operator as a pattern alternation, character for
/// character. Grouping is left untouched.
pub fn flatten(expression: &str) -> String {
    expression.replace(OR_OPERATOR, &ALTERNATION.to_string())
}

/// Whether `candidate` is fully matched by the notation `expression`.
pub fn accepts(expression: &str, candidate: &str) -> Result<bool, SyntaxError> {
    let pattern = Pattern::from_str(&flatten(expression))?;
    Ok(Matcher::new(&pattern, candidate).is_full_match())
}

#[derive(Clone, Debug, Hash, Eq, PartialEq)]
pub struct PartialMatch<'s> {
    pub original: &'s str,
    pub span: SourceSpan,
}

impl<'s> PartialMatch<'s> {
    pub fn new(original: &'s str) -> Self {
        Self {
            original,
            span: Default::default(),
        }
    }

    pub fn advance_end_by(self, n: usize) -> Self {
        debug_assert!(self.span.end + n <= self.original.chars().count());
        Self {
            original: self.original,
            span: self.span.advance_end_by(n),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matcher<'p, 's> {
    pattern: &'p Pattern,
    input: &'s str,
}

impl<'p, 's> Matcher<'p, 's> {
    pub fn new(pattern: &'p Pattern, input: &'s str) -> Self {
        Self { pattern, input }
    }

    /// Every prefix of the input the pattern can derive, as partial matches
    /// anchored at the first character.
    fn prefixes(&self) -> HashSet<PartialMatch<'s>> {
        self.pattern.validate(&PartialMatch::new(self.input))
    }

    pub fn is_full_match(&self) -> bool {
        let char_count = self.input.chars().count();
        self.prefixes().iter().any(|m| m.span.end == char_count)
    }
}

/// A span in the source string, represented as a range of character indices (not byte indices).
#[derive(Clone, Debug, Default, Hash, Eq, PartialEq)]
pub struct SourceSpan {
    pub start: usize,
    pub end: usize,
}

impl SourceSpan {
    pub fn advance_end_by(&self, n: usize) -> Self {
        Self {
            start: self.start,
            end: self.end + n,
        }
    }
}

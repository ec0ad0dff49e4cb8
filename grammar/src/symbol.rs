use std::fmt;

/// Letters available for non-terminals. `S` is left out, it names the start rule.
const ALPHABET: [char; 25] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'T',
    'U', 'V', 'W', 'X', 'Y', 'Z',
];

const START: &str = "S";

/// The name of a non-terminal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(String);

impl Symbol {
    pub fn start() -> Self {
        Symbol(START.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Hands out non-terminal names in a fixed order: `A`..`Z` first, then the
/// same letters with a round number appended (`A1`, `B1`, ..., `Z1`, `A2`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolGenerator {
    next: usize,
}

impl SymbolGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times the generator has been advanced.
    pub fn position(&self) -> usize {
        self.next
    }

    /// The symbol the next allocation hands out.
    pub fn peek(&self) -> Symbol {
        Symbol(name_at(self.next))
    }

    /// Whether `name` is one of the symbols handed out so far.
    pub fn is_allocated(&self, name: &str) -> bool {
        (0..self.next).any(|index| name_at(index) == name)
    }

    pub fn advance(&mut self) {
        self.next += 1;
    }

    /// Returns the current symbol and moves past it.
    pub fn allocate(&mut self) -> Symbol {
        let symbol = self.peek();
        self.advance();
        symbol
    }
}

fn name_at(index: usize) -> String {
    let letter = ALPHABET[index % ALPHABET.len()];
    match index / ALPHABET.len() {
        0 => letter.to_string(),
        round => format!("{letter}{round}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0, "A"; "first")]
    #[test_case(17, "R"; "before start symbol")]
    #[test_case(18, "T"; "skips start symbol")]
    #[test_case(24, "Z"; "last letter")]
    #[test_case(25, "A1"; "second round")]
    #[test_case(51, "B2"; "third round")]
    #[test_case(52, "C2"; "third round second letter")]
    fn test_symbol_at(position: usize, expected: &str) {
        let mut symbols = SymbolGenerator::new();
        for _ in 0..position {
            symbols.advance();
        }
        assert_eq!(symbols.peek().as_str(), expected);
    }

    #[test]
    fn test_never_produces_start_symbol() {
        let mut symbols = SymbolGenerator::new();
        for _ in 0..200 {
            assert_ne!(symbols.allocate(), Symbol::start());
        }
        assert_eq!(symbols.position(), 200);
    }

    #[test]
    fn test_allocate_is_distinct() {
        let mut symbols = SymbolGenerator::new();
        let allocated: std::collections::HashSet<_> =
            (0..100).map(|_| symbols.allocate()).collect();
        assert_eq!(allocated.len(), 100);
    }

    #[test]
    fn test_is_allocated() {
        let mut symbols = SymbolGenerator::new();
        symbols.allocate();
        assert!(symbols.is_allocated("A"));
        assert!(!symbols.is_allocated("B"));
        assert!(!symbols.is_allocated("S"));
    }
}

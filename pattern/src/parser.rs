use crate::Atom;
use crate::Expression;
use crate::Factor;
use crate::Pattern;
use crate::Term;
use crate::lexer::Lexer;
use crate::lexer::TokenError;
use crate::lexer::TokenKind;
use thiserror::Error;

#[derive(Debug, Clone)]
pub(crate) struct Parser<'s> {
    lexer: Lexer<'s>,
}

#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum SyntaxError {
    #[error("Invalid token {0:?}")]
    InvalidToken(TokenError),
    #[error("Expected {0} got {1:?}")]
    Unexpected(String, TokenKind),
    #[error("Unexpected EOF")]
    UnexpectedEOF,
    #[error("Invalid atom start")]
    InvalidAtomStart,
    #[error("Unexpected {1:?} at byte {0}")]
    TrailingInput(usize, TokenKind),
}

impl Parser<'_> {
    pub fn new(input: &str) -> Parser<'_> {
        Parser {
            lexer: Lexer::new(input),
        }
    }

    pub fn parse(&mut self) -> Result<Pattern, SyntaxError> {
        let expression = self.parse_expression()?;
        match self.lexer.next() {
            None => Ok(Pattern { expression }),
            Some(Ok(token)) => Err(SyntaxError::TrailingInput(token.offset, token.kind)),
            Some(Err(token_error)) => Err(SyntaxError::InvalidToken(token_error)),
        }
    }

    fn parse_atom(&mut self) -> Result<Atom, SyntaxError> {
        match self.lexer.peek() {
            Some(Ok(token)) => match token.kind {
                TokenKind::Char(c) => {
                    self.lexer.next();
                    Ok(Atom::Char(c))
                }
                TokenKind::LeftParen => {
                    self.lexer.next();
                    let expr = self.parse_expression()?;
                    match self.lexer.next() {
                        Some(Ok(token)) => {
                            if token.kind == TokenKind::RightParen {
                                Ok(Atom::Parentheses(Box::new(expr)))
                            } else {
                                Err(SyntaxError::Unexpected("')'".to_string(), token.kind))
                            }
                        }
                        None => Err(SyntaxError::UnexpectedEOF),
                        Some(Err(token_error)) => Err(SyntaxError::InvalidToken(token_error)),
                    }
                }
                _ => Err(SyntaxError::InvalidAtomStart),
            },
            None => Err(SyntaxError::UnexpectedEOF),
            Some(Err(token_error)) => Err(SyntaxError::InvalidToken(token_error.clone())),
        }
    }

    fn parse_factor(&mut self) -> Result<Factor, SyntaxError> {
        let atom = self.parse_atom()?;
        match self.lexer.peek() {
            Some(Ok(token)) if token.kind == TokenKind::Star => {
                self.lexer.next();
                Ok(Factor::ZeroOrMore(atom))
            }
            Some(Err(token_error)) => Err(SyntaxError::InvalidToken(token_error.clone())),
            _ => Ok(Factor::Atom(atom)),
        }
    }

    fn parse_term(&mut self) -> Result<Term, SyntaxError> {
        match self.lexer.peek() {
            None => return Ok(Term::Empty),
            Some(Ok(token)) if matches!(token.kind, TokenKind::Pipe | TokenKind::RightParen) => {
                return Ok(Term::Empty);
            }
            _ => {}
        }
        let factor = self.parse_factor()?;
        match self.lexer.peek() {
            Some(Ok(token)) => match token.kind {
                TokenKind::Char(_) | TokenKind::LeftParen => {
                    let term = self.parse_term()?;
                    Ok(Term::Concatenation(factor, Box::new(term)))
                }
                _ => Ok(Term::Factor(factor)),
            },
            _ => Ok(Term::Factor(factor)),
        }
    }

    pub(crate) fn parse_expression(&mut self) -> Result<Expression, SyntaxError> {
        let term = self.parse_term()?;
        if let Some(Ok(token)) = self.lexer.peek() {
            if token.kind == TokenKind::Pipe {
                self.lexer.next();
                let expr = self.parse_expression()?;
                return Ok(Expression::Alternation(term, Box::new(expr)));
            }
        }
        Ok(Expression::Term(term))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn char_factor(c: char) -> Factor {
        Factor::Atom(Atom::Char(c))
    }

    #[test]
    fn test_parse_atom() {
        let mut parser = Parser::new("a");
        assert_eq!(parser.parse_atom(), Ok(Atom::Char('a')));

        let mut parser = Parser::new("(a)");
        assert_eq!(
            parser.parse_atom(),
            Ok(Atom::Parentheses(Box::new(Expression::Term(Term::Factor(
                char_factor('a')
            )))))
        );

        let mut parser = Parser::new("*");
        assert_eq!(parser.parse_atom(), Err(SyntaxError::InvalidAtomStart));
    }

    #[test]
    fn test_parse_factor() {
        let mut parser = Parser::new("a*");
        assert_eq!(
            parser.parse_factor(),
            Ok(Factor::ZeroOrMore(Atom::Char('a')))
        );

        let mut parser = Parser::new("a");
        assert_eq!(parser.parse_factor(), Ok(char_factor('a')));
    }

    #[test]
    fn test_parse_term() {
        let mut parser = Parser::new("ab");
        assert_eq!(
            parser.parse_term(),
            Ok(Term::Concatenation(
                char_factor('a'),
                Box::new(Term::Factor(char_factor('b')))
            ))
        );
    }

    #[test]
    fn test_parse_expression() {
        let mut parser = Parser::new("a|bc");
        assert_eq!(
            parser.parse_expression(),
            Ok(Expression::Alternation(
                Term::Factor(char_factor('a')),
                Box::new(Expression::Term(Term::Concatenation(
                    char_factor('b'),
                    Box::new(Term::Factor(char_factor('c')))
                )))
            ))
        );
    }

    #[test]
    fn test_parse_starred_group() {
        let mut parser = Parser::new("(a|b)*");
        assert_eq!(
            parser.parse(),
            Ok(Pattern {
                expression: Expression::Term(Term::Factor(Factor::ZeroOrMore(
                    Atom::Parentheses(Box::new(Expression::Alternation(
                        Term::Factor(char_factor('a')),
                        Box::new(Expression::Term(Term::Factor(char_factor('b'))))
                    )))
                )))
            })
        );
    }

    #[test]
    fn test_parse_empty_terms() {
        assert_eq!(
            Parser::new("").parse(),
            Ok(Pattern {
                expression: Expression::Term(Term::Empty)
            })
        );
        assert_eq!(
            Parser::new("a|").parse_expression(),
            Ok(Expression::Alternation(
                Term::Factor(char_factor('a')),
                Box::new(Expression::Term(Term::Empty))
            ))
        );
        assert_eq!(
            Parser::new("()").parse_atom(),
            Ok(Atom::Parentheses(Box::new(Expression::Term(Term::Empty))))
        );
        assert_eq!(
            Parser::new("|a").parse_expression(),
            Ok(Expression::Alternation(
                Term::Empty,
                Box::new(Expression::Term(Term::Factor(char_factor('a'))))
            ))
        );
    }

    #[test_case("(ab", SyntaxError::UnexpectedEOF; "unclosed group")]
    #[test_case("a)", SyntaxError::TrailingInput(1, TokenKind::RightParen); "unbalanced close")]
    #[test_case("a**", SyntaxError::TrailingInput(2, TokenKind::Star); "double star")]
    #[test_case("*a", SyntaxError::InvalidAtomStart; "leading star")]
    #[test_case("a\u{7}", SyntaxError::InvalidToken(TokenError::Unsupported("\\u{7}".to_string())); "control character")]
    fn test_parse_errors(input: &str, expected: SyntaxError) {
        assert_eq!(Parser::new(input).parse(), Err(expected));
    }
}

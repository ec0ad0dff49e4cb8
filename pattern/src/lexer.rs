use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token {
    pub offset: usize,
    pub kind: TokenKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Char(char),
    LeftParen,
    Pipe,
    RightParen,
    Star,
}

#[derive(Debug, Clone)]
pub(crate) struct Lexer<'s> {
    rest: &'s str,
    byte: usize,
    peeked: Option<Result<Token, TokenError>>,
}

#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum TokenError {
    #[error("Unsupported token: '{0}'")]
    Unsupported(String),
}

impl<'s> Lexer<'s> {
    pub fn new(input: &'s str) -> Self {
        Self {
            rest: input,
            byte: 0,
            peeked: None,
        }
    }

    pub fn peek(&mut self) -> Option<&Result<Token, TokenError>> {
        if self.peeked.is_some() {
            return self.peeked.as_ref();
        }
        self.peeked = self.next();
        self.peeked.as_ref()
    }
}

impl<'s> Iterator for Lexer<'s> {
    type Item = Result<Token, TokenError>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(next) = self.peeked.take() {
            return Some(next);
        }

        let mut chars = self.rest.chars();
        let c = chars.next()?;
        let c_at = self.byte;
        self.rest = chars.as_str();
        self.byte += c.len_utf8();

        let kind = match c {
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            '|' => TokenKind::Pipe,
            '*' => TokenKind::Star,
            c if c.is_control() && !c.is_whitespace() => {
                return Some(Err(TokenError::Unsupported(
                    c.escape_default().to_string(),
                )));
            }
            c => TokenKind::Char(c),
        };

        Some(Ok(Token { kind, offset: c_at }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peek() {
        let mut lexer = Lexer::new("aé*");
        assert_eq!(
            lexer.peek(),
            Some(&Ok(Token {
                kind: TokenKind::Char('a'),
                offset: 0,
            }))
        );
        assert_eq!(
            lexer.next(),
            Some(Ok(Token {
                kind: TokenKind::Char('a'),
                offset: 0,
            }))
        );
        assert_eq!(
            lexer.next(),
            Some(Ok(Token {
                kind: TokenKind::Char('é'),
                offset: 1,
            }))
        );
        assert_eq!(
            lexer.peek(),
            Some(&Ok(Token {
                kind: TokenKind::Star,
                offset: 3,
            }))
        );
        assert_eq!(
            lexer.next(),
            Some(Ok(Token {
                kind: TokenKind::Star,
                offset: 3,
            }))
        );
        assert_eq!(lexer.peek(), None);
    }

    #[test]
    fn test_lexer() {
        let kinds: Vec<_> = Lexer::new("(a|b)*c")
            .map(|token| token.map(|t| t.kind))
            .collect();
        assert_eq!(
            kinds,
            vec![
                Ok(TokenKind::LeftParen),
                Ok(TokenKind::Char('a')),
                Ok(TokenKind::Pipe),
                Ok(TokenKind::Char('b')),
                Ok(TokenKind::RightParen),
                Ok(TokenKind::Star),
                Ok(TokenKind::Char('c')),
            ]
        );
    }

    #[test]
    fn test_lexer_control_char() {
        let mut lexer = Lexer::new("a\u{7}b");
        assert!(lexer.next().is_some_and(|t| t.is_ok()));
        assert_eq!(
            lexer.next(),
            Some(Err(TokenError::Unsupported("\\u{7}".to_string())))
        );
    }

    #[test]
    fn test_lexer_whitespace_is_literal() {
        let kinds: Vec<_> = Lexer::new("a\n b")
            .map(|token| token.map(|t| t.kind))
            .collect();
        assert_eq!(
            kinds,
            vec![
                Ok(TokenKind::Char('a')),
                Ok(TokenKind::Char('\n')),
                Ok(TokenKind::Char(' ')),
                Ok(TokenKind::Char('b')),
            ]
        );
    }
}

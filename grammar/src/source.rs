use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    #[error("missing terminal/expression separator: expected a newline after the terminal line")]
    MissingSeparator,
}

/// Input content split into its two parts: the terminal line and the
/// expression that follows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source<'s> {
    pub terminals: &'s str,
    pub expression: &'s str,
}

impl<'s> Source<'s> {
    pub fn parse(content: &'s str) -> Result<Self, SourceError> {
        let (terminals, expression) = content
            .split_once('\n')
            .ok_or(SourceError::MissingSeparator)?;
        Ok(Source {
            terminals: terminals.strip_suffix('\r').unwrap_or(terminals),
            expression: expression.trim(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("t1,t2\na+b", "t1,t2", "a+b"; "plain")]
    #[test_case("t1,t2\r\na+b\r\n", "t1,t2", "a+b"; "crlf")]
    #[test_case("a, b\n  (ab)*\n\n", "a, b", "(ab)*"; "expression trimmed")]
    #[test_case("t\nab\ncd", "t", "ab\ncd"; "inner newline kept")]
    #[test_case("t\n", "t", ""; "empty expression")]
    fn test_parse(content: &str, terminals: &str, expression: &str) {
        assert_eq!(
            Source::parse(content),
            Ok(Source {
                terminals,
                expression
            })
        );
    }

    #[test]
    fn test_parse_without_separator() {
        assert_eq!(Source::parse("a+b"), Err(SourceError::MissingSeparator));
    }
}

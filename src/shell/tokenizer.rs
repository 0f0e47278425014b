//! Command-Line Tokenizer
//!
//! Splits a command line into words with shell-style quoting: single
//! quotes are fully literal, double quotes allow `\"` and `\\` escapes,
//! and a backslash outside quotes escapes the next character.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenizeError {
    #[error("unterminated quote")]
    UnterminatedQuote,

    #[error("trailing backslash")]
    TrailingEscape,
}

/// Tokenize a command line. An empty or all-whitespace line yields an
/// empty vector.
pub fn tokenize(line: &str) -> Result<Vec<String>, TokenizeError> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    // A quoted empty string ("" or '') must still produce a token.
    let mut in_word = false;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match c {
            ' ' | '\t' => {
                if in_word {
                    tokens.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            '\\' => {
                let escaped = chars.next().ok_or(TokenizeError::TrailingEscape)?;
                current.push(escaped);
                in_word = true;
            }
            '\'' => {
                in_word = true;
                loop {
                    match chars.next() {
                        Some('\'') => break,
                        Some(ch) => current.push(ch),
                        None => return Err(TokenizeError::UnterminatedQuote),
                    }
                }
            }
            '"' => {
                in_word = true;
                loop {
                    match chars.next() {
                        Some('"') => break,
                        Some('\\') => match chars.next() {
                            Some(ch @ ('"' | '\\')) => current.push(ch),
                            Some(ch) => {
                                current.push('\\');
                                current.push(ch);
                            }
                            None => return Err(TokenizeError::UnterminatedQuote),
                        },
                        Some(ch) => current.push(ch),
                        None => return Err(TokenizeError::UnterminatedQuote),
                    }
                }
            }
            _ => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if in_word {
        tokens.push(current);
    }
    Ok(tokens)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(line: &str) -> Vec<String> {
        tokenize(line).unwrap()
    }

    #[test]
    fn test_simple_split() {
        assert_eq!(toks("ls"), vec!["ls"]);
        assert_eq!(toks("cd /docs"), vec!["cd", "/docs"]);
        assert_eq!(toks("  mkdir   a  "), vec!["mkdir", "a"]);
    }

    #[test]
    fn test_empty_line() {
        assert!(toks("").is_empty());
        assert!(toks("   \t ").is_empty());
    }

    #[test]
    fn test_single_quotes() {
        assert_eq!(toks("cd 'my docs'"), vec!["cd", "my docs"]);
        assert_eq!(toks("echo 'a \"b\" c'"), vec!["echo", "a \"b\" c"]);
    }

    #[test]
    fn test_double_quotes() {
        assert_eq!(toks("cd \"my docs\""), vec!["cd", "my docs"]);
        assert_eq!(toks("echo \"say \\\"hi\\\"\""), vec!["echo", "say \"hi\""]);
    }

    #[test]
    fn test_quoted_empty_token() {
        assert_eq!(toks("mkdir ''"), vec!["mkdir", ""]);
        assert_eq!(toks("mkdir \"\""), vec!["mkdir", ""]);
    }

    #[test]
    fn test_adjacent_quotes_join() {
        assert_eq!(toks("cd 'a'\"b\"c"), vec!["cd", "abc"]);
    }

    #[test]
    fn test_backslash_escape() {
        assert_eq!(toks("cd my\\ docs"), vec!["cd", "my docs"]);
    }

    #[test]
    fn test_unterminated_quote() {
        assert_eq!(tokenize("cd 'oops"), Err(TokenizeError::UnterminatedQuote));
        assert_eq!(tokenize("cd \"oops"), Err(TokenizeError::UnterminatedQuote));
    }

    #[test]
    fn test_trailing_backslash() {
        assert_eq!(tokenize("cd oops\\"), Err(TokenizeError::TrailingEscape));
    }
}

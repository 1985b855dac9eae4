//! Expression tokenizer for Lumina.
//!
//! Splits a single expression substring into atoms, operator characters,
//! parentheses, and multi-quote string literals. The tokenizer never
//! consults interpreter state — it is a pure function of the input text.

pub mod cursor;

use cursor::Cursor;
use thiserror::Error;
use tracing::trace;

/// A single token produced by [`tokenize`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// One of the arithmetic operator characters `+ - * / %`.
    Op(char),
    /// An opening parenthesis `(`.
    LParen,
    /// A closing parenthesis `)`.
    RParen,
    /// A string literal, still wrapped in its matched quote runs
    /// (e.g. `"""x"""`), exactly as it appeared in the source.
    QuotedString(String),
    /// A bare word: anything else — identifiers, numbers, number-words,
    /// probability names, or any Unicode run that isn't whitespace or
    /// punctuation.
    Word(String),
}

impl Token {
    /// Renders the token back to the exact text that would re-tokenize to it.
    pub fn render(&self) -> String {
        match self {
            Token::Op(c) => c.to_string(),
            Token::LParen => "(".to_string(),
            Token::RParen => ")".to_string(),
            Token::QuotedString(s) => s.clone(),
            Token::Word(s) => s.clone(),
        }
    }
}

/// Errors raised while tokenizing an expression.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum LexError {
    /// A quoted string's opening quote run was never closed.
    #[error("unterminated string literal starting at byte {0}")]
    UnterminatedString(usize),
}

const SINGLE_CHAR_OPS: [char; 5] = ['+', '-', '*', '/', '%'];

fn is_quote(c: char) -> bool {
    c == '"' || c == '\''
}

fn is_boundary(c: char) -> bool {
    c.is_whitespace() || SINGLE_CHAR_OPS.contains(&c) || c == '(' || c == ')' || is_quote(c)
}

/// Tokenizes an expression substring per the four tokenizer rules:
/// skip whitespace, match quote runs, emit single-character operators
/// and parens, and otherwise consume a maximal non-boundary run.
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    let mut cursor = Cursor::new(input);
    let mut tokens = Vec::new();

    while !cursor.is_at_end() {
        cursor.skip_whitespace();
        if cursor.is_at_end() {
            break;
        }

        let c = cursor.current_char();
        if is_quote(c) {
            let start = cursor.position();
            tokens.push(Token::QuotedString(lex_quoted_string(&mut cursor, c)?));
            trace!(start, "tokenized quoted string");
            continue;
        }

        if c == '(' {
            cursor.advance();
            tokens.push(Token::LParen);
            continue;
        }
        if c == ')' {
            cursor.advance();
            tokens.push(Token::RParen);
            continue;
        }
        if SINGLE_CHAR_OPS.contains(&c) {
            cursor.advance();
            tokens.push(Token::Op(c));
            continue;
        }

        let start = cursor.position();
        while !cursor.is_at_end() && !is_boundary(cursor.current_char()) {
            cursor.advance();
        }
        let word = cursor.slice_from(start);
        tokens.push(Token::Word(word.to_string()));
    }

    trace!(count = tokens.len(), "tokenize complete");
    Ok(tokens)
}

/// Matches a maximal run of `quote` as the opening delimiter, then scans
/// for the next identical run as the closing delimiter. Returns the full
/// substring including both runs.
fn lex_quoted_string(cursor: &mut Cursor<'_>, quote: char) -> Result<String, LexError> {
    let start = cursor.position();
    let mut run_len = 0usize;
    while cursor.current_char() == quote {
        cursor.advance();
        run_len += 1;
    }

    loop {
        if cursor.is_at_end() {
            return Err(LexError::UnterminatedString(start));
        }
        if cursor.current_char() == quote {
            let mut closing_len = 0usize;
            let candidate_start = cursor.position();
            while cursor.current_char() == quote {
                cursor.advance();
                closing_len += 1;
            }
            if closing_len >= run_len {
                let closed_at = candidate_start + quote.len_utf8() * run_len;
                return Ok(cursor.source()[start..closed_at].to_string());
            }
            // Closing run shorter than the opening run: not a match yet.
            continue;
        }
        cursor.advance();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(tokens: &[Token]) -> Vec<String> {
        tokens.iter().map(Token::render).collect()
    }

    #[test]
    fn single_word() {
        let tokens = tokenize("hello").unwrap();
        assert_eq!(tokens, vec![Token::Word("hello".to_string())]);
    }

    #[test]
    fn arithmetic_expression() {
        let tokens = tokenize("two+two").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Word("two".to_string()),
                Token::Op('+'),
                Token::Word("two".to_string()),
            ]
        );
    }

    #[test]
    fn parens_and_spaces() {
        let tokens = tokenize("(x + 1) * 2").unwrap();
        assert_eq!(
            words(&tokens),
            vec!["(", "x", "+", "1", ")", "*", "2"]
                .into_iter()
                .map(str::to_string)
                .collect::<Vec<_>>()
        );
    }

    #[test]
    fn simple_quoted_string() {
        let tokens = tokenize(r#""hey""#).unwrap();
        assert_eq!(tokens, vec![Token::QuotedString("\"hey\"".to_string())]);
    }

    #[test]
    fn triple_quoted_string() {
        let tokens = tokenize(r#"'''bye'''"#).unwrap();
        assert_eq!(tokens, vec![Token::QuotedString("'''bye'''".to_string())]);
    }

    #[test]
    fn unterminated_string_fails() {
        let err = tokenize(r#""unterminated"#).unwrap_err();
        assert_eq!(err, LexError::UnterminatedString(0));
    }

    #[test]
    fn unicode_identifier() {
        let tokens = tokenize("\u{1F600}").unwrap();
        assert_eq!(tokens, vec![Token::Word("\u{1F600}".to_string())]);
    }

    #[test]
    fn round_trip_preserves_token_list() {
        let original = tokenize(r#"(x + "a b") * 3"#).unwrap();
        let rejoined = original
            .iter()
            .map(Token::render)
            .collect::<Vec<_>>()
            .join(" ");
        let reparsed = tokenize(&rejoined).unwrap();
        assert_eq!(original, reparsed);
    }
}

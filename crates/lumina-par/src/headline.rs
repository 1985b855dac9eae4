//! Statement-head tokenizing: `"…"|'…'|<non-whitespace-run>`, with byte
//! spans so callers can slice out the untouched remainder of a line for
//! later expression evaluation.

use lumina_lex::cursor::Cursor;

/// Splits a line into `(start, end, text)` tokens using the statement-head
/// grammar. Unlike the expression tokenizer, arithmetic characters are
/// not special here — a token is either a quote-delimited run or a
/// maximal run of non-whitespace characters.
pub fn split_head(line: &str) -> Vec<(usize, usize, String)> {
    let mut cursor = Cursor::new(line);
    let mut out = Vec::new();

    while !cursor.is_at_end() {
        cursor.skip_whitespace();
        if cursor.is_at_end() {
            break;
        }

        let start = cursor.position();
        let c = cursor.current_char();
        if c == '"' || c == '\'' {
            scan_quoted(&mut cursor, c);
        } else {
            while !cursor.is_at_end() && !cursor.current_char().is_whitespace() {
                cursor.advance();
            }
        }
        let end = cursor.position();
        out.push((start, end, line[start..end].to_string()));
    }

    out
}

/// Consumes a quote run and its matching close, if any. Lenient: runs
/// to end-of-line if unterminated, since statement heads aren't
/// expressions and the expression tokenizer is what raises
/// `UnterminatedString`.
fn scan_quoted(cursor: &mut Cursor<'_>, quote: char) {
    let mut run_len = 0usize;
    while cursor.current_char() == quote {
        cursor.advance();
        run_len += 1;
    }

    while !cursor.is_at_end() {
        if cursor.current_char() == quote {
            let mut closing = 0usize;
            while cursor.current_char() == quote {
                cursor.advance();
                closing += 1;
            }
            if closing >= run_len {
                return;
            }
            continue;
        }
        cursor.advance();
    }
}

/// Returns the untouched remainder of `line` after the token ending at
/// byte offset `end`, trimmed.
pub fn rest_after(line: &str, end: usize) -> &str {
    line[end..].trim()
}

//! Statement dispatch: matches a line's head token against the
//! statement keyword table and builds the corresponding [`Statement`].

use crate::headline::{rest_after, split_head};
use crate::Parser;
use lumina_ast::{Comparison, Condition, Lifetime, Statement};
use lumina_lex::Token;
use lumina_util::{LuminaError, LuminaResult};

impl<'a> Parser<'a> {
    /// Parses one statement starting at the current line, consuming
    /// whatever additional lines its body needs (for block statements).
    pub fn parse_stmt(&mut self) -> LuminaResult<Statement> {
        let line = self
            .advance()
            .expect("parse_stmt called with no current line");

        let tokens = split_head(line);
        let (_, head_end, head) = tokens
            .first()
            .cloned()
            .ok_or_else(|| LuminaError::BadStatement(line.to_string()))?;
        let head_upper = head.to_uppercase();

        match head_upper.as_str() {
            "IMPORT" => Ok(Statement::Import {
                path: rest_after(line, head_end).to_string(),
            }),
            "DELETE" => {
                let target = tokens
                    .get(1)
                    .map(|(_, _, t)| t.clone())
                    .ok_or_else(|| LuminaError::BadStatement(line.to_string()))?;
                Ok(Statement::Delete { target })
            }
            "PREVIOUS" => {
                let name = tokens
                    .get(1)
                    .map(|(_, _, t)| t.clone())
                    .ok_or_else(|| LuminaError::BadStatement(line.to_string()))?;
                Ok(Statement::Previous { name })
            }
            "RETURN" => Ok(Statement::Return {
                expr: rest_after(line, head_end).to_string(),
            }),
            "REVERSE" => Ok(Statement::Reverse),
            "IF" => {
                let condition = parse_condition(&tokens[1..])?;
                let body = self.parse_block()?;
                Ok(Statement::If { condition, body })
            }
            "WHILE" => {
                let condition = parse_condition(&tokens[1..])?;
                let body = self.parse_block()?;
                Ok(Statement::While { condition, body })
            }
            _ => parse_call_or_assignment(line, &head, head_end, &tokens, self),
        }
    }
}

fn parse_call_or_assignment(
    line: &str,
    head: &str,
    head_end: usize,
    tokens: &[(usize, usize, String)],
    parser: &mut Parser<'_>,
) -> LuminaResult<Statement> {
    if let Some(name) = head.strip_prefix('!') {
        if name.is_empty() {
            return Err(LuminaError::BadStatement(line.to_string()));
        }
        let args = split_inline_args(rest_after(line, head_end))?;
        return Ok(Statement::InlineCall {
            name: name.to_string(),
            args,
        });
    }

    if is_function_keyword(head) {
        let name = tokens
            .get(1)
            .map(|(_, _, t)| t.clone())
            .ok_or_else(|| LuminaError::BadStatement(line.to_string()))?;
        let body = parser.parse_block()?;
        return Ok(Statement::FunctionDef {
            keyword: head.to_string(),
            name,
            body,
        });
    }

    if let Some(name) = head.strip_suffix(':') {
        return Ok(Statement::Assign {
            name: name.to_string(),
            expr: rest_after(line, head_end).to_string(),
        });
    }

    if let Some((_, second_end, second)) = tokens.get(1) {
        if let Some(life_tok) = second.strip_suffix(':') {
            let lifetime = parse_lifetime(life_tok)?;
            return Ok(Statement::LifetimeAssign {
                name: head.to_string(),
                lifetime,
                expr: rest_after(line, *second_end).to_string(),
            });
        }
    }

    Err(LuminaError::BadStatement(line.to_string()))
}

/// Any non-empty case-insensitive subsequence of `"FUNCTION"`.
fn is_function_keyword(tok: &str) -> bool {
    if tok.is_empty() {
        return false;
    }
    const TARGET: &str = "FUNCTION";
    let mut target_chars = TARGET.chars();
    'outer: for c in tok.chars() {
        let want = c.to_ascii_uppercase();
        for t in target_chars.by_ref() {
            if t == want {
                continue 'outer;
            }
        }
        return false;
    }
    true
}

/// Splits an inline call's argument text into per-argument expression
/// substrings. Runs on the same tokenizer as expression evaluation so an
/// operator stays glued to its operands (`x * 2` is one argument, not
/// three); a new argument only starts where two bare atoms sit next to
/// each other with nothing joining them (`1 2 3` is three).
fn split_inline_args(remainder: &str) -> LuminaResult<Vec<String>> {
    if remainder.is_empty() {
        return Ok(Vec::new());
    }

    let tokens =
        lumina_lex::tokenize(remainder).map_err(|_| LuminaError::UnterminatedString)?;

    let mut groups: Vec<Vec<Token>> = Vec::new();
    let mut current: Vec<Token> = Vec::new();
    let mut depth: i32 = 0;

    for tok in tokens {
        match &tok {
            Token::LParen => {
                depth += 1;
                current.push(tok);
            }
            Token::RParen => {
                depth -= 1;
                current.push(tok);
            }
            Token::Op(_) => current.push(tok),
            Token::Word(_) | Token::QuotedString(_) => {
                let starts_new_arg = depth == 0
                    && !current.is_empty()
                    && !matches!(current.last(), Some(Token::Op(_)) | Some(Token::LParen));
                if starts_new_arg {
                    groups.push(std::mem::take(&mut current));
                }
                current.push(tok);
            }
        }
    }
    if !current.is_empty() {
        groups.push(current);
    }

    Ok(groups
        .into_iter()
        .map(|g| g.iter().map(Token::render).collect::<Vec<_>>().join(" "))
        .collect())
}

fn parse_lifetime(tok: &str) -> LuminaResult<Lifetime> {
    if let Some(stripped) = tok.strip_suffix(['s', 'S']) {
        stripped
            .parse::<f64>()
            .map(Lifetime::Seconds)
            .map_err(|_| LuminaError::BadLifetime(tok.to_string()))
    } else {
        tok.parse::<i64>()
            .map(Lifetime::Lines)
            .map_err(|_| LuminaError::BadLifetime(tok.to_string()))
    }
}

/// Scans the tokens after an `IF`/`WHILE` keyword for one of the 12
/// comparison spellings; falls back to single-expression truthiness.
fn parse_condition(tokens: &[(usize, usize, String)]) -> LuminaResult<Condition> {
    for (i, (_, _, tok)) in tokens.iter().enumerate() {
        if let Some(op) = Comparison::parse(tok) {
            let left = join(&tokens[..i]);
            let right = join(&tokens[i + 1..]);
            if !left.is_empty() && !right.is_empty() {
                return Ok(Condition::Compare { left, op, right });
            }
        }
    }

    let expr = join(tokens);
    if expr.is_empty() {
        return Err(LuminaError::BadStatement("empty condition".to_string()));
    }
    Ok(Condition::Truthy(expr))
}

fn join(tokens: &[(usize, usize, String)]) -> String {
    tokens
        .iter()
        .map(|(_, _, t)| t.clone())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_program;

    #[test]
    fn parses_plain_assignment() {
        let prog = parse_program("x: 10").unwrap();
        assert_eq!(
            prog,
            vec![Statement::Assign {
                name: "x".to_string(),
                expr: "10".to_string(),
            }]
        );
    }

    #[test]
    fn parses_lifetime_assignment() {
        let prog = parse_program("X 2: 5").unwrap();
        assert_eq!(
            prog,
            vec![Statement::LifetimeAssign {
                name: "X".to_string(),
                lifetime: Lifetime::Lines(2),
                expr: "5".to_string(),
            }]
        );
    }

    #[test]
    fn parses_negative_and_seconds_lifetimes() {
        let prog = parse_program("B -3: '''bye'''").unwrap();
        assert_eq!(
            prog,
            vec![Statement::LifetimeAssign {
                name: "B".to_string(),
                lifetime: Lifetime::Lines(-3),
                expr: "'''bye'''".to_string(),
            }]
        );

        let prog = parse_program("C 5s: 1").unwrap();
        assert_eq!(
            prog,
            vec![Statement::LifetimeAssign {
                name: "C".to_string(),
                lifetime: Lifetime::Seconds(5.0),
                expr: "1".to_string(),
            }]
        );
    }

    #[test]
    fn parses_inline_call_keeps_an_operator_chain_as_one_argument() {
        let prog = parse_program("!PRINTLINE x * 2").unwrap();
        assert_eq!(
            prog,
            vec![Statement::InlineCall {
                name: "PRINTLINE".to_string(),
                args: vec!["x * 2".to_string()],
            }]
        );
    }

    #[test]
    fn parses_inline_call_splits_unrelated_atoms_into_separate_arguments() {
        let prog = parse_program("!hi 1 2 3").unwrap();
        assert_eq!(
            prog,
            vec![Statement::InlineCall {
                name: "hi".to_string(),
                args: vec!["1".to_string(), "2".to_string(), "3".to_string()],
            }]
        );
    }

    #[test]
    fn parses_function_definition_block() {
        let prog = parse_program("FN hi\n  !PRINTLINE \"hey\"\nEND\n!hi").unwrap();
        assert_eq!(prog.len(), 2);
        match &prog[0] {
            Statement::FunctionDef { keyword, name, body } => {
                assert_eq!(keyword, "FN");
                assert_eq!(name, "hi");
                assert_eq!(body.len(), 1);
            }
            other => panic!("expected FunctionDef, got {other:?}"),
        }
    }

    #[test]
    fn missing_end_fails() {
        let err = parse_program("FN hi\n!PRINTLINE 1").unwrap_err();
        assert!(matches!(err, LuminaError::MissingEnd));
    }

    #[test]
    fn parses_if_with_comparison_condition() {
        let prog = parse_program("IF x > 5\n!PRINTLINE 1\nEND").unwrap();
        match &prog[0] {
            Statement::If { condition, .. } => {
                assert_eq!(
                    *condition,
                    Condition::Compare {
                        left: "x".to_string(),
                        op: Comparison::Greater,
                        right: "5".to_string(),
                    }
                );
            }
            other => panic!("expected If, got {other:?}"),
        }
    }

    #[test]
    fn parses_if_with_truthy_condition() {
        let prog = parse_program("IF x\n!PRINTLINE 1\nEND").unwrap();
        match &prog[0] {
            Statement::If { condition, .. } => {
                assert_eq!(*condition, Condition::Truthy("x".to_string()));
            }
            other => panic!("expected If, got {other:?}"),
        }
    }

    #[test]
    fn bad_statement_reports_the_offending_head() {
        let err = parse_program("@@@ nonsense").unwrap_err();
        assert!(matches!(err, LuminaError::BadStatement(_)));
    }

    #[test]
    fn function_keyword_accepts_any_subsequence_of_function() {
        for kw in ["F", "FN", "FU", "FUN", "FUNC", "FCTION", "FUNCTION"] {
            let src = format!("{kw} sample\nEND");
            let prog = parse_program(&src).unwrap();
            assert!(matches!(prog[0], Statement::FunctionDef { .. }));
        }
    }
}

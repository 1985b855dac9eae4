//! Shunting-yard to RPN, then RPN evaluation against an [`EvalContext`].

use crate::value::Value;
use crate::{numberwords, probability};
use lumina_lex::{tokenize, LexError, Token};
use rand::Rng;
use thiserror::Error;

/// Errors raised while evaluating an expression, on top of tokenizing it.
#[derive(Debug, Error, Clone)]
pub enum EvalError {
    #[error("'{0}' is disabled")]
    DisabledToken(String),
    /// Never constructed: atom resolution's last rule always falls back
    /// to treating a bare word as a string, so resolution cannot fail.
    /// Kept for parity with the interpreter-wide error set.
    #[error("undefined name '{0}'")]
    UndefinedName(String),
    #[error("type error: {0}")]
    TypeError(String),
    #[error("division by zero")]
    DivByZero,
    #[error("mismatched parentheses")]
    MismatchedParens,
    #[error("bad expression: {0}")]
    BadExpression(String),
    #[error("unterminated string literal")]
    UnterminatedString,
}

impl From<LexError> for EvalError {
    fn from(e: LexError) -> Self {
        match e {
            LexError::UnterminatedString(_) => EvalError::UnterminatedString,
        }
    }
}

/// The runtime surface the evaluator needs from the interpreter's
/// `Context`, kept as a trait so `lumina-eval` does not depend on
/// `lumina-rt` (which depends back on `lumina-eval`).
pub trait EvalContext {
    /// True if `token` has been disabled via `DELETE`, case-insensitively.
    fn is_disabled(&self, token: &str) -> bool;
    /// The current frame's binding for `name`, if any.
    fn lookup_variable(&self, name: &str) -> Option<Value>;
}

fn precedence(op: char) -> u8 {
    match op {
        '+' | '-' => 1,
        '*' | '/' | '%' => 2,
        _ => 0,
    }
}

/// Evaluates an expression substring against `ctx`.
pub fn evaluate(input: &str, ctx: &impl EvalContext) -> Result<Value, EvalError> {
    let tokens = tokenize(input)?;
    if tokens.is_empty() {
        return Err(EvalError::BadExpression("empty expression".to_string()));
    }

    // A single non-operator token bypasses the shunting yard entirely.
    if tokens.len() == 1 {
        if let Token::Op(_) = tokens[0] {
            return Err(EvalError::BadExpression(format!(
                "'{}' is not a valid expression",
                tokens[0].render()
            )));
        }
        return resolve_atom(&tokens[0], ctx);
    }

    let rpn = to_rpn(&tokens)?;
    eval_rpn(&rpn, ctx)
}

fn to_rpn(tokens: &[Token]) -> Result<Vec<Token>, EvalError> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Token> = Vec::new();

    for tok in tokens {
        match tok {
            Token::Op(c) => {
                while let Some(Token::Op(top)) = ops.last() {
                    if precedence(*top) >= precedence(*c) {
                        output.push(ops.pop().unwrap());
                    } else {
                        break;
                    }
                }
                ops.push(tok.clone());
            }
            Token::LParen => ops.push(tok.clone()),
            Token::RParen => loop {
                match ops.pop() {
                    Some(Token::LParen) => break,
                    Some(other) => output.push(other),
                    None => return Err(EvalError::MismatchedParens),
                }
            },
            Token::Word(_) | Token::QuotedString(_) => output.push(tok.clone()),
        }
    }

    while let Some(top) = ops.pop() {
        if matches!(top, Token::LParen | Token::RParen) {
            return Err(EvalError::MismatchedParens);
        }
        output.push(top);
    }

    Ok(output)
}

fn eval_rpn(rpn: &[Token], ctx: &impl EvalContext) -> Result<Value, EvalError> {
    let mut stack: Vec<Value> = Vec::with_capacity(rpn.len());

    for tok in rpn {
        match tok {
            Token::Op(c) => {
                if ctx.is_disabled(&c.to_string()) {
                    return Err(EvalError::DisabledToken(c.to_string()));
                }
                let rhs = stack.pop().ok_or_else(|| {
                    EvalError::BadExpression(format!("missing operand for '{c}'"))
                })?;
                let lhs = stack.pop().ok_or_else(|| {
                    EvalError::BadExpression(format!("missing operand for '{c}'"))
                })?;
                stack.push(apply_op(*c, lhs, rhs)?);
            }
            Token::LParen | Token::RParen => return Err(EvalError::MismatchedParens),
            Token::Word(_) | Token::QuotedString(_) => stack.push(resolve_atom(tok, ctx)?),
        }
    }

    if stack.len() != 1 {
        return Err(EvalError::BadExpression(
            "expression did not reduce to one value".to_string(),
        ));
    }
    Ok(stack.pop().unwrap())
}

fn apply_op(op: char, lhs: Value, rhs: Value) -> Result<Value, EvalError> {
    match op {
        '+' => match (&lhs, &rhs) {
            (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
            _ => Ok(Value::String(format!(
                "{}{}",
                lhs.stringify(),
                rhs.stringify()
            ))),
        },
        '-' | '*' | '%' => {
            let (a, b) = require_numbers(&lhs, &rhs, op)?;
            Ok(Value::Number(match op {
                '-' => a - b,
                '*' => a * b,
                '%' => a % b,
                _ => unreachable!(),
            }))
        }
        '/' => {
            let (a, b) = require_numbers(&lhs, &rhs, op)?;
            if b == 0.0 {
                return Err(EvalError::DivByZero);
            }
            Ok(Value::Number(a / b))
        }
        _ => Err(EvalError::BadExpression(format!("unknown operator '{op}'"))),
    }
}

fn require_numbers(lhs: &Value, rhs: &Value, op: char) -> Result<(f64, f64), EvalError> {
    match (lhs.as_number(), rhs.as_number()) {
        (Some(a), Some(b)) => Ok((a, b)),
        _ => Err(EvalError::TypeError(format!(
            "'{op}' requires two numbers, got {} and {}",
            lhs.tag(),
            rhs.tag()
        ))),
    }
}

/// Resolves a single RPN atom (a [`Token::Word`] or [`Token::QuotedString`])
/// to a value, in a fixed seven-step order: disabled check, variable
/// lookup, probability name, number word, quoted-string literal, numeric
/// literal, and finally the bare word itself as a string.
fn resolve_atom(tok: &Token, ctx: &impl EvalContext) -> Result<Value, EvalError> {
    let text = tok.render();

    if ctx.is_disabled(&text) {
        return Err(EvalError::DisabledToken(text));
    }
    if let Some(v) = ctx.lookup_variable(&text) {
        return Ok(v);
    }
    if let Some(p) = probability::lookup(&text) {
        let draw: f64 = rand::thread_rng().gen_range(0.0..1.0);
        return Ok(Value::Boolean(draw < p));
    }
    if let Some(n) = numberwords::lookup(&text) {
        return Ok(Value::Number(n));
    }
    if let Some(s) = unquote(&text) {
        return Ok(Value::String(s));
    }
    if let Ok(n) = text.parse::<f64>() {
        return Ok(Value::Number(n));
    }
    Ok(Value::String(text))
}

/// Strips matching outer quote runs repeatedly, e.g. `"""x"""` → `x`.
/// Only applies when the text begins and ends with the same quote
/// character and is at least two characters long.
fn unquote(text: &str) -> Option<String> {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() < 2 {
        return None;
    }
    let quote = *chars.first()?;
    if quote != '"' && quote != '\'' {
        return None;
    }
    if *chars.last()? != quote {
        return None;
    }

    let mut s = text.to_string();
    loop {
        let inner_chars: Vec<char> = s.chars().collect();
        if inner_chars.len() < 2 {
            break;
        }
        let q = inner_chars[0];
        if (q != '"' && q != '\'') || *inner_chars.last().unwrap() != q {
            break;
        }
        s = inner_chars[1..inner_chars.len() - 1].iter().collect();
    }
    Some(s)
}

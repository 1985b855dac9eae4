//! The value model and expression evaluator: the shunting-yard engine
//! that turns an infix expression substring into a [`Value`], resolving
//! atoms against variables, the probability-name table, number words,
//! quoted strings, and numeric literals, in that order.

pub mod numberwords;
pub mod probability;
pub mod shunting;
pub mod value;

pub use shunting::{evaluate, EvalContext, EvalError};
pub use value::Value;

impl From<EvalError> for lumina_util::LuminaError {
    fn from(e: EvalError) -> Self {
        use lumina_util::LuminaError;
        match e {
            EvalError::DisabledToken(t) => LuminaError::DisabledToken(t),
            EvalError::UndefinedName(t) => LuminaError::UndefinedName(t),
            EvalError::TypeError(t) => LuminaError::TypeError(t),
            EvalError::DivByZero => LuminaError::DivByZero,
            EvalError::MismatchedParens => LuminaError::MismatchedParens,
            EvalError::BadExpression(t) => LuminaError::BadExpression(t),
            EvalError::UnterminatedString => LuminaError::UnterminatedString,
        }
    }
}

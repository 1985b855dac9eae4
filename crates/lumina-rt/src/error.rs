//! Errors raised by statement execution, on top of whatever the
//! expression evaluator itself reports.

use lumina_eval::EvalError;
use lumina_util::LuminaError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RtError {
    #[error("'{0}' is disabled")]
    DisabledToken(String),
    #[error("no previous value for '{0}'")]
    NoPrevious(String),
    #[error("unknown function '{0}'")]
    UnknownFunction(String),
    #[error("type error: {0}")]
    TypeError(String),
    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl From<RtError> for LuminaError {
    fn from(e: RtError) -> Self {
        match e {
            RtError::DisabledToken(t) => LuminaError::DisabledToken(t),
            RtError::NoPrevious(t) => LuminaError::NoPrevious(t),
            RtError::UnknownFunction(t) => LuminaError::UnknownFunction(t),
            RtError::TypeError(t) => LuminaError::TypeError(t),
            RtError::Eval(e) => e.into(),
        }
    }
}

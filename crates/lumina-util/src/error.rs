//! The interpreter-wide error type.
//!
//! Every phase crate defines its own narrow error enum; this module
//! collects them into one `LuminaError` via `#[from]` so the driver has
//! a single type to report.

use thiserror::Error;

/// Every fatal condition the interpreter can raise. All variants are
/// terminal: there is no `try`/`catch` construct in Lumina, so surfacing
/// one of these always means the program aborts.
#[derive(Debug, Error)]
pub enum LuminaError {
    /// A token was read, invoked, or matched as a keyword after `DELETE`
    /// disabled it.
    #[error("'{0}' is disabled")]
    DisabledToken(String),

    /// Atom resolution exhausted every rule without a match.
    #[error("undefined name '{0}'")]
    UndefinedName(String),

    /// A call named a function that is neither built-in, user-defined,
    /// nor resolvable via the FFI hook.
    #[error("unknown function '{0}'")]
    UnknownFunction(String),

    /// An operator or comparison received operands of the wrong tag.
    #[error("type error: {0}")]
    TypeError(String),

    /// `/` with a zero right-hand operand.
    #[error("division by zero")]
    DivByZero,

    /// A quoted string literal's opening quote run was never closed.
    #[error("unterminated string literal")]
    UnterminatedString,

    /// Parenthesis nesting in an expression did not balance.
    #[error("mismatched parentheses")]
    MismatchedParens,

    /// An expression could not be parsed into an RPN program.
    #[error("bad expression: {0}")]
    BadExpression(String),

    /// No statement rule matched the head token of a source line.
    #[error("bad statement: '{0}'")]
    BadStatement(String),

    /// A block statement ran past end-of-input with no matching `END`.
    #[error("missing END")]
    MissingEnd,

    /// `PREVIOUS` was used on a name with an empty history.
    #[error("no previous value for '{0}'")]
    NoPrevious(String),

    /// A lifetime suffix (`<n>` or `<n>s`) did not parse.
    #[error("bad lifetime: '{0}'")]
    BadLifetime(String),

    /// Failed to read the source file from disk.
    #[error("could not read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias used throughout the interpreter.
pub type LuminaResult<T> = std::result::Result<T, LuminaError>;

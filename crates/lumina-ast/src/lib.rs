//! The statement model: a tagged variant for every executable Lumina
//! statement shape, modeled as a discriminated enum per the design note
//! that statement polymorphism should use a tagged variant rather than
//! subtype dispatch.

/// A lifetime suffix on an assignment: either a signed count of executed
/// lines, or a wall-clock duration in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Lifetime {
    Lines(i64),
    Seconds(f64),
}

/// One of the twelve comparison spellings recognized in condition
/// positions; symbol and keyword spellings for the same operator are
/// the same variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Less,
    Greater,
    LessEq,
    GreaterEq,
    Equal,
    NotEqual,
}

impl Comparison {
    /// Parses one of the 12 recognized spellings, case-insensitively.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "<" => Some(Comparison::Less),
            ">" => Some(Comparison::Greater),
            "<=" => Some(Comparison::LessEq),
            ">=" => Some(Comparison::GreaterEq),
            "==" => Some(Comparison::Equal),
            "!=" => Some(Comparison::NotEqual),
            _ => match token.to_uppercase().as_str() {
                "LESS" => Some(Comparison::Less),
                "GREATER" => Some(Comparison::Greater),
                "LESSEQ" => Some(Comparison::LessEq),
                "GREATEREQ" => Some(Comparison::GreaterEq),
                "EQUAL" => Some(Comparison::Equal),
                "NOTEQUAL" => Some(Comparison::NotEqual),
                _ => None,
            },
        }
    }
}

/// The condition guarding an `IF`/`WHILE` statement: either a binary
/// comparison between two expression substrings, or a single
/// expression whose truthiness is tested directly.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    Compare {
        left: String,
        op: Comparison,
        right: String,
    },
    Truthy(String),
}

/// A single executable Lumina statement. Expression positions are kept
/// as their raw source substrings — re-tokenized and evaluated lazily
/// by the executor, since expressions can reference variables and
/// probability draws that only make sense against a live `Context`.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `IMPORT "path"`
    Import { path: String },
    /// `<fk> NAME` … `END`
    FunctionDef {
        keyword: String,
        name: String,
        body: Vec<Statement>,
    },
    /// `NAME: <expr>`
    Assign { name: String, expr: String },
    /// `NAME <life>: <expr>`
    LifetimeAssign {
        name: String,
        lifetime: Lifetime,
        expr: String,
    },
    /// `!NAME arg…`
    InlineCall { name: String, args: Vec<String> },
    /// `DELETE TOKEN`
    Delete { target: String },
    /// `PREVIOUS NAME`
    Previous { name: String },
    /// `RETURN <expr>`
    Return { expr: String },
    /// `REVERSE`
    Reverse,
    /// `IF <condition>` … `END`
    If {
        condition: Condition,
        body: Vec<Statement>,
    },
    /// `WHILE <condition>` … `END`
    While {
        condition: Condition,
        body: Vec<Statement>,
    },
}

impl Statement {
    /// The keyword token the runtime checks against `disabled_tokens`
    /// before executing this statement.
    pub fn keyword(&self) -> &str {
        match self {
            Statement::Import { .. } => "IMPORT",
            Statement::FunctionDef { keyword, .. } => keyword,
            Statement::Assign { .. } | Statement::LifetimeAssign { .. } => ":",
            Statement::InlineCall { name, .. } => name,
            Statement::Delete { .. } => "DELETE",
            Statement::Previous { .. } => "PREVIOUS",
            Statement::Return { .. } => "RETURN",
            Statement::Reverse => "REVERSE",
            Statement::If { .. } => "IF",
            Statement::While { .. } => "WHILE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comparison_accepts_symbol_and_keyword_spellings() {
        assert_eq!(Comparison::parse("<="), Some(Comparison::LessEq));
        assert_eq!(Comparison::parse("lesseq"), Some(Comparison::LessEq));
        assert_eq!(Comparison::parse("NOTEQUAL"), Some(Comparison::NotEqual));
        assert_eq!(Comparison::parse("bogus"), None);
    }

    #[test]
    fn assign_keyword_is_colon() {
        let stmt = Statement::Assign {
            name: "x".into(),
            expr: "1".into(),
        };
        assert_eq!(stmt.keyword(), ":");
    }

    #[test]
    fn inline_call_keyword_is_the_function_name() {
        let stmt = Statement::InlineCall {
            name: "PRINTLINE".into(),
            args: vec!["1".into()],
        };
        assert_eq!(stmt.keyword(), "PRINTLINE");
    }
}

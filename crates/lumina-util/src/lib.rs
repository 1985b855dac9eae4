//! Shared support used across the interpreter crates: the interpreter-wide
//! error type and a small case-insensitive string key, since Lumina treats
//! variable, function, keyword, and operator names as case-insensitive
//! throughout.

pub mod error;

pub use error::{LuminaError, LuminaResult};

/// A string compared, hashed, and ordered case-insensitively.
///
/// Lumina names (variables, functions, probability names, number words,
/// keywords) are all matched this way; wrapping the comparison once here
/// keeps every `HashMap<CiString, _>` in the runtime honest instead of
/// re-deriving `to_uppercase()` calls at each call site.
#[derive(Debug, Clone)]
pub struct CiString(String);

impl CiString {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn fold(&self) -> String {
        self.0.to_uppercase()
    }
}

impl PartialEq for CiString {
    fn eq(&self, other: &Self) -> bool {
        self.fold() == other.fold()
    }
}

impl Eq for CiString {}

impl std::hash::Hash for CiString {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.fold().hash(state);
    }
}

impl From<&str> for CiString {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for CiString {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl std::fmt::Display for CiString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Case-insensitive equality between two names, without allocating a
/// `CiString` for one-off comparisons.
pub fn ci_eq(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ci_string_equality_ignores_case() {
        assert_eq!(CiString::new("Delete"), CiString::new("DELETE"));
        assert_ne!(CiString::new("Delete"), CiString::new("Deletes"));
    }

    #[test]
    fn ci_string_usable_as_hash_key() {
        use std::collections::HashMap;
        let mut map: HashMap<CiString, i32> = HashMap::new();
        map.insert(CiString::new("Foo"), 1);
        assert_eq!(map.get(&CiString::new("FOO")), Some(&1));
    }

    #[test]
    fn ci_eq_matches_mixed_case() {
        assert!(ci_eq("FUNCTION", "function"));
        assert!(!ci_eq("FUNCTION", "func"));
    }
}

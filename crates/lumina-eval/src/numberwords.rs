//! `zero`…`ten` as case-insensitive numeric literals.

const WORDS: [&str; 11] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
];

/// Resolves a number word to its numeric value, case-insensitively.
pub fn lookup(token: &str) -> Option<f64> {
    WORDS
        .iter()
        .position(|w| w.eq_ignore_ascii_case(token))
        .map(|n| n as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_words() {
        assert_eq!(lookup("one"), Some(1.0));
        assert_eq!(lookup("TEN"), Some(10.0));
        assert_eq!(lookup("Zero"), Some(0.0));
    }

    #[test]
    fn rejects_unknown_words() {
        assert_eq!(lookup("eleven"), None);
    }
}

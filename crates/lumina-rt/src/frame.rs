//! A call-local variable store with per-name assignment history, used
//! by `PREVIOUS` to restore a name's prior binding.

use lumina_eval::Value;
use lumina_util::CiString;
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct Frame {
    vars: HashMap<CiString, Value>,
    history: HashMap<CiString, Vec<Value>>,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<Value> {
        self.vars.get(&CiString::new(name)).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.vars.contains_key(&CiString::new(name))
    }

    /// Binds `name` to `value`, pushing any existing binding onto the
    /// name's history first.
    pub fn set(&mut self, name: &str, value: Value) {
        let key = CiString::new(name);
        if let Some(old) = self.vars.remove(&key) {
            self.history.entry(key.clone()).or_default().push(old);
        }
        self.vars.insert(key, value);
    }

    /// Pops the most recent history entry for `name` and rebinds it as
    /// the current value. `None` if the history is empty.
    pub fn pop_previous(&mut self, name: &str) -> Option<Value> {
        let key = CiString::new(name);
        let value = self.history.get_mut(&key)?.pop()?;
        self.vars.insert(key, value.clone());
        Some(value)
    }

    /// Removes `name`'s current binding and its entire history.
    pub fn remove(&mut self, name: &str) {
        let key = CiString::new(name);
        self.vars.remove(&key);
        self.history.remove(&key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_then_get_round_trips() {
        let mut frame = Frame::new();
        frame.set("x", Value::Number(1.0));
        assert_eq!(frame.get("X"), Some(Value::Number(1.0)));
    }

    #[test]
    fn previous_restores_prior_binding() {
        let mut frame = Frame::new();
        frame.set("x", Value::Number(1.0));
        frame.set("x", Value::Number(2.0));
        assert_eq!(frame.pop_previous("x"), Some(Value::Number(1.0)));
        assert_eq!(frame.get("x"), Some(Value::Number(1.0)));
    }

    #[test]
    fn previous_on_empty_history_is_none() {
        let mut frame = Frame::new();
        frame.set("x", Value::Number(1.0));
        assert_eq!(frame.pop_previous("x"), None);
    }

    #[test]
    fn remove_clears_value_and_history() {
        let mut frame = Frame::new();
        frame.set("x", Value::Number(1.0));
        frame.set("x", Value::Number(2.0));
        frame.remove("x");
        assert!(!frame.contains("x"));
        assert_eq!(frame.pop_previous("x"), None);
    }
}

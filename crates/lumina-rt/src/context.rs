//! `Context`: the interpreter's full mutable state — the frame stack,
//! the disabled-token set, the function registry, the FFI handle list,
//! and the lifetime-expiration tables.

use crate::ffi::{FfiHook, NoFfi};
use crate::frame::Frame;
use crate::function::Function;
use lumina_ast::Statement;
use lumina_eval::{EvalContext, Value};
use lumina_util::CiString;
use std::collections::{HashMap, HashSet};
use std::time::Instant;

pub struct Context {
    frames: Vec<Frame>,
    functions: HashMap<CiString, Function>,
    disabled: HashSet<CiString>,
    ffi_handles: Vec<String>,
    ffi_hook: Box<dyn FfiHook>,
    pub reverse: bool,
    pub current_line: u64,
    line_expirations: HashMap<CiString, u64>,
    time_expirations: Vec<(CiString, Instant)>,
    pub last_return: Value,
}

impl Context {
    pub fn new() -> Self {
        Self::with_ffi_hook(Box::new(NoFfi))
    }

    pub fn with_ffi_hook(ffi_hook: Box<dyn FfiHook>) -> Self {
        Self {
            frames: vec![Frame::new()],
            functions: HashMap::new(),
            disabled: HashSet::new(),
            ffi_handles: Vec::new(),
            ffi_hook,
            reverse: false,
            current_line: 0,
            line_expirations: HashMap::new(),
            time_expirations: Vec::new(),
            last_return: Value::Number(0.0),
        }
    }

    pub fn frame(&self) -> &Frame {
        self.frames.last().expect("frame stack is never empty")
    }

    pub fn frame_mut(&mut self) -> &mut Frame {
        self.frames.last_mut().expect("frame stack is never empty")
    }

    pub fn push_frame(&mut self) {
        self.frames.push(Frame::new());
    }

    pub fn pop_frame(&mut self) {
        if self.frames.len() > 1 {
            self.frames.pop();
        }
    }

    pub fn is_disabled(&self, token: &str) -> bool {
        self.disabled.contains(&CiString::new(token))
    }

    pub fn add_ffi_handle(&mut self, path: String) {
        self.ffi_handles.push(path);
    }

    pub fn ffi_resolve(&self, name: &str, args: &[Value]) -> Option<Value> {
        self.ffi_hook.resolve(name, args)
    }

    pub fn define_function(&mut self, name: &str, body: Vec<Statement>) {
        self.functions.insert(
            CiString::new(name),
            Function {
                name: name.to_string(),
                body,
            },
        );
    }

    pub fn function(&self, name: &str) -> Option<&Function> {
        self.functions.get(&CiString::new(name))
    }

    /// `DELETE TOKEN`: removes a current-frame variable if one exists,
    /// otherwise removes any same-named function and disables the
    /// token. Disabling `DELETE` itself this way is what makes
    /// `DELETE DELETE` self-disabling — no special case needed.
    pub fn delete(&mut self, target: &str) {
        if self.frame().contains(target) {
            let key = CiString::new(target);
            self.frame_mut().remove(target);
            self.line_expirations.remove(&key);
            self.time_expirations.retain(|(n, _)| n != &key);
        } else {
            let key = CiString::new(target);
            self.functions.remove(&key);
            self.disabled.insert(key);
        }
    }

    /// Clears any scheduled expiration for `name`, used before a fresh
    /// assignment so a stale lifetime from an earlier binding can't
    /// expire an unrelated later one.
    pub fn clear_expirations(&mut self, name: &str) {
        let key = CiString::new(name);
        self.line_expirations.remove(&key);
        self.time_expirations.retain(|(n, _)| n != &key);
    }

    pub fn schedule_line_expiration(&mut self, name: &str, expire_at_line: u64) {
        self.line_expirations
            .insert(CiString::new(name), expire_at_line);
    }

    pub fn schedule_time_expiration(&mut self, name: &str, deadline: Instant) {
        self.time_expirations.push((CiString::new(name), deadline));
    }

    pub fn previous(&mut self, name: &str) -> Option<Value> {
        self.frame_mut().pop_previous(name)
    }

    /// Increments `current_line` and sweeps every variable whose
    /// line or time expiration has passed, purging its binding,
    /// history, and any same-named function entry.
    pub fn advance_line_and_expire(&mut self) {
        self.current_line += 1;
        let now_line = self.current_line;

        let mut expired: HashSet<CiString> = self
            .line_expirations
            .iter()
            .filter(|(_, &line)| line <= now_line)
            .map(|(name, _)| name.clone())
            .collect();

        let now = Instant::now();
        self.time_expirations.retain(|(name, deadline)| {
            if *deadline <= now {
                expired.insert(name.clone());
                false
            } else {
                true
            }
        });

        for name in &expired {
            self.frame_mut().remove(name.as_str());
            self.functions.remove(name);
        }
        self.line_expirations.retain(|name, _| !expired.contains(name));
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl EvalContext for Context {
    fn is_disabled(&self, token: &str) -> bool {
        Context::is_disabled(self, token)
    }

    fn lookup_variable(&self, name: &str) -> Option<Value> {
        self.frame().get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assign_then_delete_removes_variable_only() {
        let mut ctx = Context::new();
        ctx.frame_mut().set("x", Value::Number(1.0));
        ctx.delete("x");
        assert!(!ctx.frame().contains("x"));
        assert!(!ctx.is_disabled("x"));
    }

    #[test]
    fn delete_of_non_variable_disables_the_token() {
        let mut ctx = Context::new();
        ctx.delete("PLUS");
        assert!(ctx.is_disabled("plus"));
    }

    #[test]
    fn delete_delete_disables_delete_itself() {
        let mut ctx = Context::new();
        ctx.delete("DELETE");
        assert!(ctx.is_disabled("delete"));
    }

    #[test]
    fn line_expiration_sweep_purges_binding() {
        let mut ctx = Context::new();
        ctx.frame_mut().set("x", Value::Number(1.0));
        ctx.schedule_line_expiration("x", 2);
        ctx.advance_line_and_expire();
        assert!(ctx.frame().contains("x"));
        ctx.advance_line_and_expire();
        assert!(!ctx.frame().contains("x"));
    }
}

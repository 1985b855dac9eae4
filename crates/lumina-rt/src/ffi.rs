//! The abstract foreign-function hook. `IMPORT` records a handle name;
//! resolving an unrecognized call name against loaded handles is a
//! platform detail left to the embedder, so this crate only defines the
//! trait the executor consults.

use lumina_eval::Value;

/// Resolves a call that is neither a built-in nor a user-defined
/// function against whatever native libraries `IMPORT` has registered.
/// The binding mechanism itself is out of scope for this crate.
pub trait FfiHook {
    fn resolve(&self, name: &str, args: &[Value]) -> Option<Value>;
}

/// The default hook: no native libraries are ever loaded, so every
/// lookup falls through to `UnknownFunction`.
#[derive(Debug, Default)]
pub struct NoFfi;

impl FfiHook for NoFfi {
    fn resolve(&self, _name: &str, _args: &[Value]) -> Option<Value> {
        None
    }
}

//! The interpreter runtime: `Context` (frame stack, disabled-token set,
//! function registry, lifetime tables), the FFI hook, and the
//! statement executor with its top-level reverse semantics.

mod context;
mod error;
mod exec;
mod ffi;
mod frame;
mod function;

pub use context::Context;
pub use error::RtError;
pub use exec::{exec_block, run_program, Flow};
pub use ffi::{FfiHook, NoFfi};
pub use frame::Frame;
pub use function::Function;

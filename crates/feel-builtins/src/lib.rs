//! FEEL built-in function library
//!
//! An immutable, process-wide table mapping exact function names, including
//! multi-word names such as `string length`, to pure functions over
//! [`feel_types::Value`]. The table is built once on first use and never
//! written again; there is no runtime registration.
//!
//! No built-in fails: every invalid input yields `Value::Null`.

mod args;
mod functions;
mod registry;

pub use registry::{
    Builtin, BuiltinFn, builtin_names, call_builtin, get_builtin, is_builtin, is_builtin_prefix,
};

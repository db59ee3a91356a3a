//! Rust syntax builders used by the emitted modules.

mod consts;
mod fns;

pub use consts::Const;
pub use fns::{Fn, Param};

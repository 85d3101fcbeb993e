//! Primitive operations shared by every language port.
//!
//! The four operation modules are leaves: pure functions over `f64`, `bool`
//! and text. The registry exposes them under their cross-language names
//! (`Arithmetic.add`, `String.indexOf`, ...) for harnesses that drive them
//! with literal values.

#![allow(clippy::should_implement_trait)]
#![allow(clippy::len_zero)]

pub mod arithmetic;
pub mod comparison;
pub mod logical;
pub mod string;
pub mod text;

mod appendable;
mod errors;
mod registry;
mod suggest;
mod value;

pub use appendable::Appendable;
pub use errors::CallError;
pub use registry::{Args, Namespace, OpFn, Operation, Registry, Signature};
pub use suggest::find_best_match;
pub use value::{Value, ValueType};

//! Argument values for attest failure messages.
//!
//! Check call sites hand the formatter an ordered list of heterogeneous
//! arguments. This crate models that list as a sequence of [`Value`], a
//! tagged sum over the displayable kinds, so the formatter never touches
//! an untyped object array and positional semantics are preserved.
//!
//! The crate is standalone by design: it has no `attest_*` dependencies,
//! so external tools (custom check layers, log adapters) can depend on it
//! without pulling in the formatting engine.

mod validate;
mod value;

pub use validate::Validatable;
pub use value::Value;

//! Rule construction and serialization.
//!
//! - Builder: fluent, order-independent accumulation of rule parts
//! - Serializer: RECUR text output with `UNTIL` in `YYYYMMDDTHHMMSS` form

mod builder;
mod serializer;

pub use builder::{BuildError, RuleBuilder};
pub use serializer::{UNTIL_FORMAT, serialize};

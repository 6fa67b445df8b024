//! RFC implementations.

pub mod rrule;

//! Deterministic, pure closure demonstrations.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! data and return deterministic outputs suitable for tests.

pub mod counter;
pub mod digits;
pub mod sorting;

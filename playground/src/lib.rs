//! Closure playground: runnable snippets showing how closures capture state,
//! drive a comparator-based sort, and transform a sequence with `map`.
//!
//! - **[`core`]**: Pure closure demonstrations (counter factory, sorting,
//!   digit names). No I/O, fully testable in isolation.
//! - **[`io`]**: Configuration loading and writing.
//!
//! [`snippets`] evaluates the demonstrations top-to-bottom and [`check`]
//! verifies their behaviour; both back the `closure-playground` CLI.

pub mod check;
pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod snippets;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

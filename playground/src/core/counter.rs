//! Counter factory whose closures capture a shared running total.

use std::cell::Cell;
use std::rc::Rc;

/// Build a counter that adds `step` to a captured total on every call.
///
/// The total lives in an `Rc<Cell<i64>>` moved into the closure, so cloning
/// the returned closure clones the handle and both clones advance the same
/// total. Separate calls to `make_incrementer` never share a total.
///
/// The addition is unchecked; callers bound `step` against the number of
/// calls (see `PlaygroundConfig::validate`).
pub fn make_incrementer(step: i64) -> impl Fn() -> i64 + Clone {
    let running_total = Rc::new(Cell::new(0_i64));
    move || {
        running_total.set(running_total.get() + step);
        running_total.get()
    }
}

/// Invoke `counter` `times` times and return every total it produced.
pub fn call_repeatedly(counter: &impl Fn() -> i64, times: u32) -> Vec<i64> {
    (0..times).map(|_| counter()).collect()
}

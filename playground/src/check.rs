//! Behavioural checks for `closure-playground check`.
//!
//! Re-runs the closure demonstrations against the configured inputs and
//! compares them with independently computed expectations.

use anyhow::{Context, Result, anyhow};
use tracing::debug;

use crate::core::counter::{call_repeatedly, make_incrementer};
use crate::core::digits::{DigitNames, map_digit_names};
use crate::core::sorting::{ComparatorStyle, is_strictly_descending, sort_descending};
use crate::io::config::PlaygroundConfig;

/// Return every violated expectation. An empty list means all checks passed.
///
/// Errors are reserved for failures that stop evaluation outright, such as a
/// digit missing from the name table.
pub fn check_outcomes(config: &PlaygroundConfig) -> Result<Vec<String>> {
    let mut violations = Vec::new();
    check_counters(config, &mut violations);
    check_aliasing(config, &mut violations);
    check_sorting(&config.names, &mut violations);
    check_digits(&config.numbers, &config.digit_names, &mut violations)
        .context("check digit names")?;
    debug!(violations = violations.len(), "checks finished");
    Ok(violations)
}

fn expected_total(step: i64, calls: i64) -> Option<i64> {
    calls.checked_mul(step)
}

fn check_counters(config: &PlaygroundConfig, violations: &mut Vec<String>) {
    let calls = config.counter.calls;
    let count = i64::from(calls);
    let steps = &config.counter.steps;
    for (i, &a) in steps.iter().enumerate() {
        for &b in &steps[i + 1..] {
            if a == b {
                continue;
            }
            let (Some(expected_a), Some(expected_b)) =
                (expected_total(a, count), expected_total(b, count))
            else {
                violations.push(format!(
                    "counters: steps {a} and {b} overflow after {calls} calls"
                ));
                continue;
            };
            let counter_a = make_incrementer(a);
            let counter_b = make_incrementer(b);
            let mut last_a = 0;
            let mut last_b = 0;
            for _ in 0..calls {
                last_a = counter_a();
                last_b = counter_b();
            }
            if last_a != expected_a || last_b != expected_b {
                violations.push(format!(
                    "counters: steps {a} and {b} reached {last_a} and {last_b}, expected {expected_a} and {expected_b}"
                ));
            }
        }
    }
}

fn check_aliasing(config: &PlaygroundConfig, violations: &mut Vec<String>) {
    let Some(&step) = config.counter.steps.first() else {
        violations.push("aliasing: no counter step configured".to_string());
        return;
    };
    let calls = config.counter.calls;
    let expected: Option<Vec<i64>> = [0, 1, 2]
        .into_iter()
        .map(|extra| expected_total(step, i64::from(calls) + extra))
        .collect();
    let Some(expected) = expected else {
        violations.push(format!("aliasing: step {step} overflows after {calls} calls"));
        return;
    };

    let original = make_incrementer(step);
    let before_clone = call_repeatedly(&original, calls).last().copied().unwrap_or(0);
    let alias = original.clone();
    let observed = vec![before_clone, alias(), original()];
    if observed != expected {
        violations.push(format!(
            "aliasing: original/clone/original observed {observed:?}, expected {expected:?}"
        ));
    }
}

fn check_sorting(names: &[String], violations: &mut Vec<String>) {
    let mut reference = names.to_vec();
    reference.sort_by(|a, b| b.cmp(a));

    for style in ComparatorStyle::ALL {
        let sorted = sort_descending(names, style);
        if sorted != reference {
            violations.push(format!(
                "sorting ({style}): got {sorted:?}, expected {reference:?}"
            ));
            continue;
        }
        if !is_strictly_descending(&sorted) {
            violations.push(format!("sorting ({style}): {sorted:?} is not strictly descending"));
        }
        let again = sort_descending(&sorted, style);
        if again != sorted {
            violations.push(format!(
                "sorting ({style}): re-sorting changed {sorted:?} into {again:?}"
            ));
        }
    }
}

fn check_digits(
    numbers: &[u64],
    digit_names: &DigitNames,
    violations: &mut Vec<String>,
) -> Result<()> {
    let spelled = map_digit_names(numbers, digit_names)?;
    if spelled.len() != numbers.len() {
        violations.push(format!(
            "digits: {} numbers produced {} names",
            numbers.len(),
            spelled.len()
        ));
        return Ok(());
    }
    for (number, actual) in numbers.iter().zip(&spelled) {
        let expected = reference_spelling(*number, digit_names)?;
        if *actual != expected {
            violations.push(format!(
                "digits: {number} spelled '{actual}', expected '{expected}'"
            ));
        }
    }
    Ok(())
}

/// Spell a number by walking its decimal rendering left to right.
fn reference_spelling(number: u64, digit_names: &DigitNames) -> Result<String> {
    number
        .to_string()
        .chars()
        .map(|c| {
            let digit = c
                .to_digit(10)
                .ok_or_else(|| anyhow!("'{c}' is not a decimal digit"))?;
            digit_names.name_of(u64::from(digit)).map(str::to_string)
        })
        .collect()
}

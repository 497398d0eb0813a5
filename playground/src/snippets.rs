//! Top-to-bottom evaluation of the closure snippets.
//!
//! Each snippet runs once against the configured inputs and records the
//! expressions it evaluated alongside their values, the way a playground's
//! results sidebar would show them.

use std::fmt;
use std::str::FromStr;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::counter::{call_repeatedly, make_incrementer};
use crate::core::digits::map_digit_names;
use crate::core::sorting::{ComparatorStyle, sort_descending};
use crate::io::config::PlaygroundConfig;

/// Snippets in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Snippet {
    CapturingValues,
    ClosuresAreReferenceTypes,
    SortedWithFunction,
    ClosureExpression,
    InferredTypes,
    ShorthandArguments,
    OperatorMethod,
    TrailingClosure,
    MapDigitNames,
}

impl Snippet {
    pub const ALL: [Snippet; 9] = [
        Snippet::CapturingValues,
        Snippet::ClosuresAreReferenceTypes,
        Snippet::SortedWithFunction,
        Snippet::ClosureExpression,
        Snippet::InferredTypes,
        Snippet::ShorthandArguments,
        Snippet::OperatorMethod,
        Snippet::TrailingClosure,
        Snippet::MapDigitNames,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Snippet::CapturingValues => "capturing_values",
            Snippet::ClosuresAreReferenceTypes => "closures_are_reference_types",
            Snippet::SortedWithFunction => "sorted_with_function",
            Snippet::ClosureExpression => "closure_expression",
            Snippet::InferredTypes => "inferred_types",
            Snippet::ShorthandArguments => "shorthand_arguments",
            Snippet::OperatorMethod => "operator_method",
            Snippet::TrailingClosure => "trailing_closure",
            Snippet::MapDigitNames => "map_digit_names",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Snippet::CapturingValues => "Capturing values",
            Snippet::ClosuresAreReferenceTypes => "Closures share what they capture",
            Snippet::SortedWithFunction => "Sorting with a named function",
            Snippet::ClosureExpression => "Closure expression syntax",
            Snippet::InferredTypes => "Inferring types from context",
            Snippet::ShorthandArguments => "Shorthand closures",
            Snippet::OperatorMethod => "Operator methods",
            Snippet::TrailingClosure => "Trailing closures",
            Snippet::MapDigitNames => "Mapping with a closure",
        }
    }

    /// Comparator style exercised by a sorting snippet.
    pub fn comparator_style(self) -> Option<ComparatorStyle> {
        match self {
            Snippet::SortedWithFunction => Some(ComparatorStyle::NamedFunction),
            Snippet::ClosureExpression => Some(ComparatorStyle::ClosureExpression),
            Snippet::InferredTypes => Some(ComparatorStyle::InferredTypes),
            Snippet::ShorthandArguments => Some(ComparatorStyle::Shorthand),
            Snippet::OperatorMethod => Some(ComparatorStyle::OperatorMethod),
            Snippet::TrailingClosure => Some(ComparatorStyle::TrailingClosure),
            Snippet::CapturingValues
            | Snippet::ClosuresAreReferenceTypes
            | Snippet::MapDigitNames => None,
        }
    }
}

impl fmt::Display for Snippet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Snippet {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.replace('-', "_");
        Snippet::ALL
            .into_iter()
            .find(|snippet| snippet.as_str() == wanted)
            .ok_or_else(|| format!("unknown snippet '{s}' (see `closure-playground list`)"))
    }
}

/// One evaluated expression and its rendered value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    pub expression: String,
    pub value: String,
}

impl Evaluation {
    fn new(expression: impl Into<String>, value: impl fmt::Debug) -> Self {
        Self {
            expression: expression.into(),
            value: format!("{value:?}"),
        }
    }
}

/// Results of evaluating a single snippet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnippetOutcome {
    pub snippet: Snippet,
    pub title: String,
    pub results: Vec<Evaluation>,
}

/// Evaluate every snippet in order.
///
/// The config is validated first, so counter steps that would overflow are
/// rejected before any counter runs.
pub fn evaluate(config: &PlaygroundConfig) -> Result<Vec<SnippetOutcome>> {
    config.validate().context("validate playground config")?;
    Snippet::ALL
        .into_iter()
        .map(|snippet| evaluate_validated(config, snippet))
        .collect()
}

/// Evaluate a single snippet.
pub fn evaluate_one(config: &PlaygroundConfig, snippet: Snippet) -> Result<SnippetOutcome> {
    config.validate().context("validate playground config")?;
    evaluate_validated(config, snippet)
}

fn evaluate_validated(config: &PlaygroundConfig, snippet: Snippet) -> Result<SnippetOutcome> {
    debug!(snippet = %snippet, "evaluating snippet");
    let results = match snippet {
        Snippet::CapturingValues => capturing_values(config)?,
        Snippet::ClosuresAreReferenceTypes => closures_are_reference_types(config)?,
        Snippet::MapDigitNames => {
            let spelled = map_digit_names(&config.numbers, &config.digit_names)?;
            vec![
                Evaluation::new("numbers", &config.numbers),
                Evaluation::new("numbers.iter().map(spell_digits)", spelled),
            ]
        }
        sorting => {
            let style = sorting
                .comparator_style()
                .ok_or_else(|| anyhow!("snippet {sorting} has no comparator"))?;
            let reversed = sort_descending(&config.names, style);
            vec![
                Evaluation::new("names", &config.names),
                Evaluation::new(format!("sorted_by(names, {style})"), reversed),
            ]
        }
    };
    debug!(snippet = %snippet, results = results.len(), "snippet evaluated");
    Ok(SnippetOutcome {
        snippet,
        title: snippet.title().to_string(),
        results,
    })
}

/// Render outcomes the way the playground prints them: a header per snippet
/// followed by one `expression => value` line per result.
pub fn render_text(outcomes: &[SnippetOutcome]) -> String {
    let mut out = String::new();
    for (index, outcome) in outcomes.iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        out.push_str(&format!("== {}: {}\n", outcome.snippet, outcome.title));
        for result in &outcome.results {
            out.push_str(&format!("{} => {}\n", result.expression, result.value));
        }
    }
    out
}

fn counter_steps(config: &PlaygroundConfig) -> Result<(i64, i64)> {
    match config.counter.steps.as_slice() {
        [first, second, ..] => Ok((*first, *second)),
        _ => Err(anyhow!("counter.steps must list at least two steps")),
    }
}

fn capturing_values(config: &PlaygroundConfig) -> Result<Vec<Evaluation>> {
    let (first, second) = counter_steps(config)?;
    let calls = config.counter.calls;
    let increment_first = make_incrementer(first);
    let increment_second = make_incrementer(second);

    let mut results = Vec::new();
    for total in call_repeatedly(&increment_first, calls) {
        results.push(Evaluation::new(format!("increment_by_{first}()"), total));
    }
    for total in call_repeatedly(&increment_second, calls) {
        results.push(Evaluation::new(format!("increment_by_{second}()"), total));
    }
    results.push(Evaluation::new(
        format!("increment_by_{first}()"),
        increment_first(),
    ));
    Ok(results)
}

fn closures_are_reference_types(config: &PlaygroundConfig) -> Result<Vec<Evaluation>> {
    let (step, _) = counter_steps(config)?;
    let increment = make_incrementer(step);
    let name = format!("increment_by_{step}");

    let mut results: Vec<Evaluation> = call_repeatedly(&increment, config.counter.calls)
        .into_iter()
        .map(|total| Evaluation::new(format!("{name}()"), total))
        .collect();

    let also_increment = increment.clone();
    results.push(Evaluation::new(
        format!("also_{name}() // clone of {name}"),
        also_increment(),
    ));
    results.push(Evaluation::new(format!("{name}()"), increment()));
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(outcome: &SnippetOutcome) -> Vec<&str> {
        outcome
            .results
            .iter()
            .map(|result| result.value.as_str())
            .collect()
    }

    #[test]
    fn evaluates_every_snippet_in_order() {
        let outcomes = evaluate(&PlaygroundConfig::default()).expect("evaluate");
        let order: Vec<Snippet> = outcomes.iter().map(|outcome| outcome.snippet).collect();
        assert_eq!(order, Snippet::ALL.to_vec());
    }

    #[test]
    fn capturing_values_shows_independent_totals() {
        let outcome = evaluate_one(&PlaygroundConfig::default(), Snippet::CapturingValues)
            .expect("evaluate");
        assert_eq!(values(&outcome), vec!["10", "20", "30", "7", "14", "21", "40"]);
        assert_eq!(outcome.results[3].expression, "increment_by_7()");
    }

    #[test]
    fn clone_advances_shared_total() {
        let outcome = evaluate_one(
            &PlaygroundConfig::default(),
            Snippet::ClosuresAreReferenceTypes,
        )
        .expect("evaluate");
        assert_eq!(values(&outcome), vec!["10", "20", "30", "40", "50"]);
    }

    #[test]
    fn sorting_snippets_show_reversed_names() {
        let expected = r#"["Ewa", "Daniella", "Chris", "Barry", "Alex"]"#;
        for snippet in Snippet::ALL
            .into_iter()
            .filter(|snippet| snippet.comparator_style().is_some())
        {
            let outcome = evaluate_one(&PlaygroundConfig::default(), snippet).expect("evaluate");
            assert_eq!(outcome.results[1].value, expected, "snippet {snippet}");
        }
    }

    #[test]
    fn map_snippet_spells_numbers() {
        let outcome =
            evaluate_one(&PlaygroundConfig::default(), Snippet::MapDigitNames).expect("evaluate");
        assert_eq!(
            outcome.results[1].value,
            r#"["OneSix", "FiveEight", "FiveOneZero"]"#
        );
    }

    #[test]
    fn overflowing_steps_are_rejected_before_counting() {
        let mut cfg = PlaygroundConfig::default();
        cfg.counter.steps = vec![i64::MAX, 1];
        cfg.counter.calls = 2;

        let err = evaluate(&cfg).unwrap_err();
        assert!(format!("{err:#}").contains("overflows"), "{err:#}");
        let err = evaluate_one(&cfg, Snippet::CapturingValues).unwrap_err();
        assert!(format!("{err:#}").contains("overflows"), "{err:#}");
    }

    #[test]
    fn renders_header_and_results() {
        let outcome =
            evaluate_one(&PlaygroundConfig::default(), Snippet::MapDigitNames).expect("evaluate");
        let text = render_text(&[outcome]);
        assert_eq!(
            text,
            "== map_digit_names: Mapping with a closure\n\
             numbers => [16, 58, 510]\n\
             numbers.iter().map(spell_digits) => [\"OneSix\", \"FiveEight\", \"FiveOneZero\"]\n"
        );
    }

    #[test]
    fn snippet_names_parse_back() {
        for snippet in Snippet::ALL {
            assert_eq!(snippet.as_str().parse::<Snippet>(), Ok(snippet));
        }
        assert_eq!(
            "map-digit-names".parse::<Snippet>(),
            Ok(Snippet::MapDigitNames)
        );
        assert!("nope".parse::<Snippet>().is_err());
    }

    #[test]
    fn outcome_serializes_with_snake_case_snippet() {
        let outcome =
            evaluate_one(&PlaygroundConfig::default(), Snippet::MapDigitNames).expect("evaluate");
        let json = serde_json::to_value(&outcome).expect("serialize");
        assert_eq!(json["snippet"], "map_digit_names");
        assert_eq!(json["results"][0]["expression"], "numbers");
    }
}

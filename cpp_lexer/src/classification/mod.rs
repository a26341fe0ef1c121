//! Classification pass over a lexeme stream
//!
//! Each lexeme is classified independently. Classified lexemes update the
//! [`ClassificationState`] and are handed to an observer together with the
//! running tally; unclassified lexemes are counted as dropped and otherwise
//! ignored.

pub mod classifier;
pub mod state;

use crate::logging::codes;
use crate::tokens::{Category, TokenStream};

pub use classifier::Classifier;
pub use state::{ClassificationState, Tally, UniqueTokens};

/// Classify every lexeme in order, calling `on_classified` after each one is recorded
pub fn classify_stream<F, E>(
    classifier: &Classifier,
    stream: &TokenStream,
    mut on_classified: F,
) -> Result<ClassificationState, E>
where
    F: FnMut(&str, Category, &Tally) -> Result<(), E>,
{
    let mut state = ClassificationState::new();

    for lexeme in stream.iter() {
        match classifier.classify(lexeme) {
            Some(category) => {
                state.record(lexeme, category);
                on_classified(lexeme, category, state.tally())?;
            }
            None => state.record_dropped(),
        }
    }

    crate::log_success!(
        codes::success::CLASSIFICATION_COMPLETE,
        "Classification pass completed",
        "classified" => state.classified_count(),
        "dropped" => state.dropped_count(),
        "keywords" => state.tally().get(Category::Keyword),
        "identifiers" => state.tally().get(Category::Identifier),
        "operators" => state.tally().get(Category::Operator),
        "symbols" => state.tally().get(Category::Symbol),
        "constants" => state.tally().get(Category::Constant)
    );

    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexical;

    fn classifier() -> Classifier {
        Classifier::new().unwrap()
    }

    fn run(source: &str) -> (ClassificationState, Vec<(String, Category)>) {
        let stream = lexical::tokenize(source).unwrap();
        let mut seen = Vec::new();
        let state = classify_stream::<_, ()>(&classifier(), &stream, |lexeme, category, _| {
            seen.push((lexeme.to_string(), category));
            Ok(())
        })
        .unwrap();
        (state, seen)
    }

    #[test]
    fn test_simple_declaration() {
        let (state, seen) = run("int x = 5;");

        assert_eq!(
            seen,
            vec![
                ("int".to_string(), Category::Keyword),
                ("x".to_string(), Category::Identifier),
                ("=".to_string(), Category::Operator),
                ("5".to_string(), Category::Constant),
                (";".to_string(), Category::Symbol),
            ]
        );
        for category in Category::ALL {
            assert_eq!(state.tally().get(category), 1);
        }
        assert_eq!(state.dropped_count(), 3);
    }

    #[test]
    fn test_compound_assignment() {
        let (state, seen) = run("x += 3.14;");

        assert_eq!(seen.len(), 4);
        assert_eq!(seen[1], ("+=".to_string(), Category::Operator));
        assert_eq!(seen[2], ("3.14".to_string(), Category::Constant));
        assert_eq!(state.tally().get(Category::Keyword), 0);
    }

    #[test]
    fn test_include_header_is_dropped() {
        let (state, seen) = run("#include <iostream>");

        assert_eq!(
            seen,
            vec![
                ("#".to_string(), Category::Symbol),
                ("include".to_string(), Category::Keyword),
            ]
        );
        assert_eq!(state.classified_count(), 2);
        assert_eq!(state.dropped_count(), 2);
        for category in Category::ALL {
            assert!(!state.unique(category).contains("<iostream>"));
        }
    }

    #[test]
    fn test_comparison_between_angle_brackets_is_dropped() {
        let (state, seen) = run("if (a < b && c > d)");

        assert_eq!(
            seen,
            vec![
                ("if".to_string(), Category::Keyword),
                ("(".to_string(), Category::Symbol),
                ("a".to_string(), Category::Identifier),
                ("d".to_string(), Category::Identifier),
                (")".to_string(), Category::Symbol),
            ]
        );
        assert_eq!(state.tally().get(Category::Operator), 0);
    }

    #[test]
    fn test_empty_input() {
        let (state, seen) = run("");

        assert!(seen.is_empty());
        assert_eq!(state.classified_count(), 0);
        for category in Category::ALL {
            assert!(state.unique(category).is_empty());
        }
    }

    #[test]
    fn test_counts_partition_lexemes() {
        let source = "int main() {\n\tint x = 5 % 2;\n\tcout << x << endl;\n\treturn 0;\n}\n";
        let stream = lexical::tokenize(source).unwrap();
        let state =
            classify_stream::<_, ()>(&classifier(), &stream, |_, _, _| Ok(())).unwrap();

        assert_eq!(
            state.classified_count() + state.dropped_count(),
            stream.len()
        );
        assert!(!state.unique(Category::Symbol).contains("%"));
        assert!(state.unique(Category::Operator).contains("%"));
    }

    #[test]
    fn test_observer_sees_running_tally() {
        let stream = lexical::tokenize("a b c").unwrap();
        let mut snapshots = Vec::new();
        classify_stream::<_, ()>(&classifier(), &stream, |_, _, tally| {
            snapshots.push(tally.get(Category::Identifier));
            Ok(())
        })
        .unwrap();

        assert_eq!(snapshots, vec![1, 2, 3]);
    }

    #[test]
    fn test_observer_error_stops_the_pass() {
        let stream = lexical::tokenize("a b c").unwrap();
        let mut calls = 0;
        let result = classify_stream(&classifier(), &stream, |_, _, _| {
            calls += 1;
            if calls == 2 {
                Err("stop")
            } else {
                Ok(())
            }
        });

        assert_eq!(result.unwrap_err(), "stop");
        assert_eq!(calls, 2);
    }
}

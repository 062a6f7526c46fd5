use proptest::prelude::*;
use rstest::rstest;
use sentiment_analyzer::classifier::{NEGATIVE_THRESHOLD, POSITIVE_THRESHOLD};
use sentiment_analyzer::{Label, LexiconScorer, Row, Scorer, Summary, label, summarize};

#[rstest]
#[case(1.0, Label::Positive)]
#[case(0.5, Label::Positive)]
#[case(0.050_001, Label::Positive)]
#[case(0.05, Label::Neutral)]
#[case(0.049_999, Label::Neutral)]
#[case(0.0, Label::Neutral)]
#[case(-0.0, Label::Neutral)]
#[case(-0.049_999, Label::Neutral)]
#[case(-0.05, Label::Neutral)]
#[case(-0.050_001, Label::Negative)]
#[case(-0.5, Label::Negative)]
#[case(-1.0, Label::Negative)]
fn test_label_boundaries(#[case] score: f64, #[case] expected: Label) {
    assert_eq!(label(score), expected, "score {score}");
}

#[test]
fn test_thresholds_are_fixed() {
    assert_eq!(POSITIVE_THRESHOLD, 0.05);
    assert_eq!(NEGATIVE_THRESHOLD, -0.05);
}

#[test]
fn test_summarize_example_batch() {
    let summary = summarize([
        (Label::Positive, 0.9),
        (Label::Positive, 0.6),
        (Label::Negative, -0.7),
    ]);

    let expected: Summary = [Label::Positive, Label::Positive, Label::Negative]
        .into_iter()
        .collect();
    assert_eq!(summary, expected);
    assert_eq!(summary.get(Label::Neutral), None);
}

#[test]
fn test_summarize_empty_batch() {
    assert_eq!(summarize(Vec::<(Label, f64)>::new()), Summary::default());
}

proptest! {
    #[test]
    fn prop_positive_above_threshold(s in 0.050_000_001f64..=1.0) {
        prop_assert_eq!(label(s), Label::Positive);
    }

    #[test]
    fn prop_negative_below_threshold(s in -1.0f64..-0.050_000_001) {
        prop_assert_eq!(label(s), Label::Negative);
    }

    #[test]
    fn prop_neutral_inside_band(s in -0.05f64..=0.05) {
        prop_assert_eq!(label(s), Label::Neutral);
    }

    #[test]
    fn prop_label_is_deterministic(s in -10.0f64..10.0) {
        prop_assert_eq!(label(s), label(s));
    }

    #[test]
    fn prop_summary_is_order_independent(scores in prop::collection::vec(-1.0f64..=1.0, 0..64)) {
        let rows: Vec<Row> = scores.iter().map(|s| Row::new("t", *s)).collect();
        let mut reversed = rows.clone();
        reversed.reverse();

        let forward = summarize(&rows);
        prop_assert_eq!(&forward, &summarize(&reversed));
        prop_assert_eq!(forward.total(), rows.len());
    }

    #[test]
    fn prop_summary_matches_label_counts(scores in prop::collection::vec(-1.0f64..=1.0, 0..64)) {
        let summary = summarize(scores.iter().map(|s| (label(*s), *s)));
        for candidate in Label::ALL {
            let count = scores.iter().filter(|s| label(**s) == candidate).count();
            prop_assert_eq!(summary.get(candidate), (count > 0).then_some(count));
        }
    }

    #[test]
    fn prop_lexicon_scores_are_bounded(text in "[a-zA-Z !',.]{0,200}") {
        let scorer = LexiconScorer::builtin().unwrap();
        let score = scorer.polarity(&text);
        prop_assert!(score.is_finite());
        prop_assert!((-1.0..=1.0).contains(&score));
    }
}

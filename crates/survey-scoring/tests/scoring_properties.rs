//! Scoring properties against the built-in catalog

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use survey_catalog::{AnswerSet, Catalog, Question, Scale};
use survey_scoring::{compute_statistics, ErrorBarChart, StatisticsOrigin};
use survey_test_utils::complete_answers;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_end_to_end_scores() {
    let stats = compute_statistics(Some(&complete_answers()), &Catalog::builtin());
    assert_eq!(stats.origin, StatisticsOrigin::Measured);

    let usability = stats.get("Usability").unwrap();
    assert_eq!(usability.values, vec![5, 5, 5]);
    assert!(close(usability.mean, 5.0) && close(usability.sd, 0.0));

    let design = stats.get("Design").unwrap();
    assert_eq!(design.values, vec![7, 7, 7]);
    assert!(close(design.mean, 7.0) && close(design.sd, 0.0));

    let funktion = stats.get("Funktion").unwrap();
    assert_eq!(funktion.values, vec![4, 4, 4]);
    assert!(close(funktion.mean, 4.0) && close(funktion.sd, 0.0));
}

#[test]
fn test_idempotent() {
    let catalog = Catalog::builtin();
    let answers = complete_answers().with("q2", 1);
    assert_eq!(
        compute_statistics(Some(&answers), &catalog),
        compute_statistics(Some(&answers), &catalog)
    );
}

#[test]
fn test_placeholder_bars_are_midpoint_half_spread() {
    let stats = compute_statistics(None, &Catalog::builtin());
    let chart = ErrorBarChart::from_statistics(&stats);

    let usability = &chart.bars[0];
    assert!(close(usability.y, 3.0));
    assert!(close(usability.y_min, 2.5));
    assert!(close(usability.y_max, 3.5));
}

fn single_scale(min: i32, max: i32, reverse: bool) -> Catalog {
    let mut question = Question::new("x", "S", "prompt");
    question.reverse = reverse;
    Catalog::builder()
        .scale(Scale::new("S", min, max))
        .question(question)
        .question(Question::new("y", "S", "prompt"))
        .build()
        .unwrap()
}

#[test]
fn test_wide_scale_is_scored_without_overflow() {
    let (min, max) = (2_000_000_000, 2_100_000_000);
    let catalog = single_scale(min, max, true);

    let placeholder = compute_statistics(None, &catalog);
    let s = placeholder.get("S").unwrap();
    assert!(close(s.mean, 2_050_000_000.0));

    let answers = AnswerSet::new().with("x", min).with("y", max);
    let measured = compute_statistics(Some(&answers), &catalog);
    assert_eq!(measured.get("S").unwrap().values, vec![max, max]);

    let chart = ErrorBarChart::from_statistics(&placeholder);
    assert!(chart.bars[0].y_min >= f64::from(min));
    assert!(chart.bars[0].y_max <= f64::from(max));
}

proptest! {
    #[test]
    fn prop_single_answer_is_its_own_mean(v in 1i32..=7) {
        let catalog = single_scale(1, 7, false);
        let answers = AnswerSet::new().with("x", v);
        let stats = compute_statistics(Some(&answers), &catalog);
        let s = stats.get("S").unwrap();
        prop_assert!(close(s.mean, f64::from(v)));
        prop_assert!(close(s.sd, 0.0));
        prop_assert_eq!(s.count(), 1);
    }

    #[test]
    fn prop_two_values_sd(v1 in 0i32..=4, v2 in 0i32..=4) {
        let catalog = single_scale(0, 4, false);
        let answers = AnswerSet::new().with("x", v1).with("y", v2);
        let stats = compute_statistics(Some(&answers), &catalog);
        let expected = f64::from((v1 - v2).abs()) / 2f64.sqrt();
        prop_assert!(close(stats.get("S").unwrap().sd, expected));
    }

    #[test]
    fn prop_reverse_scoring(min in -3i32..3, span in 1i32..8, offset in 0i32..8) {
        let max = min + span;
        let raw = min + offset % (span + 1);
        let catalog = single_scale(min, max, true);
        let answers = AnswerSet::new().with("x", raw);
        let stats = compute_statistics(Some(&answers), &catalog);
        prop_assert_eq!(stats.get("S").unwrap().values.clone(), vec![min + max - raw]);
    }

    #[test]
    fn prop_error_bars_stay_in_range(
        answers in proptest::collection::vec(0i32..=4, 0..=3)
    ) {
        let catalog = Catalog::builtin();
        let ids = ["q7", "q8", "q9"];
        let set: AnswerSet = ids.iter().copied().zip(answers).collect();
        let stats = compute_statistics(Some(&set), &catalog);
        let chart = ErrorBarChart::from_statistics(&stats);
        let funktion = &chart.bars[2];
        prop_assert!(funktion.y_max <= 4.0);
        prop_assert!(funktion.y_min <= funktion.y_max);
    }
}

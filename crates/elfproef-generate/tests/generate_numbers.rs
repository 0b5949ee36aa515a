use elfproef_core::is_valid;
use elfproef_generate::{GenerateOptions, GenerationEngine, GenerationError, Mode};

fn engine(seed: u64) -> GenerationEngine {
    GenerationEngine::new(GenerateOptions {
        seed: Some(seed),
        ..GenerateOptions::default()
    })
}

#[test]
fn valid_mode_emits_only_passing_candidates() {
    let result = engine(7).generate(Mode::Valid, 200).expect("generation succeeds");
    assert_eq!(result.numbers.len(), 200);
    for number in &result.numbers {
        assert!(is_valid(number), "candidate {number} fails the 11-test");
    }
}

#[test]
fn invalid_mode_emits_only_failing_candidates() {
    let result = engine(7).generate(Mode::Invalid, 200).expect("generation succeeds");
    assert_eq!(result.numbers.len(), 200);
    for number in &result.numbers {
        assert!(!is_valid(number), "candidate {number} passes the 11-test");
    }
}

#[test]
fn emits_exactly_the_requested_count() {
    for count in [1, 2, 17, 100] {
        let result = engine(11).generate(Mode::Valid, count).expect("generation succeeds");
        assert_eq!(result.numbers.len() as u64, count);
        assert_eq!(result.report.generated, count);
        assert_eq!(result.report.requested, count);
    }
}

#[test]
fn zero_count_is_a_usage_error() {
    let result = engine(11).generate(Mode::Valid, 0);
    assert!(matches!(result, Err(GenerationError::InvalidRequest(_))));
}

#[test]
fn fixed_seed_reproduces_the_run() {
    let first = engine(42).generate(Mode::Valid, 50).expect("generation succeeds");
    let second = engine(42).generate(Mode::Valid, 50).expect("generation succeeds");
    assert_eq!(first.numbers, second.numbers);

    let other = engine(43).generate(Mode::Valid, 50).expect("generation succeeds");
    assert_ne!(first.numbers, other.numbers);
}

#[test]
fn report_counts_match_the_requested_mode() {
    let valid = engine(3).generate(Mode::Valid, 80).expect("generation succeeds");
    assert_eq!(valid.report.valid_count, 80);
    assert_eq!(valid.report.invalid_count, 0);
    assert!(valid.report.is_consistent());

    let invalid = engine(3).generate(Mode::Invalid, 80).expect("generation succeeds");
    assert_eq!(invalid.report.valid_count, 0);
    assert_eq!(invalid.report.invalid_count, 80);
    assert!(invalid.report.is_consistent());
}

#[test]
fn numbers_render_zero_padded() {
    let result = engine(5).generate(Mode::Valid, 300).expect("generation succeeds");
    for number in &result.numbers {
        let rendered = number.to_string();
        assert_eq!(rendered.len(), 9);
        assert!(rendered.chars().all(|ch| ch.is_ascii_digit()));
    }
}

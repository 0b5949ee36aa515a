use std::fs;

use elfproef_generate::output::{write_numbers, write_report};
use elfproef_generate::{GenerateOptions, GenerationEngine, GenerationReport, Mode};

fn generated(mode: Mode, count: u64) -> elfproef_generate::GenerationResult {
    let engine = GenerationEngine::new(GenerateOptions {
        seed: Some(99),
        ..GenerateOptions::default()
    });
    engine.generate(mode, count).expect("generation succeeds")
}

#[test]
fn writes_one_padded_number_per_line() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("numbers.txt");

    let result = generated(Mode::Valid, 25);
    let bytes = write_numbers(&path, &result.numbers).expect("file write succeeds");

    let content = fs::read_to_string(&path).expect("file readable");
    assert!(content.ends_with('\n'));
    // 9 digits plus the newline, per line.
    assert_eq!(bytes, 25 * 10);

    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 25);
    for line in lines {
        assert_eq!(line.len(), 9);
        assert!(line.chars().all(|ch| ch.is_ascii_digit()));
    }
}

#[test]
fn report_round_trips_through_json() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("report.json");

    let result = generated(Mode::Invalid, 10);
    write_report(&path, &result.report).expect("report write succeeds");

    let content = fs::read_to_string(&path).expect("report readable");
    let parsed: GenerationReport = serde_json::from_str(&content).expect("report parses");
    assert_eq!(parsed.mode, Mode::Invalid);
    assert_eq!(parsed.generated, 10);
    assert_eq!(parsed.invalid_count, 10);
    assert_eq!(parsed.run_id, result.report.run_id);
}

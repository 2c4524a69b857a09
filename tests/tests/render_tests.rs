use foundation::{Sample, SensorLog, write_csv, write_json};
use integration_tests::{CAPACITY, fill};

fn render_csv(log: &SensorLog) -> (String, usize) {
    let snapshot = log.snapshot();
    let mut out = Vec::new();
    let written = write_csv(&snapshot, &mut out).unwrap();
    (String::from_utf8(out).unwrap(), written)
}

#[test]
fn test_empty_log_renders_zero_bytes() {
    let log = SensorLog::new(CAPACITY);
    let (text, written) = render_csv(&log);
    assert_eq!(written, 0);
    assert!(text.is_empty());
}

#[test]
fn test_single_sample_renders_exact_line() {
    let log = SensorLog::new(CAPACITY);
    log.log(Sample::new(1000, 1.0, 2.0, 3.0));

    let (text, written) = render_csv(&log);
    assert_eq!(text, "1000,1.000000,2.000000,3.000000\n");
    assert_eq!(written, text.len());
    assert_eq!(log.len(), 1);
}

#[test]
fn test_line_count_matches_live_count() {
    let log = SensorLog::new(CAPACITY);
    fill(&log, 138);

    let (text, _) = render_csv(&log);
    assert_eq!(text.lines().count(), log.len());
    assert_eq!(text.lines().count(), CAPACITY);
}

#[test]
fn test_full_buffer_renders_oldest_to_newest() {
    let log = SensorLog::new(CAPACITY);
    fill(&log, CAPACITY as u32);

    let (text, _) = render_csv(&log);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), CAPACITY);
    assert!(lines[0].starts_with("0,"));
    assert!(lines[CAPACITY - 1].starts_with("127,"));
}

#[test]
fn test_render_after_reset_is_empty() {
    let log = SensorLog::new(CAPACITY);
    fill(&log, 2);
    log.reset();

    let (text, written) = render_csv(&log);
    assert_eq!(written, 0);
    assert!(text.is_empty());
    assert_eq!(log.len(), 0);
}

#[test]
fn test_json_snapshot_round_trips() {
    let log = SensorLog::new(4);
    log.log(Sample::new(1, 0.5, -0.5, 1.5));
    log.log(Sample::new(2, -16.0, 16.0, 0.0));

    let snapshot = log.snapshot();
    let mut out = Vec::new();
    let written = write_json(&snapshot, &mut out).unwrap();
    assert_eq!(written, out.len());

    let back: Vec<Sample> = serde_json::from_slice(&out).unwrap();
    assert_eq!(back, snapshot);
}

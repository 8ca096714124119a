use vidserve::range::{resolve, unsatisfied_content_range, RangeError, RangeRequest, ResolvedRange};

const TOTAL: u64 = 1000;

#[test]
fn closed_range_resolves_as_given() {
    let r = resolve("bytes=0-99", TOTAL).unwrap();
    assert_eq!(r, ResolvedRange { start: 0, end: 99, total: TOTAL });
    assert_eq!(r.len(), 100);
    assert_eq!(r.content_range(), "bytes 0-99/1000");
}

#[test]
fn open_end_runs_to_last_byte() {
    let r = resolve("bytes=100-", TOTAL).unwrap();
    assert_eq!(r.end, TOTAL - 1);
    assert_eq!(r.len(), TOTAL - 100);
}

#[test]
fn single_last_byte() {
    let r = resolve("bytes=999-999", TOTAL).unwrap();
    assert_eq!(r.len(), 1);
}

#[test]
fn end_past_file_is_clamped() {
    let r = resolve("bytes=900-5000", TOTAL).unwrap();
    assert_eq!(r.end, TOTAL - 1);
    assert_eq!(r.len(), 100);
}

#[test]
fn whitespace_and_unit_case_tolerated() {
    let r = resolve("  Bytes= 10 - 19 ", TOTAL).unwrap();
    assert_eq!((r.start, r.end), (10, 19));
}

#[test]
fn start_at_or_past_total_is_unsatisfiable() {
    assert_eq!(resolve("bytes=1000-1010", TOTAL), Err(RangeError::NotSatisfiable));
    assert_eq!(resolve("bytes=5000-", TOTAL), Err(RangeError::NotSatisfiable));
}

#[test]
fn start_after_end_is_unsatisfiable() {
    assert_eq!(resolve("bytes=50-10", TOTAL), Err(RangeError::NotSatisfiable));
}

#[test]
fn empty_file_never_satisfies() {
    assert_eq!(resolve("bytes=0-", 0), Err(RangeError::NotSatisfiable));
}

#[test]
fn missing_start_is_invalid() {
    assert_eq!(resolve("bytes=-500", TOTAL), Err(RangeError::Invalid));
    assert_eq!(resolve("bytes=-", TOTAL), Err(RangeError::Invalid));
}

#[test]
fn malformed_values_are_invalid() {
    for header in [
        "",
        "bytes",
        "bytes=",
        "bytes=abc-",
        "bytes=+5-10",
        "bytes=1.5-2",
        "bytes=10",
        "bytes=1-2-3",
        "items=0-10",
        "bytes=99999999999999999999999-",
    ] {
        assert_eq!(resolve(header, TOTAL), Err(RangeError::Invalid), "header {header:?}");
    }
}

#[test]
fn multi_range_is_invalid() {
    assert_eq!(resolve("bytes=0-10,20-30", TOTAL), Err(RangeError::Invalid));
    assert_eq!(resolve("bytes=0-10, 20-", TOTAL), Err(RangeError::Invalid));
}

#[test]
fn parse_keeps_unvalidated_intent() {
    let req = RangeRequest::parse("bytes=7000-").unwrap();
    assert_eq!(req, RangeRequest { start: Some(7000), end: None });
}

#[test]
fn unsatisfied_content_range_format() {
    assert_eq!(unsatisfied_content_range(1234), "bytes */1234");
}

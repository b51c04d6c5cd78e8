//! Tests for safe-resume validation.

use crate::storage::WriteMode;
use crate::transfer::{ContentRange, ResponseHead};

use super::{plan_for_response, ResumePlan, ValidationErrorKind};

fn head(status: u32, content_length: Option<u64>, range: Option<(Option<u64>, Option<u64>)>) -> ResponseHead {
    ResponseHead {
        status: Some(status),
        content_length,
        content_range: range.map(|(start, total)| ContentRange {
            start,
            end: None,
            total,
        }),
        accept_ranges: true,
    }
}

#[test]
fn fresh_download_writes_from_zero() {
    let h = head(200, Some(1000), None);
    let plan = plan_for_response(0, &h).unwrap();
    assert_eq!(plan, ResumePlan::Fresh);
    assert_eq!(plan.write_mode(), Some(WriteMode::Truncate));
    assert_eq!(plan.expected_total(&h), Some(1000));
}

#[test]
fn honored_range_appends_and_reports_full_size() {
    let h = head(206, Some(600), Some((Some(400), Some(1000))));
    let plan = plan_for_response(400, &h).unwrap();
    assert_eq!(plan, ResumePlan::Resume { offset: 400 });
    assert_eq!(plan.write_mode(), Some(WriteMode::Append));
    assert_eq!(plan.base_offset(), 400);
    assert_eq!(plan.expected_total(&h), Some(1000));
}

#[test]
fn partial_without_content_range_adds_offset_to_length() {
    let h = head(206, Some(600), None);
    let plan = plan_for_response(400, &h).unwrap();
    assert_eq!(plan.expected_total(&h), Some(1000));
}

#[test]
fn ignored_range_restarts_from_zero() {
    let h = head(200, Some(1000), None);
    let plan = plan_for_response(400, &h).unwrap();
    assert_eq!(plan, ResumePlan::Restart { discarded: 400 });
    assert_eq!(plan.write_mode(), Some(WriteMode::Truncate));
    assert_eq!(plan.base_offset(), 0);
    assert_eq!(plan.expected_total(&h), Some(1000));
}

#[test]
fn wrong_offset_is_rejected() {
    let h = head(206, Some(1000), Some((Some(0), Some(1000))));
    let err = plan_for_response(400, &h).unwrap_err();
    assert_eq!(
        err.kind,
        ValidationErrorKind::RangeMismatch {
            requested: 400,
            served: 0
        }
    );
    assert!(err.to_string().contains("400"));
}

#[test]
fn unsatisfiable_range_at_full_size_is_complete() {
    let h = head(416, None, Some((None, Some(1000))));
    let plan = plan_for_response(1000, &h).unwrap();
    assert_eq!(plan, ResumePlan::AlreadyComplete);
    assert_eq!(plan.write_mode(), None);
}

#[test]
fn unsatisfiable_range_with_other_size_is_error() {
    let h = head(416, None, Some((None, Some(800))));
    let err = plan_for_response(1000, &h).unwrap_err();
    assert_eq!(err.kind, ValidationErrorKind::UnexpectedStatus(416));
}

#[test]
fn error_status_is_rejected() {
    let h = head(404, Some(9), None);
    let err = plan_for_response(0, &h).unwrap_err();
    assert_eq!(err.kind, ValidationErrorKind::UnexpectedStatus(404));
}

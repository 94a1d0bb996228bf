use std::fmt;

use status_rail::{Status, StatusCode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HashStatus {
    Ok,
    DigestMismatch,
    UnknownAlgorithm,
}

impl fmt::Display for HashStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl StatusCode for HashStatus {
    const OK: Self = HashStatus::Ok;
}

#[test]
fn custom_status_enum_follows_truthiness_rule() {
    assert!(HashStatus::Ok.is_ok());
    assert!(HashStatus::DigestMismatch.is_failure());
    assert!(!HashStatus::UnknownAlgorithm.is_ok());
}

#[test]
fn bool_is_a_status_code() {
    assert!(true.is_ok());
    assert!(false.is_failure());
    assert!(<bool as StatusCode>::OK);
}

#[test]
fn default_status_is_ok() {
    assert_eq!(Status::default(), Status::Ok);
    assert_eq!(Status::OK, Status::Ok);
    assert_eq!(Status::Ok.code(), 0);
}

#[test]
fn failures_have_negative_codes_and_false_truthiness() {
    for status in Status::ALL.into_iter().skip(1) {
        assert!(status.code() < 0, "{status:?}");
        assert!(!bool::from(status));
        assert!(!status);
    }
}

#[test]
fn display_shows_name_and_code() {
    assert_eq!(Status::NotFound.to_string(), "not_found (-5)");
    assert_eq!(Status::Ok.to_string(), "ok (0)");
    assert_eq!(i32::from(Status::Timeout), -14);
}

#[test]
fn unknown_codes_are_rejected() {
    assert_eq!(Status::from_code(1), None);
    assert_eq!(Status::from_code(-15), None);
    assert_eq!(Status::from_code(-2), Some(Status::InvalidParam));
}

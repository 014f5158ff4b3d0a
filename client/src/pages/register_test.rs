use super::*;
use crate::net::types::ApiError;

#[test]
fn register_step_failure_uses_server_message() {
    let err = SignupError::Register(ApiError::Status { status: 400, message: Some("Username already exists".to_owned()) });
    assert_eq!(signup_failure_message(&err), "Username already exists");
}

#[test]
fn register_step_failure_falls_back() {
    let err = SignupError::Register(ApiError::Network("offline".to_owned()));
    assert_eq!(signup_failure_message(&err), "Registration failed.");
}

#[test]
fn login_step_failure_explains_account_exists() {
    let err = SignupError::Login(ApiError::Status { status: 500, message: None });
    assert!(signup_failure_message(&err).starts_with("Registration succeeded"));
}

#[test]
fn signup_success_announces_registration() {
    let outcome: Result<(), SignupError> = Ok(());
    assert_eq!(signup_notices(&outcome), vec![(ToastKind::Success, REGISTER_SUCCESS_MESSAGE.to_owned())]);
}

#[test]
fn login_step_failure_still_announces_registration_first() {
    let outcome: Result<(), SignupError> = Err(SignupError::Login(ApiError::Network("offline".to_owned())));
    let notices = signup_notices(&outcome);
    assert_eq!(notices.len(), 2);
    assert_eq!(notices[0], (ToastKind::Success, REGISTER_SUCCESS_MESSAGE.to_owned()));
    assert_eq!(notices[1].0, ToastKind::Error);
    assert!(notices[1].1.starts_with("Registration succeeded"));
}

#[test]
fn register_step_failure_only_reports_error() {
    let outcome: Result<(), SignupError> = Err(SignupError::Register(ApiError::Status {
        status: 400,
        message: Some("Username already exists".to_owned()),
    }));
    assert_eq!(signup_notices(&outcome), vec![(ToastKind::Error, "Username already exists".to_owned())]);
}

use super::*;
use crate::net::types::{Role, User};

fn logged_in(role: &str) -> AuthState {
    AuthState {
        user: Some(User { username: "alice".to_owned(), role: Role::parse(role) }),
        loading: false,
    }
}

#[test]
fn pending_while_loading() {
    assert_eq!(AdminAccess::evaluate(&AuthState::pending()), AdminAccess::Pending);
    assert_eq!(AdminAccess::Pending.redirect(), None);
}

#[test]
fn admin_role_is_granted_case_insensitively() {
    assert_eq!(AdminAccess::evaluate(&logged_in("admin")), AdminAccess::Granted);
    assert_eq!(AdminAccess::evaluate(&logged_in("Admin")), AdminAccess::Granted);
    assert_eq!(AdminAccess::evaluate(&logged_in("ADMIN")), AdminAccess::Granted);
    assert_eq!(AdminAccess::Granted.redirect(), None);
}

#[test]
fn regular_user_is_sent_to_catalog_with_denial() {
    let access = AdminAccess::evaluate(&logged_in("user"));
    assert_eq!(access, AdminAccess::Denied);
    assert_eq!(access.redirect(), Some(("/", ADMIN_DENIED_MESSAGE)));
}

#[test]
fn logged_out_visitor_is_sent_to_login() {
    let access = AdminAccess::evaluate(&AuthState::default());
    assert_eq!(access, AdminAccess::LoginRequired);
    assert_eq!(access.redirect(), Some(("/login", LOGIN_REQUIRED_MESSAGE)));
}

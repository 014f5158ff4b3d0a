use super::*;

// =============================================================
// Helpers
// =============================================================

fn make_sweet(name: &str, description: &str, quantity: u32) -> Sweet {
    Sweet {
        id: SweetId::new("1"),
        name: name.to_owned(),
        description: description.to_owned(),
        price: 2.5,
        quantity,
        image_url: None,
    }
}

// =============================================================
// Sweet serde
// =============================================================

#[test]
fn sweet_deserializes_server_shape_with_numeric_id() {
    let sweet: Sweet = serde_json::from_value(serde_json::json!({
        "id": 42,
        "name": "Fudge",
        "description": "Rich chocolate fudge",
        "price": 3.75,
        "quantity": 12,
        "imageUrl": "https://example.com/fudge.jpg"
    }))
    .unwrap();
    assert_eq!(sweet.id, SweetId::new("42"));
    assert_eq!(sweet.name, "Fudge");
    assert!((sweet.price - 3.75).abs() < f64::EPSILON);
    assert_eq!(sweet.quantity, 12);
    assert_eq!(sweet.image_url.as_deref(), Some("https://example.com/fudge.jpg"));
}

#[test]
fn sweet_accepts_string_id_null_description_and_blank_image() {
    let sweet: Sweet = serde_json::from_value(serde_json::json!({
        "id": "abc",
        "name": "Toffee",
        "description": null,
        "price": 1.0,
        "quantity": 0,
        "imageUrl": "  "
    }))
    .unwrap();
    assert_eq!(sweet.id.as_str(), "abc");
    assert_eq!(sweet.description, "");
    assert_eq!(sweet.image_url, None);
}

#[test]
fn sweet_rejects_negative_quantity() {
    let result = serde_json::from_value::<Sweet>(serde_json::json!({
        "id": 1, "name": "x", "description": "", "price": 1.0, "quantity": -1
    }));
    assert!(result.is_err());
}

#[test]
fn sweet_draft_serializes_camel_case() {
    let draft = SweetDraft {
        name: "Ladoo".to_owned(),
        description: "Gram flour sweet".to_owned(),
        price: 10.0,
        quantity: 4,
        image_url: None,
    };
    assert_eq!(
        serde_json::to_value(&draft).unwrap(),
        serde_json::json!({
            "name": "Ladoo",
            "description": "Gram flour sweet",
            "price": 10.0,
            "quantity": 4,
            "imageUrl": null
        })
    );
}

// =============================================================
// Sweet helpers
// =============================================================

#[test]
fn matches_is_case_insensitive_over_name_and_description() {
    let sweet = make_sweet("Dark Chocolate", "Bitter and smooth", 3);
    assert!(sweet.matches("chocolate"));
    assert!(sweet.matches("SMOOTH"));
    assert!(!sweet.matches("caramel"));
}

#[test]
fn empty_term_matches_everything() {
    assert!(make_sweet("a", "b", 1).matches(""));
}

#[test]
fn stock_level_buckets() {
    assert_eq!(make_sweet("a", "", 0).stock_level(), StockLevel::Out);
    assert_eq!(make_sweet("a", "", 4).stock_level(), StockLevel::Low);
    assert_eq!(make_sweet("a", "", 5).stock_level(), StockLevel::Plenty);
    assert!(!make_sweet("a", "", 0).is_available());
}

#[test]
fn apply_draft_keeps_id() {
    let mut sweet = make_sweet("Old", "old", 1);
    sweet.apply_draft(&SweetDraft {
        name: "New".to_owned(),
        description: "new".to_owned(),
        price: 9.0,
        quantity: 7,
        image_url: Some("https://example.com/n.png".to_owned()),
    });
    assert_eq!(sweet.id, SweetId::new("1"));
    assert_eq!(sweet.name, "New");
    assert_eq!(sweet.quantity, 7);
    assert_eq!(sweet.image_url.as_deref(), Some("https://example.com/n.png"));
}

// =============================================================
// Role / User
// =============================================================

#[test]
fn role_parse_is_case_insensitive() {
    assert_eq!(Role::parse("admin"), Role::Admin);
    assert_eq!(Role::parse("Admin"), Role::Admin);
    assert_eq!(Role::parse("ADMIN"), Role::Admin);
    assert_eq!(Role::parse("USER"), Role::User);
    assert_eq!(Role::parse("manager"), Role::User);
}

#[test]
fn user_ignores_extra_server_fields_and_defaults_role() {
    let user: User = serde_json::from_value(serde_json::json!({
        "id": 7,
        "username": "bob",
        "password": "$2a$10$hash"
    }))
    .unwrap();
    assert_eq!(user, User { username: "bob".to_owned(), role: Role::User });
}

#[test]
fn user_serializes_lowercase_role() {
    let user = User { username: "alice".to_owned(), role: Role::Admin };
    assert_eq!(
        serde_json::to_string(&user).unwrap(),
        r#"{"username":"alice","role":"admin"}"#
    );
}

// =============================================================
// LoginResponse variants
// =============================================================

#[test]
fn login_response_with_user_variant() {
    let resp: LoginResponse = serde_json::from_value(serde_json::json!({
        "token": "t1",
        "user": { "username": "alice", "role": "ADMIN" }
    }))
    .unwrap();
    assert_eq!(
        resp,
        LoginResponse::WithUser {
            token: "t1".to_owned(),
            user: User { username: "alice".to_owned(), role: Role::Admin },
        }
    );
}

#[test]
fn login_response_token_only_variant_for_missing_or_null_user() {
    let missing: LoginResponse = serde_json::from_value(serde_json::json!({ "token": "t2" })).unwrap();
    let null: LoginResponse = serde_json::from_value(serde_json::json!({ "token": "t2", "user": null })).unwrap();
    assert_eq!(missing, LoginResponse::TokenOnly { token: "t2".to_owned() });
    assert_eq!(null, missing);
}

#[test]
fn token_only_session_synthesizes_default_user() {
    let (token, user) = LoginResponse::TokenOnly { token: "t2".to_owned() }.into_session("carol");
    assert_eq!(token, "t2");
    assert_eq!(user, User { username: "carol".to_owned(), role: Role::User });
}

#[test]
fn with_user_session_ignores_submitted_username() {
    let resp = LoginResponse::WithUser {
        token: "t3".to_owned(),
        user: User { username: "server-name".to_owned(), role: Role::Admin },
    };
    assert_eq!(resp.token(), "t3");
    let (_, user) = resp.into_session("typed-name");
    assert_eq!(user.username, "server-name");
}

#[test]
fn login_response_without_token_is_rejected() {
    assert!(serde_json::from_value::<LoginResponse>(serde_json::json!({ "user": null })).is_err());
}

// =============================================================
// ApiError
// =============================================================

#[test]
fn parse_error_message_prefers_error_field() {
    assert_eq!(
        parse_error_message(r#"{"error":"Out of stock","message":"ignored"}"#),
        Some("Out of stock".to_owned())
    );
    assert_eq!(parse_error_message(r#"{"message":"Bad credentials"}"#), Some("Bad credentials".to_owned()));
    assert_eq!(parse_error_message(r#"{"error":"  "}"#), None);
    assert_eq!(parse_error_message("<html>502</html>"), None);
}

#[test]
fn user_message_uses_server_text_or_fallback() {
    let with_text = ApiError::Status { status: 400, message: Some("Sweet is out of stock".to_owned()) };
    let without = ApiError::Status { status: 500, message: None };
    assert_eq!(with_text.user_message("Purchase failed."), "Sweet is out of stock");
    assert_eq!(without.user_message("Purchase failed."), "Purchase failed.");
    assert_eq!(ApiError::Network("offline".to_owned()).user_message("x"), "x");
}

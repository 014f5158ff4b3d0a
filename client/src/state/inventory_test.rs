use super::*;

fn sweet(id: &str, name: &str, quantity: u32) -> Sweet {
    Sweet {
        id: SweetId::new(id),
        name: name.to_owned(),
        description: format!("{name} description"),
        price: 4.0,
        quantity,
        image_url: None,
    }
}

fn inventory() -> InventoryState {
    let mut state = InventoryState::loading();
    state.load(vec![sweet("1", "Barfi", 10), sweet("2", "Jalebi", 2)]);
    state
}

#[test]
fn editor_modes_drive_labels_and_initial_values() {
    assert_eq!(EditorMode::Create.title(), "Add New Sweet");
    assert_eq!(EditorMode::Create.submit_label(), "Add Sweet");
    assert_eq!(EditorMode::Create.initial(), None);

    let edit = EditorMode::Edit(sweet("1", "Barfi", 10));
    assert_eq!(edit.title(), "Edit Sweet");
    assert_eq!(edit.submit_label(), "Update Sweet");
    assert_eq!(edit.initial().map(|s| s.name.as_str()), Some("Barfi"));
}

#[test]
fn open_and_close_editor() {
    let mut state = inventory();
    state.open_edit(sweet("2", "Jalebi", 2));
    assert!(matches!(state.editor, Some(EditorMode::Edit(_))));
    state.saving = true;
    state.close_editor();
    assert_eq!(state.editor, None);
    assert!(!state.saving);
    state.open_create();
    assert_eq!(state.editor, Some(EditorMode::Create));
}

#[test]
fn apply_update_merges_into_matching_row_only() {
    let mut state = inventory();
    let draft = SweetDraft {
        name: "Jalebi Deluxe".to_owned(),
        description: "Crispier".to_owned(),
        price: 6.5,
        quantity: 20,
        image_url: None,
    };
    state.apply_update(&SweetId::new("2"), &draft);

    assert_eq!(state.items[1].id, SweetId::new("2"));
    assert_eq!(state.items[1].name, "Jalebi Deluxe");
    assert_eq!(state.items[1].quantity, 20);
    assert_eq!(state.items[0].name, "Barfi");
}

#[test]
fn apply_update_for_unknown_id_is_noop() {
    let mut state = inventory();
    let before = state.items.clone();
    state.apply_update(
        &SweetId::new("99"),
        &SweetDraft {
            name: "x".to_owned(),
            description: "x".to_owned(),
            price: 0.0,
            quantity: 0,
            image_url: None,
        },
    );
    assert_eq!(state.items, before);
}

#[test]
fn delete_confirmation_flow() {
    let mut state = inventory();
    state.request_delete(SweetId::new("1"));
    assert_eq!(state.pending_delete, Some(SweetId::new("1")));
    assert_eq!(state.name_of(&SweetId::new("1")), Some("Barfi"));
    state.cancel_delete();
    assert_eq!(state.pending_delete, None);
    assert_eq!(state.items.len(), 2);
}

#[test]
fn remove_drops_row_by_id() {
    let mut state = inventory();
    state.remove(&SweetId::new("1"));
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, SweetId::new("2"));
}

fn barfi_draft() -> SweetDraft {
    SweetDraft {
        name: "Kaju Barfi".to_owned(),
        description: "Cashew fudge".to_owned(),
        price: 6.5,
        quantity: 12,
        image_url: None,
    }
}

fn spring_forbidden() -> ApiError {
    ApiError::Status {
        status: 403,
        message: crate::net::types::parse_error_message(
            r#"{"status":403,"error":"Forbidden","path":"/api/sweets"}"#,
        ),
    }
}

#[test]
fn settle_save_create_closes_editor_and_requests_refetch() {
    let mut state = inventory();
    state.open_create();
    state.saving = true;

    let outcome = state.settle_save(&EditorMode::Create, &barfi_draft(), true);

    assert_eq!(
        outcome,
        SaveOutcome { kind: ToastKind::Success, message: CREATED_MESSAGE, refetch: true }
    );
    assert_eq!(state.editor, None);
    assert!(!state.saving);
    // The list is replaced by the re-fetch, not patched locally.
    assert_eq!(state.items.len(), 2);
}

#[test]
fn settle_save_edit_merges_without_refetch() {
    let mut state = inventory();
    let mode = EditorMode::Edit(sweet("1", "Barfi", 10));
    state.open_edit(sweet("1", "Barfi", 10));
    state.saving = true;

    let outcome = state.settle_save(&mode, &barfi_draft(), true);

    assert_eq!(
        outcome,
        SaveOutcome { kind: ToastKind::Success, message: UPDATED_MESSAGE, refetch: false }
    );
    assert_eq!(state.editor, None);
    let row = row(&state, "1");
    assert_eq!(row.name, "Kaju Barfi");
    assert_eq!(row.quantity, 12);
    assert_eq!(row.id, SweetId::new("1"));
}

#[test]
fn settle_save_failure_keeps_editor_open() {
    let mut state = inventory();
    let mode = EditorMode::Edit(sweet("2", "Jalebi", 2));
    state.open_edit(sweet("2", "Jalebi", 2));
    state.saving = true;

    let outcome = state.settle_save(&mode, &barfi_draft(), false);

    assert_eq!(
        outcome,
        SaveOutcome { kind: ToastKind::Error, message: SAVE_FAILED_MESSAGE, refetch: false }
    );
    assert_eq!(state.editor, Some(mode));
    assert!(!state.saving);
    assert_eq!(row(&state, "2").name, "Jalebi");
}

#[test]
fn settle_delete_removes_only_on_success() {
    let mut state = inventory();
    let id = SweetId::new("2");

    assert_eq!(state.settle_delete(&id, false), (ToastKind::Error, DELETE_FAILED_MESSAGE));
    assert_eq!(state.items.len(), 2);

    assert_eq!(state.settle_delete(&id, true), (ToastKind::Success, DELETED_MESSAGE));
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.name_of(&id), None);
}

#[test]
fn settle_fetch_failure_uses_fixed_text_over_server_error() {
    let mut state = InventoryState::loading();

    assert_eq!(state.settle_fetch(Err(spring_forbidden())), Some(FETCH_FAILED_MESSAGE));
    assert!(!state.loading);
    assert!(state.items.is_empty());

    assert_eq!(state.settle_fetch(Ok(vec![sweet("9", "Ladoo", 3)])), None);
    assert_eq!(state.items.len(), 1);
}

#[test]
fn admin_failure_messages_are_fixed() {
    // Server text is logged, never shown, for admin operations.
    assert_eq!(spring_forbidden().server_message(), Some("Forbidden"));
    let mut state = inventory();
    let outcome = state.settle_save(&EditorMode::Create, &barfi_draft(), false);
    assert_eq!(outcome.message, "Operation failed. Please try again.");
    assert_eq!(state.settle_delete(&SweetId::new("1"), false).1, "Failed to delete sweet");
}

fn row<'a>(state: &'a InventoryState, id: &str) -> &'a Sweet {
    state.items.iter().find(|s| s.id.as_str() == id).unwrap()
}

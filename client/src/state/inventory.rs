//! Admin inventory table state.
//!
//! DESIGN
//! ======
//! Create re-fetches the whole list (the echoed object is not trusted);
//! update merges the submitted draft into the matching row; delete removes the
//! row by id. The modal editor and the delete confirmation live here too so
//! the page only wires events.
//!
//! Failure toasts are fixed strings; the server's error text only goes to
//! the console log.

#[cfg(test)]
#[path = "inventory_test.rs"]
mod inventory_test;

use crate::net::types::{ApiError, Sweet, SweetDraft, SweetId};
use crate::state::toast::ToastKind;

/// What the modal form is doing.
#[derive(Clone, Debug, PartialEq)]
pub enum EditorMode {
    Create,
    Edit(Sweet),
}

impl EditorMode {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Create => "Add New Sweet",
            Self::Edit(_) => "Edit Sweet",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            Self::Create => "Add Sweet",
            Self::Edit(_) => "Update Sweet",
        }
    }

    pub fn initial(&self) -> Option<&Sweet> {
        match self {
            Self::Create => None,
            Self::Edit(sweet) => Some(sweet),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct InventoryState {
    pub items: Vec<Sweet>,
    pub loading: bool,
    pub editor: Option<EditorMode>,
    pub saving: bool,
    pub pending_delete: Option<SweetId>,
}

impl InventoryState {
    pub fn loading() -> Self {
        Self { loading: true, ..Self::default() }
    }

    pub fn load(&mut self, items: Vec<Sweet>) {
        self.items = items;
        self.loading = false;
    }

    pub fn open_create(&mut self) {
        self.editor = Some(EditorMode::Create);
    }

    pub fn open_edit(&mut self, sweet: Sweet) {
        self.editor = Some(EditorMode::Edit(sweet));
    }

    /// Close the modal; the form draft is discarded with it.
    pub fn close_editor(&mut self) {
        self.editor = None;
        self.saving = false;
    }

    /// Merge a saved draft into the local row with the same id.
    pub fn apply_update(&mut self, id: &SweetId, draft: &SweetDraft) {
        if let Some(sweet) = self.items.iter_mut().find(|s| &s.id == id) {
            sweet.apply_draft(draft);
        }
    }

    pub fn request_delete(&mut self, id: SweetId) {
        self.pending_delete = Some(id);
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    pub fn remove(&mut self, id: &SweetId) {
        self.items.retain(|s| &s.id != id);
    }

    pub fn name_of(&self, id: &SweetId) -> Option<&str> {
        self.items.iter().find(|s| &s.id == id).map(|s| s.name.as_str())
    }

    /// Apply a list fetch result. Returns the toast text on failure.
    pub fn settle_fetch(&mut self, result: Result<Vec<Sweet>, ApiError>) -> Option<&'static str> {
        match result {
            Ok(items) => {
                self.load(items);
                None
            }
            Err(_) => {
                self.loading = false;
                Some(FETCH_FAILED_MESSAGE)
            }
        }
    }

    /// Apply a settled create/update. Success closes the editor; a create
    /// asks for a re-fetch while an update merges `draft` locally. Failure
    /// keeps the editor open so the admin can retry.
    pub fn settle_save(&mut self, mode: &EditorMode, draft: &SweetDraft, succeeded: bool) -> SaveOutcome {
        if !succeeded {
            self.saving = false;
            return SaveOutcome { kind: ToastKind::Error, message: SAVE_FAILED_MESSAGE, refetch: false };
        }
        self.close_editor();
        match mode {
            EditorMode::Create => SaveOutcome { kind: ToastKind::Success, message: CREATED_MESSAGE, refetch: true },
            EditorMode::Edit(sweet) => {
                self.apply_update(&sweet.id, draft);
                SaveOutcome { kind: ToastKind::Success, message: UPDATED_MESSAGE, refetch: false }
            }
        }
    }

    /// Apply a settled delete and return its toast.
    pub fn settle_delete(&mut self, id: &SweetId, succeeded: bool) -> (ToastKind, &'static str) {
        if succeeded {
            self.remove(id);
            (ToastKind::Success, DELETED_MESSAGE)
        } else {
            (ToastKind::Error, DELETE_FAILED_MESSAGE)
        }
    }
}

/// Follow-up for the page after a save settles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SaveOutcome {
    pub kind: ToastKind,
    pub message: &'static str,
    /// Re-fetch the whole list (create only).
    pub refetch: bool,
}

pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch sweets.";
pub const SAVE_FAILED_MESSAGE: &str = "Operation failed. Please try again.";
pub const DELETE_FAILED_MESSAGE: &str = "Failed to delete sweet";
pub const CREATED_MESSAGE: &str = "Sweet created successfully";
pub const UPDATED_MESSAGE: &str = "Sweet updated successfully";
pub const DELETED_MESSAGE: &str = "Sweet deleted successfully";

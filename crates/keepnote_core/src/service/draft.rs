//! Draft editors buffering user input before it reaches the store.
//!
//! # Responsibility
//! - Hold keystrokes for the inline add form and the edit modal.
//! - Write buffered values back to the store when the commit trigger fires.
//!
//! # Invariants
//! - Buffered edits are invisible to the store until commit.
//! - The add form commits only non-blank drafts; the edit modal always
//!   saves on dismiss, even when nothing changed.

use crate::model::category::Category;
use crate::model::note::{Note, NoteField, NoteId, NotePatch};
use crate::repo::sequence_repo::NoteRepository;
use crate::service::note_store::NoteStore;
use log::debug;

/// Inline "Take a note..." form.
#[derive(Debug, Clone)]
pub struct AddNoteForm {
    draft: Note,
    expanded: bool,
}

impl AddNoteForm {
    /// Creates a collapsed form holding a fresh draft from `store`.
    pub fn new<R: NoteRepository>(store: &NoteStore<R>) -> Self {
        Self {
            draft: store.create_draft(),
            expanded: false,
        }
    }

    /// Current buffered draft.
    pub fn draft(&self) -> &Note {
        &self.draft
    }

    /// Whether the heading field is visible.
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Expands the form, revealing the heading field.
    pub fn focus(&mut self) {
        self.expanded = true;
    }

    /// Buffers a new value for one field.
    pub fn edit(&mut self, field: NoteField, value: impl Into<String>) {
        self.draft.set_field(field, value);
    }

    /// Collapses the form and commits the draft when it has content.
    ///
    /// On commit the form starts over with a fresh draft id. Returns the id
    /// of the committed note.
    pub fn click_away<R: NoteRepository>(&mut self, store: &mut NoteStore<R>) -> Option<NoteId> {
        self.expanded = false;
        if self.draft.is_blank() {
            return None;
        }

        let next = store.create_draft();
        let draft = std::mem::replace(&mut self.draft, next);
        store.commit_draft(draft)
    }
}

/// Modal editor opened by clicking an active note card.
#[derive(Debug, Clone)]
pub struct EditNoteModal {
    edited: Note,
}

impl EditNoteModal {
    /// Opens the modal with a copy of `note`.
    pub fn open(note: &Note) -> Self {
        debug!("event=edit_open module=draft status=ok note_id={}", note.id);
        Self {
            edited: note.clone(),
        }
    }

    /// Opens the modal on the active note with `id`, if present.
    pub fn open_active<R: NoteRepository>(store: &NoteStore<R>, id: NoteId) -> Option<Self> {
        store.get(Category::Active, id).map(Self::open)
    }

    pub fn note_id(&self) -> NoteId {
        self.edited.id
    }

    /// Buffered copy being edited.
    pub fn edited(&self) -> &Note {
        &self.edited
    }

    pub fn edit(&mut self, field: NoteField, value: impl Into<String>) {
        self.edited.set_field(field, value);
    }

    /// Closes the modal, saving both fields into the active sequence.
    ///
    /// Returns whether the note was still active and received the save.
    pub fn dismiss<R: NoteRepository>(self, store: &mut NoteStore<R>) -> bool {
        let patch = NotePatch::replace_with(&self.edited);
        store.update_note(Category::Active, self.edited.id, patch)
    }
}

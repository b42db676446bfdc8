//! Note domain model.
//!
//! # Responsibility
//! - Define the note record rendered by all three views.
//! - Define field-level patches used by editors.
//!
//! # Invariants
//! - `id` is generated once and never reassigned.
//! - A note with both fields empty is "blank" and is never committed.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier of one note for the lifetime of a session.
pub type NoteId = Uuid;

/// Note record: a heading and a free-form body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub heading: String,
    pub text: String,
}

impl Note {
    /// Creates an empty note with a freshly generated id.
    pub fn blank() -> Self {
        Self::with_id(Uuid::new_v4(), "", "")
    }

    /// Creates a note with a generated id and the given fields.
    pub fn new(heading: impl Into<String>, text: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), heading, text)
    }

    /// Creates a note with a caller-provided id.
    pub fn with_id(id: NoteId, heading: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id,
            heading: heading.into(),
            text: text.into(),
        }
    }

    /// Returns whether both fields are empty.
    ///
    /// Whitespace counts as content.
    pub fn is_blank(&self) -> bool {
        self.heading.is_empty() && self.text.is_empty()
    }

    /// Sets one field by name.
    pub fn set_field(&mut self, field: NoteField, value: impl Into<String>) {
        match field {
            NoteField::Heading => self.heading = value.into(),
            NoteField::Text => self.text = value.into(),
        }
    }

    /// Applies `patch`, returning whether any field value changed.
    pub fn apply(&mut self, patch: NotePatch) -> bool {
        let mut changed = false;
        if let Some(heading) = patch.heading {
            changed |= self.heading != heading;
            self.heading = heading;
        }
        if let Some(text) = patch.text {
            changed |= self.text != text;
            self.text = text;
        }
        changed
    }
}

/// Editable note field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoteField {
    Heading,
    Text,
}

impl NoteField {
    /// Parses the field names used by editor inputs.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "heading" | "title" => Some(Self::Heading),
            "text" | "body" => Some(Self::Text),
            _ => None,
        }
    }
}

/// Partial replacement of note fields. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotePatch {
    pub heading: Option<String>,
    pub text: Option<String>,
}

impl NotePatch {
    /// Patch replacing both fields with the values from `note`.
    pub fn replace_with(note: &Note) -> Self {
        Self {
            heading: Some(note.heading.clone()),
            text: Some(note.text.clone()),
        }
    }

    pub fn heading(value: impl Into<String>) -> Self {
        Self {
            heading: Some(value.into()),
            text: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Note, NoteField, NotePatch};

    #[test]
    fn blank_notes_get_distinct_ids() {
        let a = Note::blank();
        let b = Note::blank();
        assert!(a.is_blank());
        assert_ne!(a.id, b.id);
        assert!(!a.id.is_nil());
    }

    #[test]
    fn whitespace_is_not_blank() {
        let note = Note::new(" ", "");
        assert!(!note.is_blank());
    }

    #[test]
    fn apply_reports_only_real_changes() {
        let mut note = Note::new("Groceries", "milk");
        assert!(!note.apply(NotePatch::heading("Groceries")));
        assert!(note.apply(NotePatch {
            heading: None,
            text: Some("milk, eggs".to_string()),
        }));
        assert_eq!(note.text, "milk, eggs");
        assert_eq!(note.heading, "Groceries");
    }

    #[test]
    fn field_names_accept_input_aliases() {
        assert_eq!(NoteField::parse("Title"), Some(NoteField::Heading));
        assert_eq!(NoteField::parse("body"), Some(NoteField::Text));
        assert_eq!(NoteField::parse("color"), None);
    }
}

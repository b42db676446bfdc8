//! Note repository contract and three-sequence implementation.
//!
//! # Responsibility
//! - Hold the `active`, `archived` and `trashed` sequences.
//! - Offer positional primitives (take, insert, remove) per sequence.
//!
//! # Invariants
//! - Sequence order is preserved by every primitive except the one that is
//!   explicitly positional.
//! - Lookups are identity based (`NoteId`), never content based.

use crate::model::category::Category;
use crate::model::note::{Note, NoteId};

/// Storage contract for the three note sequences.
///
/// Implementations may use any layout as long as `notes` yields each
/// category in its observable order.
pub trait NoteRepository {
    /// Returns one sequence in display order.
    fn notes(&self, category: Category) -> &[Note];
    /// Returns a mutable handle to the note with `id` inside `category`.
    fn get_mut(&mut self, category: Category, id: NoteId) -> Option<&mut Note>;
    /// Removes and returns the note with `id` from `category`.
    fn take(&mut self, category: Category, id: NoteId) -> Option<Note>;
    /// Inserts `note` at the front of `category`.
    fn push_front(&mut self, category: Category, note: Note);
    /// Removes the note at `index` in `category`.
    fn remove_at(&mut self, category: Category, index: usize) -> Option<Note>;
    /// Inserts `note` at `index`, clamped to the sequence length.
    fn insert_at(&mut self, category: Category, index: usize, note: Note);

    /// Returns the position of `id` inside `category`.
    fn position(&self, category: Category, id: NoteId) -> Option<usize> {
        self.notes(category).iter().position(|note| note.id == id)
    }

    /// Returns the note with `id` inside `category`.
    fn get(&self, category: Category, id: NoteId) -> Option<&Note> {
        self.notes(category).iter().find(|note| note.id == id)
    }
}

/// Three parallel vectors, one per category.
///
/// Moves are O(n) scans; adequate at note-list scale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SequenceRepository {
    active: Vec<Note>,
    archived: Vec<Note>,
    trashed: Vec<Note>,
}

impl SequenceRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn sequence(&self, category: Category) -> &Vec<Note> {
        match category {
            Category::Active => &self.active,
            Category::Archived => &self.archived,
            Category::Trashed => &self.trashed,
        }
    }

    fn sequence_mut(&mut self, category: Category) -> &mut Vec<Note> {
        match category {
            Category::Active => &mut self.active,
            Category::Archived => &mut self.archived,
            Category::Trashed => &mut self.trashed,
        }
    }
}

impl NoteRepository for SequenceRepository {
    fn notes(&self, category: Category) -> &[Note] {
        self.sequence(category)
    }

    fn get_mut(&mut self, category: Category, id: NoteId) -> Option<&mut Note> {
        self.sequence_mut(category)
            .iter_mut()
            .find(|note| note.id == id)
    }

    fn take(&mut self, category: Category, id: NoteId) -> Option<Note> {
        let index = self.position(category, id)?;
        Some(self.sequence_mut(category).remove(index))
    }

    fn push_front(&mut self, category: Category, note: Note) {
        self.sequence_mut(category).insert(0, note);
    }

    fn remove_at(&mut self, category: Category, index: usize) -> Option<Note> {
        let sequence = self.sequence_mut(category);
        if index >= sequence.len() {
            return None;
        }
        Some(sequence.remove(index))
    }

    fn insert_at(&mut self, category: Category, index: usize, note: Note) {
        let sequence = self.sequence_mut(category);
        let index = index.min(sequence.len());
        sequence.insert(index, note);
    }
}

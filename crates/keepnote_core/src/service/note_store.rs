//! Note store: the single owner of all note sequences.
//!
//! # Responsibility
//! - Funnel every note mutation (commit, edit, move, reorder, destroy).
//! - Expose read access to the three sequences for view projection.
//!
//! # Invariants
//! - A note id lives in exactly one sequence between calls.
//! - Moves always insert at the front of the destination.
//! - Only `Category::Active` can be reordered.
//! - Only trashed notes can be destroyed.
//! - Missing ids and blank drafts are silent no-ops, never errors.

use crate::model::category::Category;
use crate::model::note::{Note, NoteId, NotePatch};
use crate::repo::sequence_repo::{NoteRepository, SequenceRepository};
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Rejections raised for invalid reorder requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Reorder requested on a display-only category.
    ReorderNotSupported(Category),
    /// Reorder index outside `[0, len)`.
    IndexOutOfRange { index: usize, len: usize },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ReorderNotSupported(category) => {
                write!(f, "category `{category}` cannot be reordered")
            }
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for sequence of length {len}")
            }
        }
    }
}

impl Error for StoreError {}

/// State container owning the active, archived and trashed sequences.
#[derive(Debug, Clone, Default)]
pub struct NoteStore<R: NoteRepository = SequenceRepository> {
    repo: R,
}

impl NoteStore<SequenceRepository> {
    /// Creates an empty store backed by three in-memory sequences.
    pub fn in_memory() -> Self {
        Self::new(SequenceRepository::new())
    }
}

impl<R: NoteRepository> NoteStore<R> {
    /// Creates a store over the provided repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Returns a fresh blank note that is not part of any sequence.
    pub fn create_draft(&self) -> Note {
        Note::blank()
    }

    /// Prepends `note` to the active sequence unless both fields are empty.
    ///
    /// Returns the committed id, or `None` when the draft was discarded.
    /// A draft whose id is already stored is also discarded so ids stay
    /// unique across sequences.
    pub fn commit_draft(&mut self, note: Note) -> Option<NoteId> {
        if note.is_blank() {
            debug!("event=note_commit module=store status=skipped reason=blank_draft");
            return None;
        }
        if let Some(existing) = self.locate(note.id) {
            debug!(
                "event=note_commit module=store status=skipped reason=duplicate_id note_id={} category={}",
                note.id, existing
            );
            return None;
        }

        let id = note.id;
        self.repo.push_front(Category::Active, note);
        info!("event=note_commit module=store status=ok note_id={id}");
        Some(id)
    }

    /// Replaces fields of the note with `id` inside `category`.
    ///
    /// Returns `false` when no such note exists there. Id and membership
    /// never change.
    pub fn update_note(&mut self, category: Category, id: NoteId, patch: NotePatch) -> bool {
        let Some(note) = self.repo.get_mut(category, id) else {
            debug!(
                "event=note_update module=store status=skipped reason=not_found note_id={id} category={category}"
            );
            return false;
        };

        let changed = note.apply(patch);
        info!(
            "event=note_update module=store status=ok note_id={id} category={category} changed={changed}"
        );
        true
    }

    /// Moves the note with `id` from `from` to the front of `to`.
    ///
    /// Returns `false` when the note is not in `from`.
    pub fn move_note(&mut self, id: NoteId, from: Category, to: Category) -> bool {
        let Some(note) = self.repo.take(from, id) else {
            debug!(
                "event=note_move module=store status=skipped reason=not_found note_id={id} from={from} to={to}"
            );
            return false;
        };

        self.repo.push_front(to, note);
        info!("event=note_move module=store status=ok note_id={id} from={from} to={to}");
        true
    }

    /// Moves the element at `from_index` to `to_index` within `category`.
    ///
    /// The element is removed first; `to_index` is then applied to the
    /// shortened sequence. Both indices must be in `[0, len)`.
    ///
    /// # Errors
    /// - `ReorderNotSupported` for any category other than `Active`.
    /// - `IndexOutOfRange` when either index is past the end.
    pub fn reorder(
        &mut self,
        category: Category,
        from_index: usize,
        to_index: usize,
    ) -> StoreResult<()> {
        if !category.is_reorderable() {
            return Err(StoreError::ReorderNotSupported(category));
        }
        let len = self.repo.notes(category).len();
        for index in [from_index, to_index] {
            if index >= len {
                return Err(StoreError::IndexOutOfRange { index, len });
            }
        }
        if from_index == to_index {
            return Ok(());
        }

        if let Some(note) = self.repo.remove_at(category, from_index) {
            self.repo.insert_at(category, to_index, note);
        }
        debug!(
            "event=note_reorder module=store status=ok category={category} from={from_index} to={to_index}"
        );
        Ok(())
    }

    /// Permanently removes a trashed note. Irreversible.
    ///
    /// Returns `false` when the note is not in the trash.
    pub fn destroy(&mut self, id: NoteId) -> bool {
        if self.repo.take(Category::Trashed, id).is_none() {
            debug!("event=note_destroy module=store status=skipped reason=not_trashed note_id={id}");
            return false;
        }
        info!("event=note_destroy module=store status=ok note_id={id}");
        true
    }

    pub fn archive(&mut self, id: NoteId) -> bool {
        self.move_note(id, Category::Active, Category::Archived)
    }

    pub fn trash_active(&mut self, id: NoteId) -> bool {
        self.move_note(id, Category::Active, Category::Trashed)
    }

    pub fn unarchive(&mut self, id: NoteId) -> bool {
        self.move_note(id, Category::Archived, Category::Active)
    }

    pub fn trash_archived(&mut self, id: NoteId) -> bool {
        self.move_note(id, Category::Archived, Category::Trashed)
    }

    /// Moves a trashed note back to the front of the active list.
    pub fn restore(&mut self, id: NoteId) -> bool {
        self.move_note(id, Category::Trashed, Category::Active)
    }

    /// Returns one sequence in display order.
    pub fn notes(&self, category: Category) -> &[Note] {
        self.repo.notes(category)
    }

    pub fn get(&self, category: Category, id: NoteId) -> Option<&Note> {
        self.repo.get(category, id)
    }

    /// Returns the category currently holding `id`.
    pub fn locate(&self, id: NoteId) -> Option<Category> {
        Category::ALL
            .into_iter()
            .find(|category| self.repo.position(*category, id).is_some())
    }

    pub fn len(&self, category: Category) -> usize {
        self.repo.notes(category).len()
    }

    pub fn is_empty(&self, category: Category) -> bool {
        self.repo.notes(category).is_empty()
    }

    /// Number of notes across all three sequences.
    pub fn total_len(&self) -> usize {
        Category::ALL
            .into_iter()
            .map(|category| self.len(category))
            .sum()
    }
}

//! Collection view projections and card action dispatch.
//!
//! # Responsibility
//! - Project one store sequence into cards for a route.
//! - Map card buttons and drag drops onto store operations.
//!
//! # Invariants
//! - Each route offers a fixed action set; other actions are rejected.
//! - Only the notes route is reorderable and editable.

use crate::model::note::NoteId;
use crate::repo::sequence_repo::NoteRepository;
use crate::service::note_store::{NoteStore, StoreError};
use crate::view::router::Route;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Placeholder shown when the notes route has no cards.
pub const EMPTY_NOTES_MESSAGE: &str = "Notes you add appear here";

/// Button rendered on a note card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CardAction {
    Archive,
    Trash,
    Unarchive,
    Restore,
    DeleteForever,
}

impl CardAction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Archive => "archive",
            Self::Trash => "trash",
            Self::Unarchive => "unarchive",
            Self::Restore => "restore",
            Self::DeleteForever => "delete_forever",
        }
    }

    /// Actions offered on cards of `route`, in button order.
    pub fn available_on(route: Route) -> &'static [CardAction] {
        match route {
            Route::Notes => &[Self::Archive, Self::Trash],
            Route::Archive => &[Self::Unarchive, Self::Trash],
            Route::Trash => &[Self::DeleteForever, Self::Restore],
        }
    }
}

impl Display for CardAction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CardAction {
    type Err = ViewError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "archive" => Ok(Self::Archive),
            "trash" | "delete" => Ok(Self::Trash),
            "unarchive" => Ok(Self::Unarchive),
            "restore" => Ok(Self::Restore),
            "delete_forever" | "purge" => Ok(Self::DeleteForever),
            other => Err(ViewError::UnknownAction(other.to_string())),
        }
    }
}

/// Errors from view-level dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewError {
    /// Action label not recognized.
    UnknownAction(String),
    /// Action exists but is not offered on this route.
    ActionNotAvailable { action: CardAction, route: Route },
    /// Note is not part of the route's sequence.
    NoteNotFound(NoteId),
    /// Drop rejected by the store.
    Store(StoreError),
}

impl Display for ViewError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownAction(value) => write!(f, "unknown card action `{value}`"),
            Self::ActionNotAvailable { action, route } => {
                write!(f, "action `{action}` is not available on `{route}`")
            }
            Self::NoteNotFound(id) => write!(f, "note not found in view: {id}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ViewError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StoreError> for ViewError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// One rendered note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteCard {
    pub id: NoteId,
    pub index: usize,
    pub heading: String,
    pub text: String,
    /// Clicking the card opens the edit modal.
    pub editable: bool,
    pub actions: &'static [CardAction],
}

/// Render model for one route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollectionView {
    pub route: Route,
    pub title: &'static str,
    pub cards: Vec<NoteCard>,
    pub empty_message: Option<&'static str>,
    pub reorderable: bool,
}

impl CollectionView {
    /// Projects the sequence behind `route`.
    pub fn render<R: NoteRepository>(store: &NoteStore<R>, route: Route) -> Self {
        let category = route.category();
        let editable = route == Route::Notes;
        let actions = CardAction::available_on(route);
        let cards = store
            .notes(category)
            .iter()
            .enumerate()
            .map(|(index, note)| NoteCard {
                id: note.id,
                index,
                heading: note.heading.clone(),
                text: note.text.clone(),
                editable,
                actions,
            })
            .collect::<Vec<_>>();
        let empty_message =
            (route == Route::Notes && cards.is_empty()).then_some(EMPTY_NOTES_MESSAGE);

        Self {
            route,
            title: route.title(),
            cards,
            empty_message,
            reorderable: category.is_reorderable(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Applies a card button press on `route` to the store.
///
/// # Errors
/// - `ActionNotAvailable` when `route` does not offer `action`.
/// - `NoteNotFound` when the note is not in the route's sequence.
pub fn apply_card_action<R: NoteRepository>(
    store: &mut NoteStore<R>,
    route: Route,
    id: NoteId,
    action: CardAction,
) -> Result<(), ViewError> {
    if !CardAction::available_on(route).contains(&action) {
        return Err(ViewError::ActionNotAvailable { action, route });
    }

    let applied = match (route, action) {
        (Route::Notes, CardAction::Archive) => store.archive(id),
        (Route::Notes, CardAction::Trash) => store.trash_active(id),
        (Route::Archive, CardAction::Unarchive) => store.unarchive(id),
        (Route::Archive, CardAction::Trash) => store.trash_archived(id),
        (Route::Trash, CardAction::Restore) => store.restore(id),
        (Route::Trash, CardAction::DeleteForever) => store.destroy(id),
        _ => false,
    };

    if applied {
        Ok(())
    } else {
        Err(ViewError::NoteNotFound(id))
    }
}

/// Drop event reported by the drag layer of the notes grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragResult {
    pub source_index: usize,
    /// `None` when the card was dropped outside the grid.
    pub destination_index: Option<usize>,
}

/// Applies a drag result to the active sequence.
///
/// Drops without a destination are ignored. Returns whether the order was
/// handed to the store.
pub fn apply_drag<R: NoteRepository>(
    store: &mut NoteStore<R>,
    result: DragResult,
) -> Result<bool, ViewError> {
    let Some(destination) = result.destination_index else {
        return Ok(false);
    };
    store.reorder(Route::Notes.category(), result.source_index, destination)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::{
        apply_card_action, apply_drag, CardAction, CollectionView, DragResult, ViewError,
        EMPTY_NOTES_MESSAGE,
    };
    use crate::model::category::Category;
    use crate::model::note::Note;
    use crate::service::note_store::NoteStore;
    use crate::view::router::Route;

    #[test]
    fn empty_message_only_on_notes_route() {
        let store = NoteStore::in_memory();
        assert_eq!(
            CollectionView::render(&store, Route::Notes).empty_message,
            Some(EMPTY_NOTES_MESSAGE)
        );
        assert_eq!(CollectionView::render(&store, Route::Archive).empty_message, None);
        assert_eq!(CollectionView::render(&store, Route::Trash).empty_message, None);
    }

    #[test]
    fn cards_carry_route_actions() {
        let mut store = NoteStore::in_memory();
        let id = store.commit_draft(Note::new("A", "")).unwrap();

        let notes = CollectionView::render(&store, Route::Notes);
        assert_eq!(notes.title, "Notes");
        assert!(notes.reorderable);
        assert!(notes.cards[0].editable);
        assert_eq!(notes.cards[0].actions, &[CardAction::Archive, CardAction::Trash]);

        store.trash_active(id);
        let trash = CollectionView::render(&store, Route::Trash);
        assert_eq!(trash.title, "Trash");
        assert!(!trash.reorderable);
        assert!(!trash.cards[0].editable);
        assert_eq!(
            trash.cards[0].actions,
            &[CardAction::DeleteForever, CardAction::Restore]
        );
    }

    #[test]
    fn unavailable_action_is_rejected() {
        let mut store = NoteStore::in_memory();
        let id = store.commit_draft(Note::new("A", "")).unwrap();

        let err = apply_card_action(&mut store, Route::Notes, id, CardAction::DeleteForever)
            .unwrap_err();
        assert_eq!(
            err,
            ViewError::ActionNotAvailable {
                action: CardAction::DeleteForever,
                route: Route::Notes,
            }
        );
        assert_eq!(store.locate(id), Some(Category::Active));
    }

    #[test]
    fn action_on_note_from_other_view_reports_not_found() {
        let mut store = NoteStore::in_memory();
        let id = store.commit_draft(Note::new("A", "")).unwrap();

        let err = apply_card_action(&mut store, Route::Archive, id, CardAction::Unarchive)
            .unwrap_err();
        assert_eq!(err, ViewError::NoteNotFound(id));
    }

    #[test]
    fn drop_outside_grid_is_ignored() {
        let mut store = NoteStore::in_memory();
        store.commit_draft(Note::new("B", ""));
        store.commit_draft(Note::new("A", ""));

        let applied = apply_drag(
            &mut store,
            DragResult {
                source_index: 0,
                destination_index: None,
            },
        )
        .unwrap();
        assert!(!applied);
        assert_eq!(store.notes(Category::Active)[0].heading, "A");
    }

    #[test]
    fn action_labels_parse() {
        assert_eq!("purge".parse::<CardAction>().unwrap(), CardAction::DeleteForever);
        assert_eq!("Archive".parse::<CardAction>().unwrap(), CardAction::Archive);
        assert!(matches!(
            "pin".parse::<CardAction>(),
            Err(ViewError::UnknownAction(_))
        ));
    }
}

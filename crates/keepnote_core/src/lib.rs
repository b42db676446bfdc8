//! Core domain logic for KeepNote.
//! This crate is the single source of truth for note state and its rules.

pub mod config;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod view;

pub use config::{default_log_dir, default_log_level, LoggingConfig};
pub use logging::{init_logging, logging_status, LoggingError};
pub use model::category::Category;
pub use model::note::{Note, NoteField, NoteId, NotePatch};
pub use repo::sequence_repo::{NoteRepository, SequenceRepository};
pub use service::draft::{AddNoteForm, EditNoteModal};
pub use service::note_store::{NoteStore, StoreError, StoreResult};
pub use view::collection::{
    apply_card_action, apply_drag, CardAction, CollectionView, DragResult, NoteCard, ViewError,
    EMPTY_NOTES_MESSAGE,
};
pub use view::router::{NavItem, Navigator, Resolution, Route, NAV_ITEMS};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

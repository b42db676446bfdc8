//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose one session object owning the note store to the UI layer.
//! - Translate ids and labels to strings and errors to envelope messages.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - The session is the only owner of note state; nothing is global.
//! - Return values are UTF-8 strings with stable meaning.

use keepnote_core::{
    apply_card_action, apply_drag, core_version as core_version_inner,
    init_logging as init_logging_inner, ping as ping_inner, AddNoteForm, CardAction,
    CollectionView, DragResult, EditNoteModal, LoggingConfig, Navigator, NoteCard, NoteField,
    NoteId, NoteStore, NAV_ITEMS,
};
use log::debug;
use uuid::Uuid;

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(&LoggingConfig::new(level, log_dir)) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// One card in a rendered view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardItem {
    /// Stable note ID in string form.
    pub note_id: String,
    pub heading: String,
    pub text: String,
    /// Whether tapping the card opens the editor.
    pub editable: bool,
    /// Action labels (`archive|trash|unarchive|restore|delete_forever`).
    pub actions: Vec<String>,
}

/// Drawer entry for the navigation list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    pub name: String,
    pub path: String,
    pub highlighted: bool,
}

/// Full render state for the current screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewResponse {
    /// Canonical path of the current route.
    pub path: String,
    /// Screen title shown above the cards.
    pub title: String,
    pub cards: Vec<CardItem>,
    /// Placeholder text when the notes grid is empty.
    pub empty_message: Option<String>,
    pub reorderable: bool,
    pub drawer_open: bool,
    pub nav: Vec<NavEntry>,
    /// Whether the add form shows its heading field.
    pub form_expanded: bool,
    pub form_heading: String,
    pub form_text: String,
    /// Note ID currently open in the editor, if any.
    pub editing_note_id: Option<String>,
}

/// Generic action response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResponse {
    /// Whether the action changed state.
    pub ok: bool,
    /// Note the action applied to, if any.
    pub note_id: Option<String>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl ActionResponse {
    fn success(message: impl Into<String>, note_id: Option<NoteId>) -> Self {
        Self {
            ok: true,
            note_id: note_id.map(|id| id.to_string()),
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            note_id: None,
            message: message.into(),
        }
    }
}

/// UI session: the note store plus the transient editor and route state.
#[flutter_rust_bridge::frb(opaque)]
pub struct KeepSession {
    store: NoteStore,
    form: AddNoteForm,
    navigator: Navigator,
    editor: Option<EditNoteModal>,
}

impl Default for KeepSession {
    fn default() -> Self {
        Self::new()
    }
}

impl KeepSession {
    /// Starts an empty session on `/`.
    #[flutter_rust_bridge::frb(sync)]
    pub fn new() -> Self {
        let store = NoteStore::in_memory();
        let form = AddNoteForm::new(&store);
        Self {
            store,
            form,
            navigator: Navigator::new(),
            editor: None,
        }
    }

    /// Navigates to `path`; unknown paths land on `/`.
    ///
    /// Returns the canonical path actually shown.
    #[flutter_rust_bridge::frb(sync)]
    pub fn navigate(&mut self, path: String) -> String {
        self.navigator.navigate(path.trim()).route.path().to_string()
    }

    /// Header menu button. Returns the new drawer state.
    #[flutter_rust_bridge::frb(sync)]
    pub fn toggle_drawer(&mut self) -> bool {
        self.navigator.toggle_drawer()
    }

    /// Drawer entry click by zero-based index.
    #[flutter_rust_bridge::frb(sync)]
    pub fn click_nav(&mut self, index: u32) -> ActionResponse {
        match self.navigator.click_nav(index as usize) {
            Some(route) => ActionResponse::success(route.path(), None),
            None => ActionResponse::failure(format!("click_nav failed: no entry {index}")),
        }
    }

    /// Renders the current route.
    #[flutter_rust_bridge::frb(sync)]
    pub fn current_view(&self) -> ViewResponse {
        let view = CollectionView::render(&self.store, self.navigator.current());
        let highlighted = self.navigator.highlighted();
        let draft = self.form.draft();

        ViewResponse {
            path: view.route.path().to_string(),
            title: view.title.to_string(),
            cards: view.cards.into_iter().map(to_card_item).collect(),
            empty_message: view.empty_message.map(str::to_string),
            reorderable: view.reorderable,
            drawer_open: self.navigator.is_drawer_open(),
            nav: NAV_ITEMS
                .iter()
                .enumerate()
                .map(|(index, item)| NavEntry {
                    name: item.name.to_string(),
                    path: item.route.path().to_string(),
                    highlighted: highlighted == Some(index),
                })
                .collect(),
            form_expanded: self.form.is_expanded(),
            form_heading: draft.heading.clone(),
            form_text: draft.text.clone(),
            editing_note_id: self
                .editor
                .as_ref()
                .map(|editor| editor.note_id().to_string()),
        }
    }

    /// Text area click on the add form.
    #[flutter_rust_bridge::frb(sync)]
    pub fn form_focus(&mut self) {
        self.form.focus();
    }

    /// Buffers `value` into the add form field named `field` (`heading|text`).
    #[flutter_rust_bridge::frb(sync)]
    pub fn form_edit(&mut self, field: String, value: String) -> ActionResponse {
        match NoteField::parse(&field) {
            Some(field) => {
                self.form.edit(field, value);
                ActionResponse::success("Draft updated.", None)
            }
            None => ActionResponse::failure(format!("form_edit failed: unknown field `{field}`")),
        }
    }

    /// Click outside the add form; commits non-blank drafts.
    #[flutter_rust_bridge::frb(sync)]
    pub fn form_click_away(&mut self) -> ActionResponse {
        match self.form.click_away(&mut self.store) {
            Some(id) => ActionResponse::success("Note created.", Some(id)),
            None => ActionResponse::failure("Nothing to save."),
        }
    }

    /// Card button press on the current route.
    #[flutter_rust_bridge::frb(sync)]
    pub fn card_action(&mut self, note_id: String, action: String) -> ActionResponse {
        let id = match parse_note_id(&note_id) {
            Ok(id) => id,
            Err(message) => return ActionResponse::failure(message),
        };
        let action = match action.parse::<CardAction>() {
            Ok(action) => action,
            Err(err) => return ActionResponse::failure(format!("card_action failed: {err}")),
        };

        let route = self.navigator.current();
        match apply_card_action(&mut self.store, route, id, action) {
            Ok(()) => ActionResponse::success(format!("Applied {action}."), Some(id)),
            Err(err) => ActionResponse::failure(format!("card_action failed: {err}")),
        }
    }

    /// Drag end on the notes grid. `destination_index = None` means the
    /// card was dropped outside the grid.
    #[flutter_rust_bridge::frb(sync)]
    pub fn drag_end(
        &mut self,
        source_index: u32,
        destination_index: Option<u32>,
    ) -> ActionResponse {
        let result = DragResult {
            source_index: source_index as usize,
            destination_index: destination_index.map(|index| index as usize),
        };
        match apply_drag(&mut self.store, result) {
            Ok(true) => ActionResponse::success("Notes reordered.", None),
            Ok(false) => ActionResponse::failure("Dropped outside the grid."),
            Err(err) => ActionResponse::failure(format!("drag_end failed: {err}")),
        }
    }

    /// Opens the editor on an active note. Replaces any open editor
    /// without saving it.
    #[flutter_rust_bridge::frb(sync)]
    pub fn open_editor(&mut self, note_id: String) -> ActionResponse {
        let id = match parse_note_id(&note_id) {
            Ok(id) => id,
            Err(message) => return ActionResponse::failure(message),
        };
        match EditNoteModal::open_active(&self.store, id) {
            Some(editor) => {
                if let Some(previous) = self.editor.replace(editor) {
                    debug!(
                        "event=editor_discarded module=ffi status=ok note_id={}",
                        previous.note_id()
                    );
                }
                ActionResponse::success("Editor opened.", Some(id))
            }
            None => {
                ActionResponse::failure(format!("open_editor failed: note {id} is not active"))
            }
        }
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn editor_edit(&mut self, field: String, value: String) -> ActionResponse {
        let Some(editor) = self.editor.as_mut() else {
            return ActionResponse::failure("editor_edit failed: no editor open");
        };
        match NoteField::parse(&field) {
            Some(field) => {
                editor.edit(field, value);
                ActionResponse::success("Edit buffered.", Some(editor.note_id()))
            }
            None => {
                ActionResponse::failure(format!("editor_edit failed: unknown field `{field}`"))
            }
        }
    }

    /// Backdrop click: closes the editor and always saves.
    #[flutter_rust_bridge::frb(sync)]
    pub fn editor_dismiss(&mut self) -> ActionResponse {
        let Some(editor) = self.editor.take() else {
            return ActionResponse::failure("editor_dismiss failed: no editor open");
        };
        let id = editor.note_id();
        if editor.dismiss(&mut self.store) {
            ActionResponse::success("Note saved.", Some(id))
        } else {
            ActionResponse::failure(format!("editor_dismiss: note {id} is no longer active"))
        }
    }
}

fn parse_note_id(raw: &str) -> Result<NoteId, String> {
    Uuid::parse_str(raw.trim()).map_err(|_| format!("invalid note id `{raw}`"))
}

fn to_card_item(card: NoteCard) -> CardItem {
    CardItem {
        note_id: card.id.to_string(),
        heading: card.heading,
        text: card.text,
        editable: card.editable,
        actions: card
            .actions
            .iter()
            .map(|action| action.as_str().to_string())
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::{core_version, init_logging, ping, KeepSession};

    fn add(session: &mut KeepSession, heading: &str) -> String {
        session.form_focus();
        session.form_edit("heading".to_string(), heading.to_string());
        let response = session.form_click_away();
        assert!(response.ok, "{}", response.message);
        response.note_id.expect("created note should return note_id")
    }

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "/tmp/logs".to_string());
        assert!(error.contains("unsupported log level"));
    }

    #[test]
    fn new_session_shows_empty_notes() {
        let session = KeepSession::new();
        let view = session.current_view();
        assert_eq!(view.path, "/");
        assert_eq!(view.title, "Notes");
        assert!(view.cards.is_empty());
        assert_eq!(
            view.empty_message.as_deref(),
            Some("Notes you add appear here")
        );
        assert!(view.drawer_open);
        assert_eq!(view.nav.len(), 3);
        assert!(view.nav.iter().all(|entry| !entry.highlighted));
    }

    #[test]
    fn archive_then_view_archive_route() {
        let mut session = KeepSession::new();
        let id = add(&mut session, "Buy milk");

        let archived = session.card_action(id.clone(), "archive".to_string());
        assert!(archived.ok, "{}", archived.message);
        assert!(session.current_view().cards.is_empty());

        let click = session.click_nav(1);
        assert_eq!(click.message, "/archive");
        let view = session.current_view();
        assert_eq!(view.title, "Archive");
        assert_eq!(view.cards[0].note_id, id);
        assert_eq!(view.cards[0].actions, vec!["unarchive", "trash"]);
        assert!(view.nav[1].highlighted);
    }

    #[test]
    fn card_action_rejects_actions_of_other_routes() {
        let mut session = KeepSession::new();
        let id = add(&mut session, "Keep me");
        let response = session.card_action(id, "delete_forever".to_string());
        assert!(!response.ok);
        assert!(response.message.contains("not available"));
    }

    #[test]
    fn unknown_path_falls_back_to_notes() {
        let mut session = KeepSession::new();
        assert_eq!(session.navigate("/delete".to_string()), "/delete");
        assert_eq!(session.navigate("/unknown".to_string()), "/");
    }

    #[test]
    fn editor_round_trip_saves_on_dismiss() {
        let mut session = KeepSession::new();
        let id = add(&mut session, "Draft");

        assert!(session.open_editor(id.clone()).ok);
        assert!(session.editor_edit("text".to_string(), "details".to_string()).ok);
        assert_eq!(
            session.current_view().editing_note_id.as_deref(),
            Some(id.as_str())
        );

        let saved = session.editor_dismiss();
        assert!(saved.ok, "{}", saved.message);
        let view = session.current_view();
        assert_eq!(view.cards[0].text, "details");
        assert_eq!(view.editing_note_id, None);
    }

    #[test]
    fn drag_end_without_destination_is_ignored() {
        let mut session = KeepSession::new();
        add(&mut session, "B");
        add(&mut session, "A");

        assert!(!session.drag_end(0, None).ok);
        assert!(session.drag_end(0, Some(1)).ok);
        let headings: Vec<_> = session
            .current_view()
            .cards
            .into_iter()
            .map(|card| card.heading)
            .collect();
        assert_eq!(headings, vec!["B", "A"]);
    }

    #[test]
    fn malformed_ids_are_reported() {
        let mut session = KeepSession::new();
        let response = session.card_action("not-a-uuid".to_string(), "archive".to_string());
        assert!(!response.ok);
        assert!(response.message.contains("invalid note id"));
    }
}

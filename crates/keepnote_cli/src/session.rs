//! Terminal session: owns the note store and dispatches parsed commands.
//!
//! # Invariants
//! - One session owns all note state; it is dropped when input ends.
//! - A rejected command never ends the session.

use crate::args::{parse_line, SessionCommand};
use crate::render::render_screen;
use anyhow::{bail, Context, Result};
use keepnote_core::{
    apply_card_action, apply_drag, AddNoteForm, CardAction, CollectionView, DragResult,
    EditNoteModal, Navigator, NoteField, NoteId, NoteStore, Route,
};
use log::debug;
use std::io::{BufRead, Write};

/// Whether the input loop should keep reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Session {
    store: NoteStore,
    form: AddNoteForm,
    navigator: Navigator,
    editor: Option<EditNoteModal>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
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

    pub fn store(&self) -> &NoteStore {
        &self.store
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    /// Applies one command, writing feedback to `out`.
    pub fn execute<W: Write>(&mut self, command: SessionCommand, out: &mut W) -> Result<Flow> {
        match command {
            SessionCommand::Go { path } => {
                let resolution = self.navigator.navigate(&path);
                if resolution.redirected {
                    writeln!(out, "unknown path `{path}`, showing /")?;
                }
                self.render(out)?;
            }
            SessionCommand::Nav { entry } => {
                self.click_outside_form(out)?;
                let route = card_index(entry)
                    .ok()
                    .and_then(|index| self.navigator.click_nav(index))
                    .with_context(|| format!("no drawer entry {entry}"))?;
                debug!("event=nav_click module=cli status=ok route={route}");
                self.render(out)?;
            }
            SessionCommand::Menu => {
                self.click_outside_form(out)?;
                let state = if self.navigator.toggle_drawer() {
                    "open"
                } else {
                    "closed"
                };
                writeln!(out, "drawer {state}")?;
            }
            SessionCommand::Show { json } => {
                if json {
                    let view = CollectionView::render(&self.store, self.navigator.current());
                    writeln!(out, "{}", serde_json::to_string_pretty(&view)?)?;
                } else {
                    self.render(out)?;
                }
            }
            SessionCommand::Focus => {
                self.form.focus();
                writeln!(out, "add form open")?;
            }
            SessionCommand::Heading { value } => self.type_into(NoteField::Heading, value),
            SessionCommand::Text { value } => self.type_into(NoteField::Text, value),
            SessionCommand::Away => match self.form.click_away(&mut self.store) {
                Some(id) => writeln!(out, "created note {id}")?,
                None => writeln!(out, "nothing to save")?,
            },
            SessionCommand::Archive { card } => {
                self.card_action(card, CardAction::Archive, out)?
            }
            SessionCommand::Trash { card } => self.card_action(card, CardAction::Trash, out)?,
            SessionCommand::Unarchive { card } => {
                self.card_action(card, CardAction::Unarchive, out)?
            }
            SessionCommand::Restore { card } => {
                self.card_action(card, CardAction::Restore, out)?
            }
            SessionCommand::Purge { card } => {
                self.card_action(card, CardAction::DeleteForever, out)?
            }
            SessionCommand::Drag { from, to } => {
                if self.navigator.current() != Route::Notes {
                    bail!("cards can only be dragged on the notes view");
                }
                let result = DragResult {
                    source_index: card_index(from)?,
                    destination_index: to.map(card_index).transpose()?,
                };
                if apply_drag(&mut self.store, result)? {
                    self.render(out)?;
                } else {
                    writeln!(out, "dropped outside the grid")?;
                }
            }
            SessionCommand::Edit { card } => {
                if self.navigator.current() != Route::Notes {
                    bail!("only cards on the notes view can be edited");
                }
                let id = self.card_id(card)?;
                self.click_outside_form(out)?;
                let editor = EditNoteModal::open_active(&self.store, id)
                    .with_context(|| format!("note {id} is not active"))?;
                self.editor = Some(editor);
                writeln!(out, "editing card {card}")?;
            }
            SessionCommand::Close => {
                let editor = self.editor.take().context("no editor open")?;
                let id = editor.note_id();
                if editor.dismiss(&mut self.store) {
                    writeln!(out, "saved note {id}")?;
                } else {
                    writeln!(out, "note {id} is no longer in notes; edit dropped")?;
                }
            }
            SessionCommand::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn render<W: Write>(&self, out: &mut W) -> Result<()> {
        let view = CollectionView::render(&self.store, self.navigator.current());
        render_screen(out, &view, &self.navigator, &self.form, self.editor.as_ref())?;
        Ok(())
    }

    fn type_into(&mut self, field: NoteField, value: String) {
        match self.editor.as_mut() {
            Some(editor) => editor.edit(field, value),
            None => self.form.edit(field, value),
        }
    }

    /// Any click on the notes screen outside the add form collapses it,
    /// saving a non-empty draft. The form only exists on the notes view.
    fn click_outside_form<W: Write>(&mut self, out: &mut W) -> Result<()> {
        if self.navigator.current() != Route::Notes {
            return Ok(());
        }
        if let Some(id) = self.form.click_away(&mut self.store) {
            writeln!(out, "created note {id}")?;
        }
        Ok(())
    }

    fn card_id(&self, card: usize) -> Result<NoteId> {
        let index = card_index(card)?;
        let route = self.navigator.current();
        self.store
            .notes(route.category())
            .get(index)
            .map(|note| note.id)
            .with_context(|| format!("no card {card} on {route}"))
    }

    fn card_action<W: Write>(
        &mut self,
        card: usize,
        action: CardAction,
        out: &mut W,
    ) -> Result<()> {
        let id = self.card_id(card)?;
        self.click_outside_form(out)?;
        apply_card_action(&mut self.store, self.navigator.current(), id, action)?;
        writeln!(out, "{action}: card {card}")?;
        Ok(())
    }
}

/// Converts a 1-based card number to an index.
fn card_index(card: usize) -> Result<usize> {
    match card.checked_sub(1) {
        Some(index) => Ok(index),
        None => bail!("card numbers start at 1"),
    }
}

/// Reads commands line by line until input ends or `quit`.
///
/// Blank lines and `#` comments are skipped. Parse and command errors are
/// reported to `out` and the loop continues.
pub fn run_session<R: BufRead, W: Write>(
    session: &mut Session,
    input: R,
    out: &mut W,
) -> Result<()> {
    for line in input.lines() {
        let line = line.context("failed to read session input")?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let command = match parse_line(trimmed) {
            Ok(command) => command,
            Err(err) => {
                write!(out, "{}", err.render())?;
                continue;
            }
        };
        match session.execute(command, out) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => break,
            Err(err) => {
                debug!("event=command_rejected module=cli status=error");
                writeln!(out, "error: {err:#}")?;
            }
        }
    }
    out.flush()?;
    Ok(())
}

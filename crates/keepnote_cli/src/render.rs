//! Plain-text rendering of the current screen.

use keepnote_core::{AddNoteForm, CollectionView, EditNoteModal, Navigator, Route, NAV_ITEMS};
use std::io::{self, Write};

/// Writes header, drawer, add form (notes only), cards and editor state.
pub fn render_screen<W: Write>(
    out: &mut W,
    view: &CollectionView,
    navigator: &Navigator,
    form: &AddNoteForm,
    editor: Option<&EditNoteModal>,
) -> io::Result<()> {
    render_header(out, navigator)?;
    writeln!(out, "== {} ({}) ==", view.title, view.route.path())?;

    if view.route == Route::Notes {
        render_form(out, form)?;
    }
    if let Some(message) = view.empty_message {
        writeln!(out, "  {message}")?;
    }

    for card in &view.cards {
        let heading = if card.heading.is_empty() {
            "(untitled)"
        } else {
            card.heading.as_str()
        };
        writeln!(out, "{:>3}. {heading}", card.index + 1)?;
        for line in card.text.lines() {
            writeln!(out, "     {line}")?;
        }
        let actions = card
            .actions
            .iter()
            .map(|action| action.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(out, "     [{actions}]")?;
    }

    if let Some(editor) = editor {
        let note = editor.edited();
        writeln!(
            out,
            "-- editing {}: heading={:?} text={:?}",
            note.id, note.heading, note.text
        )?;
    }
    Ok(())
}

fn render_header<W: Write>(out: &mut W, navigator: &Navigator) -> io::Result<()> {
    if !navigator.is_drawer_open() {
        return writeln!(out, "Keep");
    }

    let entries = NAV_ITEMS
        .iter()
        .enumerate()
        .map(|(index, item)| {
            if navigator.highlighted() == Some(index) {
                format!("[{}]", item.name)
            } else {
                item.name.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("  ");
    writeln!(out, "Keep | {entries}")
}

fn render_form<W: Write>(out: &mut W, form: &AddNoteForm) -> io::Result<()> {
    let draft = form.draft();
    if form.is_expanded() {
        writeln!(out, "  Title: {}", draft.heading)?;
    }
    if draft.text.is_empty() {
        writeln!(out, "  Take a note...")
    } else {
        writeln!(out, "  Note: {}", draft.text)
    }
}

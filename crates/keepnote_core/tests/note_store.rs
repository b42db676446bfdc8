use keepnote_core::{Category, Note, NoteId, NotePatch, NoteStore};
use std::collections::HashSet;

fn seeded(labels: &[&str]) -> (NoteStore, Vec<NoteId>) {
    let mut store = NoteStore::in_memory();
    let mut ids = Vec::new();
    for label in labels.iter().rev() {
        ids.push(store.commit_draft(Note::new(*label, "")).unwrap());
    }
    ids.reverse();
    (store, ids)
}

fn headings(store: &NoteStore, category: Category) -> Vec<&str> {
    store
        .notes(category)
        .iter()
        .map(|note| note.heading.as_str())
        .collect()
}

#[test]
fn draft_ids_are_unique_within_session() {
    let store = NoteStore::in_memory();
    let ids: HashSet<_> = (0..500).map(|_| store.create_draft().id).collect();
    assert_eq!(ids.len(), 500);
}

#[test]
fn draft_is_blank_and_not_stored() {
    let store = NoteStore::in_memory();
    let draft = store.create_draft();
    assert!(draft.heading.is_empty());
    assert!(draft.text.is_empty());
    assert_eq!(store.locate(draft.id), None);
    assert_eq!(store.total_len(), 0);
}

#[test]
fn blank_commit_leaves_active_unchanged() {
    let (mut store, _) = seeded(&["existing"]);
    let draft = store.create_draft();

    assert_eq!(store.commit_draft(draft), None);
    assert_eq!(headings(&store, Category::Active), vec!["existing"]);
}

#[test]
fn heading_only_commit_prepends() {
    let (mut store, _) = seeded(&["existing"]);
    let mut draft = store.create_draft();
    draft.heading = "A".to_string();

    let id = store.commit_draft(draft).unwrap();
    assert_eq!(headings(&store, Category::Active), vec!["A", "existing"]);
    assert_eq!(store.notes(Category::Active)[0].id, id);
}

#[test]
fn text_only_commit_is_kept() {
    let mut store = NoteStore::in_memory();
    let mut draft = store.create_draft();
    draft.text = "body only".to_string();
    assert!(store.commit_draft(draft).is_some());
    assert_eq!(store.len(Category::Active), 1);
}

#[test]
fn move_to_archive_puts_note_first_and_keeps_total() {
    let (mut store, ids) = seeded(&["A", "B", "C"]);
    store.archive(ids[2]);
    let total = store.total_len();

    assert!(store.move_note(ids[1], Category::Active, Category::Archived));
    assert!(store.get(Category::Active, ids[1]).is_none());
    assert_eq!(store.notes(Category::Archived)[0].id, ids[1]);
    assert_eq!(store.total_len(), total);
    assert_eq!(store.locate(ids[1]), Some(Category::Archived));
}

#[test]
fn move_from_wrong_category_is_noop() {
    let (mut store, ids) = seeded(&["A", "B"]);
    store.trash_active(ids[0]);
    let before = snapshot(&store);

    assert!(!store.move_note(ids[1], Category::Trashed, Category::Trashed));
    assert!(!store.move_note(ids[0], Category::Archived, Category::Active));
    assert_eq!(snapshot(&store), before);
}

#[test]
fn move_within_same_category_brings_note_to_front() {
    let (mut store, ids) = seeded(&["A", "B", "C"]);

    assert!(store.move_note(ids[2], Category::Active, Category::Active));
    assert_eq!(headings(&store, Category::Active), vec!["C", "A", "B"]);
    assert_eq!(store.total_len(), 3);
}

#[test]
fn every_transition_keeps_single_membership() {
    let (mut store, ids) = seeded(&["A"]);
    let id = ids[0];

    let path = [
        (Category::Active, Category::Archived),
        (Category::Archived, Category::Active),
        (Category::Active, Category::Trashed),
        (Category::Trashed, Category::Active),
        (Category::Active, Category::Archived),
        (Category::Archived, Category::Trashed),
    ];
    for (from, to) in path {
        assert!(store.move_note(id, from, to), "{from} -> {to}");
        let holders = Category::ALL
            .into_iter()
            .filter(|category| store.get(*category, id).is_some())
            .count();
        assert_eq!(holders, 1);
        assert_eq!(store.locate(id), Some(to));
    }
}

#[test]
fn destroy_removes_trashed_note_everywhere() {
    let (mut store, ids) = seeded(&["A", "B"]);
    store.trash_active(ids[0]);
    let total = store.total_len();

    assert!(store.destroy(ids[0]));
    assert_eq!(store.locate(ids[0]), None);
    assert_eq!(store.total_len(), total - 1);
    assert!(!store.destroy(ids[0]));
}

#[test]
fn reorder_forward_counts_against_shortened_list() {
    let (mut store, _) = seeded(&["A", "B", "C", "D"]);
    store.reorder(Category::Active, 0, 2).unwrap();
    assert_eq!(headings(&store, Category::Active), vec!["B", "C", "A", "D"]);
}

#[test]
fn reorder_backward_inserts_before_target() {
    let (mut store, _) = seeded(&["A", "B", "C", "D"]);
    store.reorder(Category::Active, 2, 0).unwrap();
    assert_eq!(headings(&store, Category::Active), vec!["C", "A", "B", "D"]);
}

#[test]
fn reorder_to_last_index() {
    let (mut store, _) = seeded(&["A", "B", "C", "D"]);
    store.reorder(Category::Active, 1, 3).unwrap();
    assert_eq!(headings(&store, Category::Active), vec!["A", "C", "D", "B"]);
}

#[test]
fn update_preserves_id_and_membership() {
    let (mut store, ids) = seeded(&["A", "B"]);
    let patch = NotePatch {
        heading: Some("A2".to_string()),
        text: Some("details".to_string()),
    };

    assert!(store.update_note(Category::Active, ids[0], patch));
    let note = store.get(Category::Active, ids[0]).unwrap();
    assert_eq!(note.heading, "A2");
    assert_eq!(note.text, "details");
    assert_eq!(headings(&store, Category::Active), vec!["A2", "B"]);
}

#[test]
fn update_unknown_id_is_noop() {
    let (mut store, _) = seeded(&["A"]);
    let before = snapshot(&store);
    let stranger = Note::new("ghost", "");
    assert!(!store.update_note(Category::Active, stranger.id, NotePatch::heading("x")));
    assert_eq!(snapshot(&store), before);
}

fn snapshot(store: &NoteStore) -> Vec<Vec<Note>> {
    Category::ALL
        .into_iter()
        .map(|category| store.notes(category).to_vec())
        .collect()
}

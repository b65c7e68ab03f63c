use planboard_core::db::open_db_in_memory;
use planboard_core::{NoteRepository, NoteService, SqliteNoteRepository};
use uuid::Uuid;

#[test]
fn create_and_get_note_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteNoteRepository::try_new(&conn).unwrap();

    let created = repo.create_note("remember the retro", "Bob").unwrap();
    assert!(created.created_at > 0, "timestamp must be server-assigned");

    let loaded = repo.get_note(created.note_uuid).unwrap().unwrap();
    assert_eq!(loaded, created);
    assert_eq!(loaded.content, "remember the retro");
    assert_eq!(loaded.assignee, "Bob");
}

#[test]
fn notes_are_partitioned_by_assignee_in_creation_order() {
    let conn = open_db_in_memory().unwrap();
    let service = NoteService::new(SqliteNoteRepository::try_new(&conn).unwrap());

    let bob_first = service.create_note("first", "Bob").unwrap();
    let bob_second = service.create_note("second", "Bob").unwrap();
    service.create_note("hers", "Alice").unwrap();

    let bob_notes = service.list_notes_by_assignee("Bob").unwrap();
    assert_eq!(bob_notes.len(), 2);
    assert_eq!(bob_notes[0].note_uuid, bob_first.note_uuid);
    assert_eq!(bob_notes[1].note_uuid, bob_second.note_uuid);

    let alice_notes = service.list_notes_by_assignee("Alice").unwrap();
    assert_eq!(alice_notes.len(), 1);

    service.delete_note(bob_first.note_uuid).unwrap();
    let remaining = service.list_notes_by_assignee("Bob").unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].note_uuid, bob_second.note_uuid);
}

#[test]
fn assignee_is_free_text_not_validated_against_tasks() {
    let conn = open_db_in_memory().unwrap();
    let service = NoteService::new(SqliteNoteRepository::try_new(&conn).unwrap());

    // No task exists for this person anywhere; the note still lands.
    let note = service.create_note("hello", "Nobody In Particular").unwrap();
    assert_eq!(note.assignee, "Nobody In Particular");
}

#[test]
fn deleting_absent_note_is_a_silent_noop() {
    let conn = open_db_in_memory().unwrap();
    let service = NoteService::new(SqliteNoteRepository::try_new(&conn).unwrap());

    service.delete_note(Uuid::new_v4()).unwrap();
}

#[test]
fn unknown_assignee_returns_empty_list() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteNoteRepository::try_new(&conn).unwrap();

    assert!(repo.list_notes_by_assignee("Ghost").unwrap().is_empty());
}

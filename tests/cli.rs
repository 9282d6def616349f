#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn mdnotes(root: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin("mdnotes"));
    cmd.env_remove("MDNOTES_ROOT")
        .env_remove("MDNOTES_LOG")
        .arg("--root")
        .arg(root);
    cmd
}

#[test]
fn test_create_list_view() {
    let temp = TempDir::new().unwrap();

    mdnotes(temp.path())
        .args(["create", "Meeting Notes", "# Agenda\n\n- budget"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Note saved: Meeting_Notes"));

    assert_eq!(
        fs::read_to_string(temp.path().join("notes/Meeting_Notes.md")).unwrap(),
        "# Agenda\n\n- budget"
    );

    mdnotes(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Meeting_Notes"));

    mdnotes(temp.path())
        .args(["view", "Meeting", "Notes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("---- Meeting Notes ----"))
        .stdout(predicate::str::contains("- budget"));

    mdnotes(temp.path())
        .args(["view", "Meeting Notes", "--html"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<h1>Agenda</h1>"));
}

#[test]
fn test_collisions_get_suffixes() {
    let temp = TempDir::new().unwrap();

    for (title, body) in [("Plan", "alpha"), ("Plan", "beta"), ("Plan!!", "gamma")] {
        mdnotes(temp.path())
            .args(["create", title, body])
            .assert()
            .success();
    }

    let notes = temp.path().join("notes");
    assert_eq!(fs::read_to_string(notes.join("Plan.md")).unwrap(), "alpha");
    assert_eq!(fs::read_to_string(notes.join("Plan_1.md")).unwrap(), "beta");
    assert_eq!(fs::read_to_string(notes.join("Plan_2.md")).unwrap(), "gamma");

    // Lookup by title always lands on the unsuffixed note.
    mdnotes(temp.path())
        .args(["view", "Plan!!"])
        .assert()
        .success()
        .stdout(predicate::str::contains("alpha"))
        .stdout(predicate::str::contains("gamma").not());
}

#[test]
fn test_empty_title_fails() {
    let temp = TempDir::new().unwrap();

    mdnotes(temp.path())
        .args(["create", "   ", "body"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Title cannot be empty"));
}

#[test]
fn test_missing_note_fails() {
    let temp = TempDir::new().unwrap();

    mdnotes(temp.path())
        .args(["view", "Ghost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Note not found: Ghost"));
}

#[test]
fn test_inline_edit_keeps_backup() {
    let temp = TempDir::new().unwrap();

    mdnotes(temp.path())
        .args(["create", "Groceries", "bread"])
        .assert()
        .success();

    mdnotes(temp.path())
        .args(["edit", "Groceries", "--inline", "milk"])
        .assert()
        .success()
        .stdout(predicate::str::contains("has been updated"));

    let notes = temp.path().join("notes");
    assert_eq!(fs::read_to_string(notes.join("Groceries.md")).unwrap(), "milk");
    assert_eq!(
        fs::read_to_string(notes.join("Groceries.md.bak")).unwrap(),
        "bread"
    );

    // Backups never show up in listings.
    mdnotes(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains(".bak").not());
}

#[test]
fn test_blank_edit_is_rejected() {
    let temp = TempDir::new().unwrap();

    mdnotes(temp.path())
        .args(["create", "Groceries", "bread"])
        .assert()
        .success();

    mdnotes(temp.path())
        .args(["edit", "Groceries", "--inline", "  \n "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot save an empty note"));

    assert_eq!(
        fs::read_to_string(temp.path().join("notes/Groceries.md")).unwrap(),
        "bread"
    );
}

#[test]
fn test_editor_without_changes_writes_nothing() {
    let temp = TempDir::new().unwrap();

    mdnotes(temp.path())
        .args(["config", "editor", "true"])
        .assert()
        .success();
    mdnotes(temp.path())
        .args(["create", "Plan", "steps"])
        .assert()
        .success();

    mdnotes(temp.path())
        .args(["edit", "Plan"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No changes made"));

    assert!(!temp.path().join("notes/Plan.md.bak").exists());
}

#[test]
fn test_search_title_and_content() {
    let temp = TempDir::new().unwrap();

    mdnotes(temp.path())
        .args(["create", "Grocery List", "Buy MILK"])
        .assert()
        .success();
    mdnotes(temp.path())
        .args(["create", "Work", "ship it"])
        .assert()
        .success();

    mdnotes(temp.path())
        .args(["search", "grocery"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Grocery_List"))
        .stdout(predicate::str::contains("Work").not());

    mdnotes(temp.path())
        .args(["search", "milk", "--in", "content"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Grocery_List"));

    mdnotes(temp.path())
        .args(["search", "nothing", "--in", "content"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No notes found"));
}

#[test]
fn test_aggregate_backend() {
    let temp = TempDir::new().unwrap();

    mdnotes(temp.path())
        .args(["config", "backend", "aggregate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("backend set to aggregate"));

    mdnotes(temp.path())
        .args(["create", "Plan", "a"])
        .assert()
        .success();
    mdnotes(temp.path())
        .args(["create", "Plan", "b"])
        .assert()
        .success()
        .stdout(predicate::str::contains("saved as 'Plan_1'"));

    let document = fs::read_to_string(temp.path().join("notes.json")).unwrap();
    assert!(document.contains("\"title\": \"Plan\""));
    assert!(temp.path().join("notes.json.bak").exists());
    assert!(!temp.path().join("notes").exists());

    mdnotes(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Plan_1"));
}

#[test]
fn test_backend_flag_overrides_config() {
    let temp = TempDir::new().unwrap();

    mdnotes(temp.path())
        .args(["--backend", "aggregate", "create", "Plan", "a"])
        .assert()
        .success();

    assert!(temp.path().join("notes.json").exists());

    mdnotes(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No notes found."));
}

#[test]
fn test_preview_and_path() {
    let temp = TempDir::new().unwrap();

    mdnotes(temp.path())
        .args(["create", "Plan", "**bold** move"])
        .assert()
        .success();

    mdnotes(temp.path())
        .args(["preview", "Plan"])
        .assert()
        .success()
        .stdout(predicate::str::contains("preview.html"));

    let html = fs::read_to_string(temp.path().join("preview.html")).unwrap();
    assert!(html.contains("<strong>bold</strong>"));

    mdnotes(temp.path())
        .args(["path", "Plan"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Plan.md"));
}

#[test]
fn test_config_rejects_unknown_key() {
    let temp = TempDir::new().unwrap();

    mdnotes(temp.path())
        .args(["config", "colour", "red"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key"));

    mdnotes(temp.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("backend = flat"))
        .stdout(predicate::str::contains("preview-file = preview.html"));
}

#[test]
fn test_menu_from_stdin() {
    let temp = TempDir::new().unwrap();

    mdnotes(temp.path())
        .write_stdin("1\nIdeas\nfirst\nEND\n4\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Markdown Note Manager"))
        .stdout(predicate::str::contains("Note saved: Ideas"))
        .stdout(predicate::str::contains("Your Notes:"))
        .stdout(predicate::str::contains("Exiting"));

    assert_eq!(
        fs::read_to_string(temp.path().join("notes/Ideas.md")).unwrap(),
        "first\n"
    );
}

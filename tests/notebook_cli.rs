#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn notebook(user_data: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("notebook").unwrap();
    cmd.env("NOTEBOOK_USER_DATA", user_data.path())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "command failed: {:?}", output);
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn paths_are_created_under_user_data() {
    let temp = TempDir::new().unwrap();

    notebook(&temp)
        .arg("paths")
        .assert()
        .success()
        .stdout(predicate::str::contains("notebook"));

    assert!(temp.path().join("notebook/notes").is_dir());
    assert!(temp.path().join("notebook/images").is_dir());
}

#[test]
fn user_data_flag_overrides_env() {
    let env_dir = TempDir::new().unwrap();
    let flag_dir = TempDir::new().unwrap();

    notebook(&env_dir)
        .args(["paths", "--user-data"])
        .arg(flag_dir.path())
        .assert()
        .success();

    assert!(flag_dir.path().join("notebook/notes").is_dir());
    assert!(!env_dir.path().join("notebook").exists());
}

#[test]
fn note_round_trip_through_the_binary() {
    let temp = TempDir::new().unwrap();

    let path = stdout_of(notebook(&temp).write_stdin("# Trip\n\n日本語 ✓\n").arg("new"));
    let path = path.trim();
    assert!(path.ends_with(".md"));
    assert_eq!(fs::read_to_string(path).unwrap(), "# Trip\n\n日本語 ✓\n");

    notebook(&temp)
        .args(["show", path])
        .assert()
        .success()
        .stdout("# Trip\n\n日本語 ✓\n");

    notebook(&temp)
        .args(["update", path, "replaced", "body"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Note updated"));
    assert_eq!(fs::read_to_string(path).unwrap(), "replaced body");

    notebook(&temp)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("replaced body"));

    notebook(&temp)
        .args(["delete", path])
        .assert()
        .success()
        .stdout(predicate::str::contains("Note deleted"));

    notebook(&temp)
        .args(["rm", path])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to delete"));

    notebook(&temp)
        .args(["show", path])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn new_json_returns_note_record() {
    let temp = TempDir::new().unwrap();
    let out = stdout_of(notebook(&temp).args(["new", "--json", "#", "Heading"]));
    let note: serde_json::Value = serde_json::from_str(&out).unwrap();

    assert_eq!(note["title"], "Heading");
    let file_path = note["filePath"].as_str().unwrap();
    assert!(file_path.contains("notebook"));
    assert!(note["id"].as_str().is_some());
}

#[test]
fn image_save_refs_and_delete() {
    let temp = TempDir::new().unwrap();

    let image = stdout_of(
        notebook(&temp)
            .args(["image", "save"])
            .write_stdin("data:image/png;base64,AAECAwQ="),
    );
    let image = image.trim().to_string();
    assert_eq!(fs::read(&image).unwrap(), vec![0, 1, 2, 3, 4]);

    let note = temp.path().join("draft.md");
    fs::write(
        &note,
        format!("![pasted]({}) ![web](http://ext/b.png)", image),
    )
    .unwrap();

    notebook(&temp)
        .args(["image", "refs"])
        .arg(&note)
        .assert()
        .success()
        .stdout(predicate::str::diff(format!("{}\n", image)));

    notebook(&temp)
        .args(["image", "refs", "--check"])
        .arg(&note)
        .assert()
        .success()
        .stdout("true\n");

    notebook(&temp)
        .args(["image", "rm", image.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Image deleted"));
    assert!(!std::path::Path::new(&image).exists());
}

#[test]
fn invalid_image_data_fails() {
    let temp = TempDir::new().unwrap();
    notebook(&temp)
        .args(["image", "save", "%%%"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid base64"));
}

#[test]
fn read_missing_file_fails() {
    let temp = TempDir::new().unwrap();
    notebook(&temp)
        .arg("read")
        .arg(temp.path().join("nope.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn config_set_and_get() {
    let temp = TempDir::new().unwrap();

    notebook(&temp)
        .args(["config", "note-ext", "txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("note-ext set to .txt"));

    notebook(&temp)
        .args(["config", "note-ext"])
        .assert()
        .success()
        .stdout(".txt\n");

    notebook(&temp)
        .args(["config", "bogus"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown key"));

    let path = stdout_of(notebook(&temp).args(["new", "plain"]));
    assert!(path.trim().ends_with(".txt"));
}

#[test]
fn helpers_and_actions() {
    let temp = TempDir::new().unwrap();

    notebook(&temp)
        .args(["format", "make", "me", "loud"])
        .assert()
        .success()
        .stdout("MAKE ME LOUD\n");

    notebook(&temp)
        .arg("time")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^\d{4}/\d{1,2}/\d{1,2} \d{2}:\d{2}:\d{2}\n$").unwrap());

    notebook(&temp)
        .args(["action", "hello", r#"{"from":"test"}"#])
        .assert()
        .success();

    notebook(&temp)
        .args(["action", "goodbye"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown action"));
}

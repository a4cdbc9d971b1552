use std::process::{Command, Stdio};
use tempfile::TempDir;

fn stickies_cmd(root: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_stickies"));
    cmd.env("STICKIES_DIR", root.path());
    cmd
}

#[test]
fn test_save_creates_text_record() {
    let tmp = TempDir::new().unwrap();

    let output = stickies_cmd(&tmp)
        .args(["save", "Shopping List", "milk"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(tmp.path().join("StickyNotes/shopping list.txt").exists());
}

#[test]
fn test_show_round_trips_content() {
    let tmp = TempDir::new().unwrap();

    stickies_cmd(&tmp)
        .args(["save", "todo", "write more tests"])
        .output()
        .unwrap();

    let output = stickies_cmd(&tmp).args(["show", "todo"]).output().unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "write more tests\n");
}

#[test]
fn test_show_missing_note_is_empty_not_error() {
    let tmp = TempDir::new().unwrap();

    let output = stickies_cmd(&tmp)
        .args(["show", "never saved"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "\n");
}

#[test]
fn test_empty_name_maps_to_default() {
    let tmp = TempDir::new().unwrap();

    stickies_cmd(&tmp)
        .args(["save", "", "fallback content"])
        .output()
        .unwrap();

    // No name at all reads the same note.
    let output = stickies_cmd(&tmp).args(["show"]).output().unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "fallback content\n");
    assert!(tmp.path().join("StickyNotes/default.txt").exists());
}

#[test]
fn test_save_reads_stdin() {
    let tmp = TempDir::new().unwrap();

    let mut child = stickies_cmd(&tmp)
        .args(["save", "piped", "--stdin"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    use std::io::Write;
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"from a pipe")
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());

    let output = stickies_cmd(&tmp).args(["show", "piped"]).output().unwrap();
    assert_eq!(String::from_utf8_lossy(&output.stdout), "from a pipe\n");
}

#[test]
fn test_save_rejects_oversized_note() {
    let tmp = TempDir::new().unwrap();

    let big = "x".repeat(5001);
    let output = stickies_cmd(&tmp)
        .args(["save", "big", &big])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("caps notes at 5000"));
    assert!(!tmp.path().join("StickyNotes/big.txt").exists());
}

#[test]
fn test_names_collide_after_sanitisation() {
    let tmp = TempDir::new().unwrap();

    stickies_cmd(&tmp).args(["save", "Foo", "a"]).output().unwrap();
    stickies_cmd(&tmp).args(["save", "foo", "b"]).output().unwrap();

    let output = stickies_cmd(&tmp).args(["show", "FOO"]).output().unwrap();
    assert_eq!(String::from_utf8_lossy(&output.stdout), "b\n");
}

#[test]
fn test_list_shows_notes_with_colour() {
    let tmp = TempDir::new().unwrap();

    stickies_cmd(&tmp).args(["save", "alpha", "1"]).output().unwrap();
    stickies_cmd(&tmp)
        .args(["colour", "alpha", "1,0.9,0.4,1"])
        .output()
        .unwrap();

    let output = stickies_cmd(&tmp).args(["list"]).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("alpha"));
    assert!(stdout.contains("1,0.9,0.4,1"));
}

#[test]
fn test_list_empty_store() {
    let tmp = TempDir::new().unwrap();

    let output = stickies_cmd(&tmp).args(["list"]).output().unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("No notes yet."));
}

#[test]
fn test_delete_requires_force_when_not_interactive() {
    let tmp = TempDir::new().unwrap();

    stickies_cmd(&tmp).args(["save", "keep", "x"]).output().unwrap();

    let output = stickies_cmd(&tmp)
        .args(["delete", "keep"])
        .stdin(Stdio::null())
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--force"));
    assert!(tmp.path().join("StickyNotes/keep.txt").exists());
}

#[test]
fn test_delete_removes_note_but_keeps_colour() {
    let tmp = TempDir::new().unwrap();

    stickies_cmd(&tmp).args(["save", "foo", "x"]).output().unwrap();
    stickies_cmd(&tmp)
        .args(["colour", "foo", "0.2,0.4,0.6,1"])
        .output()
        .unwrap();

    let output = stickies_cmd(&tmp)
        .args(["delete", "foo", "--force"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let output = stickies_cmd(&tmp).args(["list"]).output().unwrap();
    assert!(!String::from_utf8_lossy(&output.stdout).contains("foo"));

    // The orphan config survives deletion.
    let output = stickies_cmd(&tmp).args(["colour", "foo"]).output().unwrap();
    assert_eq!(String::from_utf8_lossy(&output.stdout), "0.2,0.4,0.6,1\n");
}

#[test]
fn test_delete_missing_note_is_not_an_error() {
    let tmp = TempDir::new().unwrap();

    let output = stickies_cmd(&tmp)
        .args(["delete", "ghost", "--force"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("No note named 'ghost'"));
}

#[test]
fn test_colour_defaults_to_grey() {
    let tmp = TempDir::new().unwrap();

    let output = stickies_cmd(&tmp).args(["colour", "fresh"]).output().unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "0.5,0.5,0.5,1\n");
}

#[test]
fn test_colour_rejects_bad_value() {
    let tmp = TempDir::new().unwrap();

    let output = stickies_cmd(&tmp)
        .args(["colour", "n", "2,0,0,1"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid colour"));
}

#[test]
fn test_config_record_is_pretty_json() {
    let tmp = TempDir::new().unwrap();

    stickies_cmd(&tmp)
        .args(["colour", "styled", "0.25,0.5,0.75,1"])
        .output()
        .unwrap();

    let path = tmp.path().join("StickyNotes/styled.json");
    assert!(path.exists());
    let json = std::fs::read_to_string(path).unwrap();
    assert!(json.contains('\n'), "config should be pretty-printed");
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed["colour"][3], 1.0);
}

#[test]
fn test_json_output_for_list() {
    let tmp = TempDir::new().unwrap();

    stickies_cmd(&tmp).args(["save", "a", "1"]).output().unwrap();
    stickies_cmd(&tmp).args(["save", "b", "2"]).output().unwrap();

    let output = stickies_cmd(&tmp).args(["list", "--json"]).output().unwrap();
    assert!(output.status.success());
    let parsed: serde_json::Value =
        serde_json::from_slice(&output.stdout).unwrap();
    let names: Vec<&str> = parsed
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["a", "b"]);
}

//! Scripted whole-session tests.

use std::fs;
use std::path::PathBuf;

use larder_engine::{GroceryCatalog, NullSink};
use larder_runtime::editor::{LineEditor, ReadResult};
use larder_runtime::{Session, Shell};
use larder_storage::FileStore;

/// Feeds a fixed script of lines, then EOF.
struct ScriptedEditor {
    lines: std::vec::IntoIter<String>,
}

impl ScriptedEditor {
    fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines
                .iter()
                .map(|s| (*s).to_string())
                .collect::<Vec<_>>()
                .into_iter(),
        }
    }
}

impl LineEditor for ScriptedEditor {
    fn read_line(&mut self, _prompt: &str) -> larder_foundation::Result<ReadResult> {
        Ok(self
            .lines
            .next()
            .map_or(ReadResult::Eof, ReadResult::Line))
    }

    fn add_history(&mut self, _line: &str) {}

    fn set_keywords(&mut self, _keywords: Vec<String>) {}
}

/// A temp file path that cleans itself up.
struct TempPath(PathBuf);

impl TempPath {
    fn new(name: &str) -> Self {
        let path = std::env::temp_dir().join(format!("larder_e2e_{}_{name}", std::process::id()));
        let _ = fs::remove_file(&path);
        Self(path)
    }
}

impl Drop for TempPath {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.0);
    }
}

// =============================================================================
// Whole Sessions
// =============================================================================

#[test]
fn a_session_spanning_all_three_modes() {
    let mut shell = Shell::with_editor(
        ScriptedEditor::new(&[
            "add Milk",
            "amt Milk a/5",
            "store Milk l/Fridge",
            "switch calories",
            "eat toast",
            "150",
            "switch profile",
            "view",
            "exit",
        ]),
        Session::new(GroceryCatalog::new(NullSink)),
    )
    .without_banner();
    shell.run().unwrap();

    let session = shell.session();
    assert!(!session.is_running());
    assert_eq!(session.catalog().get("Milk").unwrap().amount, 5);
    assert_eq!(session.foods().foods().len(), 1);
    assert!(!session.profile().is_set());
}

#[test]
fn command_errors_do_not_end_the_session() {
    let mut shell = Shell::with_editor(
        ScriptedEditor::new(&[
            "del Milk",
            "frobnicate",
            "add Milk",
            "exp Milk d/not-a-date",
            "exit",
        ]),
        Session::new(GroceryCatalog::new(NullSink)),
    )
    .without_banner();
    shell.run().unwrap();

    // The session survived every bad line and still ran the good one.
    assert!(shell.session().catalog().exists("Milk"));
}

// =============================================================================
// Persistence Across Restarts
// =============================================================================

#[test]
fn edits_from_one_session_survive_a_restart() {
    let temp = TempPath::new("restart.msgpack");

    {
        let store = FileStore::new(&temp.0);
        let snapshot = store.load_or_default().unwrap();
        let catalog = GroceryCatalog::from_parts(snapshot.groceries, snapshot.locations, store);
        let mut shell = Shell::with_editor(
            ScriptedEditor::new(&[
                "add Milk",
                "amt Milk a/5",
                "cat Milk c/dairy",
                "store Milk l/Fridge",
                "exit",
            ]),
            Session::new(catalog),
        )
        .without_banner();
        shell.run().unwrap();
    }

    // Second session, fresh process as far as the code can tell.
    let store = FileStore::new(&temp.0);
    let snapshot = store.load_or_default().unwrap();
    let catalog = GroceryCatalog::from_parts(snapshot.groceries, snapshot.locations, store);
    let mut shell = Shell::with_editor(
        ScriptedEditor::new(&["use Milk a/2", "exit"]),
        Session::new(catalog),
    )
    .without_banner();
    shell.run().unwrap();

    let grocery = shell.session().catalog().get("Milk").unwrap();
    assert_eq!(grocery.amount, 3);
    assert_eq!(grocery.category, "DAIRY");
    assert_eq!(grocery.location.as_deref(), Some("fridge"));
    assert!(
        shell
            .session()
            .catalog()
            .locations()
            .get("fridge")
            .unwrap()
            .members
            .contains("milk")
    );
}

#[test]
fn deletions_survive_a_restart_too() {
    let temp = TempPath::new("deletion.msgpack");

    {
        let mut catalog = GroceryCatalog::new(FileStore::new(&temp.0));
        catalog.add("Milk").unwrap();
        catalog.add("Rice").unwrap();
        catalog.remove("Milk").unwrap();
    }

    let snapshot = FileStore::new(&temp.0).load_or_default().unwrap();
    let names: Vec<_> = snapshot.groceries.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(names, ["Rice"]);
}

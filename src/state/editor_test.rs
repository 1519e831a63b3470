use super::*;

use crate::net::types::CONFIG_NAME;

fn header(name: &str) -> ProjectHeader {
    ProjectHeader {
        id: "p1".to_owned(),
        name: name.to_owned(),
        recent_use: 0,
        modification_time: 0,
        icon: None,
        pub_id: None,
        pub_current: false,
        template_url: None,
    }
}

fn files(names: &[&str]) -> BTreeMap<String, String> {
    names.iter().map(|n| ((*n).to_owned(), format!("// {n}"))).collect()
}

// =============================================================
// Opening projects
// =============================================================

#[test]
fn editor_state_default_has_no_project() {
    let state = EditorState::default();
    assert_eq!(state.project_name(), "No project");
    assert_eq!(state.active_content(), None);
    assert_eq!(state.import_requested_seq, 0);
}

#[test]
fn open_prefers_main_file() {
    let mut state = EditorState::default();
    state.open(header("Blinky"), files(&["a.ts", MAIN_FILE, CONFIG_NAME]));
    assert_eq!(state.project_name(), "Blinky");
    assert_eq!(state.active_file.as_deref(), Some(MAIN_FILE));
    assert_eq!(state.active_content(), Some("// main.ts"));
    assert_eq!(state.status.as_deref(), Some("Opened Blinky"));
}

#[test]
fn open_without_main_picks_first_file() {
    let mut state = EditorState::default();
    state.open(header("Lib"), files(&["b.ts", "a.ts"]));
    assert_eq!(state.active_file.as_deref(), Some("a.ts"));
}

#[test]
fn open_empty_project_has_no_active_file() {
    let mut state = EditorState::default();
    state.open(header("Empty"), BTreeMap::new());
    assert_eq!(state.active_file, None);
}

// =============================================================
// Active file
// =============================================================

#[test]
fn set_active_file_switches_to_existing_file() {
    let mut state = EditorState::default();
    state.open(header("Blinky"), files(&[MAIN_FILE, CONFIG_NAME]));
    assert!(state.set_active_file(CONFIG_NAME));
    assert_eq!(state.active_file.as_deref(), Some(CONFIG_NAME));
}

#[test]
fn set_active_file_ignores_unknown_file() {
    let mut state = EditorState::default();
    state.open(header("Blinky"), files(&[MAIN_FILE]));
    assert!(!state.set_active_file("missing.ts"));
    assert_eq!(state.active_file.as_deref(), Some(MAIN_FILE));
}

// =============================================================
// Request counters
// =============================================================

#[test]
fn request_import_increments_seq() {
    let mut state = EditorState::default();
    state.request_import();
    state.request_import();
    assert_eq!(state.import_requested_seq, 2);
}

#[test]
fn record_save_sets_status() {
    let mut state = EditorState::default();
    state.record_save();
    assert_eq!(state.status.as_deref(), Some("Saved"));
}

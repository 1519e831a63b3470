use super::*;

use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use futures::executor::block_on;

use crate::error::{ApiError, WorkspaceError};
use crate::net::types::ProjectOptions;

// =============================================================
// Recording fake
// =============================================================

/// Implements every collaborator and records calls in order.
struct Recorder {
    calls: Mutex<Vec<String>>,
    install: Result<ProjectHeader, WorkspaceError>,
    example: Result<Option<ProjectOptions>, ApiError>,
}

impl Recorder {
    fn new() -> Self {
        Self { calls: Mutex::new(Vec::new()), install: Ok(header("installed")), example: Ok(None) }
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner).push(call);
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl EditorController for Recorder {
    fn load_project(&self, header: &ProjectHeader) {
        self.record(format!("load {}", header.name));
    }
    fn new_empty_project(&self, name: &str, template_url: &str) {
        self.record(format!("new_empty {name} {template_url}"));
    }
    fn new_project(&self, options: Option<ProjectOptions>) {
        match options {
            Some(o) => self.record(format!("new_project {}", o.name)),
            None => self.record("new_project none".to_owned()),
        }
    }
    fn import_file_dialog(&self) {
        self.record("import_dialog".to_owned());
    }
    fn save_and_compile(&self) {
        self.record("save".to_owned());
    }
    fn set_active_file(&self, name: &str) {
        self.record(format!("set_file {name}"));
    }
}

impl Telemetry for Recorder {
    fn tick_event(&self, name: &str, props: &[(&str, &str)]) {
        let props: Vec<String> = props.iter().map(|(k, v)| format!("{k}={v}")).collect();
        if props.is_empty() {
            self.record(format!("tick {name}"));
        } else {
            self.record(format!("tick {name} {}", props.join(",")));
        }
    }
}

impl LoadingOverlay for Recorder {
    fn show(&self, message: &str) {
        self.record(format!("overlay {message}"));
    }
    fn hide(&self) {
        self.record("overlay hide".to_owned());
    }
}

impl BrowserModal for Recorder {
    fn hide(&self) {
        self.record("browser hide".to_owned());
    }
}

#[async_trait(?Send)]
impl WorkspaceInstaller for Recorder {
    async fn install_by_id(&self, script_id: &str) -> Result<ProjectHeader, WorkspaceError> {
        self.record(format!("install {script_id}"));
        self.install.clone()
    }
}

#[async_trait(?Send)]
impl ExampleLoader for Recorder {
    async fn load_example(&self, name: &str, url: &str) -> Result<Option<ProjectOptions>, ApiError> {
        self.record(format!("load_example {name} {url}"));
        self.example.clone()
    }
}

fn header(name: &str) -> ProjectHeader {
    ProjectHeader {
        id: format!("id-{name}"),
        name: name.to_owned(),
        recent_use: 0,
        modification_time: 0,
        icon: None,
        pub_id: None,
        pub_current: false,
        template_url: None,
    }
}

fn card(name: &str, url: &str) -> CodeCard {
    CodeCard { name: name.to_owned(), url: url.to_owned(), ..CodeCard::default() }
}

fn actions(recorder: &Arc<Recorder>) -> ProjectActions {
    ProjectActions {
        editor: recorder.clone(),
        telemetry: recorder.clone(),
        installer: recorder.clone(),
        examples: recorder.clone(),
        overlay: recorder.clone(),
        browser: recorder.clone(),
    }
}

// =============================================================
// Card actions
// =============================================================

#[test]
fn open_header_ticks_hides_then_loads() {
    let recorder = Arc::new(Recorder::new());
    actions(&recorder).open_header(&header("Blinky"));
    assert_eq!(recorder.calls(), vec!["tick projects.header", "browser hide", "load Blinky"]);
}

#[test]
fn choose_make_lowercases_name() {
    let recorder = Arc::new(Recorder::new());
    actions(&recorder).choose_make(&card("Foo Bar", "/x"));
    assert_eq!(
        recorder.calls(),
        vec!["tick projects.gallery name=Foo Bar", "browser hide", "new_empty foo bar /x"]
    );
}

#[test]
fn code_card_opens_loaded_example() {
    let mut recorder = Recorder::new();
    recorder.example = Ok(Some(ProjectOptions::named("blink")));
    let recorder = Arc::new(recorder);
    let actions = actions(&recorder);
    let card = card("Blink", "/examples/blink");

    actions.choose_code(&card);
    block_on(actions.open_example(&card));

    assert_eq!(
        recorder.calls(),
        vec![
            "tick projects.example name=Blink",
            "browser hide",
            "overlay Loading...",
            "load_example blink /examples/blink",
            "overlay hide",
            "new_project blink",
        ]
    );
}

#[test]
fn example_without_code_opens_nothing() {
    let recorder = Arc::new(Recorder::new());
    block_on(actions(&recorder).open_example(&card("Empty", "/e")));
    assert_eq!(recorder.calls(), vec!["overlay Loading...", "load_example empty /e", "overlay hide"]);
}

#[test]
fn failed_example_load_hides_overlay() {
    let mut recorder = Recorder::new();
    recorder.example = Err(ApiError::Status { status: 500, url: "/api/md/e".to_owned() });
    let recorder = Arc::new(recorder);
    block_on(actions(&recorder).open_example(&card("E", "/e")));
    assert_eq!(recorder.calls().last().map(String::as_str), Some("overlay hide"));
    assert!(!recorder.calls().iter().any(|c| c.starts_with("new_project")));
}

#[test]
fn script_card_installs_then_loads() {
    let recorder = Arc::new(Recorder::new());
    let actions = actions(&recorder);
    let script = CloudScript { id: "abcdefghij".to_owned(), ..CloudScript::default() };

    actions.choose_script();
    block_on(actions.install_script(&script));

    assert_eq!(
        recorder.calls(),
        vec![
            "browser hide",
            "overlay loading project...",
            "install abcdefghij",
            "load installed",
            "overlay hide",
        ]
    );
}

#[test]
fn failed_install_hides_overlay_without_loading() {
    let mut recorder = Recorder::new();
    recorder.install = Err(WorkspaceError::ScriptNotFound("abcdefghij".to_owned()));
    let recorder = Arc::new(recorder);
    let script = CloudScript { id: "abcdefghij".to_owned(), ..CloudScript::default() };

    block_on(actions(&recorder).install_script(&script));

    assert_eq!(
        recorder.calls(),
        vec!["overlay loading project...", "install abcdefghij", "overlay hide"]
    );
}

// =============================================================
// Button actions
// =============================================================

#[test]
fn import_file_opens_dialog() {
    let recorder = Arc::new(Recorder::new());
    actions(&recorder).import_file();
    assert_eq!(recorder.calls(), vec!["tick projects.import", "browser hide", "import_dialog"]);
}

#[test]
fn new_project_creates_blank_project() {
    let recorder = Arc::new(Recorder::new());
    actions(&recorder).new_project();
    assert_eq!(recorder.calls(), vec!["tick projects.new", "browser hide", "new_project none"]);
}

#[test]
fn save_project_saves_and_compiles() {
    let recorder = Arc::new(Recorder::new());
    actions(&recorder).save_project();
    assert_eq!(recorder.calls(), vec!["tick projects.save", "browser hide", "save"]);
}

#[test]
fn rename_project_opens_config_file() {
    let recorder = Arc::new(Recorder::new());
    actions(&recorder).rename_project();
    assert_eq!(recorder.calls(), vec!["tick projects.rename", "browser hide", "set_file pxt.json"]);
}

// =============================================================
// LoadingGuard
// =============================================================

#[test]
fn loading_guard_hides_on_drop() {
    let recorder = Arc::new(Recorder::new());
    {
        let _guard = LoadingGuard::show(recorder.clone(), "busy");
        assert_eq!(recorder.calls(), vec!["overlay busy"]);
    }
    assert_eq!(recorder.calls(), vec!["overlay busy", "overlay hide"]);
}

//! Editor surface hosting the project browser.
//!
//! SYSTEM CONTEXT
//! ==============
//! Shows the open project and its files with a toolbar for the project
//! actions that live outside the browser (Projects, Save, Rename). Compiling
//! and editing are owned by the host application.
//!
//! The hidden file input is clicked whenever the editor state records a new
//! import request; the chosen file is read and handed to `SignalEditor`.

use leptos::prelude::*;

use crate::components::loading_modal::LoadingModal;
use crate::components::project_browser::ProjectBrowser;
use crate::services::actions::ProjectActions;
#[cfg(feature = "hydrate")]
use crate::services::editor::SignalEditor;
use crate::state::editor::EditorState;
use crate::state::projects::ProjectsState;

/// Toolbar, file list, and active file view.
#[component]
pub fn EditorShell() -> impl IntoView {
    let editor = expect_context::<RwSignal<EditorState>>();
    let projects = expect_context::<RwSignal<ProjectsState>>();
    let actions = StoredValue::new(expect_context::<ProjectActions>());
    let file_input = NodeRef::<leptos::html::Input>::new();

    #[cfg(feature = "hydrate")]
    let importer = StoredValue::new(expect_context::<SignalEditor>());

    #[cfg(feature = "hydrate")]
    {
        let handled = StoredValue::new(editor.with_untracked(|e| e.import_requested_seq));
        Effect::new(move || {
            let seq = editor.with(|e| e.import_requested_seq);
            if seq == handled.get_value() {
                return;
            }
            handled.set_value(seq);
            if let Some(input) = file_input.get() {
                input.click();
            }
        });
    }

    let on_import_change = move |_: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(input) = file_input.get_untracked() {
                read_import(&input, importer.get_value());
            }
        }
    };

    let project_name = move || editor.with(|e| e.project_name().to_owned());
    let has_project = move || editor.with(|e| e.header.is_some());
    let status = move || editor.get().status.unwrap_or_default();

    let file_tabs = move || {
        let (names, active) = editor.with(|e| (e.files.keys().cloned().collect::<Vec<_>>(), e.active_file.clone()));
        names
            .into_iter()
            .map(|name| {
                let is_active = active.as_deref() == Some(name.as_str());
                let target = name.clone();
                view! {
                    <button
                        class="editor-shell__file"
                        class:editor-shell__file--active=is_active
                        on:click=move |_| {
                            editor.update(|e| {
                                e.set_active_file(&target);
                            });
                        }
                    >
                        {name}
                    </button>
                }
            })
            .collect_view()
    };
    let content = move || editor.with(|e| e.active_content().unwrap_or_default().to_owned());

    view! {
        <div class="editor-shell">
            <div class="toolbar">
                <button
                    class="btn toolbar__projects"
                    on:click=move |_| projects.update(ProjectsState::show_open_project)
                    title="Open projects"
                >
                    "Projects"
                </button>
                <span class="toolbar__project-name">{project_name}</span>
                <span class="toolbar__spacer"></span>
                <button
                    class="btn"
                    disabled=move || !has_project()
                    on:click=move |_| actions.with_value(ProjectActions::rename_project)
                    title="Rename project"
                >
                    "Rename"
                </button>
                <button
                    class="btn"
                    disabled=move || !has_project()
                    on:click=move |_| actions.with_value(ProjectActions::save_project)
                    title="Save project"
                >
                    "Save"
                </button>
            </div>
            <Show
                when=has_project
                fallback=|| view! { <div class="editor-shell__placeholder">"Open or create a project to start."</div> }
            >
                <nav class="editor-shell__files">{file_tabs}</nav>
                <pre class="editor-shell__source">{content}</pre>
            </Show>
            <div class="status-bar">{status}</div>
            <input
                type="file"
                accept=".ts"
                class="editor-shell__import"
                hidden=true
                node_ref=file_input
                on:change=on_import_change
            />
            <ProjectBrowser />
            <LoadingModal />
        </div>
    }
}

#[cfg(feature = "hydrate")]
fn read_import(input: &web_sys::HtmlInputElement, importer: SignalEditor) {
    let Some(file) = input.files().and_then(|files| files.get(0)) else {
        return;
    };
    // Clear so choosing the same file again still fires `change`.
    input.set_value("");
    let name = file.name();
    leptos::task::spawn_local(async move {
        match wasm_bindgen_futures::JsFuture::from(file.text()).await {
            Ok(text) => importer.import_source(&name, text.as_string().unwrap_or_default()),
            Err(e) => leptos::logging::warn!("failed to read {name}: {e:?}"),
        }
    });
}

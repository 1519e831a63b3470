//! Root component and HTML shell.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` builds the service graph once and provides every shared signal and
//! service through context. Components below it only ever read context.

use std::sync::Arc;

use leptos::config::LeptosOptions;
use leptos::hydration::{AutoReload, HydrationScripts};
use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};

use crate::components::editor_shell::EditorShell;
use crate::config::TargetConfig;
use crate::data::DataHandle;
use crate::net::api::CloudApi;
use crate::services::actions::ProjectActions;
use crate::services::editor::SignalEditor;
use crate::services::gallery::GalleryService;
use crate::services::overlay::{SignalBrowser, SignalOverlay};
use crate::services::resolver::AppResolver;
use crate::services::telemetry::ConsoleTelemetry;
use crate::services::workspace::LocalWorkspace;
use crate::state::editor::EditorState;
use crate::state::loading::LoadingState;
use crate::state::projects::ProjectsState;

/// Document shell used for server rendering.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

/// Root component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = TargetConfig::load();
    let title = config.name.clone();

    let cloud = Arc::new(CloudApi);
    let workspace = Arc::new(LocalWorkspace::new(cloud.clone()));
    let galleries = GalleryService::new(cloud.clone());
    let data = DataHandle::new(Arc::new(AppResolver {
        workspace: workspace.clone(),
        scripts: cloud,
        galleries: galleries.clone(),
    }));

    let projects = RwSignal::new(ProjectsState::default());
    let editor = RwSignal::new(EditorState::default());
    let loading = RwSignal::new(LoadingState::default());

    let signal_editor = SignalEditor { state: editor, workspace: workspace.clone(), data: data.clone() };
    let actions = ProjectActions {
        editor: Arc::new(signal_editor.clone()),
        telemetry: Arc::new(ConsoleTelemetry),
        installer: workspace,
        examples: Arc::new(galleries),
        overlay: Arc::new(SignalOverlay(loading)),
        browser: Arc::new(SignalBrowser(projects)),
    };

    provide_context(RwSignal::new(config));
    provide_context(data);
    provide_context(projects);
    provide_context(editor);
    provide_context(signal_editor);
    provide_context(loading);
    provide_context(actions);

    view! {
        <Title text=title />
        <EditorShell />
    }
}

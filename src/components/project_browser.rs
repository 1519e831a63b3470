//! Modal project browser: My Stuff, Make, and Code tabs.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the `ProjectsState` and `TargetConfig` signals plus the data facade
//! from context, derives the card lists for the active tab, and forwards
//! every click to `ProjectActions`. List caches belong to this instance and
//! are dropped with it.

#[cfg(test)]
#[path = "project_browser_test.rs"]
mod project_browser_test;

use leptos::prelude::*;

use crate::components::code_card::CodeCardView;
use crate::config::TargetConfig;
use crate::data::DataHandle;
use crate::net::types::{CloudScript, CodeCard, ProjectHeader};
use crate::services::actions::ProjectActions;
use crate::state::projects::{BrowserLists, ListCaches, ProjectsState, ProjectsTab};
use crate::util::script_id::ScriptIdParser;

/// Keys that dismiss the browser.
fn closes_browser(key: &str) -> bool {
    key == "Escape"
}

fn empty_message(term: &str) -> String {
    format!("We couldn't find any projects matching '{term}'")
}

/// The project browser. Renders nothing while hidden.
#[component]
pub fn ProjectBrowser() -> impl IntoView {
    let state = expect_context::<RwSignal<ProjectsState>>();
    let config = expect_context::<RwSignal<TargetConfig>>();
    let data = expect_context::<DataHandle>();
    let actions = StoredValue::new(expect_context::<ProjectActions>());
    let caches = StoredValue::new(ListCaches::default());

    let view_key = Memo::new_with_compare(
        move |_| state.get(),
        |prev: Option<&ProjectsState>, next: Option<&ProjectsState>| match (prev, next) {
            (Some(prev), Some(next)) => prev.should_update(next),
            _ => true,
        },
    );
    let parser = Memo::new(move |_| {
        config.with(|c| {
            c.script_id_parser().unwrap_or_else(|e| {
                leptos::logging::warn!("share links disabled: {e}");
                ScriptIdParser::disabled()
            })
        })
    });
    let lists = Memo::new(move |_| {
        let current = view_key.get();
        if !current.visible {
            return BrowserLists::default();
        }
        let theme = config.with(|c| c.app_theme.clone());
        let parser = parser.get();
        caches
            .try_update_value(|c| c.derive(&current, &theme, &parser, &data))
            .unwrap_or_default()
    });

    let draft = RwSignal::new(state.with_untracked(|s| s.search_for.clone().unwrap_or_default()));
    let can_import = move || config.with(|c| c.compile);

    let dialog_ref = NodeRef::<leptos::html::Div>::new();

    // Keyboard events only reach the dialog once it holds focus.
    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        if let Some(dialog) = dialog_ref.get() {
            if let Err(e) = dialog.focus() {
                leptos::logging::warn!("could not focus project browser: {e:?}");
            }
        }
    });

    let hide = move || state.update(ProjectsState::hide);
    let on_keydown = Callback::new(move |ev: leptos::ev::KeyboardEvent| {
        if closes_browser(&ev.key()) {
            ev.prevent_default();
            hide();
        }
    });
    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let text = draft.get_untracked();
        state.update(|s| s.set_search(&text));
    };

    let tabs = move || {
        let theme = config.with(|c| c.app_theme.clone());
        ProjectsTab::available(&theme)
            .into_iter()
            .map(|tab| {
                view! {
                    <button
                        class="projects-browser__tab"
                        class:projects-browser__tab--active=move || view_key.get().tab == tab
                        on:click=move |_| state.update(|s| s.select_tab(tab))
                    >
                        {tab.label()}
                    </button>
                }
            })
            .collect_view()
    };

    let header_cards = move || {
        lists
            .get()
            .headers
            .into_iter()
            .map(|header| header_card(header, actions))
            .collect_view()
    };
    let script_cards = move || {
        lists
            .get()
            .scripts
            .into_iter()
            .map(|script| script_card(script, actions))
            .collect_view()
    };
    let make_cards = move || {
        lists
            .get()
            .makes
            .into_iter()
            .map(|card| gallery_card(card, ProjectsTab::Make, actions))
            .collect_view()
    };
    let code_cards = move || {
        lists
            .get()
            .codes
            .into_iter()
            .map(|card| gallery_card(card, ProjectsTab::Code, actions))
            .collect_view()
    };
    let empty_notice = move || {
        let current = view_key.get();
        let term = current.search_term()?.to_owned();
        lists
            .with(|l| l.is_empty(&current))
            .then(|| view! { <div class="projects-browser__empty">{empty_message(&term)}</div> })
    };

    let panel = move || match view_key.get().tab {
        ProjectsTab::MyStuff => view! {
            <div class="projects-browser__toolbar">
                <form class="projects-browser__search" on:submit=on_search>
                    <input
                        type="search"
                        class="projects-browser__search-input"
                        placeholder="Search..."
                        prop:value=move || draft.get()
                        on:input=move |ev| draft.set(event_target_value(&ev))
                    />
                    <button type="submit" class="btn">"Search"</button>
                </form>
                <button class="btn" on:click=move |_| actions.with_value(ProjectActions::new_project)>
                    "New Project..."
                </button>
                <Show when=can_import>
                    <button class="btn" on:click=move |_| actions.with_value(ProjectActions::import_file)>
                        "Import File..."
                    </button>
                </Show>
            </div>
            <div class="projects-browser__grid">{header_cards} {script_cards}</div>
        }
        .into_any(),
        ProjectsTab::Make => view! { <div class="projects-browser__grid">{make_cards}</div> }.into_any(),
        ProjectsTab::Code => view! { <div class="projects-browser__grid">{code_cards}</div> }.into_any(),
    };

    view! {
        <Show when=move || view_key.get().visible>
            <div class="projects-browser__backdrop" on:click=move |_| hide()>
                <div
                    class="projects-browser"
                    role="dialog"
                    aria-label="Projects"
                    tabindex="0"
                    node_ref=dialog_ref
                    on:click=move |ev| ev.stop_propagation()
                    on:keydown=move |ev| on_keydown.run(ev)
                >
                    <div class="projects-browser__header">
                        <nav class="projects-browser__tabs">{tabs}</nav>
                        <button class="projects-browser__close" on:click=move |_| hide() title="Close">
                            "Close"
                        </button>
                    </div>
                    {panel}
                    {empty_notice}
                </div>
            </div>
        </Show>
    }
}

fn header_card(header: ProjectHeader, actions: StoredValue<ProjectActions>) -> impl IntoView {
    let name = header.name.clone();
    let url = header.card_url();
    let icon = header.icon.clone();
    let time = Some(header.recent_use);
    let on_click = Callback::new(move |()| actions.with_value(|a| a.open_header(&header)));
    view! {
        <CodeCardView
            name=name
            url=Some(url)
            image_url=icon
            time=time
            color="code-card--local"
            on_click=on_click
        />
    }
}

fn script_card(script: CloudScript, actions: StoredValue<ProjectActions>) -> impl IntoView {
    let name = script.name.clone();
    let url = script.share_path();
    let description = Some(script.description.clone()).filter(|d| !d.is_empty());
    let time = Some(script.time).filter(|t| *t > 0);
    let on_click = Callback::new(move |()| {
        let actions = actions.get_value();
        let script = script.clone();
        actions.choose_script();
        leptos::task::spawn_local(async move { actions.install_script(&script).await });
    });
    view! {
        <CodeCardView
            name=name
            url=Some(url)
            description=description
            time=time
            color="code-card--cloud"
            on_click=on_click
        />
    }
}

fn gallery_card(card: CodeCard, tab: ProjectsTab, actions: StoredValue<ProjectActions>) -> impl IntoView {
    let name = card.name.clone();
    let url = Some(card.url.clone());
    let image_url = card.image_url.clone();
    let description = card.description.clone();
    let color = if tab == ProjectsTab::Make { "code-card--make" } else { "code-card--code" };
    let on_click = Callback::new(move |()| {
        if tab == ProjectsTab::Make {
            actions.with_value(|a| a.choose_make(&card));
            return;
        }
        let actions = actions.get_value();
        let card = card.clone();
        actions.choose_code(&card);
        leptos::task::spawn_local(async move { actions.open_example(&card).await });
    });
    view! {
        <CodeCardView
            name=name
            url=url
            image_url=image_url
            description=description
            color=color
            on_click=on_click
        />
    }
}

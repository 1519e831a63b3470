//! Clickable tile used by every grid in the project browser.

use leptos::prelude::*;

use crate::util::time_since::{now_secs, time_since};

/// One card: title, optional image and description, optional link and age.
#[component]
pub fn CodeCardView(
    name: String,
    on_click: Callback<()>,
    #[prop(default = None)] url: Option<String>,
    #[prop(default = None)] image_url: Option<String>,
    #[prop(default = None)] description: Option<String>,
    /// Unix seconds shown as a relative label.
    #[prop(default = None)]
    time: Option<i64>,
    /// Extra class selecting the card's color scheme.
    #[prop(default = "")]
    color: &'static str,
) -> impl IntoView {
    let age = time.map(|t| time_since(t, now_secs()));
    let url = url.filter(|u| !u.is_empty());
    let title = name.clone();

    view! {
        <div
            class=format!("code-card {color}")
            role="button"
            tabindex="0"
            title=title
            on:click=move |_| on_click.run(())
            on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                if ev.key() == "Enter" {
                    ev.prevent_default();
                    on_click.run(());
                }
            }
        >
            {image_url.map(|src| view! { <img class="code-card__image" src=src alt="" loading="lazy" /> })}
            <div class="code-card__body">
                <span class="code-card__name">{name}</span>
                {description.map(|d| view! { <p class="code-card__description">{d}</p> })}
            </div>
            <div class="code-card__meta">
                {url.map(|u| view! { <span class="code-card__url">{u}</span> })}
                {age.map(|a| view! { <span class="code-card__time">{a}</span> })}
            </div>
        </div>
    }
}

//! Blocking overlay shown while a project loads.

use leptos::prelude::*;

use crate::state::loading::LoadingState;

/// Dims the editor and shows the current loading message.
#[component]
pub fn LoadingModal() -> impl IntoView {
    let loading = expect_context::<RwSignal<LoadingState>>();

    view! {
        <Show when=move || loading.with(LoadingState::is_visible)>
            <div class="loading-modal__backdrop" aria-busy="true">
                <div class="loading-modal" role="status">
                    <span class="loading-modal__spinner" aria-hidden="true"></span>
                    <span class="loading-modal__message">
                        {move || loading.get().message.unwrap_or_default()}
                    </span>
                </div>
            </div>
        </Show>
    }
}

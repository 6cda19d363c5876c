//! Top navigation bar: sidebar toggle, title and sign-out

use crate::layout::global_context::use_global_context;
use crate::layout::left::sidebar::label_for_key;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_global_context();

    let is_sidebar_visible = move || ctx.left_open.get();
    let page_label = move || ctx.active.with(|key| label_for_key(key).to_string());

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {icon("panel-left")}
                </button>
                <span class="top-header__title">"Alumni Association Admin"</span>
                <span class="top-header__page">{page_label}</span>
            </div>

            <div class="top-header__actions">
                <Show when=move || ctx.signed_in.get()>
                    <button class="top-header__icon-btn" on:click=move |_| ctx.sign_out() title="Sign out">
                        {icon("log-out")}
                    </button>
                </Show>
            </div>
        </div>
    }
}

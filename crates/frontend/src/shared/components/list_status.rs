use leptos::prelude::*;

/// Spinner, empty notice and "Load more" button below a list
#[component]
pub fn ListStatus(
    /// First page still loading
    #[prop(into)]
    initial_loading: Signal<bool>,
    /// A later fetch is in flight
    #[prop(into)]
    loading: Signal<bool>,
    /// Loaded, but nothing matched
    #[prop(into)]
    empty: Signal<bool>,
    #[prop(into)]
    can_load_more: Signal<bool>,
    #[prop(into)]
    on_load_more: Callback<()>,
    /// e.g. "No events found"
    #[prop(into)]
    empty_text: String,
) -> impl IntoView {
    view! {
        <Show when=move || initial_loading.get()>
            <div class="list-status list-status--loading">
                <span class="spinner"></span>
                "Loading..."
            </div>
        </Show>
        <Show when=move || empty.get()>
            <div class="list-status list-status--empty">{empty_text.clone()}</div>
        </Show>
        <Show when=move || can_load_more.get() || (loading.get() && !initial_loading.get())>
            <div class="list-status list-status--more">
                <button
                    class="button button--secondary"
                    disabled=move || loading.get()
                    on:click=move |_| on_load_more.run(())
                >
                    {move || if loading.get() { "Loading..." } else { "Load more" }}
                </button>
            </div>
        </Show>
    }
}

use super::page_header::{count_subtitle, PageHeader};
use super::search_input::SearchInput;
use crate::shared::crud::CrudPage;
use crate::shared::icons::icon;
use contracts::domain::common::Resource;
use leptos::prelude::*;

/// Title, record count, search box and the Refresh / Add buttons of a
/// resource page
#[component]
pub fn ListToolbar<R: Resource>(
    page: CrudPage<R>,
    #[prop(optional, into)]
    search_placeholder: String,
) -> impl IntoView {
    let descriptor = R::DESCRIPTOR;
    let subtitle = Signal::derive(move || {
        page.list.with(|l| {
            l.loaded
                .then(|| count_subtitle(l.items.len(), l.pagination.total))
        })
    });
    let query = Signal::derive(move || page.list.with(|l| l.query.clone()));
    let refreshing = move || page.list.with(|l| l.is_loading());

    view! {
        <PageHeader title=descriptor.list_name subtitle=subtitle>
            <SearchInput
                value=query
                on_change=Callback::new(move |q: String| page.search(q))
                placeholder=search_placeholder
            />
            <button
                class="button button--secondary"
                disabled=refreshing
                on:click=move |_| page.refresh()
            >
                {icon("refresh")}
                "Refresh"
            </button>
            {descriptor.create.is_some().then(|| view! {
                <button class="button button--primary" on:click=move |_| page.open_create()>
                    {icon("plus")}
                    {format!("Add {}", descriptor.element_name)}
                </button>
            })}
        </PageHeader>
    }
}

/// Loading, empty and "Load more" rows under a resource list
#[component]
pub fn ListFooter<R: Resource>(page: CrudPage<R>) -> impl IntoView {
    let empty_text = format!("No {} found", R::DESCRIPTOR.list_name.to_lowercase());
    view! {
        <super::list_status::ListStatus
            initial_loading=Signal::derive(move || page.list.with(|l| l.is_initial_load()))
            loading=Signal::derive(move || page.list.with(|l| l.is_loading()))
            empty=Signal::derive(move || page.list.with(|l| l.is_empty_result()))
            can_load_more=Signal::derive(move || page.list.with(|l| l.can_load_more()))
            on_load_more=Callback::new(move |_: ()| page.load_more())
            empty_text=empty_text
        />
    }
}

/// Per-row buttons. View and status are shown only when given.
#[component]
pub fn RowButtons(
    #[prop(optional, into)]
    on_view: Option<Callback<()>>,
    #[prop(into)]
    on_edit: Callback<()>,
    #[prop(optional, into)]
    on_status: Option<Callback<()>>,
    #[prop(optional, into)]
    on_delete: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div class="row-actions">
            {on_view.map(|cb| view! {
                <button class="button button--icon" title="View" on:click=move |_| cb.run(())>
                    {icon("eye")}
                </button>
            })}
            <button class="button button--icon" title="Edit" on:click=move |_| on_edit.run(())>
                {icon("edit")}
            </button>
            {on_status.map(|cb| view! {
                <button class="button button--icon" title="Change status" on:click=move |_| cb.run(())>
                    {icon("tag")}
                </button>
            })}
            {on_delete.map(|cb| view! {
                <button
                    class="button button--icon button--danger"
                    title="Delete"
                    on:click=move |_| cb.run(())
                >
                    {icon("delete")}
                </button>
            })}
        </div>
    }
}

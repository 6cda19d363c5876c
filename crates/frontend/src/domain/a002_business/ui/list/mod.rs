use crate::layout::global_context::use_global_context;
use crate::shared::components::badge::StatusBadge;
use crate::shared::components::list_toolbar::{ListFooter, ListToolbar, RowButtons};
use crate::shared::components::resource_dialog::ResourceDialog;
use crate::shared::components::status_dialog::{StatusDialog, StatusTarget};
use crate::shared::crud::CrudPage;
use crate::shared::icons::icon;
use contracts::domain::a002_business::aggregate::Business;
use leptos::prelude::*;

/// Website as typed by owners often lacks a scheme
fn website_href(website: &str) -> Option<String> {
    let website = website.trim();
    if website.is_empty() {
        None
    } else if website.starts_with("http://") || website.starts_with("https://") {
        Some(website.to_string())
    } else {
        Some(format!("https://{}", website))
    }
}

#[component]
#[allow(non_snake_case)]
pub fn BusinessList() -> impl IntoView {
    let ctx = use_global_context();
    let page = CrudPage::<Business>::new(&ctx.services());
    let status_target = RwSignal::new(None::<StatusTarget>);

    page.refresh();

    let cards = move || {
        page.list
            .get()
            .items
            .into_iter()
            .map(|row| {
                let edit_row = row.clone();
                let target = StatusTarget {
                    id: row.id.clone(),
                    label: row.name.clone(),
                    current: row.status.clone(),
                };
                let (delete_id, delete_label) = (row.id.clone(), row.name.clone());
                view! {
                    <div class="card">
                        <div class="card__header">
                            <div>
                                <h3 class="card__title">{row.name.clone()}</h3>
                                <div class="card__subtitle">{format!("by {}", row.owner)}</div>
                            </div>
                            <StatusBadge status=row.status.clone() />
                        </div>
                        <div class="card__body">
                            <span class="badge badge--neutral">{row.category.clone()}</span>
                            <p class="card__text">{row.description.clone()}</p>
                            <div class="card__meta">{row.location.clone()}</div>
                            <div class="card__meta">{row.phone.clone()} " \u{00b7} " {row.email.clone()}</div>
                            {website_href(&row.website).map(|href| view! {
                                <a class="card__link" href=href target="_blank" rel="noopener noreferrer">
                                    {icon("external-link")}
                                    {row.website.clone()}
                                </a>
                            })}
                        </div>
                        <div class="card__footer">
                            <RowButtons
                                on_edit=Callback::new(move |_: ()| page.open_edit(edit_row.clone()))
                                on_status=Callback::new(move |_: ()| status_target.set(Some(target.clone())))
                                on_delete=Callback::new(move |_: ()| {
                                    page.delete(delete_id.clone(), delete_label.clone())
                                })
                            />
                        </div>
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <div class="content">
            <ListToolbar page=page search_placeholder="Search businesses..." />
            <div class="card-grid">{cards}</div>
            <ListFooter page=page />

            <ResourceDialog page=page />
            <StatusDialog page=page target=status_target />
        </div>
    }
}

use crate::layout::global_context::use_global_context;
use crate::shared::components::badge::StatusBadge;
use crate::shared::components::list_toolbar::{ListFooter, ListToolbar, RowButtons};
use crate::shared::components::resource_dialog::ResourceDialog;
use crate::shared::components::status_dialog::{StatusDialog, StatusTarget};
use crate::shared::crud::CrudPage;
use contracts::domain::a005_article::aggregate::Article;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn ArticleList() -> impl IntoView {
    let ctx = use_global_context();
    let page = CrudPage::<Article>::new(&ctx.services());
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
                    label: row.title.clone(),
                    current: row.status.clone(),
                };
                let (delete_id, delete_label) = (row.id.clone(), row.title.clone());
                let byline = match (row.author.trim(), row.date.trim()) {
                    ("", date) => date.to_string(),
                    (author, "") => author.to_string(),
                    (author, date) => format!("{} \u{00b7} {}", author, date),
                };
                view! {
                    <article class="card" class:card--featured=row.featured>
                        <div class="card__header">
                            <span class="badge badge--neutral">{row.category.clone()}</span>
                            {row.featured.then(|| view! { <span class="badge badge--primary">"Featured"</span> })}
                            <StatusBadge status=row.status.clone() />
                        </div>
                        <div class="card__body">
                            <h3 class="card__title">{row.title.clone()}</h3>
                            <p class="card__text">{row.summary()}</p>
                            <div class="card__meta">{byline}</div>
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
                    </article>
                }
            })
            .collect_view()
    };

    view! {
        <div class="content">
            <ListToolbar page=page search_placeholder="Search articles..." />
            <div class="card-grid">{cards}</div>
            <ListFooter page=page />

            <ResourceDialog page=page />
            <StatusDialog page=page target=status_target />
        </div>
    }
}

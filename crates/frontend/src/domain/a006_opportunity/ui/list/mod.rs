use crate::layout::global_context::use_global_context;
use crate::shared::components::badge::StatusBadge;
use crate::shared::components::list_toolbar::{ListFooter, ListToolbar, RowButtons};
use crate::shared::components::resource_dialog::ResourceDialog;
use crate::shared::components::status_dialog::{StatusDialog, StatusTarget};
use crate::shared::crud::CrudPage;
use crate::shared::icons::icon;
use contracts::domain::a006_opportunity::aggregate::Opportunity;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn OpportunityList() -> impl IntoView {
    let ctx = use_global_context();
    let page = CrudPage::<Opportunity>::new(&ctx.services());
    let status_target = RwSignal::new(None::<StatusTarget>);

    page.refresh();

    let rows = move || {
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
                let apply = (!row.apply_url.trim().is_empty()).then(|| {
                    view! {
                        <a class="table__link" href=row.apply_url.clone() target="_blank" rel="noopener noreferrer">
                            {icon("external-link")}
                            "Apply"
                        </a>
                    }
                });
                let documents = (!row.documents.is_empty())
                    .then(|| format!("{} document(s)", row.documents.len()));
                view! {
                    <tr class="table__row">
                        <td class="table__cell">
                            <div class="table__primary">{row.title.clone()}</div>
                            <div class="table__secondary">{row.company.clone()}</div>
                        </td>
                        <td class="table__cell">{row.location.clone()}</td>
                        <td class="table__cell">
                            <span class="badge badge--neutral">{row.employment_type.clone()}</span>
                        </td>
                        <td class="table__cell">
                            <div>{row.posted_by.clone()}</div>
                            <div class="table__secondary">{row.posted_date.clone()}</div>
                        </td>
                        <td class="table__cell">
                            {apply}
                            {documents.map(|d| view! { <div class="table__secondary">{d}</div> })}
                        </td>
                        <td class="table__cell">
                            <StatusBadge status=row.status.clone() />
                        </td>
                        <td class="table__cell table__cell--actions">
                            <RowButtons
                                on_edit=Callback::new(move |_: ()| page.open_edit(edit_row.clone()))
                                on_status=Callback::new(move |_: ()| status_target.set(Some(target.clone())))
                                on_delete=Callback::new(move |_: ()| {
                                    page.delete(delete_id.clone(), delete_label.clone())
                                })
                            />
                        </td>
                    </tr>
                }
            })
            .collect_view()
    };

    view! {
        <div class="content">
            <ListToolbar page=page search_placeholder="Search opportunities..." />
            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Opportunity"</th>
                            <th class="table__header-cell">"Location"</th>
                            <th class="table__header-cell">"Type"</th>
                            <th class="table__header-cell">"Posted"</th>
                            <th class="table__header-cell">"Links"</th>
                            <th class="table__header-cell">"Status"</th>
                            <th class="table__header-cell table__header-cell--actions">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
            </div>
            <ListFooter page=page />

            <ResourceDialog page=page />
            <StatusDialog page=page target=status_target />
        </div>
    }
}

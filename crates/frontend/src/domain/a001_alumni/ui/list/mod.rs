use crate::domain::a001_alumni::ui::details::AlumniDetails;
use crate::layout::global_context::use_global_context;
use crate::shared::components::avatar::Avatar;
use crate::shared::components::badge::StatusBadge;
use crate::shared::components::list_toolbar::{ListFooter, ListToolbar, RowButtons};
use crate::shared::components::resource_dialog::ResourceDialog;
use crate::shared::components::status_dialog::{StatusDialog, StatusTarget};
use crate::shared::crud::CrudPage;
use contracts::domain::a001_alumni::aggregate::{Alumni, AlumniProfile};
use leptos::prelude::*;

fn location(row: &Alumni) -> String {
    match (row.city.trim(), row.state.trim()) {
        ("", "") => "-".to_string(),
        (city, "") => city.to_string(),
        ("", state) => state.to_string(),
        (city, state) => format!("{}, {}", city, state),
    }
}

#[component]
#[allow(non_snake_case)]
pub fn AlumniList() -> impl IntoView {
    let ctx = use_global_context();
    let page = CrudPage::<AlumniProfile>::new(&ctx.services());
    let status_target = RwSignal::new(None::<StatusTarget>);
    let viewing = RwSignal::new(None::<String>);

    page.refresh();

    let rows = move || {
        page.list
            .get()
            .items
            .into_iter()
            .map(|row| {
                let edit_row = row.clone();
                let id = row.id.clone();
                let target = StatusTarget {
                    id: row.id.clone(),
                    label: row.name.clone(),
                    current: row.membership_status.clone(),
                };
                let delete_id = row.id.clone();
                let delete_label = row.name.clone();
                view! {
                    <tr class="table__row">
                        <td class="table__cell">
                            <div class="table__person">
                                <Avatar name=row.name.clone() />
                                <div>
                                    <div class="table__primary">{row.name.clone()}</div>
                                    <div class="table__secondary">{row.email.clone()}</div>
                                </div>
                            </div>
                        </td>
                        <td class="table__cell">{row.batch.clone()}</td>
                        <td class="table__cell">{row.mobile.clone()}</td>
                        <td class="table__cell">{location(&row)}</td>
                        <td class="table__cell">
                            <StatusBadge status=row.membership_status.clone() />
                        </td>
                        <td class="table__cell table__cell--actions">
                            <RowButtons
                                on_view=Callback::new(move |_: ()| viewing.set(Some(id.clone())))
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
            <ListToolbar page=page search_placeholder="Search alumni by name..." />
            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Name"</th>
                            <th class="table__header-cell">"Batch"</th>
                            <th class="table__header-cell">"Mobile"</th>
                            <th class="table__header-cell">"Location"</th>
                            <th class="table__header-cell">"Membership"</th>
                            <th class="table__header-cell table__header-cell--actions">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
            </div>
            <ListFooter page=page />

            <ResourceDialog page=page />
            <StatusDialog page=page target=status_target />
            {move || viewing.get().map(|id| view! {
                <AlumniDetails
                    page=page
                    id=id
                    on_close=Callback::new(move |_: ()| viewing.set(None))
                />
            })}
        </div>
    }
}

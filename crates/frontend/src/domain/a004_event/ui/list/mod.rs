use crate::domain::a004_event::ui::details::{attendance, EventDetailsView};
use crate::layout::global_context::use_global_context;
use crate::shared::components::badge::StatusBadge;
use crate::shared::components::list_toolbar::{ListFooter, ListToolbar, RowButtons};
use crate::shared::components::resource_dialog::ResourceDialog;
use crate::shared::components::status_dialog::{StatusDialog, StatusTarget};
use crate::shared::crud::CrudPage;
use contracts::domain::a004_event::aggregate::Event;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn EventList() -> impl IntoView {
    let ctx = use_global_context();
    let page = CrudPage::<Event>::new(&ctx.services());
    let status_target = RwSignal::new(None::<StatusTarget>);
    let viewing = RwSignal::new(None::<String>);

    page.refresh();

    let rows = move || {
        page.list
            .get()
            .items
            .into_iter()
            .map(|row| {
                let id = row.id.clone();
                let edit_row = row.clone();
                let target = StatusTarget {
                    id: row.id.clone(),
                    label: row.title.clone(),
                    current: row.status.clone(),
                };
                let (delete_id, delete_label) = (row.id.clone(), row.title.clone());
                view! {
                    <tr class="table__row">
                        <td class="table__cell">
                            <div class="table__primary">{row.title.clone()}</div>
                            <div class="table__secondary">{row.category.clone()}</div>
                        </td>
                        <td class="table__cell">
                            <div>{row.date.clone()}</div>
                            <div class="table__secondary">{row.time.clone()}</div>
                        </td>
                        <td class="table__cell">{row.venue.clone()}</td>
                        <td class="table__cell">{attendance(&row)}</td>
                        <td class="table__cell">
                            <StatusBadge status=row.status.clone() />
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
            <ListToolbar page=page search_placeholder="Search events..." />
            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Event"</th>
                            <th class="table__header-cell">"Date"</th>
                            <th class="table__header-cell">"Venue"</th>
                            <th class="table__header-cell">"Registrations"</th>
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
            {move || viewing.get().map(|id| view! {
                <EventDetailsView
                    page=page
                    id=id
                    on_close=Callback::new(move |_: ()| viewing.set(None))
                />
            })}
        </div>
    }
}

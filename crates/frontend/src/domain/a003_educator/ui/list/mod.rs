use crate::layout::global_context::use_global_context;
use crate::shared::components::badge::StatusBadge;
use crate::shared::components::list_toolbar::{ListFooter, ListToolbar, RowButtons};
use crate::shared::components::resource_dialog::ResourceDialog;
use crate::shared::components::status_dialog::{StatusDialog, StatusTarget};
use crate::shared::crud::CrudPage;
use contracts::domain::a003_educator::aggregate::Educator;
use leptos::prelude::*;

/// At most `max` expertise badges, then a "+N" badge for the rest
fn expertise_preview(areas: &[String], max: usize) -> (Vec<String>, Option<String>) {
    let shown = areas.iter().take(max).cloned().collect();
    let hidden = areas.len().saturating_sub(max);
    (shown, (hidden > 0).then(|| format!("+{}", hidden)))
}

#[component]
#[allow(non_snake_case)]
pub fn EducatorList() -> impl IntoView {
    let ctx = use_global_context();
    let page = CrudPage::<Educator>::new(&ctx.services());
    let status_target = RwSignal::new(None::<StatusTarget>);

    page.refresh();

    let rows = move || {
        page.list
            .get()
            .items
            .into_iter()
            .map(|row| {
                let (badges, more) = expertise_preview(&row.areas_of_expertise, 3);
                let edit_row = row.clone();
                let target = StatusTarget {
                    id: row.id.clone(),
                    label: row.name.clone(),
                    current: row.status.clone(),
                };
                let (delete_id, delete_label) = (row.id.clone(), row.name.clone());
                view! {
                    <tr class="table__row">
                        <td class="table__cell">
                            <div class="table__primary">{row.name.clone()}</div>
                            <div class="table__secondary">{row.email.clone()}</div>
                        </td>
                        <td class="table__cell">
                            <div>{row.department.clone()}</div>
                            <div class="table__secondary">{row.specialization.clone()}</div>
                        </td>
                        <td class="table__cell">{row.experience.clone()}</td>
                        <td class="table__cell">
                            {badges
                                .into_iter()
                                .map(|area| view! { <span class="badge badge--primary">{area}</span> })
                                .collect_view()}
                            {more.map(|m| view! { <span class="badge badge--neutral">{m}</span> })}
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
            <ListToolbar page=page search_placeholder="Search educators..." />
            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Educator"</th>
                            <th class="table__header-cell">"Department"</th>
                            <th class="table__header-cell">"Experience"</th>
                            <th class="table__header-cell">"Expertise"</th>
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

use crate::shared::crud::CrudPage;
use crate::shared::modal::Modal;
use contracts::domain::common::Resource;
use leptos::prelude::*;

/// Row whose status is being changed
#[derive(Debug, Clone, PartialEq)]
pub struct StatusTarget {
    pub id: String,
    pub label: String,
    pub current: String,
}

/// Select over the resource's status options. Only the id and the status
/// field are sent.
#[component]
pub fn StatusDialog<R: Resource>(
    page: CrudPage<R>,
    target: RwSignal<Option<StatusTarget>>,
) -> impl IntoView {
    view! {
        <Show when=move || target.with(Option::is_some)>
            <StatusForm page=page target=target />
        </Show>
    }
}

#[component]
fn StatusForm<R: Resource>(
    page: CrudPage<R>,
    target: RwSignal<Option<StatusTarget>>,
) -> impl IntoView {
    let Some(field) = R::DESCRIPTOR.status else {
        return ().into_any();
    };
    let initial = target.get_untracked().map(|t| t.current).unwrap_or_default();
    let selected = RwSignal::new(initial);
    let saving = RwSignal::new(false);

    let title = Signal::derive(move || {
        target
            .with(|t| t.as_ref().map(|t| format!("Change {}: {}", field.label, t.label)))
            .unwrap_or_default()
    });
    let on_close = Callback::new(move |_: ()| target.set(None));

    let save = move |_: leptos::ev::MouseEvent| {
        let Some(t) = target.get_untracked() else {
            return;
        };
        saving.set(true);
        page.change_status(t.id, selected.get_untracked(), move |ok| {
            let _ = saving.try_set(false);
            if ok {
                let _ = target.try_set(None);
            }
        });
    };

    let footer = move || {
        view! {
            <button type="button" class="button button--secondary" on:click=move |_| target.set(None)>
                "Cancel"
            </button>
            <button
                type="button"
                class="button button--primary"
                disabled=move || saving.get() || selected.with(String::is_empty)
                on:click=save
            >
                {move || if saving.get() { "Saving..." } else { "Update" }}
            </button>
        }
    };

    view! {
        <Modal title=title on_close=on_close footer=ToChildren::to_children(footer)>
            <div class="form__group">
                <label class="form__label" for="status-select">{field.label}</label>
                <select
                    id="status-select"
                    class="form__select"
                    prop:value=move || selected.get()
                    on:change=move |ev| selected.set(event_target_value(&ev))
                >
                    {field
                        .options
                        .iter()
                        .map(|option| {
                            let option = *option;
                            view! {
                                <option value=option selected=move || selected.get() == option>
                                    {super::badge::status_label(option)}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>
        </Modal>
    }
    .into_any()
}

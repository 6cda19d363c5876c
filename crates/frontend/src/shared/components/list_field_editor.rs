use crate::shared::crud::ListEdit;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Growable list of single-line entries (expertise, achievements, ...)
#[component]
pub fn ListFieldEditor(
    /// Field name the edits are addressed to
    name: &'static str,
    #[prop(into)]
    entries: Signal<Vec<String>>,
    #[prop(into)]
    on_edit: Callback<ListEdit>,
    #[prop(optional)]
    placeholder: &'static str,
) -> impl IntoView {
    let add_label = move || {
        if entries.with(|e| e.is_empty()) {
            "Add entry"
        } else {
            "Add another"
        }
    };

    view! {
        <div class="list-field">
            {move || {
                entries
                    .get()
                    .into_iter()
                    .enumerate()
                    .map(|(index, entry)| {
                        view! {
                            <div class="list-field__row">
                                <input
                                    type="text"
                                    class="form__input"
                                    placeholder=placeholder
                                    prop:value=entry
                                    on:input=move |ev| {
                                        on_edit.run(ListEdit::Set {
                                            field: name.to_string(),
                                            index,
                                            value: event_target_value(&ev),
                                        })
                                    }
                                />
                                <button
                                    type="button"
                                    class="button button--icon"
                                    title="Remove"
                                    on:click=move |_| {
                                        on_edit.run(ListEdit::Remove {
                                            field: name.to_string(),
                                            index,
                                        })
                                    }
                                >
                                    {icon("x")}
                                </button>
                            </div>
                        }
                    })
                    .collect_view()
            }}
            <button
                type="button"
                class="button button--ghost list-field__add"
                on:click=move |_| on_edit.run(ListEdit::Append { field: name.to_string() })
            >
                {icon("plus")}
                {add_label}
            </button>
        </div>
    }
}

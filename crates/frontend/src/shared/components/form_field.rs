use super::list_field_editor::ListFieldEditor;
use crate::shared::crud::ListEdit;
use contracts::shared::form::{FieldKind, FieldSpec, FieldValue};
use leptos::prelude::*;

/// One labelled input of a schema-driven form, with its inline error
#[component]
pub fn FormField(
    spec: &'static FieldSpec,
    #[prop(into)]
    value: Signal<Option<FieldValue>>,
    #[prop(into)]
    error: Signal<Option<String>>,
    #[prop(into)]
    on_text: Callback<String>,
    #[prop(into)]
    on_flag: Callback<bool>,
    #[prop(into)]
    on_list: Callback<ListEdit>,
) -> impl IntoView {
    let text = move || {
        value.with(|v| v.as_ref().map(|v| v.as_text().to_string()).unwrap_or_default())
    };
    let invalid = move || error.with(Option::is_some);
    let required_mark = spec.validation.is_required().then_some(" *");

    let input = match spec.kind {
        FieldKind::TextArea => view! {
            <textarea
                id=spec.name
                class="form__textarea"
                class:form__input--invalid=invalid
                rows="4"
                placeholder=spec.placeholder
                prop:value=text
                on:input=move |ev| on_text.run(event_target_value(&ev))
            />
        }
        .into_any(),
        FieldKind::Select(options) => view! {
            <select
                id=spec.name
                class="form__select"
                class:form__input--invalid=invalid
                prop:value=text
                on:change=move |ev| on_text.run(event_target_value(&ev))
            >
                <option value="">{format!("Select {}", spec.label.to_lowercase())}</option>
                {options
                    .iter()
                    .map(|option| {
                        let option = *option;
                        view! {
                            <option value=option selected=move || text() == option>{option}</option>
                        }
                    })
                    .collect_view()}
            </select>
        }
        .into_any(),
        FieldKind::Checkbox => view! {
            <input
                id=spec.name
                type="checkbox"
                class="form__checkbox"
                prop:checked=move || value.with(|v| matches!(v, Some(FieldValue::Flag(true))))
                on:change=move |ev| on_flag.run(event_target_checked(&ev))
            />
        }
        .into_any(),
        FieldKind::List => {
            let entries = Signal::derive(move || {
                value.with(|v| match v {
                    Some(FieldValue::List(list)) => list.entries().to_vec(),
                    _ => Vec::new(),
                })
            });
            view! {
                <ListFieldEditor
                    name=spec.name
                    entries=entries
                    on_edit=on_list
                    placeholder=spec.placeholder
                />
            }
            .into_any()
        }
        kind => view! {
            <input
                id=spec.name
                type=kind.input_type()
                class="form__input"
                class:form__input--invalid=invalid
                placeholder=spec.placeholder
                prop:value=text
                on:input=move |ev| on_text.run(event_target_value(&ev))
            />
        }
        .into_any(),
    };

    view! {
        <div class="form__group" class:form__group--inline=spec.kind.is_flag()>
            <label class="form__label" for=spec.name>
                {spec.label}
                {required_mark}
            </label>
            {input}
            {move || error.get().map(|e| view! { <div class="form__error">{e}</div> })}
        </div>
    }
}

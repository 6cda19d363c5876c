use super::form_field::FormField;
use crate::shared::crud::{CrudPage, DialogPhase, ListEdit};
use crate::shared::modal::Modal;
use contracts::domain::common::Resource;
use leptos::prelude::*;

/// Create/edit dialog of one resource, rendered from its form schema
#[component]
pub fn ResourceDialog<R: Resource>(page: CrudPage<R>) -> impl IntoView {
    let is_open = move || page.dialog.with(|d| d.is_open());

    view! {
        <Show when=is_open>
            <DialogBody page=page />
        </Show>
    }
}

#[component]
fn DialogBody<R: Resource>(page: CrudPage<R>) -> impl IntoView {
    let title = Signal::derive(move || {
        page.dialog.track();
        page.dialog_title()
    });
    let on_close = Callback::new(move |_: ()| page.close_dialog());
    let phase = move || page.dialog.with(|d| d.phase);
    let submitting = move || phase() == DialogPhase::Submitting;

    let fields = R::form_schema()
        .iter()
        .map(|spec| {
            let name = spec.name;
            let value = Signal::derive(move || page.dialog.with(|d| d.values.get(name).cloned()));
            let error = Signal::derive(move || {
                page.dialog.with(|d| d.errors.get(name).map(str::to_string))
            });
            view! {
                <FormField
                    spec=spec
                    value=value
                    error=error
                    on_text=Callback::new(move |v: String| page.set_text(name, v))
                    on_flag=Callback::new(move |v: bool| page.set_flag(name, v))
                    on_list=Callback::new(move |edit: ListEdit| page.edit_list(edit))
                />
            }
        })
        .collect_view();

    let footer = move || {
        view! {
            <button
                type="button"
                class="button button--secondary"
                on:click=move |_| page.close_dialog()
            >
                "Cancel"
            </button>
            <button
                type="submit"
                form="resource-form"
                class="button button--primary"
                disabled=move || !page.dialog.with(|d| d.can_submit())
            >
                {move || if submitting() { "Saving..." } else { "Save" }}
            </button>
        }
    };

    view! {
        <Modal title=title on_close=on_close footer=ToChildren::to_children(footer)>
            {move || match phase() {
                DialogPhase::LoadingDetail => {
                    Some(view! { <div class="modal__status">"Loading details..."</div> }.into_any())
                }
                DialogPhase::LoadFailed => {
                    let message = page
                        .dialog
                        .with(|d| d.failure.clone())
                        .unwrap_or_else(|| "Record details could not be loaded".to_string());
                    Some(view! { <div class="warning-box">{message}</div> }.into_any())
                }
                _ => page
                    .dialog
                    .with(|d| d.failure.clone())
                    .map(|message| view! { <div class="warning-box">{message}</div> }.into_any()),
            }}
            <form
                id="resource-form"
                class="form"
                class:form--hidden=move || {
                    matches!(phase(), DialogPhase::LoadingDetail | DialogPhase::LoadFailed)
                }
                on:submit=move |ev| {
                    ev.prevent_default();
                    page.submit();
                }
            >
                <fieldset disabled=submitting>{fields}</fieldset>
            </form>
        </Modal>
    }
}

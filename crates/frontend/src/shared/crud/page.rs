use super::{DialogController, DialogSnapshot, ListController, ListEdit, ListSnapshot, RowActions};
use crate::layout::global_context::AppServices;
use crate::shared::gateway::ResourceClient;
use contracts::domain::common::Resource;
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use leptos::task::spawn_local;
use std::rc::Rc;

struct Controllers<R: Resource> {
    client: ResourceClient<R>,
    list: Rc<ListController<R>>,
    dialog: Rc<DialogController<R>>,
    actions: Rc<RowActions<R>>,
}

impl<R: Resource> Clone for Controllers<R> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            list: self.list.clone(),
            dialog: self.dialog.clone(),
            actions: self.actions.clone(),
        }
    }
}

/// Record shown in a read-only view dialog
#[derive(Debug, Clone, PartialEq)]
pub enum DetailState<T> {
    Loading,
    Loaded(T),
    Failed(String),
}

/// Controllers of one resource page bridged into Leptos signals.
///
/// The controllers live in local storage; views read the mirrored
/// snapshots and event handlers call the methods below.
pub struct CrudPage<R: Resource> {
    pub list: RwSignal<ListSnapshot<R::Row>>,
    pub dialog: RwSignal<DialogSnapshot>,
    controllers: StoredValue<Controllers<R>, LocalStorage>,
}

impl<R: Resource> Clone for CrudPage<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: Resource> Copy for CrudPage<R> {}

impl<R: Resource> CrudPage<R> {
    pub fn new(services: &AppServices) -> Self {
        let client = ResourceClient::<R>::new(services.gateway.clone());
        let list = Rc::new(ListController::new(
            client.clone(),
            services.timer.clone(),
            services.notifier.clone(),
            services.config.gateway.page_size,
            services.config.debounce(),
        ));
        let dialog = Rc::new(DialogController::new(
            client.clone(),
            list.clone(),
            services.notifier.clone(),
        ));
        let actions = Rc::new(RowActions::new(
            client.clone(),
            list.clone(),
            services.notifier.clone(),
        ));

        let list_signal = RwSignal::new(list.snapshot());
        let dialog_signal = RwSignal::new(DialogSnapshot::default());
        list.set_observer(move |snapshot| {
            let _ = list_signal.try_set(snapshot.clone());
        });
        dialog.set_observer(move |snapshot| {
            let _ = dialog_signal.try_set(snapshot.clone());
        });

        Self {
            list: list_signal,
            dialog: dialog_signal,
            controllers: StoredValue::new_local(Controllers {
                client,
                list,
                dialog,
                actions,
            }),
        }
    }

    fn controllers(&self) -> Option<Controllers<R>> {
        self.controllers.try_get_value()
    }

    pub fn client(&self) -> Option<ResourceClient<R>> {
        self.controllers().map(|c| c.client)
    }

    pub fn refresh(&self) {
        if let Some(c) = self.controllers() {
            spawn_local(async move { c.list.refresh().await });
        }
    }

    pub fn search(&self, query: String) {
        if let Some(c) = self.controllers() {
            spawn_local(async move { c.list.search(query).await });
        }
    }

    pub fn load_more(&self) {
        if let Some(c) = self.controllers() {
            spawn_local(async move { c.list.load_more().await });
        }
    }

    pub fn open_create(&self) {
        if let Some(c) = self.controllers() {
            c.dialog.open_create();
        }
    }

    pub fn open_edit(&self, row: R::Row) {
        if let Some(c) = self.controllers() {
            spawn_local(async move { c.dialog.open_edit(&row).await });
        }
    }

    pub fn close_dialog(&self) {
        if let Some(c) = self.controllers() {
            c.dialog.close();
        }
    }

    pub fn dialog_title(&self) -> String {
        self.controllers()
            .map(|c| c.dialog.title())
            .unwrap_or_default()
    }

    pub fn set_text(&self, field: &str, value: String) {
        if let Some(c) = self.controllers() {
            c.dialog.set_text(field, value);
        }
    }

    pub fn set_flag(&self, field: &str, value: bool) {
        if let Some(c) = self.controllers() {
            c.dialog.set_flag(field, value);
        }
    }

    pub fn edit_list(&self, edit: ListEdit) {
        if let Some(c) = self.controllers() {
            c.dialog.edit_list(edit);
        }
    }

    pub fn submit(&self) {
        if let Some(c) = self.controllers() {
            spawn_local(async move {
                if let Err(e) = c.dialog.submit().await {
                    log::debug!("{}: submit rejected: {}", R::DESCRIPTOR.key, e);
                }
            });
        }
    }

    /// Change the status field; `on_done` receives whether it succeeded
    pub fn change_status(&self, id: String, value: String, on_done: impl FnOnce(bool) + 'static) {
        if let Some(c) = self.controllers() {
            spawn_local(async move {
                let ok = c.actions.change_status(&id, &value).await.is_ok();
                on_done(ok);
            });
        }
    }

    /// Delete after the user confirms in a browser dialog
    pub fn delete(&self, id: String, label: String) {
        let confirmed = web_sys::window()
            .and_then(|w| {
                w.confirm_with_message(&format!(
                    "Delete {} \"{}\"? This cannot be undone.",
                    R::DESCRIPTOR.element_name.to_lowercase(),
                    label
                ))
                .ok()
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        if let Some(c) = self.controllers() {
            spawn_local(async move {
                let _ = c.actions.delete(&id).await;
            });
        }
    }

    /// Fetch the detail record of `id` into `target`
    pub fn load_detail<T>(&self, id: String, target: RwSignal<DetailState<T>>)
    where
        T: DeserializeOwned + Send + Sync + 'static,
    {
        let Some(client) = self.client() else {
            return;
        };
        target.set(DetailState::Loading);
        spawn_local(async move {
            let state = match client.get_as::<T>(&id).await {
                Ok(record) => DetailState::Loaded(record),
                Err(e) => {
                    log::warn!("{}: detail {} failed: {}", R::DESCRIPTOR.key, id, e);
                    DetailState::Failed(e.user_message())
                }
            };
            let _ = target.try_set(state);
        });
    }
}

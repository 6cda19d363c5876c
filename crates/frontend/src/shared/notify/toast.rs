use super::{NotificationLevel, Notifier};
use crate::shared::icons::icon;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use uuid::Uuid;

const TOAST_LIFETIME_MS: u32 = 4000;

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub level: NotificationLevel,
    pub title: String,
    pub message: String,
}

/// Stack of transient notifications shown in the corner of the page
#[derive(Clone, Copy)]
pub struct ToastService {
    toasts: RwSignal<Vec<Toast>>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
        }
    }

    pub fn dismiss(&self, id: Uuid) {
        let _ = self.toasts.try_update(|list| list.retain(|t| t.id != id));
    }
}

impl Default for ToastService {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for ToastService {
    fn notify(&self, level: NotificationLevel, title: &str, message: &str) {
        let id = Uuid::new_v4();
        self.toasts.update(|list| {
            list.push(Toast {
                id,
                level,
                title: title.to_string(),
                message: message.to_string(),
            })
        });

        let this = *self;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_LIFETIME_MS).await;
            this.dismiss(id);
        });
    }
}

#[component]
pub fn Toasts(service: ToastService) -> impl IntoView {
    view! {
        <div class="toast-stack">
            <For
                each=move || service.toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=format!("toast {}", toast.level.css_modifier())>
                            <div class="toast__body">
                                <div class="toast__title">{toast.title}</div>
                                <div class="toast__message">{toast.message}</div>
                            </div>
                            <button class="button button--icon" on:click=move |_| service.dismiss(id)>
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

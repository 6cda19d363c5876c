use crate::shared::config::{AppConfig, CONFIG};
use crate::shared::gateway::{CredentialProvider, Gateway, HttpTransport};
use crate::shared::notify::{Notifier, ToastService};
use crate::shared::timer::{BrowserTimer, Timer};
use crate::system::auth::storage::{self, BrowserCredentials};
use leptos::prelude::*;
use std::collections::HashMap;
use std::rc::Rc;
use web_sys::window;

/// Key of the page shown when the URL names none
pub const DEFAULT_PAGE: &str = "d400_overview";

/// Capabilities injected into every controller
#[derive(Clone)]
pub struct AppServices {
    pub gateway: Rc<Gateway>,
    pub timer: Rc<dyn Timer>,
    pub notifier: Rc<dyn Notifier>,
    pub config: &'static AppConfig,
}

impl AppServices {
    pub fn browser(toasts: ToastService) -> Self {
        let config: &'static AppConfig = &CONFIG;
        let credentials: Rc<dyn CredentialProvider> =
            Rc::new(BrowserCredentials::new(&config.auth.token_key));
        Self {
            gateway: Rc::new(Gateway::new(
                config.gateway_base(),
                Rc::new(HttpTransport),
                credentials,
            )),
            timer: Rc::new(BrowserTimer),
            notifier: Rc::new(toasts),
            config,
        }
    }
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<String>,
    pub left_open: RwSignal<bool>,
    pub signed_in: RwSignal<bool>,
    pub toasts: ToastService,
    services: StoredValue<AppServices, LocalStorage>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        let toasts = ToastService::new();
        let services = AppServices::browser(toasts);
        let signed_in = storage::has_token(&services.config.auth.token_key);
        Self {
            active: RwSignal::new(DEFAULT_PAGE.to_string()),
            left_open: RwSignal::new(true),
            signed_in: RwSignal::new(signed_in),
            toasts,
            services: StoredValue::new_local(services),
        }
    }

    pub fn services(&self) -> AppServices {
        self.services.get_value()
    }

    /// Sync the active page with `?active=` in the address bar
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(active_key) = params.get("active") {
            self.open_page(active_key);
        }

        let this = *self;
        Effect::new(move |_| {
            let active_key = this.active.get();
            let query_string =
                serde_qs::to_string(&HashMap::from([("active".to_string(), active_key)]))
                    .unwrap_or_default();
            let new_url = format!("?{}", query_string);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            // Only update URL if it actually changed
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    pub fn open_page(&self, key: &str) {
        log::debug!("open page {}", key);
        self.active.set(key.to_string());
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }

    /// Drop the stored token; further gateway calls fail as unauthenticated
    pub fn sign_out(&self) {
        storage::clear_token(&self.services.with_value(|s| s.config.auth.token_key.clone()));
        self.signed_in.set(false);
        self.toasts
            .info("Signed out", "The access token was removed from this browser");
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_global_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not found")
}

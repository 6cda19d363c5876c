//! Navigation menu: the overview and one entry per resource page

use crate::layout::global_context::use_global_context;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// (page key, label, icon)
pub const MENU_ITEMS: &[(&str, &str, &str)] = &[
    ("d400_overview", "Overview", "home"),
    ("a001_alumni", "Alumni Directory", "users"),
    ("a002_business", "Businesses", "building"),
    ("a003_educator", "Educators", "graduation-cap"),
    ("a004_event", "Events", "calendar"),
    ("a005_article", "News & Articles", "newspaper"),
    ("a006_opportunity", "Networking & Opportunities", "briefcase"),
];

/// Menu label of a page key, or the key itself when unknown
pub fn label_for_key(key: &str) -> &str {
    MENU_ITEMS
        .iter()
        .find(|(k, _, _)| *k == key)
        .map(|(_, label, _)| *label)
        .unwrap_or(key)
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_global_context();

    view! {
        <div class="app-sidebar__content">
            {MENU_ITEMS
                .iter()
                .map(|&(id, label, icon_name)| {
                    view! {
                        <div
                            class="app-sidebar__item"
                            class:app-sidebar__item--active=move || ctx.active.with(|a| a == id)
                            style:padding-left="12px"
                            on:click=move |_| ctx.open_page(id)
                        >
                            <div class="app-sidebar__item-content">
                                {icon(icon_name)}
                                <span>{label}</span>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

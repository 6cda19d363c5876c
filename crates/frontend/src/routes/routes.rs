use crate::dashboards::OverviewDashboard;
use crate::domain::a001_alumni::ui::list::AlumniList;
use crate::domain::a002_business::ui::list::BusinessList;
use crate::domain::a003_educator::ui::list::EducatorList;
use crate::domain::a004_event::ui::list::EventList;
use crate::domain::a005_article::ui::list::ArticleList;
use crate::domain::a006_opportunity::ui::list::OpportunityList;
use crate::layout::global_context::use_global_context;
use crate::layout::left::sidebar::Sidebar;
use crate::layout::Shell;
use leptos::prelude::*;

/// Page component for an `?active=` key
fn render_page(key: &str) -> AnyView {
    match key {
        "a001_alumni" => view! { <AlumniList /> }.into_any(),
        "a002_business" => view! { <BusinessList /> }.into_any(),
        "a003_educator" => view! { <EducatorList /> }.into_any(),
        "a004_event" => view! { <EventList /> }.into_any(),
        "a005_article" => view! { <ArticleList /> }.into_any(),
        "a006_opportunity" => view! { <OpportunityList /> }.into_any(),
        _ => view! { <OverviewDashboard /> }.into_any(),
    }
}

#[component]
fn ActivePage() -> impl IntoView {
    let ctx = use_global_context();
    // memo so the page is rebuilt only when the key changes
    let active = Memo::new(move |_| ctx.active.get());
    move || render_page(&active.get())
}

#[component]
fn SignedOut() -> impl IntoView {
    view! {
        <div class="content">
            <div class="warning-box">
                "No access token found in this browser. Sign in through the association portal, then reload this page."
            </div>
        </div>
    }
}

#[component]
fn MainLayout() -> impl IntoView {
    let ctx = use_global_context();
    ctx.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || view! {
                <Show when=move || ctx.signed_in.get() fallback=|| view! { <SignedOut /> }>
                    <ActivePage />
                </Show>
            }.into_any()
        />
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! { <MainLayout /> }
}

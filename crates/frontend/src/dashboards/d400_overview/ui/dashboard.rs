use crate::layout::global_context::{use_global_context, AppServices};
use crate::shared::components::stat_card::StatCard;
use crate::shared::gateway::ResourceClient;
use contracts::domain::a001_alumni::aggregate::AlumniProfile;
use contracts::domain::a002_business::aggregate::Business;
use contracts::domain::a003_educator::aggregate::Educator;
use contracts::domain::a004_event::aggregate::Event;
use contracts::domain::a005_article::aggregate::Article;
use contracts::domain::a006_opportunity::aggregate::Opportunity;
use contracts::domain::common::Resource;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// `pagination.total` of a `limit=1` list call; stays `None` on failure
fn load_count<R: Resource>(services: &AppServices, target: RwSignal<Option<u64>>) {
    let client = ResourceClient::<R>::new(services.gateway.clone());
    spawn_local(async move {
        match client.count().await {
            Ok(total) => {
                let _ = target.try_set(total);
            }
            Err(e) => log::warn!("{}: count failed: {}", R::DESCRIPTOR.key, e),
        }
    });
}

/// One card per resource; clicking a card opens its list page
#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let ctx = use_global_context();
    let services = ctx.services();

    let card = move |key: &'static str, label: &'static str, icon_name: &'static str| {
        let value = RwSignal::new(None::<u64>);
        (key, label, icon_name, value)
    };
    let cards = [
        card(AlumniProfile::DESCRIPTOR.key, "Alumni", "users"),
        card(Business::DESCRIPTOR.key, "Businesses", "building"),
        card(Educator::DESCRIPTOR.key, "Educators", "graduation-cap"),
        card(Event::DESCRIPTOR.key, "Events", "calendar"),
        card(Article::DESCRIPTOR.key, "News & Articles", "newspaper"),
        card(Opportunity::DESCRIPTOR.key, "Opportunities", "briefcase"),
    ];
    load_count::<AlumniProfile>(&services, cards[0].3);
    load_count::<Business>(&services, cards[1].3);
    load_count::<Educator>(&services, cards[2].3);
    load_count::<Event>(&services, cards[3].3);
    load_count::<Article>(&services, cards[4].3);
    load_count::<Opportunity>(&services, cards[5].3);

    view! {
        <div class="content">
            <div class="page-header">
                <div class="page-header__content">
                    <div class="page-header__text">
                        <h1 class="page-header__title">"Overview"</h1>
                        <div class="page-header__subtitle">"Records held by the association"</div>
                    </div>
                </div>
            </div>
            <div class="stat-grid">
                {cards
                    .into_iter()
                    .map(|(key, label, icon_name, value)| view! {
                        <StatCard
                            label=label.to_string()
                            icon_name=icon_name.to_string()
                            value=value
                            on_click=Callback::new(move |_: ()| ctx.open_page(key))
                        />
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

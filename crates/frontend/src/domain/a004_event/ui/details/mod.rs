use crate::shared::components::stat_card::format_thousands;
use crate::shared::crud::{CrudPage, DetailState};
use crate::shared::modal::Modal;
use contracts::domain::a004_event::aggregate::{Event, EventDetails, Registration};
use leptos::prelude::*;

fn money(amount: f64) -> String {
    format!("\u{20b9}{}", format_thousands(amount.max(0.0).round() as u64))
}

/// One line describing what a registration contributes
fn registration_summary(r: &Registration) -> String {
    if let Some(amount) = r.amount_sponsored {
        let level = r.sponsorship_level.as_deref().unwrap_or("Sponsor");
        return format!("{} \u{00b7} {}", level, money(amount));
    }
    if let Some(value) = r.contract_value {
        let service = r.service_type.as_deref().unwrap_or("Service");
        return format!("{} \u{00b7} {}", service, money(value));
    }
    let mut parts = Vec::new();
    if let Some(n) = r.adults.filter(|n| *n > 0) {
        parts.push(format!("{} adult(s)", n));
    }
    if let Some(n) = r.seniors.filter(|n| *n > 0) {
        parts.push(format!("{} senior(s)", n));
    }
    let children = r.children.unwrap_or(0) + r.children_under5.unwrap_or(0);
    if children > 0 {
        parts.push(format!("{} child(ren)", children));
    }
    if let Some(amount) = r.amount {
        parts.push(money(amount));
    }
    parts.join(", ")
}

/// Registrations, pricing and funding of one event
#[component]
#[allow(non_snake_case)]
pub fn EventDetailsView(page: CrudPage<Event>, id: String, on_close: Callback<()>) -> impl IntoView {
    let state = RwSignal::new(DetailState::<EventDetails>::Loading);
    page.load_detail(id, state);

    view! {
        <Modal title="Event Details".to_string() on_close=on_close wide=true>
            {move || match state.get() {
                DetailState::Loading => view! { <div class="modal__status">"Loading event..."</div> }.into_any(),
                DetailState::Failed(message) => view! { <div class="warning-box">{message}</div> }.into_any(),
                DetailState::Loaded(event) => view! { <EventBody event=event /> }.into_any(),
            }}
        </Modal>
    }
}

#[component]
#[allow(non_snake_case)]
fn EventBody(event: EventDetails) -> impl IntoView {
    let progress = event.funding_progress();
    let raised = event.raised_amount();
    let p = event.pricing;
    let b = event.registration_breakdown;
    let tiers = [
        ("Adult", p.adult, b.adult),
        ("Senior Citizen", p.senior_citizen, b.senior_citizen),
        ("Children", p.children, b.children),
    ];
    let groups = [
        ("Participants", event.registrations_by_type.participant.clone()),
        ("Sponsors", event.registrations_by_type.sponsor.clone()),
        ("Service Providers", event.registrations_by_type.service_provider.clone()),
    ];

    view! {
        <div class="event-details">
            <h2>{event.title.clone()}</h2>
            <div class="details-meta">
                {format!("{} {} \u{00b7} {} \u{00b7} {}", event.date, event.time, event.venue, event.category)}
            </div>
            <p>{event.description.clone()}</p>

            <div class="details-stats">
                <div>"Capacity: " {event.capacity}</div>
                <div>"Registered: " {event.registrations_count}</div>
                <div>"Remaining: " {event.remaining_capacity}</div>
            </div>

            <section class="details-section">
                <h3>"Pricing"</h3>
                <table class="table__data">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Tier"</th>
                            <th class="table__header-cell">"Price"</th>
                            <th class="table__header-cell">"Registered"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {tiers
                            .into_iter()
                            .map(|(tier, price, count)| view! {
                                <tr class="table__row">
                                    <td class="table__cell">{tier}</td>
                                    <td class="table__cell">{money(price)}</td>
                                    <td class="table__cell">{count}</td>
                                </tr>
                            })
                            .collect_view()}
                    </tbody>
                </table>
            </section>

            <section class="details-section">
                <h3>"Funding"</h3>
                <div class="progress">
                    <div class="progress__bar" style=format!("width: {:.1}%", progress)></div>
                </div>
                <div class="details-meta">
                    {format!(
                        "{} raised of {} ({:.0}%)",
                        money(raised),
                        money(event.total_targeted_amount),
                        progress
                    )}
                </div>
            </section>

            {groups
                .into_iter()
                .map(|(title, registrations)| {
                    let count = registrations.len();
                    view! {
                        <section class="details-section">
                            <h3>{format!("{} ({})", title, count)}</h3>
                            {(count == 0).then(|| view! { <div class="list-status list-status--empty">"None yet"</div> })}
                            <ul class="registration-list">
                                {registrations
                                    .into_iter()
                                    .map(|r| {
                                        let summary = registration_summary(&r);
                                        view! {
                                            <li class="registration">
                                                <div class="table__primary">{r.name}</div>
                                                <div class="table__secondary">{r.email} " " {r.phone}</div>
                                                <div class="table__secondary">{summary}</div>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        </section>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Registered over capacity, e.g. "84 / 300"
pub fn attendance(event: &Event) -> String {
    if event.capacity == 0 {
        event.registrations.to_string()
    } else {
        format!("{} / {}", event.registrations, event.capacity)
    }
}

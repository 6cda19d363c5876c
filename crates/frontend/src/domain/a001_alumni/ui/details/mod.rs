use crate::shared::components::avatar::Avatar;
use crate::shared::components::badge::StatusBadge;
use crate::shared::crud::{CrudPage, DetailState};
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use contracts::domain::a001_alumni::aggregate::AlumniProfile;
use leptos::prelude::*;

/// Read-only profile of one alumnus
#[component]
#[allow(non_snake_case)]
pub fn AlumniDetails(
    page: CrudPage<AlumniProfile>,
    id: String,
    on_close: Callback<()>,
) -> impl IntoView {
    let state = RwSignal::new(DetailState::<AlumniProfile>::Loading);
    page.load_detail(id, state);

    view! {
        <Modal title="Alumni Profile".to_string() on_close=on_close wide=true>
            {move || match state.get() {
                DetailState::Loading => view! { <div class="modal__status">"Loading profile..."</div> }.into_any(),
                DetailState::Failed(message) => view! { <div class="warning-box">{message}</div> }.into_any(),
                DetailState::Loaded(profile) => view! { <ProfileBody profile=profile /> }.into_any(),
            }}
        </Modal>
    }
}

#[component]
#[allow(non_snake_case)]
fn ProfileBody(profile: AlumniProfile) -> impl IntoView {
    let social = profile.has_social_links().then(|| {
        let links = [
            ("LinkedIn", profile.linkedin.clone()),
            ("Twitter", profile.twitter.clone()),
            ("Website", profile.website.clone()),
        ];
        view! {
            <div class="profile__social">
                {links
                    .into_iter()
                    .filter_map(|(label, url)| url.filter(|u| !u.trim().is_empty()).map(|u| (label, u)))
                    .map(|(label, url)| view! {
                        <a class="profile__link" href=url target="_blank" rel="noopener noreferrer">
                            {icon("external-link")}
                            {label}
                        </a>
                    })
                    .collect_view()}
            </div>
        }
    });

    let expertise = (!profile.areas_of_expertise.is_empty()).then(|| {
        let badges = profile
            .areas_of_expertise
            .iter()
            .map(|area| view! { <span class="badge badge--primary">{area.clone()}</span> })
            .collect_view();
        view! {
            <section class="profile__section">
                <h3>"Areas of Expertise"</h3>
                <div class="profile__badges">{badges}</div>
            </section>
        }
    });

    view! {
        <div class="profile">
            <div class="profile__head">
                <Avatar name=profile.name.clone() />
                <div>
                    <h2 class="profile__name">{profile.name.clone()}</h2>
                    <div class="profile__meta">
                        {format!("Batch {}", profile.batch)}
                        {profile.membership_no.clone().map(|no| format!(" \u{00b7} Member #{}", no))}
                    </div>
                    <StatusBadge status=profile.membership_status.clone() />
                </div>
            </div>
            {social}
            <dl class="details-grid">
                <dt>"Email"</dt>
                <dd>{profile.email.clone()}</dd>
                <dt>"Mobile"</dt>
                <dd>{profile.mobile.clone()}</dd>
                <dt>"Address"</dt>
                <dd>{join_address(&profile)}</dd>
            </dl>
            {profile.bio.clone().filter(|b| !b.trim().is_empty()).map(|bio| view! {
                <section class="profile__section">
                    <h3>"About"</h3>
                    <p>{bio}</p>
                </section>
            })}
            {expertise}
            {entry_section("Education", &profile.education)}
            {entry_section("Experience", &profile.experience)}
            {entry_section("Achievements", &profile.achievements)}
        </div>
    }
}

fn join_address(profile: &AlumniProfile) -> String {
    [&profile.address, &profile.city, &profile.state]
        .into_iter()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

fn entry_section(title: &'static str, entries: &[String]) -> Option<impl IntoView> {
    if entries.is_empty() {
        return None;
    }
    let items = entries
        .iter()
        .map(|entry| view! { <li>{entry.clone()}</li> })
        .collect_view();
    Some(view! {
        <section class="profile__section">
            <h3>{title}</h3>
            <ul class="profile__list">{items}</ul>
        </section>
    })
}

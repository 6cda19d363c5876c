use leptos::prelude::*;

/// Header of a list page: title, optional subtitle and action buttons
#[component]
pub fn PageHeader(
    /// Page title (required)
    #[prop(into)]
    title: String,

    /// Optional subtitle, e.g. the record count
    #[prop(optional, into)]
    subtitle: MaybeProp<String>,

    /// Action buttons
    children: Children,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <div class="page-header__content">
                <div class="page-header__text">
                    <h1 class="page-header__title">{title}</h1>
                    {move || subtitle.get().map(|s| view! {
                        <div class="page-header__subtitle">{s}</div>
                    })}
                </div>
            </div>
            <div class="page-header__actions">
                {children()}
            </div>
        </div>
    }
}

/// "Showing 20 of 45" style subtitle
pub fn count_subtitle(shown: usize, total: Option<u64>) -> String {
    match total {
        Some(total) => format!("Showing {} of {}", shown, total),
        None => format!("Showing {}", shown),
    }
}

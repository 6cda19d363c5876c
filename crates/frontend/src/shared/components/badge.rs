use leptos::prelude::*;

/// Colour variant for a status value reported by the gateway
pub fn status_variant(status: &str) -> &'static str {
    match status.trim().to_lowercase().as_str() {
        "approved" | "active" | "published" | "upcoming" | "lifetime member" => "success",
        "pending" | "draft" | "annual member" => "warning",
        "rejected" | "cancelled" | "closed" | "inactive" => "error",
        "completed" => "primary",
        _ => "neutral",
    }
}

/// Display text: first letter upper-cased, the rest unchanged
pub fn status_label(status: &str) -> String {
    let mut chars = status.trim().chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => "Unknown".to_string(),
    }
}

#[component]
pub fn StatusBadge(#[prop(into)] status: String) -> impl IntoView {
    let class = format!("badge badge--{}", status_variant(&status));
    view! { <span class=class>{status_label(&status)}</span> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_variant() {
        assert_eq!(status_variant("approved"), "success");
        assert_eq!(status_variant("Pending"), "warning");
        assert_eq!(status_variant("LifeTime Member"), "success");
        assert_eq!(status_variant("cancelled"), "error");
        assert_eq!(status_variant("archived"), "neutral");
    }

    #[test]
    fn test_status_label() {
        assert_eq!(status_label("upcoming"), "Upcoming");
        assert_eq!(status_label("Annual Member"), "Annual Member");
        assert_eq!(status_label(" "), "Unknown");
    }
}

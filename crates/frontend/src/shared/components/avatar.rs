use leptos::prelude::*;

/// First letter of every name part, upper-cased ("John Doe" -> "JD")
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

#[component]
pub fn Avatar(#[prop(into)] name: String) -> impl IntoView {
    let text = initials(&name);
    view! { <div class="avatar" title=name>{text}</div> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials() {
        assert_eq!(initials("John Doe"), "JD");
        assert_eq!(initials("  asha   rao "), "AR");
        assert_eq!(initials("Dr. Sarah Wilson"), "DSW");
        assert_eq!(initials(""), "");
    }
}

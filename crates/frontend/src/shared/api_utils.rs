//! URL helpers for gateway requests

/// Append percent-encoded query pairs to a URL
pub fn with_query(url: &str, params: &[(String, String)]) -> String {
    if params.is_empty() {
        return url.to_string();
    }
    let query = params
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");
    format!("{}?{}", url, query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_query_encodes_values() {
        let params = vec![
            ("page".to_string(), "1".to_string()),
            ("name".to_string(), "Ann Lee & co".to_string()),
        ];
        assert_eq!(
            with_query("http://localhost:3000/directory", &params),
            "http://localhost:3000/directory?page=1&name=Ann%20Lee%20%26%20co"
        );
        assert_eq!(with_query("/events", &[]), "/events");
    }
}

/// Validate a required text field with a max length.
pub fn validate_required(value: &str, field_name: &str, max_len: usize) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some(format!("{field_name} is required"));
    }
    if trimmed.len() > max_len {
        return Some(format!("{field_name} must be at most {max_len} characters"));
    }
    None
}

/// Validate an email: must contain '@' and '.', max 254 chars.
pub fn validate_email(email: &str) -> Option<String> {
    let trimmed = email.trim();
    if trimmed.is_empty() {
        return Some("Email is required".to_string());
    }
    if trimmed.len() > 254 {
        return Some("Email must be at most 254 characters".to_string());
    }
    if !trimmed.contains('@') || !trimmed.contains('.') {
        return Some("Email must be a valid address (contain '@' and '.')".to_string());
    }
    None
}

/// Validate a website URL: optional http(s) scheme, then a dotted host with
/// no whitespace. Strict enough to reject free text before the extraction
/// service is ever invoked.
pub fn validate_website(url: &str) -> Option<String> {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        return Some("Website URL is required".to_string());
    }
    match host_of(trimmed) {
        Some(_) => None,
        None => Some("Website must be a valid URL (e.g. https://example.com)".to_string()),
    }
}

/// Extract the host part of a URL, or `None` when the input does not look
/// like one.
pub fn host_of(url: &str) -> Option<&str> {
    let trimmed = url.trim();
    let rest = trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"))
        .unwrap_or(trimmed);
    let host = rest.split(['/', '?', '#']).next().unwrap_or("");
    let host = host.split(':').next().unwrap_or("");
    let valid = !host.is_empty()
        && host.contains('.')
        && !host.starts_with('.')
        && !host.ends_with('.')
        && host
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-');
    if valid { Some(host) } else { None }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn website_accepts_common_forms() {
        assert_eq!(validate_website("https://mytechstartup.com"), None);
        assert_eq!(validate_website("http://example.com/path?x=1"), None);
        assert_eq!(validate_website("example.com"), None);
        assert_eq!(validate_website("  https://example.co.uk  "), None);
    }

    #[test]
    fn website_rejects_free_text() {
        assert!(validate_website("not a url").is_some());
        assert!(validate_website("").is_some());
        assert!(validate_website("https://").is_some());
        assert!(validate_website("http://nodot").is_some());
        assert!(validate_website(".com").is_some());
    }

    #[test]
    fn host_extraction() {
        assert_eq!(host_of("https://mytechstartup.com/about"), Some("mytechstartup.com"));
        assert_eq!(host_of("example.com:8080/x"), Some("example.com"));
        assert_eq!(host_of("not a url"), None);
    }

    #[test]
    fn email_rules() {
        assert_eq!(validate_email("owner@example.com"), None);
        assert!(validate_email("").is_some());
        assert!(validate_email("owner-at-example").is_some());
    }

    #[test]
    fn required_rules() {
        assert_eq!(validate_required("Acme", "Business name", 120), None);
        assert!(validate_required("   ", "Business name", 120).is_some());
        assert!(validate_required(&"x".repeat(121), "Business name", 120).is_some());
    }
}

// Grouping key derivation from website strings

use tracing::debug;

/// Derive the grouping key from a website string.
///
/// The key is the last `.`-separated segment. Absent, empty or dot-less
/// input yields the empty string, which callers treat as "unclassifiable".
/// No validation against a public suffix list is performed.
pub fn extract_tld(website: Option<&str>) -> String {
    let Some(website) = website.filter(|w| !w.is_empty()) else {
        debug!("No website to extract a TLD from");
        return String::new();
    };

    let segments: Vec<&str> = website.split('.').collect();
    if segments.len() < 2 {
        debug!("Website '{}' has no domain separator", website);
        return String::new();
    }

    segments[segments.len() - 1].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_segment_is_returned() {
        assert_eq!(extract_tld(Some("https://example.com")), "com");
        assert_eq!(extract_tld(Some("https://my.website.org")), "org");
        assert_eq!(extract_tld(Some("a.b.c")), "c");
    }

    #[test]
    fn test_missing_separator_is_unclassifiable() {
        assert_eq!(extract_tld(Some("invalid-url")), "");
        assert_eq!(extract_tld(Some("https://")), "");
    }

    #[test]
    fn test_empty_and_absent() {
        assert_eq!(extract_tld(Some("")), "");
        assert_eq!(extract_tld(None), "");
    }

    #[test]
    fn test_trailing_dot_yields_empty_segment() {
        assert_eq!(extract_tld(Some("example.")), "");
    }

    #[test]
    fn test_path_after_domain_is_kept() {
        // Splitting is purely textual
        assert_eq!(extract_tld(Some("example.com/about")), "com/about");
    }
}

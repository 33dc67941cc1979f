//! URL validation and normalization utilities.

use log::warn;
use url::Url;

use crate::config::MAX_URL_LENGTH;
use crate::error_handling::AuditError;

/// Validates and normalizes a URL.
///
/// Trims whitespace and adds an `https://` prefix if no scheme is present, then
/// validates that the URL is syntactically valid, has a host, and uses the
/// http/https scheme. Rejects URLs longer than `MAX_URL_LENGTH` before and after
/// normalization.
///
/// # Arguments
///
/// * `url` - The URL string to validate and normalize
///
/// # Returns
///
/// The parsed URL, or `AuditError::InvalidUrl` describing why it was rejected.
pub fn validate_and_normalize_url(url: &str) -> Result<Url, AuditError> {
    let url = url.trim();
    if url.is_empty() {
        return Err(AuditError::InvalidUrl("URL is empty".to_string()));
    }

    if url.len() > MAX_URL_LENGTH {
        warn!(
            "Rejecting URL exceeding maximum length ({} > {}): {}...",
            url.len(),
            MAX_URL_LENGTH,
            url.chars().take(50).collect::<String>()
        );
        return Err(AuditError::InvalidUrl(format!(
            "URL exceeds {} characters",
            MAX_URL_LENGTH
        )));
    }

    // Normalize: add https:// prefix if no scheme was given
    let normalized = if url.contains("://") {
        url.to_string()
    } else {
        format!("https://{url}")
    };

    if normalized.len() > MAX_URL_LENGTH {
        warn!(
            "Rejecting normalized URL exceeding maximum length ({} > {})",
            normalized.len(),
            MAX_URL_LENGTH
        );
        return Err(AuditError::InvalidUrl(format!(
            "URL exceeds {} characters",
            MAX_URL_LENGTH
        )));
    }

    let parsed = Url::parse(&normalized).map_err(|e| {
        warn!("Rejecting invalid URL {url}: {e}");
        AuditError::InvalidUrl(format!("{url}: {e}"))
    })?;

    match parsed.scheme() {
        "http" | "https" => {}
        other => {
            warn!("Rejecting unsupported scheme for URL: {url}");
            return Err(AuditError::InvalidUrl(format!(
                "unsupported scheme '{other}'"
            )));
        }
    }

    if parsed.host_str().map_or(true, str::is_empty) {
        warn!("Rejecting URL without host: {url}");
        return Err(AuditError::InvalidUrl(format!("{url}: missing host")));
    }

    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::validate_and_normalize_url;

    #[test]
    fn test_validate_and_normalize_url_adds_https() {
        let result = validate_and_normalize_url("example.com").unwrap();
        assert_eq!(result.as_str(), "https://example.com/");
    }

    #[test]
    fn test_validate_and_normalize_url_preserves_http() {
        let result = validate_and_normalize_url("http://example.com").unwrap();
        assert_eq!(result.scheme(), "http");
        assert_eq!(result.host_str(), Some("example.com"));
    }

    #[test]
    fn test_validate_and_normalize_url_trims_whitespace() {
        let result = validate_and_normalize_url("  https://example.com/page  ").unwrap();
        assert_eq!(result.path(), "/page");
    }

    #[test]
    fn test_validate_and_normalize_url_with_path_and_port() {
        let result = validate_and_normalize_url("example.com:8080/path?query=value").unwrap();
        assert_eq!(result.as_str(), "https://example.com:8080/path?query=value");
    }

    #[test]
    fn test_validate_and_normalize_url_rejects_invalid_url() {
        assert!(validate_and_normalize_url("not a valid url!!!").is_err());
    }

    #[test]
    fn test_validate_and_normalize_url_rejects_unsupported_scheme() {
        let err = validate_and_normalize_url("ftp://example.com").unwrap_err();
        assert!(err.to_string().contains("unsupported scheme"));
    }

    #[test]
    fn test_validate_and_normalize_url_rejects_empty() {
        assert!(validate_and_normalize_url("").is_err());
        assert!(validate_and_normalize_url("   ").is_err());
    }

    #[test]
    fn test_validate_and_normalize_url_rejects_too_long() {
        let long = format!("example.com/{}", "a".repeat(3000));
        let err = validate_and_normalize_url(&long).unwrap_err();
        assert_eq!(err.status_code(), 400);
    }

    #[test]
    fn test_validate_and_normalize_url_ipv6() {
        let result = validate_and_normalize_url("[2001:db8::1]:8080").unwrap();
        assert_eq!(result.as_str(), "https://[2001:db8::1]:8080/");
    }
}

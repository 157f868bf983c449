//! Application constants
//!
//! Centralized location for endpoint paths, header names and defaults used
//! throughout the client.

// Remote service defaults
pub const DEFAULT_BASE_URL: &str = "http://leema.kz";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_SIMULATED_LATENCY_MS: u64 = 300;

// Endpoints
pub const PRODUCT_BY_BARCODE_PATH: &str = "/products/by-barcode/";
pub const AUTH_TOKEN_PATH: &str = "/auth/token";

// Headers
pub const CONTENT_TYPE_HEADER: &str = "Content-Type";
pub const ACCEPT_HEADER: &str = "Accept";
pub const API_KEY_HEADER: &str = "X-API-Key";
pub const JSON_MEDIA_TYPE: &str = "application/json";

/// Only this many characters of a token ever reach the logs.
pub const TOKEN_LOG_PREFIX_LEN: usize = 20;

// Persisted credential key removed on authorization failure
pub const AUTH_TOKEN_STORAGE_KEY: &str = "auth_token";

// Event name carried by auth failure notifications
pub const EVENT_AUTH_ERROR: &str = "auth-error";

/// Build the lookup endpoint for a barcode; the barcode is percent-encoded
/// as a single path segment.
pub fn product_by_barcode_endpoint(barcode: &str) -> String {
    format!("{PRODUCT_BY_BARCODE_PATH}{}", urlencoding::encode(barcode))
}

/// Barcode addressed by a lookup endpoint, percent-decoded.
///
/// Returns `None` when `endpoint` is not a lookup.
pub fn barcode_from_endpoint(endpoint: &str) -> Option<String> {
    if !is_product_lookup(endpoint) {
        return None;
    }

    let segment = endpoint.rsplit('/').next().unwrap_or_default();
    let barcode = urlencoding::decode(segment)
        .map_or_else(|_| segment.to_string(), |decoded| decoded.into_owned());
    Some(barcode)
}

/// Whether an endpoint addresses the barcode lookup resource.
pub fn is_product_lookup(endpoint: &str) -> bool {
    endpoint.contains(PRODUCT_BY_BARCODE_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_endpoint_is_recognised() {
        let endpoint = product_by_barcode_endpoint("4607027662161");
        assert_eq!(endpoint, "/products/by-barcode/4607027662161");
        assert!(is_product_lookup(&endpoint));
        assert!(!is_product_lookup(AUTH_TOKEN_PATH));
    }

    #[test]
    fn reserved_characters_stay_inside_the_barcode_segment() {
        let endpoint = product_by_barcode_endpoint("a b#?c/d");
        assert_eq!(endpoint, "/products/by-barcode/a%20b%23%3Fc%2Fd");
        assert_eq!(barcode_from_endpoint(&endpoint).as_deref(), Some("a b#?c/d"));
    }

    #[test]
    fn barcode_is_extracted_only_from_lookups() {
        assert_eq!(
            barcode_from_endpoint("/products/by-barcode/4607027662161").as_deref(),
            Some("4607027662161")
        );
        assert_eq!(barcode_from_endpoint(AUTH_TOKEN_PATH), None);
    }
}

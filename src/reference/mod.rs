//! Search links into the FASS public reference site.
//!
//! Links are only built, never fetched.

const SEARCH_ENDPOINT: &str = "https://fass.se/search";

/// A search link for a raw query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceLink {
    /// The query exactly as the user typed it
    pub query: String,
    pub search_url: String,
}

impl ReferenceLink {
    pub fn new(query: &str) -> Self {
        Self {
            query: query.to_string(),
            search_url: build_reference_url(query),
        }
    }
}

/// Percent-encode the raw query into the FASS search endpoint
pub fn build_reference_url(query: &str) -> String {
    format!("{}?query={}", SEARCH_ENDPOINT, urlencoding::encode(query))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_url() {
        assert_eq!(
            build_reference_url("paracetamol"),
            "https://fass.se/search?query=paracetamol"
        );
    }

    #[test]
    fn test_space_and_swedish_characters_encoded() {
        assert_eq!(
            build_reference_url("Läkemedel 5 mg"),
            "https://fass.se/search?query=L%C3%A4kemedel%205%20mg"
        );
    }

    #[test]
    fn test_query_is_not_normalized() {
        let link = ReferenceLink::new("  Alvedon ");
        assert_eq!(link.query, "  Alvedon ");
        assert_eq!(link.search_url, "https://fass.se/search?query=%20%20Alvedon%20");
    }
}

use serde::{Deserialize, Serialize};

/// Request body for the audit endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditRequest {
    /// URL of the page to audit
    pub url: String,
}

/// Status labels for a single link probe
///
/// Every failure mode (timeout, non-2xx status, unresolvable host) collapses
/// to the same `404 Not Found` wire label; the underlying reason rides in
/// `LinkResult::detail`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LinkStatus {
    /// The probe received a successful response
    Reachable,

    /// The probe failed
    #[serde(rename = "404 Not Found")]
    NotFound,
}

/// Result of probing one outbound link
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkResult {
    /// The probed href, exactly as it appeared in the document
    pub link: String,

    /// Probe outcome
    pub status: LinkStatus,

    /// Underlying failure reason, present only when the probe failed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// One keyword with its occurrence statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordResult {
    /// The keyword, as extracted from the normalized text
    pub keyword: String,

    /// Whole-word occurrence count in the normalized text
    pub occurrences: usize,

    /// Percentage of all text tokens matching this keyword, to 2 decimals
    pub density: String,
}

/// Aggregated response for one completed audit
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditReport {
    /// One entry per probed outbound link, in document order
    pub links: Vec<LinkResult>,

    /// Top keywords by occurrence count, at most ten
    pub keywords: Vec<KeywordResult>,

    /// Page speed API response, passed through verbatim
    pub page_speed: serde_json::Value,

    /// Base64-encoded screenshot of the rendered page
    pub page_preview: String,
}

/// Error body returned with a 500 response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_status_uses_wire_labels() {
        assert_eq!(
            serde_json::to_string(&LinkStatus::Reachable).unwrap(),
            "\"Reachable\""
        );
        assert_eq!(
            serde_json::to_string(&LinkStatus::NotFound).unwrap(),
            "\"404 Not Found\""
        );
    }

    #[test]
    fn link_result_omits_missing_detail() {
        let result = LinkResult {
            link: "http://x.test".to_string(),
            status: LinkStatus::Reachable,
            detail: None,
        };
        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("detail").is_none());

        let result = LinkResult {
            link: "http://x.test".to_string(),
            status: LinkStatus::NotFound,
            detail: Some("request timed out".to_string()),
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["detail"], "request timed out");
    }

    #[test]
    fn report_serializes_with_camel_case_keys() {
        let report = AuditReport {
            links: Vec::new(),
            keywords: Vec::new(),
            page_speed: serde_json::json!({ "score": 0.9 }),
            page_preview: "aGVsbG8=".to_string(),
        };
        let json = serde_json::to_value(&report).unwrap();
        assert!(json.get("pageSpeed").is_some());
        assert!(json.get("pagePreview").is_some());
        assert!(json.get("page_speed").is_none());
    }
}

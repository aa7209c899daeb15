use crate::config::AuditConfig;
use crate::error::AuditError;
use url::Url;

/// Queries the page speed API for the given URL and returns its JSON verbatim.
///
/// The credential comes from configuration; the request URL carries it as a
/// query parameter and is therefore never logged.
pub async fn run(
    client: &reqwest::Client,
    config: &AuditConfig,
    url: &str,
) -> Result<serde_json::Value, AuditError> {
    let api_key = config.pagespeed_api_key.as_deref().ok_or_else(|| {
        AuditError::PageSpeed("no API key is configured (set PAGESPEED_API_KEY)".to_string())
    })?;

    let mut endpoint = Url::parse(&config.pagespeed_endpoint)
        .map_err(|e| AuditError::PageSpeed(format!("invalid endpoint URL: {}", e)))?;
    endpoint
        .query_pairs_mut()
        .append_pair("url", url)
        .append_pair("key", api_key);

    ::log::debug!("Requesting page speed report for {}", url);

    let response = client
        .get(endpoint.as_str())
        .send()
        .await
        .map_err(|e| AuditError::PageSpeed(e.to_string()))?
        .error_for_status()
        .map_err(|e| AuditError::PageSpeed(e.to_string()))?;

    response
        .json()
        .await
        .map_err(|e| AuditError::PageSpeed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_api_key_fails_before_any_request() {
        let config = AuditConfig::default();
        let client = reqwest::Client::new();
        let result = run(&client, &config, "http://example.com").await;
        match result {
            Err(AuditError::PageSpeed(message)) => assert!(message.contains("API key")),
            other => panic!("expected a page speed error, got {:?}", other.map(|_| ())),
        }
    }
}

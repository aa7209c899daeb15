use crate::error::AuditError;

/// Retrieves the raw body of the audited page.
///
/// Any transport failure or non-2xx status is reported as a fetch error;
/// status codes are not distinguished and nothing is retried.
pub async fn page_content(client: &reqwest::Client, url: &str) -> Result<String, AuditError> {
    ::log::debug!("Fetching content from {}", url);

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| AuditError::Fetch(e.to_string()))?
        .error_for_status()
        .map_err(|e| AuditError::Fetch(e.to_string()))?;

    response
        .text()
        .await
        .map_err(|e| AuditError::Fetch(e.to_string()))
}

use crate::config::AuditConfig;
use crate::error::AuditError;
use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use fantoccini::{Client, ClientBuilder};

/// Renders the page in a fresh WebDriver session and returns a base64
/// screenshot.
///
/// The session is released on every exit path: capture runs first, `close`
/// always runs, and only then does the capture result propagate.
pub async fn capture(config: &AuditConfig, url: &str) -> Result<String, AuditError> {
    ::log::debug!("Connecting to WebDriver at {}", config.webdriver_url);

    let client = ClientBuilder::native()
        .capabilities(headless_capabilities())
        .connect(&config.webdriver_url)
        .await
        .map_err(|e| AuditError::Preview(format!("could not start a browser session: {}", e)))?;

    let captured = navigate_and_capture(&client, url).await;

    if let Err(e) = client.close().await {
        ::log::warn!("Failed to close browser session: {}", e);
    }

    Ok(BASE64.encode(captured?))
}

/// Navigates to the target URL and takes a viewport screenshot
async fn navigate_and_capture(client: &Client, url: &str) -> Result<Vec<u8>, AuditError> {
    client
        .goto(url)
        .await
        .map_err(|e| AuditError::Preview(format!("could not open {}: {}", url, e)))?;

    client
        .screenshot()
        .await
        .map_err(|e| AuditError::Preview(format!("could not capture screenshot: {}", e)))
}

/// WebDriver capabilities requesting a headless Chrome session
fn headless_capabilities() -> serde_json::Map<String, serde_json::Value> {
    let mut caps = serde_json::Map::new();
    caps.insert(
        "goog:chromeOptions".to_string(),
        serde_json::json!({ "args": ["--headless=new", "--disable-gpu"] }),
    );
    caps
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capabilities_request_headless_chrome() {
        let caps = headless_capabilities();
        let options = caps.get("goog:chromeOptions").unwrap();
        let args = options["args"].as_array().unwrap();
        assert!(args.iter().any(|a| a.as_str() == Some("--headless=new")));
    }
}

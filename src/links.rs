use crate::config::AuditConfig;
use crate::results::{LinkResult, LinkStatus};
use futures::stream::{self, StreamExt};
use std::time::Duration;

/// Filters anchor hrefs down to the probeable ones.
///
/// Only hrefs starting with the literal `http` prefix are probed; relative
/// links and non-HTTP schemes are excluded. Document order and duplicates
/// are preserved.
pub fn probeable(hrefs: &[String]) -> Vec<String> {
    hrefs
        .iter()
        .filter(|href| href.starts_with("http"))
        .cloned()
        .collect()
}

/// Probes every outbound link and reports one status per link.
///
/// Probes run concurrently, bounded by `max_link_concurrency`, each with its
/// own timeout. A probe never fails the audit: every failure mode collapses
/// to the `404 Not Found` label with the reason kept in `detail`. Results
/// come back in discovery order, not completion order.
pub async fn check(
    client: &reqwest::Client,
    hrefs: &[String],
    config: &AuditConfig,
) -> Vec<LinkResult> {
    let targets = probeable(hrefs);
    ::log::info!("Probing {} outbound links", targets.len());

    let probe_timeout = Duration::from_secs(config.probe_timeout_secs);

    stream::iter(targets)
        .map(|link| {
            let client = client.clone();
            async move { probe(&client, link, probe_timeout).await }
        })
        .buffered(config.max_link_concurrency.max(1))
        .collect()
        .await
}

/// Probes a single link with an independent GET request
async fn probe(client: &reqwest::Client, link: String, timeout: Duration) -> LinkResult {
    let outcome = client.get(&link).timeout(timeout).send().await;

    match outcome.and_then(|response| response.error_for_status()) {
        Ok(_) => LinkResult {
            link,
            status: LinkStatus::Reachable,
            detail: None,
        },
        Err(e) => {
            ::log::debug!("Probe failed for {}: {}", link, e);
            LinkResult {
                link,
                status: LinkStatus::NotFound,
                detail: Some(describe_failure(&e)),
            }
        }
    }
}

/// Names the failure mode behind a collapsed probe status
fn describe_failure(error: &reqwest::Error) -> String {
    if error.is_timeout() {
        "request timed out".to_string()
    } else if let Some(status) = error.status() {
        format!("HTTP {}", status.as_u16())
    } else if error.is_connect() {
        "connection failed".to_string()
    } else {
        error.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hrefs(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn keeps_only_http_prefixed_hrefs() {
        let input = hrefs(&[
            "http://x.test",
            "/rel",
            "mailto:user@example.com",
            "https://y.test",
            "ftp://z.test",
            "#fragment",
        ]);
        assert_eq!(
            probeable(&input),
            hrefs(&["http://x.test", "https://y.test"])
        );
    }

    #[test]
    fn preserves_discovery_order_and_duplicates() {
        let input = hrefs(&["http://a.test", "http://b.test", "http://a.test"]);
        assert_eq!(probeable(&input), input);
    }

    #[test]
    fn relative_hrefs_are_excluded() {
        let input = hrefs(&["http://x.test", "/rel"]);
        assert_eq!(probeable(&input).len(), 1);
    }

    #[test]
    fn no_anchors_means_no_probes() {
        assert!(probeable(&[]).is_empty());
    }
}

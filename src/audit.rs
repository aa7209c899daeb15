use crate::error::AuditError;
use crate::results::AuditReport;
use crate::server::AppState;
use crate::{fetch, keywords, links, pagespeed, parsers, preview};

/// Runs the full audit pipeline for one URL.
///
/// Stages run strictly in sequence and the first failing stage aborts the
/// audit; no partial report is produced. Only link probes fan out, and their
/// failures are recorded as statuses rather than raised.
pub async fn run(state: &AppState, url: &str) -> Result<AuditReport, AuditError> {
    ::log::info!("Starting audit for: {}", url);

    let content = fetch::page_content(&state.http, url).await?;
    let page = parsers::html::parse(&content);

    let links = links::check(&state.http, &page.anchors, &state.config).await;
    let keywords = keywords::scan(&page.body_text);
    let page_speed = pagespeed::run(&state.http, &state.config, url).await?;
    let page_preview = preview::capture(&state.config, url).await?;

    ::log::info!(
        "Audit complete for: {} ({} links probed, {} keywords)",
        url,
        links.len(),
        keywords.len()
    );

    Ok(AuditReport {
        links,
        keywords,
        page_speed,
        page_preview,
    })
}

use thiserror::Error;

/// Failure modes that abort an audit.
///
/// Per-link probe failures are deliberately absent: they degrade to a status
/// label on the individual link result and never fail the audit as a whole.
#[derive(Debug, Error)]
pub enum AuditError {
    /// Content retrieval for the audited page failed
    #[error("failed to fetch page content: {0}")]
    Fetch(String),

    /// The page speed service could not be queried
    #[error("failed to fetch page speed: {0}")]
    PageSpeed(String),

    /// The browser session, navigation or screenshot capture failed
    #[error("failed to capture page preview: {0}")]
    Preview(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages_name_the_failed_stage() {
        assert_eq!(
            AuditError::Fetch("connection refused".to_string()).to_string(),
            "failed to fetch page content: connection refused"
        );
        assert_eq!(
            AuditError::PageSpeed("HTTP 403".to_string()).to_string(),
            "failed to fetch page speed: HTTP 403"
        );
        assert_eq!(
            AuditError::Preview("session lost".to_string()).to_string(),
            "failed to capture page preview: session lost"
        );
    }
}

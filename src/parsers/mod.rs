pub mod html;


/// Artifacts extracted from one fetched document
///
/// The document is parsed once per audit; the link checker consumes the
/// anchors and the keyword scanner consumes the body text.
#[derive(Debug, Clone)]
pub struct ParsedPage {
    /// Whitespace-normalized text content of the document body
    pub body_text: String,

    /// Anchor hrefs in document order, duplicates preserved
    pub anchors: Vec<String>,
}

impl ParsedPage {
    /// Creates a parsed page from extracted text and anchors
    pub fn new(body_text: String, anchors: Vec<String>) -> Self {
        Self { body_text, anchors }
    }
}

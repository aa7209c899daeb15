pub mod stopwords;


use crate::results::KeywordResult;
use regex::Regex;
use std::collections::HashSet;

/// Maximum number of keywords reported per audit
pub const TOP_KEYWORD_LIMIT: usize = 10;

/// Scans page body text and returns the top keywords by occurrence count.
///
/// The text is case-folded and stripped down to letters and whitespace,
/// candidate keywords are the unique non-stop-word tokens in first-seen
/// order, and each candidate is counted with a whole-word match against the
/// entire normalized text. Density is the candidate's share of all
/// whitespace-delimited tokens, stop words included, so values are
/// comparable across keywords but do not sum to 100%.
pub fn scan(body_text: &str) -> Vec<KeywordResult> {
    let normalized = normalize(body_text);

    let token_count = normalized.split_whitespace().count();
    if token_count == 0 {
        return Vec::new();
    }

    let candidates = extract_candidates(&normalized);
    ::log::debug!(
        "Keyword scan: {} tokens, {} candidates",
        token_count,
        candidates.len()
    );

    let mut results: Vec<KeywordResult> = candidates
        .into_iter()
        .map(|keyword| {
            let occurrences = count_occurrences(&normalized, &keyword);
            let density = occurrences as f64 / token_count as f64 * 100.0;

            KeywordResult {
                keyword,
                occurrences,
                density: format!("{:.2}", density),
            }
        })
        .collect();

    // Stable sort: ties keep extraction order
    results.sort_by(|a, b| b.occurrences.cmp(&a.occurrences));
    results.truncate(TOP_KEYWORD_LIMIT);
    results
}

/// Case-folds text and replaces every character that is not a lowercase
/// ASCII letter or whitespace with a single space
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect()
}

/// Extracts unique candidate keywords in first-seen order, skipping stop words
///
/// Deduplication only shrinks the candidate list; occurrence counting later
/// runs against the full text, so a deduplicated keyword still counts every
/// one of its occurrences.
pub fn extract_candidates(normalized: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut candidates = Vec::new();

    for token in normalized.split_whitespace() {
        if stopwords::is_stop_word(token) {
            continue;
        }
        if seen.insert(token) {
            candidates.push(token.to_string());
        }
    }

    candidates
}

/// Counts whole-word occurrences of a keyword in the normalized text
pub fn count_occurrences(normalized: &str, keyword: &str) -> usize {
    let pattern = format!(r"\b{}\b", regex::escape(keyword));
    match Regex::new(&pattern) {
        Ok(matcher) => matcher.find_iter(normalized).count(),
        Err(_) => 0,
    }
}

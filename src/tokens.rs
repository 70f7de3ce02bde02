//! Placeholder token checks between a reference string and its translations.
//!
//! A token is the text between a `{` and the next `}`. Every `{` starts a new scan, so
//! nested braces yield overlapping tokens (`"{a{b}"` gives `a{b` and `b`). A `{` without
//! a closing brace ends the scan.

use std::collections::BTreeSet;

use tracing::{info, warn};

/// Extract the set of `{token}` placeholders in `s`.
pub fn extract_tokens(s: &str) -> BTreeSet<String> {
    let mut tokens = BTreeSet::new();
    let mut cursor = 0;

    while let Some(offset) = s[cursor..].find('{') {
        let start = cursor + offset;
        let Some(len) = s[start + 1..].find('}') else {
            break;
        };
        tokens.insert(s[start + 1..start + 1 + len].to_string());
        cursor = start + 1;
    }

    tokens
}

/// Tokens that make `candidate` incompatible with `reference`: first the candidate tokens
/// unknown to the reference, then the reference tokens the candidate does not use.
///
/// Empty when the reference has no tokens at all: such strings are free-form.
pub fn token_mismatches(reference: &str, candidate: &str) -> Vec<String> {
    let reference_tokens = extract_tokens(reference);
    if reference_tokens.is_empty() {
        return Vec::new();
    }

    let candidate_tokens = extract_tokens(candidate);
    candidate_tokens
        .difference(&reference_tokens)
        .chain(reference_tokens.difference(&candidate_tokens))
        .cloned()
        .collect()
}

/// Check that `candidate` uses exactly the placeholders of `reference`.
///
/// On mismatch the offending tokens and both strings are logged so translators can fix
/// the entry.
pub fn validate(key: &str, language: &str, reference: &str, candidate: &str) -> bool {
    let invalid = token_mismatches(reference, candidate);
    if invalid.is_empty() {
        return true;
    }

    let invalid = invalid
        .iter()
        .map(|t| format!("{{{}}}", t))
        .collect::<Vec<_>>()
        .join(", ");
    warn!("Invalid tokens {}: {} => {}", language, key, invalid);
    info!(
        "\tReference: {} (extracted tokens: {})",
        reference,
        format_tokens(&extract_tokens(reference))
    );
    info!(
        "\tTranslation: {} (extracted tokens: {})",
        candidate,
        format_tokens(&extract_tokens(candidate))
    );

    false
}

fn format_tokens(tokens: &BTreeSet<String>) -> String {
    tokens
        .iter()
        .map(|t| format!("#{}#", t))
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpaceMismatch {
    MissingLeading,
    AdditionalLeading,
    MissingTrailing,
    AdditionalTrailing,
}

impl SpaceMismatch {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpaceMismatch::MissingLeading => "Missing leading space",
            SpaceMismatch::AdditionalLeading => "Additional leading space",
            SpaceMismatch::MissingTrailing => "Missing trailing space",
            SpaceMismatch::AdditionalTrailing => "Additional trailing space",
        }
    }
}

/// Leading/trailing space differences between a reference and a translation.
pub fn space_mismatches(reference: &str, candidate: &str) -> Vec<SpaceMismatch> {
    let mut found = Vec::new();

    match (reference.starts_with(' '), candidate.starts_with(' ')) {
        (true, false) => found.push(SpaceMismatch::MissingLeading),
        (false, true) => found.push(SpaceMismatch::AdditionalLeading),
        _ => {}
    }
    match (reference.ends_with(' '), candidate.ends_with(' ')) {
        (true, false) => found.push(SpaceMismatch::MissingTrailing),
        (false, true) => found.push(SpaceMismatch::AdditionalTrailing),
        _ => {}
    }

    found
}

/// Log every space mismatch as a warning.
pub fn warn_space_mismatches(key: &str, language: &str, reference: &str, candidate: &str) {
    for mismatch in space_mismatches(reference, candidate) {
        warn!("{} {}: {}", mismatch.as_str(), language, key);
        info!("\t#{}#", reference);
        info!("\t#{}#", candidate);
    }
}

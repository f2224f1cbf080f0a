//! Content-warning codes and the sentence shown for them.
//!
//! Catalog rows carry mature-content descriptors as small integer codes.
//! The three sexual-content codes are mutually exclusive in display: only
//! the most severe one present is rendered.

use serde::{Deserialize, Serialize};

/// A single mature-content descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContentWarning {
    /// Code 1
    SomeSexualContent,
    /// Code 2
    FrequentViolence,
    /// Code 3
    AdultOnlySexualContent,
    /// Code 4
    FrequentNudity,
    /// Code 5
    GeneralMature,
    /// Any code outside 1..=5, kept so the gap is visible to readers.
    Unknown(i64),
}

/// Sexual-content codes in display priority order.
const SEXUAL_CONTENT_PRIORITY: &[ContentWarning] = &[
    ContentWarning::AdultOnlySexualContent,
    ContentWarning::FrequentNudity,
    ContentWarning::SomeSexualContent,
];

impl ContentWarning {
    pub fn from_code(code: i64) -> Self {
        match code {
            1 => Self::SomeSexualContent,
            2 => Self::FrequentViolence,
            3 => Self::AdultOnlySexualContent,
            4 => Self::FrequentNudity,
            5 => Self::GeneralMature,
            other => Self::Unknown(other),
        }
    }

    /// Lowercase phrase used inside the summary sentence.
    pub fn phrase(&self) -> String {
        match self {
            Self::SomeSexualContent => "some nudity or sexual content".to_string(),
            Self::FrequentViolence => "frequent violence or gore".to_string(),
            Self::AdultOnlySexualContent => "adult-only sexual content".to_string(),
            Self::FrequentNudity => "frequent nudity or sexual content".to_string(),
            Self::GeneralMature => "general mature content".to_string(),
            Self::Unknown(code) => format!("unknown ({})", code),
        }
    }
}

/// Build the human-readable warning sentence for a row.
///
/// Returns an empty string when there are no codes, never `None`, so the
/// result can always be displayed as-is.
pub fn summarize_content_warnings(codes: &[i64]) -> String {
    if codes.is_empty() {
        return String::new();
    }

    let warnings: Vec<ContentWarning> = codes.iter().map(|&c| ContentWarning::from_code(c)).collect();
    let mut phrases = Vec::new();

    if let Some(sexual) = SEXUAL_CONTENT_PRIORITY
        .iter()
        .find(|candidate| warnings.contains(*candidate))
    {
        phrases.push(sexual.phrase());
    }
    for fixed in [ContentWarning::FrequentViolence, ContentWarning::GeneralMature] {
        if warnings.contains(&fixed) {
            phrases.push(fixed.phrase());
        }
    }

    let mut seen_unknown = Vec::new();
    for warning in &warnings {
        if let ContentWarning::Unknown(code) = warning
            && !seen_unknown.contains(code)
        {
            seen_unknown.push(*code);
            phrases.push(warning.phrase());
        }
    }

    let mut sentence = phrases.join(", ");
    sentence.push('.');
    capitalize_first(&sentence)
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
#[path = "tests/content_warning_tests.rs"]
mod tests;

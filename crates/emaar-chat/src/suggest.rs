//! Canned auto-suggestions for the input box.
//!
//! Filters a small fixed catalog by case-insensitive substring and never
//! leaves the dropdown empty while the user is typing.

use emaar_core::config::ChatConfig;

/// Default number of catalog entries shown when nothing matches.
pub const DEFAULT_FALLBACK: usize = 2;

/// Match `input` against `catalog` using the default fallback size.
///
/// - Empty input yields no suggestions.
/// - Otherwise every entry containing `input` (ignoring case) is returned,
///   in catalog order.
/// - If nothing matches, the first two catalog entries are returned.
pub fn match_suggestions<S: AsRef<str>>(input: &str, catalog: &[S]) -> Vec<String> {
    match_with_fallback(input, catalog, DEFAULT_FALLBACK)
}

fn match_with_fallback<S: AsRef<str>>(input: &str, catalog: &[S], fallback: usize) -> Vec<String> {
    if input.is_empty() {
        return Vec::new();
    }

    let needle = input.to_lowercase();
    let matches: Vec<String> = catalog
        .iter()
        .map(|s| s.as_ref())
        .filter(|phrase: &&str| phrase.to_lowercase().contains(&needle))
        .map(str::to_string)
        .collect();

    if matches.is_empty() {
        catalog
            .iter()
            .take(fallback)
            .map(|s| s.as_ref().to_string())
            .collect()
    } else {
        matches
    }
}

// =============================================================================
// SuggestionMatcher
// =============================================================================

/// Owns the suggestion catalog for a session.
#[derive(Debug, Clone)]
pub struct SuggestionMatcher {
    catalog: Vec<String>,
    fallback: usize,
}

impl Default for SuggestionMatcher {
    fn default() -> Self {
        Self::from_config(&ChatConfig::default())
    }
}

impl SuggestionMatcher {
    /// Create a matcher over `catalog` with the default fallback size.
    pub fn new(catalog: Vec<String>) -> Self {
        Self {
            catalog,
            fallback: DEFAULT_FALLBACK,
        }
    }

    pub fn from_config(config: &ChatConfig) -> Self {
        Self {
            catalog: config.suggestions.clone(),
            fallback: config.fallback_suggestions,
        }
    }

    pub fn catalog(&self) -> &[String] {
        &self.catalog
    }

    /// Recompute the suggestion list for the current input text.
    pub fn suggest(&self, input: &str) -> Vec<String> {
        let list = match_with_fallback(input, &self.catalog, self.fallback);
        tracing::trace!(input_len = input.len(), shown = list.len(), "Suggestions recomputed");
        list
    }
}

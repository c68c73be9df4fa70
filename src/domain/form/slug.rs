// src/domain/form/slug.rs
//! Slug canonicalization and unique allocation.
//!
//! A slug is made of lowercase ASCII letters, digits and single hyphens, with
//! no hyphen at either end. [`allocate_unique`] asks a [`SlugOracle`] about
//! every candidate it tries and never writes anything itself; two concurrent
//! allocations for the same title can both succeed, and the unique constraint
//! on the form store rejects whichever insert lands second.

use async_trait::async_trait;

use crate::domain::errors::{DomainError, DomainResult};

/// Answers whether a form with exactly this slug is currently stored.
#[async_trait]
pub trait SlugOracle: Send + Sync {
    async fn exists(&self, candidate: &str) -> DomainResult<bool>;
}

/// Unicode whitespace plus the ASCII information separators U+001C..=U+001F.
fn is_slug_space(ch: char) -> bool {
    ch.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&ch)
}

/// Derive the base slug for a title.
///
/// Whitespace runs (including the information separators) become a single
/// hyphen, anything outside `[a-z0-9-]` is dropped after lowercasing, hyphen
/// runs collapse and edge hyphens are trimmed. Titles without a single ASCII letter or digit yield `""`.
pub fn canonicalize(title: &str) -> String {
    let lowered = title.trim_matches(is_slug_space).to_lowercase();
    let mut slug = String::with_capacity(lowered.len());
    let mut pending_hyphen = false;

    for ch in lowered.chars() {
        if ch == '-' || is_slug_space(ch) {
            pending_hyphen = true;
        } else if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(ch);
        }
    }

    slug
}

/// True when `candidate` is its own canonical form.
pub fn is_canonical(candidate: &str) -> bool {
    canonicalize(candidate) == candidate
}

/// The sequence `base`, `base-1`, `base-2`, ...
#[derive(Debug, Clone)]
pub struct SlugCandidates<'a> {
    base: &'a str,
    next_suffix: Option<u64>,
}

impl<'a> SlugCandidates<'a> {
    pub fn new(base: &'a str) -> Self {
        Self {
            base,
            next_suffix: Some(0),
        }
    }
}

impl Iterator for SlugCandidates<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        let suffix = self.next_suffix?;
        self.next_suffix = suffix.checked_add(1);

        Some(if suffix == 0 {
            self.base.to_owned()
        } else {
            format!("{}-{suffix}", self.base)
        })
    }
}

/// Canonicalize `title` and return the first candidate the oracle reports as
/// free. Oracle errors are returned as-is after the failing check.
pub async fn allocate_unique(title: &str, oracle: &dyn SlugOracle) -> DomainResult<String> {
    let base = canonicalize(title);

    for candidate in SlugCandidates::new(&base) {
        if !oracle.exists(&candidate).await? {
            return Ok(candidate);
        }
        tracing::debug!(%candidate, "slug already taken");
    }

    Err(DomainError::Conflict(format!(
        "no free slug left for base `{base}`"
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Mutex;

    struct RecordingOracle {
        taken: HashSet<String>,
        checked: Mutex<Vec<String>>,
    }

    impl RecordingOracle {
        fn with_taken(taken: &[&str]) -> Self {
            Self {
                taken: taken.iter().map(|s| (*s).to_owned()).collect(),
                checked: Mutex::new(Vec::new()),
            }
        }

        fn checked(&self) -> Vec<String> {
            self.checked.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl SlugOracle for RecordingOracle {
        async fn exists(&self, candidate: &str) -> DomainResult<bool> {
            self.checked.lock().unwrap().push(candidate.to_owned());
            Ok(self.taken.contains(candidate))
        }
    }

    struct UnavailableOracle;

    #[async_trait]
    impl SlugOracle for UnavailableOracle {
        async fn exists(&self, _candidate: &str) -> DomainResult<bool> {
            Err(DomainError::Persistence("connection refused".into()))
        }
    }

    fn is_well_formed(slug: &str) -> bool {
        slug.is_empty()
            || slug.split('-').all(|part| {
                !part.is_empty()
                    && part
                        .chars()
                        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
            })
    }

    #[test]
    fn canonicalize_normalizes_whitespace_and_punctuation() {
        assert_eq!(canonicalize("  Q4   Sales   Report!! "), "q4-sales-report");
        assert_eq!(canonicalize("Customer Survey 2024"), "customer-survey-2024");
        assert_eq!(canonicalize("My Form!!"), "my-form");
    }

    #[test]
    fn canonicalize_collapses_hyphens_left_by_removed_characters() {
        assert_eq!(canonicalize("a ! b"), "a-b");
        assert_eq!(canonicalize("--Team -- Feedback--"), "team-feedback");
        assert_eq!(canonicalize("rock&roll"), "rockroll");
        assert_eq!(canonicalize("tab\tand\nnewline"), "tab-and-newline");
    }

    #[test]
    fn canonicalize_treats_information_separators_as_whitespace() {
        assert_eq!(canonicalize("a\u{1f}b"), "a-b");
        assert_eq!(canonicalize("\u{1c}Q4\u{1d}Report\u{1e}"), "q4-report");
        assert_eq!(canonicalize("\u{1f}\u{1f}"), "");
    }

    #[test]
    fn canonicalize_drops_non_ascii_letters() {
        assert_eq!(canonicalize("Café Menü"), "caf-men");
        assert_eq!(canonicalize("日本語 survey"), "survey");
    }

    #[test]
    fn canonicalize_may_be_empty() {
        assert_eq!(canonicalize("!!!"), "");
        assert_eq!(canonicalize("   "), "");
        assert_eq!(canonicalize("- - -"), "");
    }

    #[test]
    fn is_canonical_accepts_only_fixed_points() {
        assert!(is_canonical("my-form-3"));
        assert!(is_canonical(""));
        assert!(!is_canonical("My-Form"));
        assert!(!is_canonical("my--form"));
        assert!(!is_canonical("-my-form"));
    }

    #[test]
    fn candidates_start_at_base_then_count_up() {
        let got: Vec<String> = SlugCandidates::new("survey").take(4).collect();
        assert_eq!(got, ["survey", "survey-1", "survey-2", "survey-3"]);

        let empty: Vec<String> = SlugCandidates::new("").take(2).collect();
        assert_eq!(empty, ["", "-1"]);
    }

    #[tokio::test]
    async fn allocate_returns_base_when_free() {
        let oracle = RecordingOracle::with_taken(&[]);
        let slug = allocate_unique("Customer Survey 2024", &oracle).await.unwrap();
        assert_eq!(slug, "customer-survey-2024");
        assert_eq!(oracle.checked(), ["customer-survey-2024"]);
    }

    #[tokio::test]
    async fn allocate_skips_taken_suffixes() {
        let oracle = RecordingOracle::with_taken(&["my-form", "my-form-1", "my-form-2"]);
        let slug = allocate_unique("My Form!!", &oracle).await.unwrap();
        assert_eq!(slug, "my-form-3");
    }

    #[tokio::test]
    async fn allocate_checks_exactly_k_plus_two_candidates() {
        let k = 5;
        let mut taken = vec!["poll".to_owned()];
        taken.extend((1..=k).map(|n| format!("poll-{n}")));
        let refs: Vec<&str> = taken.iter().map(String::as_str).collect();
        let oracle = RecordingOracle::with_taken(&refs);

        let slug = allocate_unique("Poll", &oracle).await.unwrap();

        assert_eq!(slug, format!("poll-{}", k + 1));
        assert_eq!(oracle.checked().len(), k + 2);
    }

    #[tokio::test]
    async fn allocate_passes_empty_base_through() {
        let oracle = RecordingOracle::with_taken(&[]);
        assert_eq!(allocate_unique("!!!", &oracle).await.unwrap(), "");

        let crowded = RecordingOracle::with_taken(&[""]);
        assert_eq!(allocate_unique("!!!", &crowded).await.unwrap(), "-1");
    }

    #[tokio::test]
    async fn allocate_propagates_oracle_failure() {
        let err = allocate_unique("Anything", &UnavailableOracle)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Persistence(_)));
    }

    proptest::proptest! {
        #[test]
        fn proptest_canonicalize_is_idempotent(title in "\\PC{0,64}") {
            let once = canonicalize(&title);
            proptest::prop_assert_eq!(canonicalize(&once), once);
        }

        #[test]
        fn proptest_canonicalize_output_is_well_formed(title in proptest::prelude::any::<String>()) {
            let slug = canonicalize(&title);
            proptest::prop_assert!(is_well_formed(&slug), "malformed slug {:?}", slug);
        }

        #[test]
        fn proptest_ascii_words_survive(words in proptest::collection::vec("[a-z0-9]{1,8}", 1..6)) {
            let title = words.join("  ");
            proptest::prop_assert_eq!(canonicalize(&title), words.join("-"));
        }
    }
}

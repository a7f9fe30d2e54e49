use crate::modules::planet::domain::value_objects::{AppearanceCandidate, EnrichmentOutcome};

/// Reconciles external search hits against the name a planet is being created with
pub struct AppearanceMatcher;

impl AppearanceMatcher {
    /// Film count of the matching candidate.
    ///
    /// Every candidate is visited; when several match case-insensitively the
    /// last one wins. Counts of multiple matches are never summed.
    pub fn count_appearances(requested_name: &str, candidates: &[AppearanceCandidate]) -> Option<u32> {
        candidates
            .iter()
            .filter(|candidate| candidate.matches_name(requested_name))
            .last()
            .map(AppearanceCandidate::film_count)
    }

    /// Appearance count plus how it was obtained; a failed lookup counts as zero
    pub fn resolve<E>(
        requested_name: &str,
        lookup_result: Result<Vec<AppearanceCandidate>, E>,
    ) -> (u32, EnrichmentOutcome) {
        match lookup_result {
            Ok(candidates) => match Self::count_appearances(requested_name, &candidates) {
                Some(count) => (count, EnrichmentOutcome::Matched),
                None => (0, EnrichmentOutcome::NoMatch),
            },
            Err(_) => (0, EnrichmentOutcome::Unavailable),
        }
    }
}

use std::collections::HashSet;

use crate::core::distance::DEFAULT_DISTANCE_LIMIT;
use crate::core::{
    filters::{passes_company_threshold, passes_person_threshold},
    scoring::{company_similarity, person_similarity},
};
use crate::models::{CompanyCandidateRow, CompanyQuery, PersonCandidateRow, PersonQuery};

/// Result of one ranking pass
#[derive(Debug)]
pub struct RankedMatches {
    /// Distinct entity ids, best match first, at most `count` of them
    pub ids: Vec<i64>,
    pub total_candidates: usize,
}

/// Main matching orchestrator
///
/// # Pipeline Stages
/// 1. Threshold pre-filter
/// 2. Per-field distance scoring
/// 3. Stable ascending sort by score
/// 4. Dedup by entity id, truncate to the requested count
///
/// Candidates arrive as one bulk snapshot and ranking is a pure synchronous
/// computation over it; hydration of the returned ids is the caller's job.
#[derive(Debug, Clone)]
pub struct Matcher {
    distance_limit: usize,
}

impl Matcher {
    pub fn new(distance_limit: usize) -> Self {
        Self { distance_limit }
    }

    pub fn with_default_limit() -> Self {
        Self {
            distance_limit: DEFAULT_DISTANCE_LIMIT,
        }
    }

    /// Rank person candidates against a partial person record.
    ///
    /// A person with several employment records appears once per record in
    /// `candidates`; the result still lists each person at most once.
    ///
    /// # Arguments
    /// * `query` - The partial person record
    /// * `candidates` - The full candidate set from one bulk fetch
    /// * `count` - Maximum number of distinct ids to return
    pub fn rank_people(
        &self,
        query: &PersonQuery,
        candidates: Vec<PersonCandidateRow>,
        count: usize,
    ) -> RankedMatches {
        let total_candidates = candidates.len();

        let mut scored: Vec<(usize, i64)> = candidates
            .iter()
            .filter(|row| passes_person_threshold(query, row))
            .map(|row| (person_similarity(query, row, self.distance_limit), row.id))
            .collect();

        RankedMatches {
            ids: take_distinct(&mut scored, count),
            total_candidates,
        }
    }

    /// Rank company candidates against a partial company record.
    pub fn rank_companies(
        &self,
        query: &CompanyQuery,
        candidates: Vec<CompanyCandidateRow>,
        count: usize,
    ) -> RankedMatches {
        let total_candidates = candidates.len();

        let mut scored: Vec<(usize, i64)> = candidates
            .iter()
            .filter(|row| passes_company_threshold(query, row))
            .map(|row| (company_similarity(query, row, self.distance_limit), row.id))
            .collect();

        RankedMatches {
            ids: take_distinct(&mut scored, count),
            total_candidates,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_limit()
    }
}

/// Sort ascending by score (stable; tie order among equal scores is
/// don't-care) and emit up to `count` distinct ids in order.
fn take_distinct(scored: &mut [(usize, i64)], count: usize) -> Vec<i64> {
    scored.sort_by_key(|(score, _)| *score);

    let mut ids = Vec::new();
    let mut seen = HashSet::new();
    for (_, id) in scored.iter() {
        if ids.len() >= count {
            break;
        }
        if seen.insert(*id) {
            ids.push(*id);
        }
    }
    ids
}

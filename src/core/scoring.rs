use crate::core::distance::levenshtein;
use crate::models::{CompanyCandidateRow, CompanyQuery, PersonCandidateRow, PersonQuery};

/// Similarity score for a person candidate; lower is more similar.
///
/// Unweighted sum of per-field edit distances over first name, last name,
/// company, and email. Location and LinkedIn URL are carried on the query and
/// candidate but do not contribute to the score (the LinkedIn URL is a filter
/// field only). Longer field values dominate the sum; there is no
/// normalization by string length.
pub fn person_similarity(
    query: &PersonQuery,
    candidate: &PersonCandidateRow,
    limit: usize,
) -> usize {
    levenshtein(&query.first_name, &candidate.first_name, limit)
        + levenshtein(&query.last_name, &candidate.last_name, limit)
        + levenshtein(&query.company, &candidate.company, limit)
        + levenshtein(
            &query.email,
            candidate.email.as_deref().unwrap_or(""),
            limit,
        )
}

/// Similarity score for a company candidate; lower is more similar.
///
/// Unweighted sum over all four company fields.
pub fn company_similarity(
    query: &CompanyQuery,
    candidate: &CompanyCandidateRow,
    limit: usize,
) -> usize {
    levenshtein(&query.name, &candidate.name, limit)
        + levenshtein(
            &query.segment,
            candidate.segment.as_deref().unwrap_or(""),
            limit,
        )
        + levenshtein(
            &query.sector,
            candidate.sector.as_deref().unwrap_or(""),
            limit,
        )
        + levenshtein(
            &query.location,
            candidate.location.as_deref().unwrap_or(""),
            limit,
        )
}

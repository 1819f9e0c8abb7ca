use crate::models::{CompanyCandidateRow, CompanyQuery, PersonCandidateRow, PersonQuery};

/// Decide whether a person candidate is worth scoring at all.
///
/// An O(1) exact-match gate ahead of the O(L) scorer: the row passes when any
/// of first name, last name, company, or LinkedIn URL equals the query value
/// exactly (case-sensitive, as stored). A NULL LinkedIn URL never matches.
///
/// Near-duplicate spellings that match on no field are dropped here before
/// they can be scored; see the matcher notes on that accepted false-negative
/// risk.
#[inline]
pub fn passes_person_threshold(query: &PersonQuery, candidate: &PersonCandidateRow) -> bool {
    query.first_name == candidate.first_name
        || query.last_name == candidate.last_name
        || query.company == candidate.company
        || candidate.linkedin_url.as_deref() == Some(query.linkedin_url.as_str())
}

/// Company candidates have no cheap pre-filter: segment, sector, and location
/// are too noisy to gate on exact match, so every row is scored.
#[inline]
pub fn passes_company_threshold(_query: &CompanyQuery, _candidate: &CompanyCandidateRow) -> bool {
    true
}

// Unit tests for Atrium Match

use atrium_match::core::{
    distance::{levenshtein, DEFAULT_DISTANCE_LIMIT},
    filters::passes_person_threshold,
    scoring::{company_similarity, person_similarity},
};
use atrium_match::models::{CompanyCandidateRow, CompanyQuery, PersonCandidateRow, PersonQuery};

fn person_row(
    id: i64,
    first_name: &str,
    last_name: &str,
    company: &str,
    email: Option<&str>,
    linkedin_url: Option<&str>,
) -> PersonCandidateRow {
    PersonCandidateRow {
        id,
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        email: email.map(str::to_string),
        location: None,
        company: company.to_string(),
        linkedin_url: linkedin_url.map(str::to_string),
    }
}

#[test]
fn test_distance_empty_target_is_zero() {
    assert_eq!(levenshtein("", "any comparator", DEFAULT_DISTANCE_LIMIT), 0);
    assert_eq!(levenshtein("", "", DEFAULT_DISTANCE_LIMIT), 0);
}

#[test]
fn test_distance_identity_is_zero() {
    for s in ["a", "smith", "Acme Capital Partners"] {
        assert_eq!(levenshtein(s, s, DEFAULT_DISTANCE_LIMIT), 0);
    }
}

#[test]
fn test_distance_is_case_insensitive() {
    assert_eq!(levenshtein("John", "JOHN", 100), 0);
    assert_eq!(levenshtein("MiXeD", "mixed", 100), 0);
}

#[test]
fn test_distance_kitten_sitting() {
    assert_eq!(levenshtein("kitten", "sitting", 100), 3);
}

#[test]
fn test_distance_respects_limit() {
    for (target, comparator, limit) in [
        ("abcdefghij", "k", 4),
        ("short", "a much longer comparator string", 3),
        ("kitten", "sitting", 2),
    ] {
        assert!(levenshtein(target, comparator, limit) <= limit);
    }
}

#[test]
fn test_distance_empty_comparator_costs_target_length() {
    assert_eq!(levenshtein("jon", "", 100), 3);
    assert_eq!(levenshtein("acme capital", "", 100), 12);
}

#[test]
fn test_person_filter_first_name_match_passes_regardless_of_rest() {
    let query = PersonQuery {
        first_name: "Jon".to_string(),
        last_name: "Smith".to_string(),
        company: "Acme".to_string(),
        ..Default::default()
    };
    let candidate = person_row(9, "Jon", "Unrelated", "Elsewhere Inc", None, None);
    assert!(passes_person_threshold(&query, &candidate));
}

#[test]
fn test_person_filter_rejects_near_miss_spellings() {
    // "Jon" vs "John" would score well but fails the exact-match gate when no
    // other field lines up; known limitation of the threshold.
    let query = PersonQuery {
        first_name: "Jon".to_string(),
        ..Default::default()
    };
    let candidate = person_row(10, "John", "Doe", "Other", None, None);
    assert!(!passes_person_threshold(&query, &candidate));
}

#[test]
fn test_person_score_excludes_location_and_linkedin() {
    let query = PersonQuery {
        first_name: "Jon".to_string(),
        last_name: "Smith".to_string(),
        company: "Acme".to_string(),
        email: "jon@acme.com".to_string(),
        location: "Completely Different Place".to_string(),
        linkedin_url: "https://linkedin.com/in/nobody".to_string(),
    };
    let candidate = person_row(
        1,
        "Jon",
        "Smith",
        "Acme",
        Some("jon@acme.com"),
        Some("https://linkedin.com/in/jsmith"),
    );
    assert_eq!(person_similarity(&query, &candidate, 100), 0);
}

#[test]
fn test_company_score_includes_all_four_fields() {
    let query = CompanyQuery {
        name: "Acme".to_string(),
        segment: "Consumer".to_string(),
        sector: "Fintech".to_string(),
        location: "NYC".to_string(),
    };
    let exact = CompanyCandidateRow {
        id: 1,
        name: "Acme".to_string(),
        segment: Some("Consumer".to_string()),
        sector: Some("Fintech".to_string()),
        location: Some("NYC".to_string()),
    };
    assert_eq!(company_similarity(&query, &exact, 100), 0);

    // Each field shift moves the total
    let shifted = CompanyCandidateRow {
        id: 2,
        name: "Acme!".to_string(),
        segment: Some("Consumers".to_string()),
        sector: Some("FinTech".to_string()),
        location: Some("NY".to_string()),
    };
    assert_eq!(company_similarity(&query, &shifted, 100), 3);
}

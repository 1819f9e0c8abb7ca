/// Partial person record to match against the database.
///
/// Fields a caller did not supply are empty strings; an empty field
/// contributes zero distance as the target side of a comparison.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonQuery {
    pub first_name: String,
    pub last_name: String,
    pub company: String,
    pub email: String,
    pub location: String,
    pub linkedin_url: String,
}

/// Partial company record to match against the database.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompanyQuery {
    pub name: String,
    pub segment: String,
    pub sector: String,
    pub location: String,
}

/// One row of the person candidate set.
///
/// Produced by the person x employment x company join, so a person with N
/// employment records appears N times, each with a different company name.
#[derive(Debug, Clone)]
pub struct PersonCandidateRow {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub location: Option<String>,
    pub company: String,
    pub linkedin_url: Option<String>,
}

/// One row of the company candidate set; one row per company.
#[derive(Debug, Clone)]
pub struct CompanyCandidateRow {
    pub id: i64,
    pub name: String,
    pub segment: Option<String>,
    pub sector: Option<String>,
    pub location: Option<String>,
}

/// A person hydrated from storage, with the latest employment denormalized
/// into `company` and `title`.
#[derive(Debug, Clone)]
pub struct Person {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub location: Option<String>,
    pub photo_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub company: Option<String>,
    pub title: Option<String>,
}

impl Person {
    /// First and last name joined, skipping empty parts.
    pub fn full_name(&self) -> String {
        [self.first_name.as_str(), self.last_name.as_str()]
            .iter()
            .filter(|n| !n.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// A company hydrated from storage.
#[derive(Debug, Clone)]
pub struct Company {
    pub id: i64,
    pub name: String,
    pub segment: Option<String>,
    pub sector: Option<String>,
    pub location: Option<String>,
    pub website: Option<String>,
    pub logo_url: Option<String>,
}

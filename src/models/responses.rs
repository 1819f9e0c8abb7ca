use serde::{Deserialize, Serialize};

use crate::models::domain::{Company, Person};

/// External serialization of a matched person; the entity's standard API
/// shape, best match first in the response array.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonMatch {
    pub id: i64,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub name: String,
    pub company: Option<String>,
    pub title: Option<String>,
    pub location: Option<String>,
    pub email: Option<String>,
    #[serde(rename = "photoUrl")]
    pub photo_url: Option<String>,
    #[serde(rename = "linkedinUrl")]
    pub linkedin_url: Option<String>,
}

impl From<Person> for PersonMatch {
    fn from(person: Person) -> Self {
        let name = person.full_name();
        Self {
            id: person.id,
            first_name: person.first_name,
            last_name: person.last_name,
            name,
            company: person.company,
            title: person.title,
            location: person.location,
            email: person.email,
            photo_url: person.photo_url,
            linkedin_url: person.linkedin_url,
        }
    }
}

/// External serialization of a matched company.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyMatch {
    pub id: i64,
    pub name: String,
    pub segment: Option<String>,
    pub sector: Option<String>,
    pub location: Option<String>,
    pub website: Option<String>,
    #[serde(rename = "logoUrl")]
    pub logo_url: Option<String>,
}

impl From<Company> for CompanyMatch {
    fn from(company: Company) -> Self {
        Self {
            id: company.id,
            name: company.name,
            segment: company.segment,
            sector: company.sector,
            location: company.location,
            website: company.website,
            logo_url: company.logo_url,
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_person_match_serialization_shape() {
        let person = Person {
            id: 7,
            first_name: "Jon".to_string(),
            last_name: "Smith".to_string(),
            email: Some("jon@acme.com".to_string()),
            location: None,
            photo_url: None,
            linkedin_url: Some("https://linkedin.com/in/jsmith".to_string()),
            company: Some("Acme".to_string()),
            title: Some("CEO".to_string()),
        };

        let json = serde_json::to_value(PersonMatch::from(person)).expect("should serialize");
        assert_eq!(json["id"], 7);
        assert_eq!(json["firstName"], "Jon");
        assert_eq!(json["name"], "Jon Smith");
        assert_eq!(json["linkedinUrl"], "https://linkedin.com/in/jsmith");
        assert_eq!(json["location"], serde_json::Value::Null);
    }

    #[test]
    fn test_company_match_serialization_shape() {
        let company = Company {
            id: 3,
            name: "Acme".to_string(),
            segment: Some("Consumer".to_string()),
            sector: None,
            location: Some("NYC".to_string()),
            website: None,
            logo_url: Some("https://img.example/acme.png".to_string()),
        };

        let json = serde_json::to_value(CompanyMatch::from(company)).expect("should serialize");
        assert_eq!(json["id"], 3);
        assert_eq!(json["logoUrl"], "https://img.example/acme.png");
        assert_eq!(json["sector"], serde_json::Value::Null);
    }
}

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{CompanyQuery, PersonQuery};

/// Query parameters for person matching.
///
/// This is the whitelist of externally-named fields; anything else in the
/// query string is ignored. Unsupplied fields default to empty strings.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MatchPersonRequest {
    #[serde(rename = "firstName", default)]
    pub first_name: String,
    #[serde(rename = "lastName", default)]
    pub last_name: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub email: String,
    #[serde(rename = "linkedinUrl", default)]
    pub linkedin_url: String,
    #[validate(range(max = 100))]
    #[serde(default)]
    pub limit: Option<u16>,
}

impl MatchPersonRequest {
    pub fn into_query(self) -> PersonQuery {
        PersonQuery {
            first_name: self.first_name,
            last_name: self.last_name,
            company: self.company,
            email: self.email,
            location: self.location,
            linkedin_url: self.linkedin_url,
        }
    }
}

/// Query parameters for company matching.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MatchCompanyRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub segment: String,
    #[serde(default)]
    pub sector: String,
    #[serde(default)]
    pub location: String,
    #[validate(range(max = 100))]
    #[serde(default)]
    pub limit: Option<u16>,
}

impl MatchCompanyRequest {
    pub fn into_query(self) -> CompanyQuery {
        CompanyQuery {
            name: self.name,
            segment: self.segment,
            sector: self.sector,
            location: self.location,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default_to_empty() {
        let req: MatchPersonRequest =
            serde_json::from_str(r#"{"firstName": "Jon"}"#).expect("should deserialize");
        assert_eq!(req.first_name, "Jon");
        assert_eq!(req.last_name, "");
        assert_eq!(req.linkedin_url, "");
        assert_eq!(req.limit, None);
    }

    #[test]
    fn test_camel_case_field_names() {
        let req: MatchPersonRequest = serde_json::from_str(
            r#"{"firstName": "Jon", "lastName": "Smith", "linkedinUrl": "x"}"#,
        )
        .expect("should deserialize");
        assert_eq!(req.last_name, "Smith");
        assert_eq!(req.linkedin_url, "x");
    }

    #[test]
    fn test_limit_bound_validation() {
        let ok = MatchPersonRequest {
            first_name: String::new(),
            last_name: String::new(),
            company: String::new(),
            location: String::new(),
            email: String::new(),
            linkedin_url: String::new(),
            limit: Some(10),
        };
        assert!(ok.validate().is_ok());

        let too_big = MatchPersonRequest {
            limit: Some(500),
            ..ok
        };
        assert!(too_big.validate().is_err());
    }

    #[test]
    fn test_into_query_carries_all_fields() {
        let req: MatchCompanyRequest =
            serde_json::from_str(r#"{"name": "Acme", "sector": "Fintech"}"#)
                .expect("should deserialize");
        let query = req.into_query();
        assert_eq!(query.name, "Acme");
        assert_eq!(query.sector, "Fintech");
        assert_eq!(query.segment, "");
    }
}

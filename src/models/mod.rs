// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    Company, CompanyCandidateRow, CompanyQuery, Person, PersonCandidateRow, PersonQuery,
};
pub use requests::{MatchCompanyRequest, MatchPersonRequest};
pub use responses::{CompanyMatch, ErrorResponse, HealthResponse, PersonMatch};

use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};
use std::time::Duration;
use thiserror::Error;

use crate::models::{Company, CompanyCandidateRow, Person, PersonCandidateRow};

/// Errors that can occur when interacting with PostgreSQL
#[derive(Debug, Error)]
pub enum PostgresError {
    #[error("SQLx error: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    MigrateError(#[from] sqlx::migrate::MigrateError),

    #[error("Not found: {0}")]
    NotFound(String),
}

/// PostgreSQL client for the entity store
///
/// Owns the bulk candidate reads the matcher consumes and the per-id
/// hydration lookups for ranked results. Each call acquires a connection from
/// the pool; there is no shared statement or cursor state.
pub struct PostgresClient {
    pool: PgPool,
}

impl PostgresClient {
    /// Create a new PostgreSQL client from a connection string
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self, PostgresError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(Duration::from_secs(5))
            .idle_timeout(Duration::from_secs(600))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;

        // Run migrations on startup
        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self { pool })
    }

    /// Create a new PostgreSQL client from settings
    pub async fn from_settings(
        url: &str,
        max_connections: Option<u32>,
        min_connections: Option<u32>,
    ) -> Result<Self, PostgresError> {
        tracing::info!("Connecting to PostgreSQL with URL: {}", url);

        Self::new(
            url,
            max_connections.unwrap_or(10),
            min_connections.unwrap_or(1),
        )
        .await
    }

    /// Fetch the full person candidate set in one bulk read.
    ///
    /// One row per (person, employment, company) join: a person with N
    /// employment records appears N times, each with a different company
    /// name. People with no employment records never appear.
    ///
    /// TODO: Cache this query in a materialized view
    pub async fn fetch_person_candidates(
        &self,
    ) -> Result<Vec<PersonCandidateRow>, PostgresError> {
        let query = r#"
            SELECT p.id, p.first_name, p.last_name, p.email, p.location,
                   c.name AS company, p.linkedin_url
            FROM people p
            JOIN employment e ON p.id = e.person_id
            JOIN companies c ON c.id = e.company_id
        "#;

        let rows = sqlx::query(query).fetch_all(&self.pool).await?;

        let candidates: Vec<PersonCandidateRow> = rows
            .iter()
            .map(|row| PersonCandidateRow {
                id: row.get("id"),
                first_name: row.get("first_name"),
                last_name: row.get("last_name"),
                email: row.get("email"),
                location: row.get("location"),
                company: row.get("company"),
                linkedin_url: row.get("linkedin_url"),
            })
            .collect();

        tracing::debug!("Fetched {} person candidate rows", candidates.len());

        Ok(candidates)
    }

    /// Fetch the full company candidate set; one row per company.
    ///
    /// TODO: Cache this query in a materialized view
    pub async fn fetch_company_candidates(
        &self,
    ) -> Result<Vec<CompanyCandidateRow>, PostgresError> {
        let query = r#"
            SELECT c.id, c.name, c.segment, c.sector, c.location
            FROM companies c
        "#;

        let rows = sqlx::query(query).fetch_all(&self.pool).await?;

        let candidates: Vec<CompanyCandidateRow> = rows
            .iter()
            .map(|row| CompanyCandidateRow {
                id: row.get("id"),
                name: row.get("name"),
                segment: row.get("segment"),
                sector: row.get("sector"),
                location: row.get("location"),
            })
            .collect();

        tracing::debug!("Fetched {} company candidate rows", candidates.len());

        Ok(candidates)
    }

    /// Hydrate a person by id, denormalizing the latest employment into
    /// company and title.
    ///
    /// Latest means: a current position first, then an open-ended one, then
    /// the most recently ended one.
    pub async fn get_person(&self, id: i64) -> Result<Person, PostgresError> {
        let person_query = r#"
            SELECT id, first_name, last_name, email, location, photo_url, linkedin_url
            FROM people
            WHERE id = $1
        "#;

        let row = sqlx::query(person_query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| PostgresError::NotFound(format!("person {}", id)))?;

        let employment_query = r#"
            SELECT c.name AS company, e.title
            FROM employment e
            JOIN companies c ON c.id = e.company_id
            WHERE e.person_id = $1
            ORDER BY e.current DESC,
                     (e.end_date IS NULL) DESC,
                     e.end_date DESC,
                     e.start_date DESC,
                     c.name DESC,
                     e.title DESC
            LIMIT 1
        "#;

        let employment = sqlx::query(employment_query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        let (company, title) = match employment {
            Some(e) => (Some(e.get("company")), e.get("title")),
            None => (None, None),
        };

        Ok(Person {
            id: row.get("id"),
            first_name: row.get("first_name"),
            last_name: row.get("last_name"),
            email: row.get("email"),
            location: row.get("location"),
            photo_url: row.get("photo_url"),
            linkedin_url: row.get("linkedin_url"),
            company,
            title,
        })
    }

    /// Hydrate a company by id.
    pub async fn get_company(&self, id: i64) -> Result<Company, PostgresError> {
        let query = r#"
            SELECT id, name, segment, sector, location, website, logo_url
            FROM companies
            WHERE id = $1
        "#;

        let row = sqlx::query(query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| PostgresError::NotFound(format!("company {}", id)))?;

        Ok(Company {
            id: row.get("id"),
            name: row.get("name"),
            segment: row.get("segment"),
            sector: row.get("sector"),
            location: row.get("location"),
            website: row.get("website"),
            logo_url: row.get("logo_url"),
        })
    }

    /// Health check for the database connection
    pub async fn health_check(&self) -> Result<bool, PostgresError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| true)
            .map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = PostgresError::NotFound("person 42".to_string());
        assert_eq!(err.to_string(), "Not found: person 42");
    }
}

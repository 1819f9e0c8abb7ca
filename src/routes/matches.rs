use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

use crate::core::Matcher;
use crate::models::{
    CompanyMatch, ErrorResponse, HealthResponse, MatchCompanyRequest, MatchPersonRequest,
    PersonMatch,
};
use crate::services::{PostgresClient, PostgresError};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub postgres: Arc<PostgresClient>,
    pub matcher: Matcher,
    pub default_limit: u16,
    pub max_limit: u16,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/match/person", web::get().to(match_person))
        .route("/match/company", web::get().to(match_company));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let pg_healthy = state.postgres.health_check().await.unwrap_or(false);

    let status = if pg_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Person matching endpoint
///
/// GET /api/v1/match/person?firstName=...&lastName=...&company=...&email=...
///     &location=...&linkedinUrl=...&limit=3
///
/// WARNING: Matching is a slow process (O(MN^2), where M is the number of
/// candidate rows and N is the average field length). Repeated calls while a
/// user updates input data can occupy worker threads.
async fn match_person(
    state: web::Data<AppState>,
    req: web::Query<MatchPersonRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let limit = req
        .limit
        .unwrap_or(state.default_limit)
        .min(state.max_limit) as usize;
    let query = req.into_inner().into_query();

    tracing::info!("Matching person, limit: {}", limit);

    let candidates = match state.postgres.fetch_person_candidates().await {
        Ok(candidates) => candidates,
        Err(e) => {
            tracing::error!("Failed to fetch person candidates: {}", e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to fetch candidates".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    let ranked = state.matcher.rank_people(&query, candidates, limit);

    let mut matches = Vec::with_capacity(ranked.ids.len());
    for id in &ranked.ids {
        match state.postgres.get_person(*id).await {
            Ok(person) => matches.push(PersonMatch::from(person)),
            Err(e) => return hydration_failure("person", *id, e),
        }
    }

    tracing::info!(
        "Returning {} person matches (from {} candidate rows)",
        matches.len(),
        ranked.total_candidates
    );

    HttpResponse::Ok().json(matches)
}

/// Company matching endpoint
///
/// GET /api/v1/match/company?name=...&segment=...&sector=...&location=...
///     &limit=3
async fn match_company(
    state: web::Data<AppState>,
    req: web::Query<MatchCompanyRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let limit = req
        .limit
        .unwrap_or(state.default_limit)
        .min(state.max_limit) as usize;
    let query = req.into_inner().into_query();

    tracing::info!("Matching company, limit: {}", limit);

    let candidates = match state.postgres.fetch_company_candidates().await {
        Ok(candidates) => candidates,
        Err(e) => {
            tracing::error!("Failed to fetch company candidates: {}", e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to fetch candidates".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    let ranked = state.matcher.rank_companies(&query, candidates, limit);

    let mut matches = Vec::with_capacity(ranked.ids.len());
    for id in &ranked.ids {
        match state.postgres.get_company(*id).await {
            Ok(company) => matches.push(CompanyMatch::from(company)),
            Err(e) => return hydration_failure("company", *id, e),
        }
    }

    tracing::info!(
        "Returning {} company matches (from {} candidates)",
        matches.len(),
        ranked.total_candidates
    );

    HttpResponse::Ok().json(matches)
}

/// A ranked id came out of this call's own bulk read, so failing to hydrate
/// it means the store changed between fetch and hydrate. That is an invariant
/// violation, not a recoverable condition; the whole call fails with no
/// partial results.
fn hydration_failure(entity: &str, id: i64, e: PostgresError) -> HttpResponse {
    debug_assert!(false, "{} {} vanished between fetch and hydrate", entity, id);
    tracing::error!(
        "Invariant violation: {} {} vanished between fetch and hydrate: {}",
        entity,
        id,
        e
    );
    HttpResponse::InternalServerError().json(ErrorResponse {
        error: "Candidate set changed during match".to_string(),
        message: e.to_string(),
        status_code: 500,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_check_response() {
        let response = HealthResponse {
            status: "healthy".to_string(),
            version: "0.1.0".to_string(),
            timestamp: chrono::Utc::now(),
        };

        assert_eq!(response.status, "healthy");
    }
}

use crate::core::{filter_directory, MatchEngine};
use crate::models::{
    AssistantRequest, AssistantResponse, DirectoryQuery, DirectoryResponse, ErrorResponse,
    FindMatchesRequest, FindMatchesResponse, HealthResponse, ProfileFilter,
};
use crate::services::{AssistantClient, CacheKey, CacheManager, ProfileStore};
use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ProfileStore>,
    pub engine: MatchEngine,
    pub cache: Arc<CacheManager>,
    pub assistant: Option<Arc<AssistantClient>>,
    pub default_limit: usize,
    pub max_limit: usize,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/matches/find", web::post().to(find_matches))
        .route("/profiles", web::get().to(list_profiles))
        .route("/profiles/{id}", web::get().to(get_profile))
        .route("/assistant/chat", web::post().to(assistant_chat));
}

/// Resolve the effective result limit for a match request
///
/// An omitted limit takes the configured default; an explicit one is
/// clamped to the configured maximum.
fn resolve_limit(requested: Option<u16>, default_limit: usize, max_limit: usize) -> usize {
    match requested {
        Some(limit) => (limit as usize).min(max_limit),
        None => default_limit,
    }
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        roster_size: state.store.len(),
    })
}

/// Find matches endpoint
///
/// POST /api/v1/matches/find
///
/// Request body:
/// ```json
/// {
///   "query": "fitness influencers in hyderabad",
///   "limit": 4
/// }
/// ```
async fn find_matches(
    state: web::Data<AppState>,
    req: web::Json<FindMatchesRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for find_matches request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let limit = resolve_limit(req.limit, state.default_limit, state.max_limit);

    tracing::info!("Finding matches for query: {:?}, limit: {}", req.query, limit);

    // The roster is immutable, so a cached response is always current
    let cache_key = CacheKey::matches(&req.query, limit);
    if let Ok(cached) = state.cache.get::<FindMatchesResponse>(&cache_key).await {
        tracing::debug!("Serving matches from cache for {:?}", req.query);
        return HttpResponse::Ok().json(cached);
    }

    let result = state
        .engine
        .find_matches(&req.query, state.store.profiles(), limit);

    let response = FindMatchesResponse {
        matches: result.matches,
        total_profiles: result.total_profiles,
    };

    if let Err(e) = state.cache.set(&cache_key, &response).await {
        tracing::warn!("Failed to cache match response: {}", e);
    }

    tracing::info!(
        "Returning {} matches for query {:?} (roster of {})",
        response.matches.len(),
        req.query,
        response.total_profiles
    );

    HttpResponse::Ok().json(response)
}

/// Profile directory endpoint
///
/// GET /api/v1/profiles?search=&city=&niche=
async fn list_profiles(
    state: web::Data<AppState>,
    query: web::Query<DirectoryQuery>,
) -> impl Responder {
    let filter = ProfileFilter {
        search: query.search.clone().filter(|s| !s.is_empty()),
        city: query.city.clone().filter(|s| !s.is_empty()),
        niche: query.niche.clone().filter(|s| !s.is_empty()),
    };

    let profiles: Vec<_> = filter_directory(state.store.profiles(), &filter)
        .into_iter()
        .cloned()
        .collect();

    tracing::debug!(
        "Directory listing: {} of {} profiles match",
        profiles.len(),
        state.store.len()
    );

    let total = profiles.len();
    HttpResponse::Ok().json(DirectoryResponse { profiles, total })
}

/// Single profile endpoint
///
/// GET /api/v1/profiles/{id}
async fn get_profile(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let id = path.into_inner();

    match state.store.get(&id) {
        Some(profile) => HttpResponse::Ok().json(profile),
        None => HttpResponse::NotFound().json(ErrorResponse {
            error: "Profile not found".to_string(),
            message: format!("No profile with id {}", id),
            status_code: 404,
        }),
    }
}

/// Assistant chat endpoint
///
/// POST /api/v1/assistant/chat
///
/// Proxies the prompt to the generative-text upstream. Returns 503 when no
/// API key is configured and 502 when the upstream fails; match scoring is
/// unaffected either way.
async fn assistant_chat(
    state: web::Data<AppState>,
    req: web::Json<AssistantRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let assistant = match &state.assistant {
        Some(client) => client,
        None => {
            return HttpResponse::ServiceUnavailable().json(ErrorResponse {
                error: "Assistant unavailable".to_string(),
                message: "No assistant API key is configured".to_string(),
                status_code: 503,
            });
        }
    };

    match assistant.generate(&req.prompt).await {
        Ok(reply) => HttpResponse::Ok().json(AssistantResponse { reply }),
        Err(e) => {
            tracing::error!("Assistant request failed: {}", e);
            HttpResponse::BadGateway().json(ErrorResponse {
                error: "Assistant request failed".to_string(),
                message: e.to_string(),
                status_code: 502,
            })
        }
    }
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
            roster_size: 14,
        };

        assert_eq!(response.status, "healthy");
        assert_eq!(response.roster_size, 14);
    }

    #[test]
    fn test_omitted_limit_takes_configured_default() {
        assert_eq!(resolve_limit(None, 7, 50), 7);
    }

    #[test]
    fn test_explicit_limit_clamped_to_max() {
        assert_eq!(resolve_limit(Some(200), 4, 50), 50);
        assert_eq!(resolve_limit(Some(10), 4, 50), 10);
    }
}

use actix_cors::Cors;
use actix_web::{error, http::StatusCode, middleware, web, App, HttpResponse, HttpServer};
use influmatch_algo::config::Settings;
use influmatch_algo::core::MatchEngine;
use influmatch_algo::models::ScoringWeights;
use influmatch_algo::routes;
use influmatch_algo::routes::matches::AppState;
use influmatch_algo::services::{AssistantClient, CacheManager, ProfileStore};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// JSON error response for JSON payload errors
#[derive(Debug, serde::Serialize)]
pub struct JsonError {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl std::error::Error for JsonError {}

impl error::ResponseError for JsonError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::BAD_REQUEST))
            .content_type("application/json")
            .body(serde_json::to_string(self).unwrap())
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &actix_web::HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    JsonError {
        error: "invalid_json".to_string(),
        message: format!("Invalid JSON: {}", err),
        status_code: 400,
    }
    .into()
}

/// Handle query payload errors
pub fn handle_query_payload_error(err: error::QueryPayloadError, _req: &actix_web::HttpRequest) -> actix_web::Error {
    JsonError {
        error: "invalid_query".to_string(),
        message: format!("Invalid query: {}", err),
        status_code: 400,
    }
    .into()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Load configuration (logging is not up yet, so failures go to stderr)
    let settings = Settings::load().unwrap_or_else(|e| {
        eprintln!("Failed to load configuration: {}", e);
        panic!("Configuration error: {}", e);
    });

    // Initialize logging; LOG_LEVEL and LOG_FORMAT override the [logging] section
    let filter = EnvFilter::try_from_env("LOG_LEVEL")
        .unwrap_or_else(|_| EnvFilter::new(&settings.logging.level));
    let log_format =
        std::env::var("LOG_FORMAT").unwrap_or_else(|_| settings.logging.format.clone());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting InfluMatch Algo matching service...");
    info!("Configuration loaded successfully");

    // Build the profile store (immutable for the process lifetime)
    let store = match settings.roster.source.as_str() {
        "generated" => {
            info!(
                "Generating roster of {} profiles (seed {})",
                settings.roster.size, settings.roster.seed
            );
            Arc::new(ProfileStore::generated(settings.roster.size, settings.roster.seed))
        }
        _ => Arc::new(ProfileStore::curated()),
    };

    info!("Profile store initialized with {} profiles", store.len());

    // Initialize the match response cache
    let cache = Arc::new(CacheManager::new(
        settings.cache.max_entries,
        settings.cache.ttl_secs,
    ));

    info!(
        "Response cache initialized ({} entries, TTL: {}s)",
        settings.cache.max_entries, settings.cache.ttl_secs
    );

    // Initialize the assistant client (optional - the engine never needs it)
    let assistant = match &settings.assistant.api_key {
        Some(key) => {
            match AssistantClient::new(
                settings.assistant.endpoint.clone(),
                key.clone(),
                settings.assistant.model.clone(),
            ) {
                Ok(client) => {
                    info!("Assistant client initialized (model: {})", settings.assistant.model);
                    Some(Arc::new(client))
                }
                Err(e) => {
                    warn!("Failed to build assistant client, continuing without it: {}", e);
                    None
                }
            }
        }
        None => {
            warn!("No assistant API key configured, assistant routes will return 503");
            None
        }
    };

    // Initialize the match engine with configured weights
    let weights = ScoringWeights {
        niche: settings.scoring.weights.niche,
        city: settings.scoring.weights.city,
        full_text: settings.scoring.weights.full_text,
    };

    let engine = MatchEngine::new(weights, settings.scoring.noise_threshold);

    info!(
        "Match engine initialized with weights: {:?}, noise threshold: {}",
        weights, settings.scoring.noise_threshold
    );

    // Build application state
    let app_state = AppState {
        store,
        engine,
        cache,
        assistant,
        default_limit: settings.matching.default_limit,
        max_limit: settings.matching.max_limit,
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}

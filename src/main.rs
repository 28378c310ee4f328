//! Passerelles Backend
//!
//! REST backend for the Passerelles marketing site: speaker roster CRUD,
//! bilingual page-copy storage, image uploads, and static serving of the
//! public site.

mod api;
mod config;
mod errors;
mod models;
mod store;
mod uploads;

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::Config;
use store::{ContentStore, SpeakerStore};

/// Room for multipart boundaries and part headers on top of the file itself.
const UPLOAD_BODY_OVERHEAD: usize = 64 * 1024;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub speakers: Arc<SpeakerStore>,
    pub content: Arc<ContentStore>,
    pub config: Arc<Config>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env();

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Passerelles Backend");
    tracing::info!("Data directory: {:?}", config.data_dir);
    tracing::info!("Uploads directory: {:?}", config.uploads_dir);
    tracing::info!("Bind address: {}", config.bind_addr);

    // Initialize document stores, seeding defaults on first run
    let speakers = Arc::new(SpeakerStore::new(config.speakers_path()));
    speakers.initialize(&store::default_speakers()).await;

    let content = Arc::new(ContentStore::new(config.content_path()));
    content.initialize(&store::default_content()).await;

    // Create application state
    let state = AppState {
        speakers,
        content,
        config: Arc::new(config.clone()),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);
    tracing::info!("Admin panel: http://{}/admin", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API routes
    let api_routes = Router::new()
        // Speakers
        .route("/speakers", get(api::list_speakers))
        .route("/speakers", post(api::create_speaker))
        .route("/speakers/{id}", get(api::get_speaker))
        .route("/speakers/{id}", put(api::update_speaker))
        .route("/speakers/{id}", delete(api::delete_speaker))
        // Content
        .route("/content", get(api::get_content))
        .route("/content", put(api::replace_content))
        .route("/save-content", post(api::replace_content))
        // Uploads
        .route(
            "/upload",
            post(api::upload_image).layer(DefaultBodyLimit::max(
                uploads::MAX_UPLOAD_BYTES + UPLOAD_BODY_OVERHEAD,
            )),
        );

    // Health check
    let health_routes = Router::new().route("/health", get(health_check));

    // Static assets: the public site at the root, uploads alongside it
    let public_dir = state.config.public_dir.clone();
    let uploads_dir = state.config.uploads_dir.clone();

    Router::new()
        .nest("/api", api_routes)
        .merge(health_routes)
        .route_service("/admin", ServeFile::new(public_dir.join("admin.html")))
        .nest_service("/uploads", ServeDir::new(uploads_dir))
        .fallback_service(ServeDir::new(public_dir))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}

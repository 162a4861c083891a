//! LeadDesk Server
//!
//! Admin backend for the lead-management site: users, blogs, videos,
//! enquiry forms, contact messages, activity feed and CSV export.
//!
//! All data lives in process memory and is reseeded on every start.

mod settings;
mod error;
mod extractors;
mod handlers;
mod logging;
mod services;
mod storage;

use anyhow::{Context, Result};
use axum::{
    routing::{get, post, put},
    Router,
};
use leaddesk_core::Storage;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use settings::Settings;
use services::AuthService;
use storage::MemStorage;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn Storage>,
    pub auth_service: Arc<AuthService>,
}

impl AppState {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        let auth_service = Arc::new(AuthService::new(storage.clone()));
        Self {
            storage,
            auth_service,
        }
    }
}

#[tokio::main]
async fn main() {
    let settings = match settings::load_config() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("[FATAL] Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    logging::install_panic_hook();
    if let Err(e) = logging::init(&settings) {
        eprintln!("[FATAL] {:#}", e);
        std::process::exit(1);
    }

    info!("Starting LeadDesk Server v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run_server(settings).await {
        error!("Server failed: {:#}", e);
        std::process::exit(1);
    }
}

async fn run_server(settings: Settings) -> Result<()> {
    let storage: Arc<dyn Storage> = Arc::new(MemStorage::new());
    let state = AppState::new(storage);

    let app = app(state, &settings);

    let addr = settings
        .socket_addr()
        .context("Failed to parse bind address")?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    info!("Server listening on {}", addr);
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .context("Server error")?;

    Ok(())
}

fn app(state: AppState, settings: &Settings) -> Router {
    let mut router = Router::new()
        .route("/health", get(handlers::health))
        .nest("/api", api_routes())
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http());

    if settings.cors_allow_any {
        router = router.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );
    }

    router.with_state(state)
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(handlers::auth::login))
        .route(
            "/users",
            get(handlers::users::list).post(handlers::users::create),
        )
        .route(
            "/users/:id",
            get(handlers::users::get)
                .put(handlers::users::update)
                .delete(handlers::users::delete),
        )
        .route(
            "/users/:id/permissions",
            put(handlers::users::update_permissions),
        )
        .route("/users/:id/status", put(handlers::users::update_status))
        .route("/login-history", get(handlers::login_history::list))
        .route(
            "/blogs",
            get(handlers::blogs::list).post(handlers::blogs::create),
        )
        .route(
            "/blogs/:id",
            get(handlers::blogs::get)
                .put(handlers::blogs::update)
                .delete(handlers::blogs::delete),
        )
        .route(
            "/videos",
            get(handlers::videos::list).post(handlers::videos::create),
        )
        .route(
            "/videos/:id",
            get(handlers::videos::get)
                .put(handlers::videos::update)
                .delete(handlers::videos::delete),
        )
        .route(
            "/contacts",
            get(handlers::contacts::list).post(handlers::contacts::create),
        )
        .route(
            "/enquiry-forms",
            get(handlers::enquiry_forms::list).post(handlers::enquiry_forms::create),
        )
        .route(
            "/enquiry-forms/:id",
            get(handlers::enquiry_forms::get)
                .put(handlers::enquiry_forms::update)
                .delete(handlers::enquiry_forms::delete),
        )
        .route("/activities", get(handlers::activities::list))
        .route("/export/contacts", get(handlers::export::contacts))
        .route("/export/enquiries", get(handlers::export::enquiries))
}

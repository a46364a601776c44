//! WorldClass Travel site backend
//!
//! Server-rendered marketing site with an admin dashboard, backed by two
//! JSON records in SQLite and an optional hosted text-generation model.

mod api;
mod config;
mod db;
mod editors;
mod errors;
mod generation;
mod models;
mod site;
mod store;

use std::sync::Arc;

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use api::CollectionRoute;
use config::Config;
use db::Repository;
use editors::EditorSessions;
use generation::{GeminiClient, TextGenerator};
use models::{BlogPost, Destination};
use site::contact::{ContactSink, LogContactSink};
use site::newsletter::{LogNewsletterSink, NewsletterSink};
use store::SiteStore;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<SiteStore>,
    pub editors: Arc<EditorSessions>,
    pub generator: Arc<dyn TextGenerator>,
    pub contact_sink: Arc<dyn ContactSink>,
    pub newsletter_sink: Arc<dyn NewsletterSink>,
    pub config: Arc<Config>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let (config, config_warnings) = Config::from_env();

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    for warning in &config_warnings {
        tracing::warn!("{}", warning);
    }

    tracing::info!("Starting WorldClass Travel site");
    tracing::info!("Database path: {:?}", config.db_path);
    tracing::info!("Bind address: {}", config.bind_addr);

    if config.api_key.is_none() {
        tracing::warn!("No API_KEY configured. AI generation will fail until one is set!");
    }

    // Initialize database and load both records
    let pool = db::init_database(&config.db_path).await?;
    let repo = Arc::new(Repository::new(pool));
    let store = Arc::new(SiteStore::load(repo).await?);
    tracing::info!(
        dark_mode = store.dark_mode(),
        "Loaded site content with {} destinations and {} blog posts",
        store.content().destinations.len(),
        store.content().blog_posts.len()
    );

    let mut root_class = store.subscribe_root_class();
    tokio::spawn(async move {
        while root_class.changed().await.is_ok() {
            let class = *root_class.borrow_and_update();
            tracing::debug!("Document root class is now {:?}", class);
        }
    });

    let generator = GeminiClient::new(config.generation_endpoint.clone(), config.api_key.clone());

    // Create application state
    let state = AppState {
        editors: Arc::new(EditorSessions::new(&store)),
        store,
        generator: Arc::new(generator),
        contact_sink: Arc::new(LogContactSink),
        newsletter_sink: Arc::new(LogNewsletterSink),
        config: Arc::new(config.clone()),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Editor routes of one collection, nested under `/api/admin/<name>`.
fn collection_routes<T: CollectionRoute>() -> Router<AppState> {
    Router::new()
        .route(
            "/draft",
            post(api::open_add::<T>)
                .get(api::get_draft::<T>)
                .put(api::patch_draft::<T>)
                .delete(api::cancel_draft::<T>),
        )
        .route("/draft/submit", post(api::submit_draft::<T>))
        .route("/draft/generate", post(api::generate::<T>))
        .route("/{id}", delete(api::delete_item::<T>))
        .route("/{id}/edit", post(api::open_edit::<T>))
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
        // Records
        .route("/content", get(api::get_content))
        .route("/settings", get(api::get_settings))
        .route("/settings/dark-mode", post(api::toggle_dark_mode))
        .route("/revision", get(api::get_revision))
        // Collection editors
        .nest("/admin/destinations", collection_routes::<Destination>())
        .nest("/admin/blog", collection_routes::<BlogPost>())
        .route("/admin/blog/ideas", post(api::blog_ideas))
        // Content editor
        .route(
            "/admin/content/draft",
            get(api::get_content_draft).delete(api::reset_content_draft),
        )
        .route("/admin/content/draft/edits", post(api::apply_content_edits))
        .route("/admin/content/draft/submit", post(api::submit_content_draft))
        // Settings editor
        .route(
            "/admin/settings/draft",
            get(api::get_settings_draft).put(api::patch_settings_draft),
        )
        .route(
            "/admin/settings/draft/dark-mode",
            post(api::toggle_draft_dark_mode),
        )
        .route(
            "/admin/settings/draft/submit",
            post(api::submit_settings_draft),
        );

    // Public site and admin views
    let site_routes = Router::new()
        .route("/", get(site::home))
        .route("/about", get(site::about))
        .route("/destinations", get(site::destinations))
        .route("/destinations/{id}/book", get(site::book_destination))
        .route("/services", get(site::services))
        .route("/blog", get(site::blog))
        .route("/blog/{slug}", get(site::blog_post))
        .route("/contact", get(site::contact_page).post(site::contact_submit))
        .route("/newsletter", post(site::newsletter_submit))
        .route("/settings/dark-mode", post(site::toggle_dark_mode))
        .route("/admin", get(site::admin_overview))
        .route("/admin/analytics", get(site::admin_analytics))
        .route("/admin/content", get(site::admin_content))
        .route("/admin/destinations", get(site::admin_destinations))
        .route("/admin/blog", get(site::admin_blog))
        .route("/admin/settings", get(site::admin_settings));

    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api", api_routes)
        .merge(site_routes)
        .merge(health_routes)
        .fallback(site::not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}

use axum::{
    extract::State,
    middleware as axum_middleware,
    routing::{get, patch, post},
    Router,
};
use axum::http::HeaderValue;
use serde_json::{json, Value};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use bookmark_api::middleware::jwt_auth_middleware;
use bookmark_api::state::AppState;
use bookmark_api::{config, database, handlers};

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bookmark_api=debug,tower_http=info".into()),
        )
        .init();

    // Initialize configuration (this loads the config singleton)
    let config = config::config();
    tracing::info!("Starting Bookmark API in {:?} mode", config.environment);

    let pool = database::connect()
        .await
        .unwrap_or_else(|e| panic!("failed to connect to database: {}", e));

    database::run_migrations(&pool)
        .await
        .unwrap_or_else(|e| panic!("failed to run migrations: {}", e));

    let app = app(AppState::new(pool));

    // Allow tests or deployments to override port via env
    let port = std::env::var("BOOKMARK_API_PORT")
        .ok()
        .or_else(|| std::env::var("PORT").ok())
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(3000);

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    tracing::info!("Bookmark API listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}

fn app(state: AppState) -> Router {
    Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        // Public auth routes
        .merge(auth_routes())
        // Protected API
        .merge(user_routes())
        .merge(bookmark_routes())
        // Global middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer()),
        )
        .with_state(state)
}

fn auth_routes() -> Router<AppState> {
    use handlers::auth;

    Router::new()
        .route("/auth/signup", post(auth::signup))
        .route("/auth/signin", post(auth::signin))
}

fn user_routes() -> Router<AppState> {
    use handlers::users;

    Router::new()
        .route("/users/me", get(users::me))
        .route("/users", patch(users::edit))
        .route_layer(axum_middleware::from_fn(jwt_auth_middleware))
}

fn bookmark_routes() -> Router<AppState> {
    use handlers::bookmarks;

    Router::new()
        .route("/bookmarks", post(bookmarks::create).get(bookmarks::list))
        .route(
            "/bookmarks/:id",
            get(bookmarks::get_by_id)
                .patch(bookmarks::edit_by_id)
                .delete(bookmarks::delete_by_id),
        )
        .route_layer(axum_middleware::from_fn(jwt_auth_middleware))
}

fn cors_layer() -> CorsLayer {
    let security = &config::config().security;

    if !security.enable_cors {
        return CorsLayer::new();
    }

    // Development stays permissive; elsewhere the configured origins
    // are parsed and anything malformed is dropped
    if matches!(config::config().environment, config::Environment::Development) {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = security
        .cors_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new().allow_origin(AllowOrigin::list(origins))
}

async fn root() -> axum::response::Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    axum::response::Json(json!({
        "success": true,
        "data": {
            "name": "Bookmark API",
            "version": version,
            "description": "Personal bookmark records scoped per account",
            "endpoints": {
                "home": "/ (public)",
                "health": "/health (public)",
                "auth": "/auth/signup, /auth/signin (public - token acquisition)",
                "users": "/users/me, /users (protected)",
                "bookmarks": "/bookmarks[/:id] (protected)",
            }
        }
    }))
}

async fn health(State(state): State<AppState>) -> impl axum::response::IntoResponse {
    let now = chrono::Utc::now();

    match database::health_check(&state.pool).await {
        Ok(_) => (
            axum::http::StatusCode::OK,
            axum::response::Json(json!({
                "success": true,
                "data": {
                    "status": "ok",
                    "timestamp": now,
                    "database": "ok"
                }
            })),
        ),
        Err(e) => (
            axum::http::StatusCode::SERVICE_UNAVAILABLE,
            axum::response::Json(json!({
                "success": false,
                "error": "database unavailable",
                "data": {
                    "status": "degraded",
                    "timestamp": now,
                    "database_error": e.to_string()
                }
            })),
        ),
    }
}

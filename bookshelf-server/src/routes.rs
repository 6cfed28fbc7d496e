//! HTTP routes

use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

/// Build the CORS layer from a `BOOKSHELF_CORS_ORIGINS`-style value
///
/// `*` allows any origin, otherwise a comma-separated origin list; with no
/// value only local development origins are allowed.
pub fn cors_layer(origins: Option<&str>) -> CorsLayer {
    let allow_origin = match origins {
        Some("*") => AllowOrigin::any(),
        Some(origins) => AllowOrigin::list(
            origins
                .split(',')
                .filter_map(|s| s.trim().parse().ok())
                .collect::<Vec<_>>(),
        ),
        None => AllowOrigin::list(
            [
                "http://localhost:3000",
                "http://localhost:5173",
                "http://127.0.0.1:3000",
                "http://127.0.0.1:5173",
            ]
            .into_iter()
            .filter_map(|origin| origin.parse().ok())
            .collect::<Vec<_>>(),
        ),
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    let cors_origins = std::env::var("BOOKSHELF_CORS_ORIGINS").ok();
    let cors = cors_layer(cors_origins.as_deref());

    let api_routes = Router::new()
        .route("/books", get(handlers::list_books))
        .route("/books/:id", get(handlers::get_book))
        .route("/genres", get(handlers::list_genres))
        .route("/authors", get(handlers::list_authors))
        .route("/theme/:mode", get(handlers::theme_palette));

    Router::new()
        .route("/", get(handlers::index))
        .route("/books/more", get(handlers::more_books))
        .route("/books/:id", get(handlers::book_page))
        .nest("/api/v1", api_routes)
        .route("/health", get(handlers::health_check))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

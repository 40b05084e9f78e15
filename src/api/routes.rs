//! API route configuration.

use axum::Router;
use axum::routing::{delete, get, post, put};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use super::handlers::{
    self, CreateNoteRequest, DetailResponse, HealthResponse, NoteResponse, UpdateNoteRequest,
};
use super::state::AppState;
use crate::db::Database;

/// Build routes with generic database type.
///
/// This macro reduces boilerplate when registering handlers that are generic
/// over the Database trait. It applies the turbofish operator automatically.
macro_rules! routes {
    ($D:ty => {
        $($method:ident $path:literal => $($handler:ident)::+),* $(,)?
    }) => {{
        let router = Router::new();
        $(
            let router = router.route($path, $method($($handler)::+::<$D>));
        )*
        router
    }};
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Notes API",
        version = "0.1.0",
        description = "Minimal note-taking backend",
        license(name = "MIT")
    ),
    paths(
        handlers::health,
        handlers::list_notes,
        handlers::get_note,
        handlers::create_note,
        handlers::update_note,
        handlers::delete_note,
    ),
    components(
        schemas(
            HealthResponse,
            NoteResponse,
            CreateNoteRequest,
            UpdateNoteRequest,
            DetailResponse,
        )
    ),
    tags(
        (name = "system", description = "System health endpoints"),
        (name = "notes", description = "Note management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the API router with OpenAPI documentation.
///
/// The permissive CORS policy (any origin mirrored back, any method, any
/// header, credentials allowed) is a development default and applies to
/// every response.
pub fn create_router<D: Database + 'static>(state: AppState<D>) -> Router {
    let api = ApiDoc::openapi();

    // System routes (non-generic)
    let system_routes = Router::new().route("/health", get(handlers::health));

    // Note routes (generic over Database)
    let note_routes = routes!(D => {
        get "/notes/" => handlers::list_notes,
        post "/notes/" => handlers::create_note,
        get "/notes/{id}" => handlers::get_note,
        put "/notes/{id}" => handlers::update_note,
        delete "/notes/{id}" => handlers::delete_note,
    });

    system_routes
        .merge(note_routes)
        .merge(Scalar::with_url("/docs", api))
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

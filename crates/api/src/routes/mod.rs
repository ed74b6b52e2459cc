pub mod flavor;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /flavors            list, create
/// /flavors/{id}       get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/flavors", flavor::router())
}

pub mod handlers;
pub mod requests;
pub mod responses;

use axum::routing::get;
use axum::Router;

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/investors",
            get(handlers::list_investors).post(handlers::create_investor),
        )
        .route("/investors/{id}", get(handlers::get_investor))
}

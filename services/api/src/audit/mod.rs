pub mod handlers;
pub mod responses;

use axum::routing::get;
use axum::Router;

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/audit/recent", get(handlers::list_recent))
        .route("/audit/{record_id}", get(handlers::list_by_record))
}

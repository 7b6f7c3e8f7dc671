pub mod formatters;
pub mod handlers;
pub mod requests;
pub mod responses;

use axum::routing::{delete, get, post};
use axum::Router;

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/dedup/scan", post(handlers::run_scan))
        .route("/dedup/dismiss", post(handlers::dismiss_pairs))
        .route("/dedup/confirm", post(handlers::confirm_duplicate))
        .route("/dedup/merge", post(handlers::merge_projects))
        .route("/dedup/reviews", get(handlers::list_reviews))
        .route("/dedup/reviews/stats", get(handlers::review_stats))
        .route("/dedup/reviews/export", get(handlers::export_reviews_csv))
        .route("/dedup/reviews/{id}", delete(handlers::delete_review))
}

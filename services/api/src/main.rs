mod audit;
mod dedup;
mod error;
mod investors;
mod projects;

use axum::{
    http::{header, HeaderValue, Method, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use helia_common::types::ServiceInfo;
use helia_config::{init_tracing, AppConfig};
use helia_db::audit::pg_repository::PgAuditRepository;
use helia_db::dedup::pg_repository::PgDedupRepository;
use helia_db::investors::pg_repository::PgInvestorRepository;
use helia_db::projects::pg_repository::PgProjectRepository;
use helia_dedup::DedupConfig;
use std::net::SocketAddr;
use tower_http::cors::CorsLayer;

#[derive(Clone)]
pub struct AppState {
    pub project_repo: PgProjectRepository,
    pub dedup_repo: PgDedupRepository,
    pub investor_repo: PgInvestorRepository,
    pub audit_repo: PgAuditRepository,
    pub dedup_config: DedupConfig,
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn info() -> Json<ServiceInfo> {
    Json(ServiceInfo::new("helia-api"))
}

async fn metrics() -> impl IntoResponse {
    let body = "\
# HELP helia_up Service up indicator\n\
# TYPE helia_up gauge\n\
helia_up 1\n\
# HELP helia_info Service info\n\
# TYPE helia_info gauge\n\
helia_info{service=\"helia-api\",version=\"0.1.0\"} 1\n";

    (
        StatusCode::OK,
        [(
            header::CONTENT_TYPE,
            "text/plain; version=0.0.4; charset=utf-8",
        )],
        body,
    )
}

fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin([
            "http://localhost:3000".parse::<HeaderValue>().unwrap(),
            "http://127.0.0.1:3000".parse::<HeaderValue>().unwrap(),
        ])
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    Router::new()
        .route("/health", get(health))
        .route("/info", get(info))
        .route("/metrics", get(metrics))
        .merge(projects::router())
        .merge(investors::router())
        .merge(dedup::router())
        .merge(audit::router())
        .layer(cors)
        .with_state(state)
}

#[tokio::main]
async fn main() {
    init_tracing("info");

    let config = AppConfig::from_env().expect("failed to load config");
    tracing::info!(service = "helia-api", "starting");

    let pool = helia_db::create_pool(&config.database_url)
        .await
        .expect("failed to create database pool");

    let state = AppState {
        project_repo: PgProjectRepository::new(pool.clone()),
        dedup_repo: PgDedupRepository::new(pool.clone()),
        investor_repo: PgInvestorRepository::new(pool.clone()),
        audit_repo: PgAuditRepository::new(pool),
        dedup_config: DedupConfig::default(),
    };

    let app = build_router(state);
    let addr: SocketAddr = config.bind_addr().parse().expect("invalid bind address");

    tracing::info!(%addr, "listening");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind");
    axum::serve(listener, app).await.expect("server error");
}

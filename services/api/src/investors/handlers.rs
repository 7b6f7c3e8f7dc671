use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use helia_common::error::HeliaError;
use helia_db::investors::models::Investor;
use uuid::Uuid;

use crate::error::ApiError;
use crate::investors::requests::CreateInvestorRequest;
use crate::investors::responses::{InvestorResponse, ListInvestorsResponse};
use crate::AppState;

fn to_investor_response(investor: Investor, project_count: i64) -> InvestorResponse {
    InvestorResponse {
        id: investor.id,
        code: investor.code,
        name: investor.name,
        status: investor.status,
        project_count,
        created_at: investor.created_at,
        updated_at: investor.updated_at,
    }
}

pub async fn list_investors(
    State(state): State<AppState>,
) -> Result<Json<ListInvestorsResponse>, ApiError> {
    let investors = state.investor_repo.list().await?;

    let mut data = Vec::with_capacity(investors.len());
    for investor in investors {
        let count = state.investor_repo.project_count(investor.id).await?;
        data.push(to_investor_response(investor, count));
    }

    let count = data.len();
    Ok(Json(ListInvestorsResponse { data, count }))
}

pub async fn get_investor(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<InvestorResponse>, ApiError> {
    let investor = state
        .investor_repo
        .get_by_id(id)
        .await?
        .ok_or_else(|| ApiError(HeliaError::NotFound(format!("investor not found: {id}"))))?;

    let count = state.investor_repo.project_count(id).await?;
    Ok(Json(to_investor_response(investor, count)))
}

pub async fn create_investor(
    State(state): State<AppState>,
    Json(body): Json<CreateInvestorRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if body.code.trim().is_empty() {
        return Err(ApiError(HeliaError::Validation(
            "code must not be empty".to_string(),
        )));
    }
    if body.name.trim().is_empty() {
        return Err(ApiError(HeliaError::Validation(
            "name must not be empty".to_string(),
        )));
    }

    let now = chrono::Utc::now();
    let investor = Investor {
        id: Uuid::new_v4(),
        code: body.code,
        name: body.name,
        status: "active".to_string(),
        created_at: now,
        updated_at: now,
    };

    let created = state.investor_repo.create(investor).await?;
    let resp = to_investor_response(created, 0);
    Ok((StatusCode::CREATED, Json(resp)))
}

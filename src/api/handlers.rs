use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::router::AppState;
use crate::application::{AppError, NewTransaction};
use crate::domain::{Transaction, TransactionType, TransactionTypeOption, UserBalance};

/// Body of `POST /transactions`. Every field is optional so that a missing
/// field can be reported with a dedicated message instead of a parse failure.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransactionBody {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub amount: Option<f64>,
    pub user_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// An application error bound to the status code of the route that raised it.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub error: AppError,
}

impl ApiError {
    fn bad_request(error: AppError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }

    fn not_found(error: AppError) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            error,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        debug!(status = %self.status, error = %self.error, "request failed");
        let body = ErrorBody {
            error: self.error.to_string(),
        };
        (self.status, Json(body)).into_response()
    }
}

/// Creates a transaction. The route rejects absent fields and unknown types
/// itself before handing the request to the service.
pub async fn create_transaction(
    State(state): State<AppState>,
    payload: Result<Json<CreateTransactionBody>, JsonRejection>,
) -> Result<(StatusCode, Json<Transaction>), ApiError> {
    let Json(payload) = payload.map_err(|rejection| {
        ApiError::bad_request(AppError::MalformedBody(rejection.body_text()))
    })?;

    let (Some(kind), Some(amount), Some(user_id)) =
        (payload.kind, payload.amount, payload.user_id)
    else {
        return Err(ApiError::bad_request(AppError::MissingFields));
    };

    if TransactionType::from_str(&kind).is_none() {
        return Err(ApiError::bad_request(AppError::InvalidType));
    }

    let transaction = state
        .service
        .create_transaction(NewTransaction::new(kind, amount, user_id))
        .await
        .map_err(ApiError::bad_request)?;

    Ok((StatusCode::CREATED, Json(transaction)))
}

pub async fn get_user_transactions(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<Transaction>>, ApiError> {
    let transactions = state
        .service
        .get_user_transactions(&user_id)
        .await
        .map_err(ApiError::not_found)?;

    Ok(Json(transactions))
}

pub async fn get_user_balance(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<UserBalance>, ApiError> {
    let balance = state
        .service
        .get_user_balance(&user_id)
        .await
        .map_err(ApiError::not_found)?;

    Ok(Json(balance))
}

pub async fn get_transaction_types(
    State(state): State<AppState>,
) -> Json<Vec<TransactionTypeOption>> {
    Json(state.service.get_transaction_types())
}

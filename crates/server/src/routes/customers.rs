use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use common::types::Message;
use service::customer::{Customer, CustomerInput};
use tracing::warn;

use crate::errors::{ApiError, MSG_BAD_BODY};
use crate::state::ServerState;

pub const MSG_DELETED: &str = "Customer deleted successfully";

/// Bodies are parsed as JSON whatever `Content-Type` the client sent.
fn body(payload: &Bytes) -> Result<CustomerInput, ApiError> {
    serde_json::from_slice(payload).map_err(|e| {
        warn!(reason = %e, "rejected customer payload");
        ApiError::bad_request(MSG_BAD_BODY)
    })
}

#[utoipa::path(
    get, path = "/customers", tag = "customers",
    responses(
        (status = 200, description = "All customers, unordered", body = [crate::openapi::CustomerDoc]),
        (status = 500, description = "Internal server error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn list_customers(State(state): State<ServerState>) -> Result<Json<Vec<Customer>>, ApiError> {
    Ok(Json(state.customers.list().await?))
}

#[utoipa::path(
    post, path = "/customers", tag = "customers",
    request_body = crate::openapi::CustomerInputDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::CustomerDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Internal server error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create_customer(
    State(state): State<ServerState>,
    payload: Bytes,
) -> Result<(StatusCode, Json<Customer>), ApiError> {
    let input = body(&payload)?;
    let created = state.customers.create(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get, path = "/customers/{customerId}", tag = "customers",
    params(("customerId" = String, Path, description = "Customer ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::CustomerDoc),
        (status = 404, description = "Customer not found", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Internal server error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get_customer(
    State(state): State<ServerState>,
    Path(customer_id): Path<String>,
) -> Result<Json<Customer>, ApiError> {
    Ok(Json(state.customers.get(&customer_id).await?))
}

#[utoipa::path(
    put, path = "/customers/{customerId}", tag = "customers",
    params(("customerId" = String, Path, description = "Customer ID")),
    request_body = crate::openapi::CustomerInputDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::CustomerDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Customer not found", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Internal server error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update_customer(
    State(state): State<ServerState>,
    Path(customer_id): Path<String>,
    payload: Bytes,
) -> Result<Json<Customer>, ApiError> {
    let input = body(&payload)?;
    Ok(Json(state.customers.update(&customer_id, input).await?))
}

#[utoipa::path(
    delete, path = "/customers/{customerId}", tag = "customers",
    params(("customerId" = String, Path, description = "Customer ID")),
    responses(
        (status = 200, description = "Deleted", body = crate::openapi::MessageDoc),
        (status = 404, description = "Customer not found", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Internal server error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete_customer(
    State(state): State<ServerState>,
    Path(customer_id): Path<String>,
) -> Result<Json<Message>, ApiError> {
    state.customers.delete(&customer_id).await?;
    Ok(Json(Message::new(MSG_DELETED)))
}

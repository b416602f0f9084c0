//! JSON Product API Handlers
//!
//! Filtered listing plus multipart create/update and delete. Mutation
//! responses carry the non-fatal warnings collected along the way.

use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    Json,
};

use super::{parse_id, AppState};
use crate::catalog::ProductFilter;
use crate::error::Result;
use crate::models::{
    DeleteResponse, HealthResponse, MutationResponse, Product, ProductForm, ProductQuery,
};

/// Handler for GET /api/products
///
/// Supports `search`, `min_price`, `max_price`, `sort` and `order` query
/// parameters; without a sort the catalog order is preserved.
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ProductQuery>,
) -> Result<Json<Vec<Product>>> {
    let filter = ProductFilter::try_from(&query)?;
    Ok(Json(state.catalog.search(&filter).await?))
}

/// Handler for GET /api/products/:id
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>> {
    Ok(Json(state.catalog.product(parse_id(&id)?).await?))
}

/// Handler for POST /api/products
///
/// Multipart form with `name`, `description`, `price` and `image` parts,
/// all required.
pub async fn create_product(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<MutationResponse>)> {
    let form = ProductForm::from_multipart(multipart).await?;
    let outcome = state.catalog.create(form.into_new()?).await?;
    Ok((
        StatusCode::CREATED,
        Json(MutationResponse::created(outcome.value, outcome.warnings)),
    ))
}

/// Handler for PUT /api/products/:id
///
/// Same form as create, but the image part may be omitted to keep the
/// current asset.
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    multipart: Multipart,
) -> Result<Json<MutationResponse>> {
    let id = parse_id(&id)?;
    let form = ProductForm::from_multipart(multipart).await?;
    let outcome = state.catalog.update(id, form.into_patch()?).await?;
    Ok(Json(MutationResponse::updated(
        outcome.value,
        outcome.warnings,
    )))
}

/// Handler for DELETE /api/products/:id
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>> {
    let outcome = state.catalog.delete(parse_id(&id)?).await?;
    Ok(Json(DeleteResponse::new(outcome.value, outcome.warnings)))
}

/// Handler for GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

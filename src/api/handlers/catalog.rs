use axum::extract::rejection::JsonRejection;
use axum::{extract::State, Json};
use tracing::info;

use crate::api::error::ApiResult;
use crate::api::handlers::signups::page_echo;
use crate::api::server::AppState;
use crate::db::read_ops::fetch_catalog;
use crate::domain::translate::translate_catalog_query;
use crate::domain::validate::{validate_catalog_query, ValidationError};
use crate::models::requests::CatalogQueryRequest;
use crate::models::responses::CatalogQueryResponse;
use crate::models::translation::format_catalog_entry;

#[tracing::instrument(skip(state, body))]
pub async fn query_catalog_handler(
    State(state): State<AppState>,
    body: Result<Json<CatalogQueryRequest>, JsonRejection>,
) -> ApiResult<Json<CatalogQueryResponse>> {
    let Json(request) = body.map_err(|_| ValidationError::InvalidRequestFormat)?;

    let query = validate_catalog_query(&request)?;
    let plan = translate_catalog_query(&query);
    let (rows, total) = fetch_catalog(&state.pool, &plan).await?;

    info!(total, returned = rows.len(), "Catalog query executed");

    let (page, page_size) = page_echo(query.page, rows.len());
    let data = rows
        .into_iter()
        .map(|row| format_catalog_entry(row, &state.vocabulary))
        .collect();

    Ok(Json(CatalogQueryResponse {
        data,
        total,
        page,
        page_size,
    }))
}

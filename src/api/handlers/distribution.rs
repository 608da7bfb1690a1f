use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use crate::api::error::ApiResult;
use crate::api::server::AppState;
use crate::db::read_ops::fetch_grouping_rows;
use crate::domain::distribution::{deity_distribution, tempo_distribution};
use crate::domain::translate::translate_distribution;
use crate::domain::validate::parse_day;
use crate::models::responses::{DeityCount, DistributionResponse, TempoCount};

#[derive(Debug, Default, Deserialize)]
pub struct DistributionParams {
    #[serde(default)]
    pub offering_on: Option<String>,
}

#[tracing::instrument(skip(state))]
pub async fn deity_distribution_handler(
    State(state): State<AppState>,
    Query(params): Query<DistributionParams>,
) -> ApiResult<Json<DistributionResponse<DeityCount>>> {
    // Date validation happens before any query is issued
    let day = params
        .offering_on
        .as_deref()
        .map(|raw| parse_day("offering_on", raw))
        .transpose()?;

    let plan = translate_distribution(day);
    let rows = fetch_grouping_rows(&state.pool, &plan, "diety").await?;

    info!(rows = rows.len(), "Computed deity distribution");

    let data = deity_distribution(&rows)
        .into_iter()
        .map(|entry| DeityCount {
            diety: entry.value,
            icon: entry.icon,
            count: entry.count,
        })
        .collect();

    Ok(Json(DistributionResponse {
        status: "ok",
        data,
        filters: json!({ "offering_on": params.offering_on }),
    }))
}

#[tracing::instrument(skip(state))]
pub async fn tempo_distribution_handler(
    State(state): State<AppState>,
    Query(params): Query<DistributionParams>,
) -> ApiResult<Json<DistributionResponse<TempoCount>>> {
    let day = params
        .offering_on
        .as_deref()
        .map(|raw| parse_day("offering_on", raw))
        .transpose()?;

    let plan = translate_distribution(day);
    let rows = fetch_grouping_rows(&state.pool, &plan, "tempo").await?;

    info!(rows = rows.len(), "Computed tempo distribution");

    let data = tempo_distribution(&rows)
        .into_iter()
        .map(|entry| TempoCount {
            tempo: entry.value,
            icon: entry.icon,
            count: entry.count,
        })
        .collect();

    Ok(Json(DistributionResponse {
        status: "ok",
        data,
        filters: json!({ "offering_on": params.offering_on }),
    }))
}

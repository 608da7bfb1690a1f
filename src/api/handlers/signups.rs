use axum::extract::rejection::JsonRejection;
use axum::{extract::State, http::StatusCode, Json};
use serde_json::json;
use tracing::info;

use crate::api::error::ApiResult;
use crate::api::server::AppState;
use crate::domain::translate::{translate_signup_query, QueryPlan};
use crate::domain::validate::{
    validate_create, validate_signup_query, PageWindow, ValidationError,
};
use crate::db::read_ops::fetch_signups;
use crate::db::write_ops::insert_signup;
use crate::models::requests::{CreateSignupRequest, SignupQueryRequest};
use crate::models::responses::{CreateSignupResponse, SignupQueryResponse};
use crate::models::translation::format_signup;

#[tracing::instrument(skip(state, body))]
pub async fn query_signups_handler(
    State(state): State<AppState>,
    body: Result<Json<SignupQueryRequest>, JsonRejection>,
) -> ApiResult<Json<SignupQueryResponse>> {
    let Json(request) = body.map_err(|_| ValidationError::InvalidRequestFormat)?;

    let query = validate_signup_query(&request, &state.vocabulary)?;
    let plan = translate_signup_query(&query);
    let (rows, total) = fetch_signups(&state.pool, &plan).await?;

    info!(total, returned = rows.len(), "Signup query executed");

    let (page, page_size) = page_echo(query.page, rows.len());
    let debug = plan_debug(&plan);
    let data = rows
        .into_iter()
        .map(|row| format_signup(row, &state.vocabulary))
        .collect();

    Ok(Json(SignupQueryResponse {
        data,
        total,
        page,
        page_size,
        debug,
    }))
}

#[tracing::instrument(skip(state, body))]
pub async fn create_signup_handler(
    State(state): State<AppState>,
    body: Result<Json<CreateSignupRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<CreateSignupResponse>)> {
    let Json(request) = body.map_err(|_| ValidationError::InvalidRequestFormat)?;

    let new_signup = validate_create(&request, &state.vocabulary)?;
    let row = insert_signup(&state.pool, &new_signup).await?;

    info!(id = %row.id, "Signup created");

    let data = format_signup(row, &state.vocabulary);
    Ok((
        StatusCode::CREATED,
        Json(CreateSignupResponse {
            data,
            debug: json!({
                "table": crate::domain::translate::SIGNUPS_TABLE,
                "signedUpForced": true,
            }),
        }),
    ))
}

/// Page numbers echoed back to the client. When no pagination was
/// requested the whole result set is one page.
pub fn page_echo(page: Option<PageWindow>, returned: usize) -> (i64, i64) {
    match page {
        Some(window) => (window.page, window.page_size),
        None => (1, returned as i64),
    }
}

pub fn plan_debug(plan: &QueryPlan) -> serde_json::Value {
    json!({
        "table": plan.table,
        "appliedFilters": plan.filters.len(),
        "dayWindows": plan.ranges.len(),
        "sort": plan
            .order
            .map(|(column, order)| format!("{} {}", column, order.sql())),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_page_echo_defaults_to_single_page() {
        assert_eq!(page_echo(None, 7), (1, 7));
        assert_eq!(
            page_echo(
                Some(PageWindow {
                    page: 4,
                    page_size: 25
                }),
                25
            ),
            (4, 25)
        );
    }

    #[test]
    fn test_plan_debug_reports_constraints() {
        let query = crate::domain::validate::SignupQuery {
            singer: Some("asha".to_string()),
            ..Default::default()
        };
        let plan = translate_signup_query(&query);
        let debug = plan_debug(&plan);

        assert_eq!(debug["table"], "bhajan_signups");
        assert_eq!(debug["appliedFilters"], 1);
        assert_eq!(debug["sort"], "created_at ASC");
    }
}

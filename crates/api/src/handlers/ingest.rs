//! Handler that seeds the `people` table from the remote catalog.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use holonet_db::repositories::PeopleRepo;
use serde::Serialize;

use crate::error::AppResult;
use crate::state::AppState;

/// The catalog page ingested on every call.
const INGEST_PAGE: u32 = 1;

#[derive(Debug, Serialize)]
pub struct IngestResponse {
    pub message: &'static str,
    /// Number of people rows inserted.
    pub count: usize,
}

/// GET /people-population
///
/// Fetches one page of people from the catalog, then inserts every name in
/// a single transaction. Any fetch failure aborts before the database is
/// touched. Repeated calls insert duplicates.
pub async fn populate_people(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let limit = state.config.catalog.page_limit;
    let names = state
        .catalog
        .fetch_people_names(INGEST_PAGE, limit)
        .await?;

    let created = PeopleRepo::create_many(&state.pool, &names).await?;

    tracing::info!(
        count = created.len(),
        page = INGEST_PAGE,
        limit,
        "People ingested from catalog",
    );

    Ok((
        StatusCode::CREATED,
        Json(IngestResponse {
            message: "People data saved successfully",
            count: created.len(),
        }),
    ))
}

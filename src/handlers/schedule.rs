use std::sync::Arc;

use axum::{extract::State, response::IntoResponse, Json};
use http::StatusCode;
use serde_json::from_str;

use crate::models::{
    error::FetchError,
    race::{Race, ScheduleResponse},
};
use crate::utils::state::AppState;

/// Single awaitable fetch of the season schedule: GET the feed, read the
/// body as text, decode the `MRData` envelope.
pub async fn fetch_schedule(
    client: &reqwest::Client,
    url: &str,
) -> Result<Vec<Race>, FetchError> {
    let res = client.get(url).send().await?;
    let body = res.text().await?;
    let doc: ScheduleResponse = from_str(&body)?;
    Ok(doc.mr_data.race_table.races)
}

pub async fn get_schedule(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, FetchError> {
    let races = fetch_schedule(&state.http_client, &state.config.schedule_url).await?;
    Ok((StatusCode::OK, Json(races)).into_response())
}

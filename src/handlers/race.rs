use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use chrono::Local;
use chrono_tz::Tz;
use http::StatusCode;
use serde_json::{json, Value};

use crate::handlers::schedule::fetch_schedule;
use crate::models::{error::FetchError, race::Race};
use crate::utils::race_utils::{
    countdown_for_date, days_left, localize_time, localize_time_in, select_upcoming,
};
use crate::utils::state::AppState;

pub async fn get_upcoming_race(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, FetchError> {
    let races = fetch_schedule(&state.http_client, &state.config.schedule_url).await?;
    let today = Local::now().date_naive();

    // No race left this season is a normal outcome, not an error.
    let Some(race) = select_upcoming(&races, today) else {
        return Ok((StatusCode::OK, Json(json!({"race": Value::Null}))).into_response());
    };

    Ok((
        StatusCode::OK,
        Json(json!({
            "race": race,
            "daysLeft": days_left(&race.date, today),
            "countdown": countdown_for_date(Some(&race.date), today),
        })),
    )
        .into_response())
}

pub async fn get_race_details(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, FetchError> {
    let races = fetch_schedule(&state.http_client, &state.config.schedule_url).await?;
    let today = Local::now().date_naive();

    let Some(race) = select_upcoming(&races, today) else {
        return Ok((StatusCode::OK, Json(json!({"race": Value::Null}))).into_response());
    };

    let mut sections = vec![
        section("General", race.info_rows()),
        section("Circuit", race.circuit.info_rows()),
    ];
    for (header, session) in [
        ("First Practice", &race.first_practice),
        ("Second Practice", &race.second_practice),
        ("Third Practice", &race.third_practice),
        ("Qualifying", &race.qualifying),
    ] {
        if let Some(session) = session {
            sections.push(section(header, session.info_rows()));
        }
    }

    Ok((
        StatusCode::OK,
        Json(json!({"race": race, "sections": sections})),
    )
        .into_response())
}

pub async fn get_race_widget(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, FetchError> {
    let races = fetch_schedule(&state.http_client, &state.config.schedule_url).await?;
    let today = Local::now().date_naive();

    let Some(race) = select_upcoming(&races, today) else {
        return Ok((StatusCode::OK, Json(json!({"race": Value::Null}))).into_response());
    };

    Ok((StatusCode::OK, Json(widget_payload(race, &params, today))).into_response())
}

fn widget_payload(race: &Race, params: &HashMap<String, String>, today: chrono::NaiveDate) -> Value {
    let start_time = match race.time.as_deref() {
        // An unknown ?tz= falls back to the server's zone.
        Some(time) => match params.get("tz").and_then(|name| name.parse::<Tz>().ok()) {
            Some(tz) => localize_time_in(time, &tz),
            None => localize_time(time),
        },
        None => String::new(),
    };

    json!({
        "raceName": race.race_name,
        "circuitName": race.circuit.circuit_name,
        "countdown": countdown_for_date(Some(&race.date), today),
        "startTime": start_time,
        "daysLeft": days_left(&race.date, today),
    })
}

fn section(header: &str, rows: Vec<(&'static str, String)>) -> Value {
    let rows: Vec<Value> = rows
        .into_iter()
        .map(|(label, value)| json!({"label": label, "value": value}))
        .collect();
    json!({"header": header, "rows": rows})
}

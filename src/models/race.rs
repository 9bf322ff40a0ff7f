use serde::{Deserialize, Serialize};

/// Envelope of the Ergast-style schedule feed:
/// `{ "MRData": { "RaceTable": { "Races": [...] } } }`.
#[derive(Debug, Deserialize)]
pub struct ScheduleResponse {
    #[serde(rename = "MRData")]
    pub mr_data: MrData,
}

#[derive(Debug, Deserialize)]
pub struct MrData {
    #[serde(rename = "RaceTable")]
    pub race_table: RaceTable,
}

#[derive(Debug, Deserialize)]
pub struct RaceTable {
    #[serde(rename = "Races")]
    pub races: Vec<Race>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Race {
    pub season: String,
    pub round: String,
    pub url: String,
    #[serde(rename = "raceName")]
    pub race_name: String,
    #[serde(rename = "Circuit")]
    pub circuit: Circuit,
    pub date: String,
    // Race time is missing from the feed for some historical seasons.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    // Sprint weekends have no third practice, so every session is optional.
    #[serde(rename = "FirstPractice", skip_serializing_if = "Option::is_none")]
    pub first_practice: Option<SessionTimes>,
    #[serde(rename = "SecondPractice", skip_serializing_if = "Option::is_none")]
    pub second_practice: Option<SessionTimes>,
    #[serde(rename = "ThirdPractice", skip_serializing_if = "Option::is_none")]
    pub third_practice: Option<SessionTimes>,
    #[serde(rename = "Qualifying", skip_serializing_if = "Option::is_none")]
    pub qualifying: Option<SessionTimes>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Circuit {
    #[serde(rename = "circuitId")]
    pub circuit_id: String,
    pub url: String,
    #[serde(rename = "circuitName")]
    pub circuit_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionTimes {
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}

impl Race {
    /// Ordered (label, value) rows for the top-level string fields, as shown
    /// in the app's general section.
    pub fn info_rows(&self) -> Vec<(&'static str, String)> {
        let mut rows = vec![
            ("season", self.season.clone()),
            ("round", self.round.clone()),
            ("url", self.url.clone()),
            ("raceName", self.race_name.clone()),
            ("date", self.date.clone()),
        ];
        if let Some(time) = &self.time {
            rows.push(("time", time.clone()));
        }
        rows
    }
}

impl Circuit {
    pub fn info_rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("circuitId", self.circuit_id.clone()),
            ("url", self.url.clone()),
            ("circuitName", self.circuit_name.clone()),
        ]
    }
}

impl SessionTimes {
    pub fn info_rows(&self) -> Vec<(&'static str, String)> {
        let mut rows = vec![("date", self.date.clone())];
        if let Some(time) = &self.time {
            rows.push(("time", time.clone()));
        }
        rows
    }
}

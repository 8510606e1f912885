use crate::factory::{MultilingualString, Project, QuantitativeValue};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieTheater {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<Project>,
    pub type_of: String,
    pub branch_code: String,
    pub name: MultilingualString,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kana_name: Option<String>,
    #[serde(default)]
    pub contains_place: Vec<ScreeningRoom>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offers: Option<MovieTheaterOffer>,
}

impl MovieTheater {
    pub fn screening_room(&self, branch_code: &str) -> Option<&ScreeningRoom> {
        self.contains_place.iter().find(|p| p.branch_code == branch_code)
    }

    /// Minutes after the start at which sales close, when the theater defines it.
    pub fn availability_ends_grace_minutes(&self) -> Option<i64> {
        self.offers
            .as_ref()
            .and_then(|o| o.availability_ends_grace_time.as_ref())
            .and_then(|g| g.value)
            .map(|seconds| (seconds as f64 / 60.0).floor() as i64)
    }

    /// Days before the event at which sales open, as a positive number.
    pub fn availability_starts_grace_days(&self) -> Option<i64> {
        self.offers
            .as_ref()
            .and_then(|o| o.availability_starts_grace_time.as_ref())
            .and_then(|g| g.value)
            .map(|days| -days)
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieTheaterOffer {
    /// Days relative to the event date, negative meaning before.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability_starts_grace_time: Option<QuantitativeValue>,
    /// Seconds relative to the event start.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability_ends_grace_time: Option<QuantitativeValue>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreeningRoom {
    pub type_of: String,
    pub branch_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<MultilingualString>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternate_name: Option<MultilingualString>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<MultilingualString>,
}

#[derive(Deserialize)]
pub struct PathParameters {
    pub id: String,
}

#[derive(Deserialize)]
pub struct EventPathParameters {
    #[serde(rename = "eventId")]
    pub event_id: String,
}

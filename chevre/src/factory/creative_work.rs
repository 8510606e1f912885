use crate::factory::Project;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<Project>,
    pub type_of: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub identifier: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// ISO 8601 duration, e.g. `PT120M`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_rating: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_published: Option<DateTime<Utc>>,
}

impl Movie {
    pub fn new(identifier: &str, name: &str) -> Movie {
        Movie {
            project: None,
            type_of: "Movie".to_string(),
            id: None,
            identifier: identifier.to_string(),
            name: Some(name.to_string()),
            duration: None,
            content_rating: None,
            date_published: None,
        }
    }
}

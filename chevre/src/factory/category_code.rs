use crate::factory::{MultilingualString, Project};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum CategorySetIdentifier {
    ContentRatingType,
    ServiceType,
    SoundFormatType,
    VideoFormatType,
}

impl fmt::Display for CategorySetIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCodeSet {
    pub type_of: String,
    pub identifier: CategorySetIdentifier,
}

/// A classification code. Box-office types are the codes of the `ServiceType` set.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCode {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub project: Project,
    pub type_of: String,
    pub code_value: String,
    pub name: MultilingualString,
    pub in_code_set: CategoryCodeSet,
}

impl CategoryCode {
    pub fn service_type(project: Project, code_value: &str, name: &str) -> CategoryCode {
        CategoryCode {
            id: None,
            project,
            type_of: "CategoryCode".to_string(),
            code_value: code_value.to_string(),
            name: MultilingualString::new(name, ""),
            in_code_set: CategoryCodeSet {
                type_of: "CategoryCodeSet".to_string(),
                identifier: CategorySetIdentifier::ServiceType,
            },
        }
    }
}

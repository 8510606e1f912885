use serde::{Deserialize, Serialize};

pub const PRICE_CURRENCY_JPY: &str = "JPY";
/// UN/CEFACT code for "piece".
pub const UNIT_CODE_C62: &str = "C62";

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct MultilingualString {
    #[serde(default)]
    pub ja: String,
    #[serde(default)]
    pub en: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kr: Option<String>,
}

impl MultilingualString {
    pub fn new(ja: &str, en: &str) -> MultilingualString {
        MultilingualString {
            ja: ja.to_string(),
            en: en.to_string(),
            kr: None,
        }
    }

    /// All three languages present, `kr` empty. The event endpoints expect this shape.
    pub fn with_empty_kr(ja: &str, en: &str) -> MultilingualString {
        MultilingualString {
            ja: ja.to_string(),
            en: en.to_string(),
            kr: Some(String::new()),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub type_of: String,
    pub id: String,
}

impl Project {
    pub fn new(id: &str) -> Project {
        Project {
            type_of: "Project".to_string(),
            id: id.to_string(),
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuantitativeValue {
    pub type_of: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_value: Option<i64>,
}

impl QuantitativeValue {
    pub fn new(value: Option<i64>, max_value: Option<i64>, unit_code: Option<&str>) -> QuantitativeValue {
        QuantitativeValue {
            type_of: "QuantitativeValue".to_string(),
            unit_code: unit_code.map(|c| c.to_string()),
            value,
            max_value,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct PropertyValue {
    pub name: String,
    pub value: String,
}

impl PropertyValue {
    pub fn new(name: &str, value: &str) -> PropertyValue {
        PropertyValue {
            name: name.to_string(),
            value: value.to_string(),
        }
    }
}

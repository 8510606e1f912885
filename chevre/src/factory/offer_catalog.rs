use crate::factory::{MultilingualString, Project};
use serde::{Deserialize, Serialize};

pub const ITEM_OFFERED_EVENT_SERVICE: &str = "EventService";

/// Ticket type group. Bundles the ticket types that can be sold for an event.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferCatalog {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<Project>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    pub name: MultilingualString,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<MultilingualString>,
    #[serde(default)]
    pub item_list_element: Vec<ItemListElement>,
    pub item_offered: OfferCatalogItemOffered,
}

impl OfferCatalog {
    pub fn service_type_code(&self) -> Option<&str> {
        self.item_offered
            .service_type
            .as_ref()
            .map(|s| s.code_value.as_str())
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemListElement {
    pub type_of: String,
    pub id: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferCatalogItemOffered {
    pub type_of: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_type: Option<ServiceTypeReference>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceTypeReference {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_of: Option<String>,
    pub code_value: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketType {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<Project>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    pub name: MultilingualString,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_specification: Option<TicketTypePriceSpecification>,
}

impl TicketType {
    pub fn price(&self) -> Option<i64> {
        self.price_specification.as_ref().map(|p| p.price)
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketTypePriceSpecification {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_of: Option<String>,
    pub price: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_currency: Option<String>,
}

//! Search conditions for list endpoints. Each flattens into the bracketed
//! query-string form the remote API expects.

use crate::factory::{CategorySetIdentifier, EventStatusType, PropertyValue};
use crate::util::QueryParams;
use chrono::{DateTime, Utc};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CategoryCodeSearchConditions {
    pub limit: Option<u32>,
    pub page: Option<u32>,
    pub project_id: Option<String>,
    pub in_code_set: Option<CategorySetIdentifier>,
    pub code_value: Option<String>,
    /// Partial match on the Japanese name.
    pub name: Option<String>,
}

impl CategoryCodeSearchConditions {
    pub(crate) fn to_query(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.push_opt("limit", self.limit);
        params.push_opt("page", self.page);
        params.push_opt("project[id][$eq]", self.project_id.as_ref());
        params.push_opt("inCodeSet[identifier][$eq]", self.in_code_set);
        params.push_opt("codeValue[$eq]", self.code_value.as_ref());
        params.push_opt("name[$regex]", self.name.as_ref());
        params
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct EventSearchConditions {
    pub limit: Option<u32>,
    pub page: Option<u32>,
    pub project_ids: Vec<String>,
    pub name: Option<String>,
    pub event_statuses: Vec<EventStatusType>,
    pub in_session_from: Option<DateTime<Utc>>,
    pub in_session_through: Option<DateTime<Utc>>,
    pub end_from: Option<DateTime<Utc>>,
    pub ids: Vec<String>,
    pub location_branch_codes: Vec<String>,
    pub super_event_ids: Vec<String>,
    pub super_event_location_branch_codes: Vec<String>,
    pub work_performed_identifiers: Vec<String>,
}

impl EventSearchConditions {
    pub(crate) fn to_query(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.push_opt("limit", self.limit);
        params.push_opt("page", self.page);
        params.push_all("project[ids]", &self.project_ids);
        params.push_opt("name", self.name.as_ref());
        params.push_all("eventStatuses", &self.event_statuses);
        params.push_date("inSessionFrom", self.in_session_from);
        params.push_date("inSessionThrough", self.in_session_through);
        params.push_date("endFrom", self.end_from);
        params.push_all("ids", &self.ids);
        params.push_all("location[branchCodes]", &self.location_branch_codes);
        params.push_all("superEvent[ids]", &self.super_event_ids);
        params.push_all(
            "superEvent[locationBranchCodes]",
            &self.super_event_location_branch_codes,
        );
        params.push_all("workPerformed[identifiers]", &self.work_performed_identifiers);
        params
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MovieTheaterSearchConditions {
    pub limit: Option<u32>,
    pub page: Option<u32>,
    pub project_ids: Vec<String>,
    pub branch_codes: Vec<String>,
    pub name: Option<String>,
}

impl MovieTheaterSearchConditions {
    pub(crate) fn to_query(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.push_opt("limit", self.limit);
        params.push_opt("page", self.page);
        params.push_all("project[ids]", &self.project_ids);
        params.push_all("branchCodes", &self.branch_codes);
        params.push_opt("name", self.name.as_ref());
        params
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MovieSearchConditions {
    pub limit: Option<u32>,
    pub page: Option<u32>,
    pub project_ids: Vec<String>,
    pub identifier: Option<String>,
    /// Only movies still on offer at this instant.
    pub available_from: Option<DateTime<Utc>>,
    pub sort_by_date_published_desc: bool,
}

impl MovieSearchConditions {
    pub(crate) fn to_query(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.push_opt("limit", self.limit);
        params.push_opt("page", self.page);
        params.push_all("project[ids]", &self.project_ids);
        params.push_opt("identifier", self.identifier.as_ref());
        params.push_date("offers[availableFrom]", self.available_from);
        if self.sort_by_date_published_desc {
            params.push("sort[datePublished]", -1);
        }
        params
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct OfferCatalogSearchConditions {
    pub limit: Option<u32>,
    pub page: Option<u32>,
    pub project_id: Option<String>,
    pub item_offered_type_of: Option<String>,
    pub name: Option<String>,
}

impl OfferCatalogSearchConditions {
    pub(crate) fn to_query(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.push_opt("limit", self.limit);
        params.push_opt("page", self.page);
        params.push_opt("project[id][$eq]", self.project_id.as_ref());
        params.push_opt("itemOffered[typeOf][$eq]", self.item_offered_type_of.as_ref());
        params.push_opt("name", self.name.as_ref());
        params
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TicketTypeSearchConditions {
    pub limit: Option<u32>,
    pub page: Option<u32>,
    pub project_id: Option<String>,
    pub price: Option<i64>,
}

impl TicketTypeSearchConditions {
    pub(crate) fn to_query(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.push_opt("limit", self.limit);
        params.push_opt("page", self.page);
        params.push_opt("project[id][$eq]", self.project_id.as_ref());
        params.push_opt("priceSpecification[minPrice]", self.price);
        params.push_opt("priceSpecification[maxPrice]", self.price);
        params
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct OrderSearchConditions {
    pub limit: Option<u32>,
    pub page: Option<u32>,
    pub order_date_from: Option<DateTime<Utc>>,
    pub order_date_through: Option<DateTime<Utc>>,
    pub customer_telephone: Option<String>,
    pub customer_identifiers: Vec<PropertyValue>,
    pub confirmation_numbers: Vec<String>,
    pub event_start_from: Option<DateTime<Utc>>,
    pub event_start_through: Option<DateTime<Utc>>,
    pub super_event_ids: Vec<String>,
    pub super_event_location_branch_codes: Vec<String>,
}

impl OrderSearchConditions {
    pub(crate) fn to_query(&self) -> QueryParams {
        const RESERVATION_FOR: &str = "acceptedOffers[itemOffered][reservationFor]";

        let mut params = QueryParams::new();
        params.push_opt("limit", self.limit);
        params.push_opt("page", self.page);
        params.push_date("orderDateFrom", self.order_date_from);
        params.push_date("orderDateThrough", self.order_date_through);
        params.push_opt("customer[telephone]", self.customer_telephone.as_ref());
        for (index, identifier) in self.customer_identifiers.iter().enumerate() {
            params.push(&format!("customer[identifiers][{}][name]", index), &identifier.name);
            params.push(&format!("customer[identifiers][{}][value]", index), &identifier.value);
        }
        params.push_all("confirmationNumbers", &self.confirmation_numbers);
        params.push_date(&format!("{}[startFrom]", RESERVATION_FOR), self.event_start_from);
        params.push_date(&format!("{}[startThrough]", RESERVATION_FOR), self.event_start_through);
        params.push_all(&format!("{}[superEvent][ids]", RESERVATION_FOR), &self.super_event_ids);
        params.push_all(
            &format!("{}[superEvent][location][branchCodes]", RESERVATION_FOR),
            &self.super_event_location_branch_codes,
        );
        params
    }
}

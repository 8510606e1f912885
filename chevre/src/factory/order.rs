use crate::factory::{MultilingualString, PropertyValue, QuantitativeValue};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const RESERVATION_TYPE_EVENT_RESERVATION: &str = "EventReservation";
pub const PRICE_SPECIFICATION_UNIT_PRICE: &str = "UnitPriceSpecification";

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub order_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmation_number: Option<String>,
    pub order_date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<i64>,
    pub customer: Customer,
    #[serde(default)]
    pub payment_methods: Vec<OrderPaymentMethod>,
    #[serde(default)]
    pub accepted_offers: Vec<AcceptedOffer>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telephone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default)]
    pub identifier: Vec<PropertyValue>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPaymentMethod {
    pub type_of: String,
    pub payment_method_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AcceptedOffer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_specification: Option<CompoundPriceSpecification>,
    pub item_offered: OfferedReservation,
}

impl AcceptedOffer {
    pub fn unit_price_component(&self) -> Option<&PriceComponent> {
        self.price_specification.as_ref().and_then(|spec| {
            spec.price_component
                .iter()
                .find(|c| c.type_of == PRICE_SPECIFICATION_UNIT_PRICE)
        })
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompoundPriceSpecification {
    #[serde(default)]
    pub price_component: Vec<PriceComponent>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceComponent {
    pub type_of: String,
    pub price: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_quantity: Option<QuantitativeValue>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferedReservation {
    pub type_of: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reserved_ticket: Option<ReservedTicket>,
}

impl OfferedReservation {
    pub fn is_event_reservation(&self) -> bool {
        self.type_of == RESERVATION_TYPE_EVENT_RESERVATION
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservedTicket {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticketed_seat: Option<Seat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticket_type: Option<ReservedTicketType>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Seat {
    pub seat_number: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ReservedTicketType {
    pub name: MultilingualString,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderReference {
    pub order_number: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ReturnOrderObject {
    pub order: OrderReference,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct StartReturnOrderParams {
    pub expires: DateTime<Utc>,
    pub object: ReturnOrderObject,
}

impl StartReturnOrderParams {
    pub fn new(order_number: &str, expires: DateTime<Utc>) -> StartReturnOrderParams {
        StartReturnOrderParams {
            expires,
            object: ReturnOrderObject {
                order: OrderReference {
                    order_number: order_number.to_string(),
                },
            },
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnOrderTransaction {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_of: Option<String>,
    pub expires: DateTime<Utc>,
}

use crate::factory::*;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const ADDITIONAL_PROPERTY_SIGNAGE_DISPLAY_NAME: &str = "signageDisplayName";
pub const ADDITIONAL_PROPERTY_SIGNAGE_DISPLAY_SUBTITLE_NAME: &str = "signageDislaySubtitleName";
pub const ADDITIONAL_PROPERTY_SUMMARY_START_DAY: &str = "summaryStartDay";

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum EventType {
    ScreeningEvent,
    ScreeningEventSeries,
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum EventStatusType {
    EventCancelled,
    EventPostponed,
    EventRescheduled,
    EventScheduled,
}

impl fmt::Display for EventStatusType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Language {
    pub type_of: String,
    pub name: String,
}

impl Language {
    pub fn japanese() -> Language {
        Language {
            type_of: "Language".to_string(),
            name: "Japanese".to_string(),
        }
    }
}

/// Video or sound format, stored with the format code as both type and name.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatType {
    pub type_of: String,
    pub name: String,
}

impl FormatType {
    pub fn new(code: &str) -> FormatType {
        FormatType {
            type_of: code.to_string(),
            name: code.to_string(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventLocation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<Project>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub type_of: String,
    pub branch_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<MultilingualString>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kana_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternate_name: Option<MultilingualString>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<MultilingualString>,
}

impl EventLocation {
    pub fn from_movie_theater(project: &Project, theater: &MovieTheater) -> EventLocation {
        EventLocation {
            project: Some(project.clone()),
            id: Some(theater.id.clone()),
            type_of: theater.type_of.clone(),
            branch_code: theater.branch_code.clone(),
            name: Some(theater.name.clone()),
            kana_name: theater.kana_name.clone(),
            alternate_name: None,
            address: None,
        }
    }

    pub fn from_screening_room(project: &Project, room: &ScreeningRoom) -> EventLocation {
        EventLocation {
            project: Some(project.clone()),
            id: None,
            type_of: room.type_of.clone(),
            branch_code: room.branch_code.clone(),
            name: room.name.clone(),
            kana_name: None,
            alternate_name: room.alternate_name.clone(),
            address: room.address.clone(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreeningEventSeriesOffer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<Project>,
    pub type_of: String,
    pub price_currency: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accepted_payment_method: Option<Vec<PaymentMethodType>>,
}

/// Fields removed from a stored record on update.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnsetFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle_language: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dub_language: Option<u8>,
}

impl UnsetFields {
    pub fn is_empty(&self) -> bool {
        self.subtitle_language.is_none() && self.dub_language.is_none()
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreeningEventSeriesAttributes {
    pub project: Project,
    pub type_of: EventType,
    pub name: MultilingualString,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kana_name: Option<String>,
    pub location: EventLocation,
    #[serde(default)]
    pub video_format: Vec<FormatType>,
    #[serde(default)]
    pub sound_format: Vec<FormatType>,
    pub work_performed: Movie,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
    pub event_status: EventStatusType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headline: Option<MultilingualString>,
    #[serde(default)]
    pub additional_property: Vec<PropertyValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offers: Option<ScreeningEventSeriesOffer>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<MultilingualString>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle_language: Option<Language>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dub_language: Option<Language>,
    #[serde(rename = "$unset", default, skip_serializing_if = "Option::is_none")]
    pub unset: Option<UnsetFields>,
}

impl ScreeningEventSeriesAttributes {
    pub fn additional_property(&self, name: &str) -> Option<&str> {
        self.additional_property
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.value.as_str())
    }

    /// False only when an explicit payment method list leaves out MovieTicket.
    pub fn accepts_movie_ticket(&self) -> bool {
        match self.offers.as_ref().and_then(|o| o.accepted_payment_method.as_ref()) {
            Some(methods) => methods.contains(&PaymentMethodType::MovieTicket),
            None => true,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ScreeningEventSeries {
    pub id: String,
    #[serde(flatten)]
    pub attributes: ScreeningEventSeriesAttributes,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketedSeatSpecification {
    pub type_of: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservedTicketSpecification {
    pub type_of: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticketed_seat: Option<TicketedSeatSpecification>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceOutput {
    pub type_of: String,
    pub reserved_ticket: ReservedTicketSpecification,
}

impl ServiceOutput {
    /// Reservations for screening events always come with an assigned seat.
    pub fn seated_reservation() -> ServiceOutput {
        ServiceOutput {
            type_of: "EventReservation".to_string(),
            reserved_ticket: ReservedTicketSpecification {
                type_of: "Ticket".to_string(),
                ticketed_seat: Some(TicketedSeatSpecification {
                    type_of: "Seat".to_string(),
                }),
            },
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventItemOffered {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_type: Option<CategoryCode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_output: Option<ServiceOutput>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreeningEventOffer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<Project>,
    /// Id of the offer catalog the event sells from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<MultilingualString>,
    pub type_of: String,
    pub price_currency: String,
    pub availability_ends: DateTime<Utc>,
    pub availability_starts: DateTime<Utc>,
    pub eligible_quantity: QuantitativeValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_offered: Option<EventItemOffered>,
    pub valid_from: DateTime<Utc>,
    pub valid_through: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accepted_payment_method: Option<Vec<PaymentMethodType>>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreeningEventAttributes {
    pub project: Project,
    pub type_of: EventType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub door_time: Option<DateTime<Utc>>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_performed: Option<Movie>,
    pub location: EventLocation,
    pub super_event: ScreeningEventSeries,
    pub name: MultilingualString,
    pub event_status: EventStatusType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offers: Option<ScreeningEventOffer>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ScreeningEvent {
    pub id: String,
    #[serde(flatten)]
    pub attributes: ScreeningEventAttributes,
}

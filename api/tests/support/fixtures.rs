use chevre::factory::*;
use chevre::ChevreTestClient;
use chrono::prelude::*;
use chrono::Duration;

pub const PROJECT_ID: &str = "cinerino";
pub const THEATER_BRANCH_CODE: &str = "118";
pub const SCREEN_BRANCH_CODE: &str = "10";
pub const MOVIE_IDENTIFIER: &str = "MV0001";
pub const SERVICE_TYPE_CODE: &str = "0001";
pub const CATALOG_ID: &str = "catalog-1";

pub fn project() -> Project {
    Project::new(PROJECT_ID)
}

fn screen(branch_code: &str, name: Option<&str>) -> ScreeningRoom {
    ScreeningRoom {
        type_of: "ScreeningRoom".to_string(),
        branch_code: branch_code.to_string(),
        name: name.map(|n| MultilingualString::new(n, "")),
        alternate_name: None,
        address: None,
    }
}

/// Sales open 3 days ahead and close 20 minutes after the start.
pub fn movie_theater() -> MovieTheater {
    MovieTheater {
        id: "theater-118".to_string(),
        project: Some(project()),
        type_of: "MovieTheater".to_string(),
        branch_code: THEATER_BRANCH_CODE.to_string(),
        name: MultilingualString::new("シネマサンシャイン池袋", "Cinema Sunshine Ikebukuro"),
        kana_name: None,
        contains_place: vec![
            screen(SCREEN_BRANCH_CODE, Some("シアター2")),
            screen("20", Some("シアター1")),
            screen("30", None),
        ],
        offers: Some(MovieTheaterOffer {
            availability_starts_grace_time: Some(QuantitativeValue::new(Some(-3), None, Some("DAY"))),
            availability_ends_grace_time: Some(QuantitativeValue::new(Some(1200), None, Some("SEC"))),
        }),
    }
}

pub fn movie() -> Movie {
    Movie {
        duration: Some("PT2H".to_string()),
        content_rating: Some("PG12".to_string()),
        date_published: Some(Utc.ymd(2020, 1, 10).and_hms(0, 0, 0)),
        ..Movie::new(MOVIE_IDENTIFIER, "天気の子")
    }
}

pub fn service_type(code_value: &str, name: &str) -> CategoryCode {
    CategoryCode::service_type(project(), code_value, name)
}

pub fn offer_catalog(id: &str, name: &str, service_type_code: Option<&str>) -> OfferCatalog {
    OfferCatalog {
        id: id.to_string(),
        project: Some(project()),
        identifier: None,
        name: MultilingualString::new(name, ""),
        description: None,
        item_list_element: vec![],
        item_offered: OfferCatalogItemOffered {
            type_of: ITEM_OFFERED_EVENT_SERVICE.to_string(),
            service_type: service_type_code.map(|code| ServiceTypeReference {
                type_of: None,
                code_value: code.to_string(),
            }),
        },
    }
}

pub fn ticket_type(id: &str, name: &str, price: i64) -> TicketType {
    TicketType {
        id: id.to_string(),
        project: Some(project()),
        identifier: Some(id.to_string()),
        name: MultilingualString::new(name, ""),
        price_specification: Some(TicketTypePriceSpecification {
            type_of: None,
            price,
            price_currency: Some(PRICE_CURRENCY_JPY.to_string()),
        }),
    }
}

/// A subtitled series screened from `start` until the day before `end`.
pub fn screening_event_series(id: &str, name: &str, start: NaiveDate, end: NaiveDate) -> ScreeningEventSeries {
    let theater = movie_theater();
    let movie = movie();
    ScreeningEventSeries {
        id: id.to_string(),
        attributes: ScreeningEventSeriesAttributes {
            project: project(),
            type_of: EventType::ScreeningEventSeries,
            name: MultilingualString::with_empty_kr(name, ""),
            kana_name: None,
            location: EventLocation::from_movie_theater(&project(), &theater),
            video_format: vec![FormatType::new("2D"), FormatType::new("IMAX")],
            sound_format: vec![],
            duration: movie.duration.clone(),
            work_performed: movie,
            start_date: Some(jst_midnight(start)),
            end_date: Some(jst_midnight(end)),
            event_status: EventStatusType::EventScheduled,
            headline: None,
            additional_property: vec![PropertyValue::new(ADDITIONAL_PROPERTY_SUMMARY_START_DAY, "20200110")],
            offers: None,
            description: None,
            subtitle_language: Some(Language::japanese()),
            dub_language: None,
            unset: None,
        },
    }
}

pub fn jst_midnight(day: NaiveDate) -> DateTime<Utc> {
    DateTime::<Utc>::from_utc(day.and_hms(0, 0, 0) - Duration::hours(9), Utc)
}

pub fn screening_event(
    id: &str,
    series: &ScreeningEventSeries,
    screen_branch_code: &str,
    start: DateTime<Utc>,
) -> ScreeningEvent {
    let room = screen(screen_branch_code, Some(screen_branch_code));
    ScreeningEvent {
        id: id.to_string(),
        attributes: ScreeningEventAttributes {
            project: project(),
            type_of: EventType::ScreeningEvent,
            door_time: Some(start - Duration::minutes(10)),
            start_date: start,
            end_date: start + Duration::hours(2),
            work_performed: Some(series.attributes.work_performed.clone()),
            location: EventLocation::from_screening_room(&project(), &room),
            super_event: series.clone(),
            name: series.attributes.name.clone(),
            event_status: EventStatusType::EventScheduled,
            offers: None,
        },
    }
}

pub fn order(order_number: &str) -> Order {
    serde_json::from_value(json!({
        "orderNumber": order_number,
        "confirmationNumber": "12345",
        "orderDate": "2020-03-30T03:00:00Z",
        "customer": {"telephone": "+819012345678"},
        "paymentMethods": [
            {"typeOf": "CreditCard", "paymentMethodId": "PM-1"},
            {"typeOf": "MovieTicket", "paymentMethodId": "PM-2"}
        ],
        "acceptedOffers": [{
            "priceSpecification": {"priceComponent": [
                {"typeOf": "UnitPriceSpecification", "price": 1800,
                 "referenceQuantity": {"typeOf": "QuantitativeValue", "value": 1}}
            ]},
            "itemOffered": {"typeOf": "EventReservation", "reservedTicket": {
                "ticketedSeat": {"seatNumber": "B-5"},
                "ticketType": {"name": {"ja": "一般", "en": "Adult"}}
            }}
        }]
    }))
    .unwrap()
}

/// A theater, a movie, one box office type and a ticket type group selling it.
pub fn seed_master_data(chevre: &ChevreTestClient) {
    chevre.add_movie_theater(movie_theater());
    chevre.add_movie(movie());
    chevre.add_category_code(service_type(SERVICE_TYPE_CODE, "通常"));
    chevre.add_offer_catalog(offer_catalog(CATALOG_ID, "通常料金", Some(SERVICE_TYPE_CODE)));
}

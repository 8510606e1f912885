use crate::auth::user::AdminUser;
use crate::controllers::movie_theaters::{all_movie_theaters, find_by_branch_code};
use crate::controllers::ticket_type_groups::event_service_catalogs;
use crate::errors::*;
use crate::extractors::*;
use crate::models::*;
use crate::server::AppState;
use crate::utils::dates;
use crate::utils::logging::log_request;
use actix_web::{
    web::{Data, Path, Query},
    HttpResponse,
};
use chevre::factory::*;
use chevre::search::{CategoryCodeSearchConditions, EventSearchConditions};
use chrono::prelude::*;
use chrono::Duration;
use log::Level;
use std::collections::HashMap;

const EVENT_PAGE_LIMIT: u32 = 100;

/// What the remote API needs to sell one event: the ticket type group and its box office type.
struct SalesSetting {
    catalog: OfferCatalog,
    service_type: CategoryCode,
}

fn event_attributes(
    project: &Project,
    series: &ScreeningEventSeries,
    room: &ScreeningRoom,
    scheduled: &ScheduledEvent,
    sales: &SalesSetting,
    max_seat_number: Option<i64>,
) -> ScreeningEventAttributes {
    ScreeningEventAttributes {
        project: project.clone(),
        type_of: EventType::ScreeningEvent,
        door_time: Some(scheduled.door_time),
        start_date: scheduled.start_date,
        end_date: scheduled.end_date,
        work_performed: Some(series.attributes.work_performed.clone()),
        location: EventLocation::from_screening_room(project, room),
        super_event: series.clone(),
        name: series.attributes.name.clone(),
        event_status: EventStatusType::EventScheduled,
        offers: Some(ScreeningEventOffer {
            project: Some(project.clone()),
            id: Some(sales.catalog.id.clone()),
            name: Some(sales.catalog.name.clone()),
            type_of: "Offer".to_string(),
            price_currency: PRICE_CURRENCY_JPY.to_string(),
            availability_ends: scheduled.availability_ends,
            availability_starts: scheduled.availability_starts,
            eligible_quantity: QuantitativeValue::new(Some(1), max_seat_number, Some(UNIT_CODE_C62)),
            item_offered: Some(EventItemOffered {
                service_type: Some(sales.service_type.clone()),
                service_output: Some(ServiceOutput::seated_reservation()),
            }),
            valid_from: scheduled.valid_from,
            valid_through: scheduled.valid_through,
            accepted_payment_method: scheduled.accepted_payment_method.clone(),
        }),
    }
}

async fn search_service_types(state: &AppState, code_value: String) -> Result<Vec<CategoryCode>, ApiError> {
    let result = state
        .config
        .chevre_client
        .search_category_codes(&CategoryCodeSearchConditions {
            limit: Some(1),
            project_id: Some(state.config.project_id.clone()),
            in_code_set: Some(CategorySetIdentifier::ServiceType),
            code_value: Some(code_value),
            ..Default::default()
        })
        .await?;
    Ok(result.data)
}

fn sales_setting(catalog: OfferCatalog, service_types: &[CategoryCode]) -> Result<SalesSetting, ApiError> {
    let service_type = catalog
        .service_type_code()
        .and_then(|code| service_types.iter().find(|s| s.code_value == code))
        .cloned()
        .ok_or_else(|| ApplicationError::unprocessable("The ticket type group has no box office type"))?;
    Ok(SalesSetting { catalog, service_type })
}

/// Looks the ticket type group up by id and pairs it with its box office type.
async fn find_sales_setting(state: &AppState, catalog_id: &str) -> Result<SalesSetting, ApiError> {
    let catalog = state.config.chevre_client.find_offer_catalog(catalog_id).await?;
    let code_value = catalog
        .service_type_code()
        .ok_or_else(|| ApplicationError::unprocessable("The ticket type group has no box office type"))?
        .to_string();
    let service_types = search_service_types(state, code_value).await?;
    if service_types.is_empty() {
        return Err(ApplicationError::not_found("Box office type not found").into());
    }
    sales_setting(catalog, &service_types)
}

fn named_screen<'a>(theater: &'a MovieTheater, branch_code: &str) -> Result<&'a ScreeningRoom, ApiError> {
    let room = theater
        .screening_room(branch_code)
        .ok_or_else(|| ApplicationError::not_found("Screen not found"))?;
    if room.name.is_none() {
        return Err(ApplicationError::unprocessable("The screen has no name registered").into());
    }
    Ok(room)
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

pub async fn index((state, _user): (Data<AppState>, AdminUser)) -> Result<HttpResponse, ApiError> {
    let movie_theaters = all_movie_theaters(&state).await?;
    if movie_theaters.is_empty() {
        return Err(ApplicationError::not_found("No movie theater is registered").into());
    }
    let ticket_groups = event_service_catalogs(&state).await?;
    Ok(HttpResponse::Ok().json(json!({
        "movieTheaters": movie_theaters,
        "ticketGroups": ticket_groups
    })))
}

pub async fn search(
    (state, query, _user): (Data<AppState>, Query<ScreeningEventSearchParameters>, AdminUser),
) -> Result<HttpResponse, ApiError> {
    query.validate_record()?;
    let theater = find_by_branch_code(&state, &query.theater).await?;
    let day = dates::parse_date(&query.date)?;
    let days = query.days.unwrap_or(1);

    let mut conditions = EventSearchConditions {
        limit: Some(EVENT_PAGE_LIMIT),
        page: Some(1),
        project_ids: vec![state.config.project_id.clone()],
        event_statuses: vec![EventStatusType::EventScheduled],
        in_session_from: Some(dates::start_of_day(day)),
        in_session_through: Some(dates::start_of_day(day) + Duration::days(days)),
        super_event_location_branch_codes: vec![theater.branch_code.clone()],
        ..Default::default()
    };
    let client = &state.config.chevre_client;
    let first_page = client.search_screening_events(&conditions).await?.data;

    let (performances, screens) = match non_empty(&query.screen) {
        Some(screen) => {
            let full_page = first_page.len() == EVENT_PAGE_LIMIT as usize;
            let mut performances: Vec<ScreeningEvent> = first_page
                .into_iter()
                .filter(|e| e.attributes.location.branch_code == screen)
                .collect();
            if full_page {
                conditions.page = Some(2);
                let second_page = client.search_screening_events(&conditions).await?.data;
                performances.extend(
                    second_page
                        .into_iter()
                        .filter(|e| e.attributes.location.branch_code == screen),
                );
            }
            let screens: Vec<ScreeningRoom> = theater
                .contains_place
                .into_iter()
                .filter(|room| room.branch_code == screen)
                .collect();
            (performances, screens)
        }
        None => (first_page, theater.contains_place),
    };
    let ticket_groups = event_service_catalogs(&state).await?;

    Ok(HttpResponse::Ok().json(json!({
        "validation": null,
        "error": null,
        "performances": performances,
        "screens": screens,
        "ticketGroups": ticket_groups
    })))
}

pub async fn search_screening_event_series(
    (state, query, _user): (Data<AppState>, Query<ScreeningEventSeriesLookupParameters>, AdminUser),
) -> Result<HttpResponse, ApiError> {
    let result = state
        .config
        .chevre_client
        .search_screening_event_series(&EventSearchConditions {
            limit: Some(EVENT_PAGE_LIMIT),
            project_ids: vec![state.config.project_id.clone()],
            location_branch_codes: vec![query.movie_theater_branch_code.clone()],
            work_performed_identifiers: vec![query.identifier.clone()],
            ..Default::default()
        })
        .await?;
    Ok(HttpResponse::Ok().json(json!({
        "validation": null,
        "error": null,
        "screeningEventSeries": result.data
    })))
}

pub async fn regist(
    (state, json, user): (Data<AppState>, Json<ScreeningEventRegistration>, AdminUser),
) -> Result<HttpResponse, ApiError> {
    let request = json.into_inner();
    request.validate_record()?;

    let client = &state.config.chevre_client;
    let project = Project::new(&state.config.project_id);
    let series = client.find_screening_event_series(&request.screening_event_id).await?;
    let theater = find_by_branch_code(&state, &request.theater).await?;
    let room = named_screen(&theater, &request.screen)?;

    let mut time_slots = Vec::with_capacity(request.time_data.len());
    let mut resolved: HashMap<&str, SalesSetting> = HashMap::new();
    for (index, time) in request.time_data.iter().enumerate() {
        let ticket_type_group_id = request
            .ticket_data
            .get(index)
            .ok_or_else(|| ApplicationError::unprocessable("Select a ticket type group for every showtime"))?;
        if !resolved.contains_key(ticket_type_group_id.as_str()) {
            let setting = find_sales_setting(&state, ticket_type_group_id).await?;
            resolved.insert(ticket_type_group_id.as_str(), setting);
        }
        time_slots.push(TimeSlot {
            door_time: dates::parse_time(&time.door_time)?,
            start_time: dates::parse_time(&time.start_time)?,
            end_time: dates::parse_time(&time.end_time)?,
            ticket_type_group_id: ticket_type_group_id.clone(),
            exclude_movie_ticket: request.excludes_movie_ticket(index),
        });
    }

    let start_date = dates::parse_date(&request.start_date)?;
    let online_display_start_date = match non_empty(&request.online_display_start_date) {
        Some(day) => dates::parse_date(day)?,
        None => start_date,
    };
    let schedule = Schedule {
        start_date,
        end_date: dates::parse_date(&request.to_date)?,
        weekdays: request.week_day_data.clone(),
        time_slots,
        offers_valid_after_start_in_minutes: request
            .end_sale_time_after_screening
            .unwrap_or(state.config.default_offers_valid_after_start_in_minutes),
        sale_start_days: request.sale_start_days.unwrap_or(0),
        online_display_start_date,
    };

    let sales_settings: Vec<&SalesSetting> = schedule
        .time_slots
        .iter()
        .map(|slot| &resolved[slot.ticket_type_group_id.as_str()])
        .collect();
    let attributes: Vec<ScreeningEventAttributes> = schedule
        .events()
        .iter()
        .map(|event| {
            event_attributes(
                &project,
                &series,
                room,
                event,
                sales_settings[event.slot_index],
                request.max_seat_number,
            )
        })
        .collect();
    if !attributes.is_empty() {
        client.create_screening_events(&attributes).await?;
    }
    log_request(
        Level::Info,
        "api::screening_events",
        "Screening events registered",
        &user,
        json!({"screening_event_series_id": series.id, "count": attributes.len()}),
    );
    Ok(AjaxResponse::created())
}

pub async fn update(
    (state, path, json, user): (Data<AppState>, Path<EventPathParameters>, Json<ScreeningEventUpdate>, AdminUser),
) -> Result<HttpResponse, ApiError> {
    let request = json.into_inner();
    request.validate_record()?;

    let client = &state.config.chevre_client;
    let project = Project::new(&state.config.project_id);
    let series = client.find_screening_event_series(&request.screening_event_id).await?;
    let branch_code = if request.theater.trim().is_empty() {
        series.attributes.location.branch_code.clone()
    } else {
        request.theater.clone()
    };
    let theater = find_by_branch_code(&state, &branch_code).await?;
    let room = named_screen(&theater, &request.screen)?;

    let sales = find_sales_setting(&state, &request.ticket_type_group).await?;

    let day = dates::parse_date(&request.day)?;
    let start_date = dates::jst_datetime(day, dates::parse_time(&request.start_time)?);
    let offset = request
        .end_sale_time_after_screening
        .or_else(|| theater.availability_ends_grace_minutes())
        .unwrap_or(state.config.default_offers_valid_after_start_in_minutes);
    let valid_from = match non_empty(&request.sale_start_date) {
        Some(sale_start_date) => {
            let time = match non_empty(&request.sale_start_time) {
                Some(time) => dates::parse_time(time)?,
                None => NaiveTime::from_hms(0, 0, 0),
            };
            dates::jst_datetime(dates::parse_date(sale_start_date)?, time)
        }
        None => dates::start_of_day(day),
    };
    let availability_starts = match non_empty(&request.online_display_start_date) {
        Some(online_display_start_date) => dates::start_of_day(dates::parse_date(online_display_start_date)?),
        None => dates::start_of_day(day),
    };
    // The theater's grace time comes from remote data and is not range checked on input
    let sales_end = dates::checked_add_minutes(start_date, offset)
        .ok_or_else(|| ApplicationError::unprocessable("The sales end setting is out of range"))?;
    let scheduled = ScheduledEvent {
        day,
        slot_index: 0,
        ticket_type_group_id: sales.catalog.id.clone(),
        door_time: dates::jst_datetime(day, dates::parse_time(&request.door_time)?),
        start_date,
        end_date: dates::jst_datetime(day, dates::parse_time(&request.end_time)?),
        valid_from,
        valid_through: sales_end,
        availability_starts,
        availability_ends: sales_end,
        accepted_payment_method: accepted_payment_methods(request.excludes_movie_ticket()),
    };

    let attributes = event_attributes(&project, &series, room, &scheduled, &sales, request.max_seat_number);
    client.update_screening_event(&path.event_id, &attributes).await?;
    log_request(
        Level::Info,
        "api::screening_events",
        "Screening event updated",
        &user,
        json!({"screening_event_id": path.event_id}),
    );
    Ok(AjaxResponse::ok())
}

pub async fn cancel(
    (state, path, user): (Data<AppState>, Path<EventPathParameters>, AdminUser),
) -> Result<HttpResponse, ApiError> {
    let client = &state.config.chevre_client;
    let event = client.find_screening_event(&path.event_id).await?;
    if dates::jst_date(event.attributes.start_date) < dates::today() {
        return Err(ApplicationError::unprocessable("Past screening events can not be cancelled").into());
    }

    let mut attributes = event.attributes;
    attributes.event_status = EventStatusType::EventCancelled;
    client.update_screening_event(&event.id, &attributes).await?;
    log_request(
        Level::Info,
        "api::screening_events",
        "Screening event cancelled",
        &user,
        json!({"screening_event_id": event.id}),
    );
    Ok(AjaxResponse::ok())
}

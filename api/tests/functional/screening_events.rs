use crate::support;
use crate::support::fixtures::{self, CATALOG_ID, SCREEN_BRANCH_CODE, THEATER_BRANCH_CODE};
use crate::support::test_request::TestRequest;
use actix_web::{
    http::StatusCode,
    web::{Path, Query},
    HttpResponse,
};
use api::controllers::screening_events;
use api::extractors::*;
use api::models::*;
use chevre::factory::*;
use chrono::prelude::*;
use chrono::Duration;

const SERIES_ID: &str = "series-1";

fn day() -> NaiveDate {
    NaiveDate::from_ymd(2030, 1, 5)
}

fn jst(day: NaiveDate, hour: u32, minute: u32) -> DateTime<Utc> {
    fixtures::jst_midnight(day) + Duration::hours(hour as i64) + Duration::minutes(minute as i64)
}

fn seed(test_request: &TestRequest) -> ScreeningEventSeries {
    fixtures::seed_master_data(&test_request.chevre);
    let series = fixtures::screening_event_series(
        SERIES_ID,
        "天気の子",
        NaiveDate::from_ymd(2029, 12, 1),
        NaiveDate::from_ymd(2030, 3, 1),
    );
    test_request.chevre.add_screening_event_series(series.clone());
    series
}

fn registration() -> ScreeningEventRegistration {
    ScreeningEventRegistration {
        screening_event_id: SERIES_ID.to_string(),
        theater: THEATER_BRANCH_CODE.to_string(),
        screen: SCREEN_BRANCH_CODE.to_string(),
        start_date: "2030/01/05".to_string(),
        to_date: "2030/01/11".to_string(),
        week_day_data: vec![0, 6],
        time_data: vec![
            TimeData {
                door_time: "0950".to_string(),
                start_time: "1000".to_string(),
                end_time: "1200".to_string(),
            },
            TimeData {
                door_time: "12:50".to_string(),
                start_time: "13:00".to_string(),
                end_time: "15:00".to_string(),
            },
        ],
        ticket_data: vec![CATALOG_ID.to_string(), CATALOG_ID.to_string()],
        mvtk_exclude_flg_data: vec!["0".to_string(), "1".to_string()],
        end_sale_time_after_screening: None,
        sale_start_days: Some(2),
        online_display_start_date: Some("2030/01/01".to_string()),
        max_seat_number: Some(4),
    }
}

fn event_update() -> ScreeningEventUpdate {
    ScreeningEventUpdate {
        screening_event_id: SERIES_ID.to_string(),
        theater: THEATER_BRANCH_CODE.to_string(),
        screen: "20".to_string(),
        day: "2030/01/05".to_string(),
        door_time: "1020".to_string(),
        start_time: "1030".to_string(),
        end_time: "1230".to_string(),
        ticket_type_group: CATALOG_ID.to_string(),
        sale_start_date: Some("2030/01/02".to_string()),
        sale_start_time: Some("0900".to_string()),
        online_display_start_date: None,
        end_sale_time_after_screening: None,
        mvtk_exclude_flg: Some("1".to_string()),
        max_seat_number: None,
    }
}

#[actix_rt::test]
async fn index() {
    let test_request = TestRequest::create();
    fixtures::seed_master_data(&test_request.chevre);

    let response: HttpResponse = screening_events::index((test_request.state(), test_request.admin_user()))
        .await
        .into();
    assert_eq!(response.status(), StatusCode::OK);
    let body = support::unwrap_body_to_json(&response);
    assert_eq!(body["movieTheaters"][0]["branchCode"], THEATER_BRANCH_CODE);
    assert_eq!(body["ticketGroups"][0]["id"], CATALOG_ID);
}

#[actix_rt::test]
async fn index_without_theaters() {
    let test_request = TestRequest::create();

    let response: HttpResponse = screening_events::index((test_request.state(), test_request.admin_user()))
        .await
        .into();
    support::expects_not_found(&response);
}

#[actix_rt::test]
async fn search() {
    let test_request = TestRequest::create_with_uri("/events/screeningEvent/search?theater=118&date=20300105&days=1");
    let series = seed(&test_request);
    let chevre = &test_request.chevre;
    chevre.add_screening_event(fixtures::screening_event("e1", &series, "10", jst(day(), 10, 0)));
    chevre.add_screening_event(fixtures::screening_event("e2", &series, "20", jst(day(), 18, 0)));
    chevre.add_screening_event(fixtures::screening_event(
        "e3",
        &series,
        "10",
        jst(day() + Duration::days(2), 10, 0),
    ));
    let query = test_request.extract::<Query<ScreeningEventSearchParameters>>().await;

    let response: HttpResponse = screening_events::search((test_request.state(), query, test_request.admin_user()))
        .await
        .into();
    assert_eq!(response.status(), StatusCode::OK);
    let body = support::unwrap_body_to_json(&response);
    assert_eq!(body["validation"], serde_json::Value::Null);
    assert_eq!(body["error"], serde_json::Value::Null);
    let ids: Vec<&str> = body["performances"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["e1", "e2"]);
    assert_eq!(body["screens"].as_array().unwrap().len(), 3);
    assert_eq!(body["ticketGroups"][0]["id"], CATALOG_ID);

    let conditions = chevre.last_event_search().unwrap();
    assert_eq!(conditions.event_statuses, vec![EventStatusType::EventScheduled]);
    assert_eq!(conditions.in_session_from, Some(fixtures::jst_midnight(day())));
    assert_eq!(
        conditions.in_session_through,
        Some(fixtures::jst_midnight(day() + Duration::days(1)))
    );
}

#[actix_rt::test]
async fn search_by_screen() {
    let test_request =
        TestRequest::create_with_uri("/events/screeningEvent/search?theater=118&date=2030-01-05&screen=10");
    let series = seed(&test_request);
    test_request
        .chevre
        .add_screening_event(fixtures::screening_event("e1", &series, "10", jst(day(), 10, 0)));
    test_request
        .chevre
        .add_screening_event(fixtures::screening_event("e2", &series, "20", jst(day(), 18, 0)));
    let query = test_request.extract::<Query<ScreeningEventSearchParameters>>().await;

    let response: HttpResponse = screening_events::search((test_request.state(), query, test_request.admin_user()))
        .await
        .into();
    let body = support::unwrap_body_to_json(&response);
    assert_eq!(body["performances"].as_array().unwrap().len(), 1);
    assert_eq!(body["performances"][0]["id"], "e1");
    assert_eq!(body["screens"].as_array().unwrap().len(), 1);
    assert_eq!(body["screens"][0]["branchCode"], "10");
    assert_eq!(test_request.chevre.last_event_search().unwrap().page, Some(1));
}

#[actix_rt::test]
async fn search_by_screen_reads_second_page() {
    let test_request =
        TestRequest::create_with_uri("/events/screeningEvent/search?theater=118&date=20300105&screen=10");
    let series = seed(&test_request);
    for i in 0..100 {
        test_request.chevre.add_screening_event(fixtures::screening_event(
            &format!("other-{}", i),
            &series,
            "20",
            jst(day(), 9, 0),
        ));
    }
    test_request
        .chevre
        .add_screening_event(fixtures::screening_event("late", &series, "10", jst(day(), 21, 0)));
    let query = test_request.extract::<Query<ScreeningEventSearchParameters>>().await;

    let response: HttpResponse = screening_events::search((test_request.state(), query, test_request.admin_user()))
        .await
        .into();
    let body = support::unwrap_body_to_json(&response);
    assert_eq!(body["performances"].as_array().unwrap().len(), 1);
    assert_eq!(body["performances"][0]["id"], "late");
    assert_eq!(test_request.chevre.last_event_search().unwrap().page, Some(2));
}

#[actix_rt::test]
async fn search_screening_event_series() {
    let test_request = TestRequest::create_with_uri(
        "/events/screeningEvent/searchScreeningEventSeries?movieTheaterBranchCode=118&identifier=MV0001",
    );
    seed(&test_request);
    let query = test_request.extract::<Query<ScreeningEventSeriesLookupParameters>>().await;

    let response: HttpResponse =
        screening_events::search_screening_event_series((test_request.state(), query, test_request.admin_user()))
            .await
            .into();
    assert_eq!(response.status(), StatusCode::OK);
    let body = support::unwrap_body_to_json(&response);
    assert_eq!(body["screeningEventSeries"][0]["id"], SERIES_ID);
}

#[actix_rt::test]
async fn regist() {
    let test_request = TestRequest::create();
    seed(&test_request);

    let response: HttpResponse = screening_events::regist((
        test_request.state(),
        Json(registration()),
        test_request.admin_user(),
    ))
    .await
    .into();
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        support::unwrap_body_to_json(&response),
        json!({"validation": null, "error": null})
    );

    let events = test_request.chevre.screening_events();
    assert_eq!(events.len(), 4);
    let starts: Vec<DateTime<Utc>> = events.iter().map(|e| e.attributes.start_date).collect();
    let sunday = day() + Duration::days(1);
    assert_eq!(
        starts,
        vec![
            jst(day(), 10, 0),
            jst(day(), 13, 0),
            jst(sunday, 10, 0),
            jst(sunday, 13, 0)
        ]
    );

    let first = &events[0].attributes;
    assert_eq!(first.super_event.id, SERIES_ID);
    assert_eq!(first.location.branch_code, SCREEN_BRANCH_CODE);
    assert_eq!(first.door_time, Some(jst(day(), 9, 50)));
    assert_eq!(first.end_date, jst(day(), 12, 0));
    assert_eq!(first.event_status, EventStatusType::EventScheduled);
    let offers = first.offers.as_ref().unwrap();
    assert_eq!(offers.id.as_deref(), Some(CATALOG_ID));
    assert_eq!(offers.valid_from, fixtures::jst_midnight(NaiveDate::from_ymd(2030, 1, 3)));
    assert_eq!(offers.valid_through, jst(day(), 9, 40));
    assert_eq!(offers.availability_ends, jst(day(), 9, 40));
    assert_eq!(
        offers.availability_starts,
        fixtures::jst_midnight(NaiveDate::from_ymd(2030, 1, 1))
    );
    assert_eq!(offers.eligible_quantity.max_value, Some(4));
    assert_eq!(offers.accepted_payment_method, None);
    let item_offered = offers.item_offered.as_ref().unwrap();
    assert_eq!(
        item_offered.service_type.as_ref().map(|s| s.code_value.as_str()),
        Some(fixtures::SERVICE_TYPE_CODE)
    );

    let second = events[1].attributes.offers.as_ref().unwrap();
    assert_eq!(
        second.accepted_payment_method,
        Some(PaymentMethodType::all_except(PaymentMethodType::MovieTicket))
    );
}

#[actix_rt::test]
async fn regist_with_unknown_ticket_type_group() {
    let test_request = TestRequest::create();
    seed(&test_request);
    let mut registration = registration();
    registration.ticket_data = vec!["missing".to_string(), CATALOG_ID.to_string()];

    let response: HttpResponse = screening_events::regist((
        test_request.state(),
        Json(registration),
        test_request.admin_user(),
    ))
    .await
    .into();
    support::expects_not_found(&response);
    assert!(test_request.chevre.screening_events().is_empty());
}

#[actix_rt::test]
async fn regist_on_screen_without_name() {
    let test_request = TestRequest::create();
    seed(&test_request);
    let mut registration = registration();
    registration.screen = "30".to_string();

    let response: HttpResponse = screening_events::regist((
        test_request.state(),
        Json(registration),
        test_request.admin_user(),
    ))
    .await
    .into();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(test_request.chevre.screening_events().is_empty());
}

#[actix_rt::test]
async fn regist_without_required_fields() {
    let test_request = TestRequest::create();
    seed(&test_request);

    let response: HttpResponse = screening_events::regist((
        test_request.state(),
        Json(ScreeningEventRegistration::default()),
        test_request.admin_user(),
    ))
    .await
    .into();
    support::expects_unprocessable(&response, "screeningEventId");
    support::expects_unprocessable(&response, "weekDayData");
    support::expects_unprocessable(&response, "timeData");
}

#[actix_rt::test]
async fn update_uses_theater_sales_end() {
    let test_request = TestRequest::create();
    let series = seed(&test_request);
    test_request
        .chevre
        .add_screening_event(fixtures::screening_event("event-1", &series, "10", jst(day(), 10, 0)));
    let mut path = test_request.extract::<Path<EventPathParameters>>().await;
    path.event_id = "event-1".to_string();

    let response: HttpResponse = screening_events::update((
        test_request.state(),
        path,
        Json(event_update()),
        test_request.admin_user(),
    ))
    .await
    .into();
    assert_eq!(response.status(), StatusCode::OK);

    let events = test_request.chevre.screening_events();
    let updated = &events[0].attributes;
    assert_eq!(updated.start_date, jst(day(), 10, 30));
    assert_eq!(updated.location.branch_code, "20");
    let offers = updated.offers.as_ref().unwrap();
    assert_eq!(offers.valid_from, jst(NaiveDate::from_ymd(2030, 1, 2), 9, 0));
    assert_eq!(offers.valid_through, jst(day(), 10, 50));
    assert_eq!(offers.availability_starts, fixtures::jst_midnight(day()));
    assert_eq!(offers.eligible_quantity.max_value, None);
    assert_eq!(
        offers.accepted_payment_method,
        Some(PaymentMethodType::all_except(PaymentMethodType::MovieTicket))
    );
}

#[actix_rt::test]
async fn update_with_explicit_sales_end() {
    let test_request = TestRequest::create();
    let series = seed(&test_request);
    test_request
        .chevre
        .add_screening_event(fixtures::screening_event("event-1", &series, "10", jst(day(), 10, 0)));
    let mut path = test_request.extract::<Path<EventPathParameters>>().await;
    path.event_id = "event-1".to_string();
    let mut update = event_update();
    update.end_sale_time_after_screening = Some(-10);
    update.sale_start_date = None;

    let response: HttpResponse = screening_events::update((
        test_request.state(),
        path,
        Json(update),
        test_request.admin_user(),
    ))
    .await
    .into();
    assert_eq!(response.status(), StatusCode::OK);
    let events = test_request.chevre.screening_events();
    let offers = events[0].attributes.offers.as_ref().unwrap();
    assert_eq!(offers.valid_through, jst(day(), 10, 20));
    assert_eq!(offers.valid_from, fixtures::jst_midnight(day()));
}

#[actix_rt::test]
async fn cancel_upcoming_event() {
    let test_request = TestRequest::create();
    let series = seed(&test_request);
    let start = Utc::now() + Duration::days(2);
    test_request
        .chevre
        .add_screening_event(fixtures::screening_event("event-1", &series, "10", start));
    let mut path = test_request.extract::<Path<EventPathParameters>>().await;
    path.event_id = "event-1".to_string();

    let response: HttpResponse = screening_events::cancel((test_request.state(), path, test_request.admin_user()))
        .await
        .into();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        test_request.chevre.screening_events()[0].attributes.event_status,
        EventStatusType::EventCancelled
    );
}

#[actix_rt::test]
async fn cancel_past_event() {
    let test_request = TestRequest::create();
    let series = seed(&test_request);
    let start = Utc::now() - Duration::days(2);
    test_request
        .chevre
        .add_screening_event(fixtures::screening_event("event-1", &series, "10", start));
    let mut path = test_request.extract::<Path<EventPathParameters>>().await;
    path.event_id = "event-1".to_string();

    let response: HttpResponse = screening_events::cancel((test_request.state(), path, test_request.admin_user()))
        .await
        .into();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        test_request.chevre.screening_events()[0].attributes.event_status,
        EventStatusType::EventScheduled
    );
}

#[actix_rt::test]
async fn search_with_too_many_days() {
    let test_request =
        TestRequest::create_with_uri("/events/screeningEvent/search?theater=118&date=20300105&days=1000000000000000");
    seed(&test_request);
    let query = test_request.extract::<Query<ScreeningEventSearchParameters>>().await;

    let response: HttpResponse = screening_events::search((test_request.state(), query, test_request.admin_user()))
        .await
        .into();
    support::expects_unprocessable(&response, "days");
    assert!(test_request.chevre.last_event_search().is_none());
}

#[actix_rt::test]
async fn regist_with_out_of_range_sales_window() {
    let test_request = TestRequest::create();
    seed(&test_request);
    let mut registration = registration();
    registration.sale_start_days = Some(1_000_000_000_000_000);
    registration.end_sale_time_after_screening = Some(i64::MIN);

    let response: HttpResponse = screening_events::regist((
        test_request.state(),
        Json(registration),
        test_request.admin_user(),
    ))
    .await
    .into();
    support::expects_unprocessable(&response, "saleStartDays");
    support::expects_unprocessable(&response, "endSaleTimeAfterScreening");
    assert!(test_request.chevre.screening_events().is_empty());
}

#[actix_rt::test]
async fn regist_with_ticket_type_group_beyond_first_page() {
    let test_request = TestRequest::create();
    seed(&test_request);
    for index in 0..100 {
        test_request.chevre.add_offer_catalog(fixtures::offer_catalog(
            &format!("catalog-filler-{}", index),
            "団体料金",
            Some(fixtures::SERVICE_TYPE_CODE),
        ));
    }
    test_request.chevre.add_offer_catalog(fixtures::offer_catalog(
        "catalog-late",
        "レイトショー",
        Some(fixtures::SERVICE_TYPE_CODE),
    ));
    let mut registration = registration();
    registration.ticket_data = vec!["catalog-late".to_string(), CATALOG_ID.to_string()];

    let response: HttpResponse = screening_events::regist((
        test_request.state(),
        Json(registration),
        test_request.admin_user(),
    ))
    .await
    .into();
    assert_eq!(response.status(), StatusCode::CREATED);

    let events = test_request.chevre.screening_events();
    assert_eq!(events.len(), 4);
    let catalog_ids: Vec<Option<String>> = events
        .iter()
        .map(|e| e.attributes.offers.as_ref().and_then(|o| o.id.clone()))
        .collect();
    assert_eq!(
        catalog_ids,
        vec![
            Some("catalog-late".to_string()),
            Some(CATALOG_ID.to_string()),
            Some("catalog-late".to_string()),
            Some(CATALOG_ID.to_string()),
        ]
    );
}

#[actix_rt::test]
async fn update_with_out_of_range_sales_end() {
    let test_request = TestRequest::create();
    let series = seed(&test_request);
    test_request
        .chevre
        .add_screening_event(fixtures::screening_event("event-1", &series, "10", jst(day(), 10, 0)));
    let mut path = test_request.extract::<Path<EventPathParameters>>().await;
    path.event_id = "event-1".to_string();
    let mut update = event_update();
    update.end_sale_time_after_screening = Some(i64::MAX);

    let response: HttpResponse = screening_events::update((
        test_request.state(),
        path,
        Json(update),
        test_request.admin_user(),
    ))
    .await
    .into();
    support::expects_unprocessable(&response, "endSaleTimeAfterScreening");
    let events = test_request.chevre.screening_events();
    assert_eq!(events[0].attributes.start_date, jst(day(), 10, 0));
}

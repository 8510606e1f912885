use crate::support;
use crate::support::fixtures;
use crate::support::test_request::{TestRequest, ADMIN_USERNAME};
use actix_web::{http::StatusCode, web::Query, HttpResponse};
use api::controllers::orders::{self, OrderCancelParameters};
use api::models::OrderSearchParameters;
use chevre::factory::PropertyValue;

const ORDER_NUMBER: &str = "CIN118-2020-0001";

#[actix_rt::test]
async fn index() {
    let test_request = TestRequest::create();
    fixtures::seed_master_data(&test_request.chevre);

    let response: HttpResponse = orders::index((test_request.state(), test_request.admin_user()))
        .await
        .into();
    assert_eq!(response.status(), StatusCode::OK);
    let body = support::unwrap_body_to_json(&response);
    assert_eq!(body["movieTheaters"][0]["branchCode"], fixtures::THEATER_BRANCH_CODE);
}

#[actix_rt::test]
async fn cancel() {
    let test_request = TestRequest::create_with_uri(&format!("/orders/cancel?orderNumber={}", ORDER_NUMBER));
    test_request.chevre.add_order(fixtures::order(ORDER_NUMBER));
    let state = test_request.state();
    let query = test_request.extract::<Query<OrderCancelParameters>>().await;

    let response: HttpResponse = orders::cancel((state.clone(), query, test_request.admin_user()))
        .await
        .into();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(support::unwrap_body_to_json(&response), json!({"success": true}));
    assert_eq!(test_request.chevre.returned_order_numbers(), vec![ORDER_NUMBER.to_string()]);
    assert_eq!(
        state.returning_orders_of(ADMIN_USERNAME).unwrap(),
        vec![ORDER_NUMBER.to_string()]
    );
}

#[actix_rt::test]
async fn cancel_unknown_order() {
    let test_request = TestRequest::create_with_uri("/orders/cancel?orderNumber=missing");
    let state = test_request.state();
    let query = test_request.extract::<Query<OrderCancelParameters>>().await;

    let response: HttpResponse = orders::cancel((state.clone(), query, test_request.admin_user()))
        .await
        .into();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(support::unwrap_body_to_json(&response), json!({"success": false}));
    assert!(test_request.chevre.returned_order_numbers().is_empty());
    assert!(state.returning_orders_of(ADMIN_USERNAME).unwrap().is_empty());
}

#[actix_rt::test]
async fn search() {
    let query = serde_urlencoded::to_string(&[
        ("orderDateFrom", "2020/03/01"),
        ("orderDateThrough", "2020/03/31"),
        ("confirmationNumber", "12345"),
    ])
    .unwrap();
    let test_request = TestRequest::create_with_uri(&format!("/orders/search?{}", query));
    test_request.chevre.add_order(fixtures::order(ORDER_NUMBER));
    let state = test_request.state();
    state.add_returning_order(ADMIN_USERNAME, "CIN118-2020-0000").unwrap();
    let query = test_request.extract::<Query<OrderSearchParameters>>().await;

    let response: HttpResponse = orders::search((state, query, test_request.admin_user()))
        .await
        .into();
    assert_eq!(response.status(), StatusCode::OK);
    let body = support::unwrap_body_to_json(&response);
    assert_eq!(body["success"], true);
    assert_eq!(body["count"], 1);
    let order = &body["results"][0];
    assert_eq!(order["orderNumber"], ORDER_NUMBER);
    assert_eq!(order["paymentMethodId"], "PM-1,PM-2");
    assert_eq!(order["ticketInfo"], "B-5 / 一般 / 1800 (1 tickets) JPY");
    assert_eq!(body["orderCancellings"], json!(["CIN118-2020-0000"]));

    let conditions = test_request.chevre.last_order_search().unwrap();
    assert_eq!(conditions.limit, Some(10));
    assert_eq!(conditions.page, Some(1));
    assert_eq!(conditions.confirmation_numbers, vec!["12345".to_string()]);
}

#[actix_rt::test]
async fn search_counts_by_page_not_remote_total() {
    let query = serde_urlencoded::to_string(&[
        ("orderDateFrom", "2020/03/01"),
        ("orderDateThrough", "2020/03/31"),
        ("limit", "2"),
        ("page", "1"),
    ])
    .unwrap();
    let test_request = TestRequest::create_with_uri(&format!("/orders/search?{}", query));
    for index in 1..=5 {
        test_request
            .chevre
            .add_order(fixtures::order(&format!("CIN118-2020-000{}", index)));
    }
    let query = test_request.extract::<Query<OrderSearchParameters>>().await;

    let response: HttpResponse = orders::search((test_request.state(), query, test_request.admin_user()))
        .await
        .into();
    assert_eq!(response.status(), StatusCode::OK);
    let body = support::unwrap_body_to_json(&response);
    assert_eq!(body["results"].as_array().map(|r| r.len()), Some(2));
    // A full first page of two claims one more record
    assert_eq!(body["count"], 3);
}

#[actix_rt::test]
async fn search_by_purchase_location() {
    let test_request = TestRequest::create_with_uri("/orders/search?placeTicket=POS");
    let query = test_request.extract::<Query<OrderSearchParameters>>().await;

    let response: HttpResponse = orders::search((test_request.state(), query, test_request.admin_user()))
        .await
        .into();
    assert_eq!(response.status(), StatusCode::OK);
    let conditions = test_request.chevre.last_order_search().unwrap();
    assert_eq!(
        conditions.customer_identifiers,
        vec![PropertyValue::new("clientId", &test_request.config.pos_client_id)]
    );
    assert!(conditions.order_date_from.is_some());
}

#[actix_rt::test]
async fn search_with_invalid_date() {
    let test_request = TestRequest::create_with_uri("/orders/search?orderDateFrom=yesterday");
    let query = test_request.extract::<Query<OrderSearchParameters>>().await;

    let response: HttpResponse = orders::search((test_request.state(), query, test_request.admin_user()))
        .await
        .into();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[actix_rt::test]
async fn search_when_remote_unavailable() {
    let test_request = TestRequest::create_with_uri("/orders/search");
    test_request.chevre.set_unavailable(true);
    let query = test_request.extract::<Query<OrderSearchParameters>>().await;

    let response: HttpResponse = orders::search((test_request.state(), query, test_request.admin_user()))
        .await
        .into();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        support::unwrap_body_to_json(&response),
        json!({"success": false, "count": 0, "results": [], "orderCancellings": []})
    );
}

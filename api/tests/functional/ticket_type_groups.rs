use crate::support;
use crate::support::fixtures;
use crate::support::test_request::TestRequest;
use actix_web::{
    http::StatusCode,
    web::{Path, Query},
    HttpResponse,
};
use api::controllers::ticket_type_groups::{self, TicketTypeGroupSearchParameters, TicketTypePriceParameters};
use api::models::PathParameters;

#[actix_rt::test]
async fn get_list() {
    let test_request = TestRequest::create_with_uri("/ticketTypeGroups/getlist?limit=10&page=1&name=%E9%80%9A%E5%B8%B8");
    test_request
        .chevre
        .add_offer_catalog(fixtures::offer_catalog("catalog-1", "通常料金", Some("0001")));
    test_request
        .chevre
        .add_offer_catalog(fixtures::offer_catalog("catalog-2", "レイト料金", Some("0002")));
    let query = test_request.extract::<Query<TicketTypeGroupSearchParameters>>().await;

    let response: HttpResponse =
        ticket_type_groups::get_list((test_request.state(), query, test_request.admin_user()))
            .await
            .into();
    assert_eq!(response.status(), StatusCode::OK);
    let body = support::unwrap_body_to_json(&response);
    assert_eq!(body["success"], true);
    assert_eq!(body["count"], 1);
    assert_eq!(body["results"][0]["id"], "catalog-1");
}

#[actix_rt::test]
async fn price_list_excludes_chosen_ticket_types() {
    let test_request =
        TestRequest::create_with_uri("/ticketTypeGroups/getTicketTypePriceList?price=1800&ticketTypeChoose=adult");
    test_request.chevre.add_ticket_type(fixtures::ticket_type("adult", "一般", 1800));
    test_request.chevre.add_ticket_type(fixtures::ticket_type("member", "会員", 1800));
    test_request.chevre.add_ticket_type(fixtures::ticket_type("child", "小人", 1000));
    let query = test_request.extract::<Query<TicketTypePriceParameters>>().await;

    let response: HttpResponse =
        ticket_type_groups::get_ticket_type_price_list((test_request.state(), query, test_request.admin_user()))
            .await
            .into();
    let body = support::unwrap_body_to_json(&response);
    assert_eq!(body["success"], true);
    let ids: Vec<&str> = body["results"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["member"]);
}

#[actix_rt::test]
async fn delete() {
    let test_request = TestRequest::create();
    test_request
        .chevre
        .add_offer_catalog(fixtures::offer_catalog("catalog-1", "通常料金", Some("0001")));
    let mut path = test_request.extract::<Path<PathParameters>>().await;
    path.id = "catalog-1".to_string();

    let response: HttpResponse = ticket_type_groups::delete((test_request.state(), path, test_request.admin_user()))
        .await
        .into();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(test_request.chevre.offer_catalogs().is_empty());
}

#[actix_rt::test]
async fn delete_unknown_group() {
    let test_request = TestRequest::create();
    let mut path = test_request.extract::<Path<PathParameters>>().await;
    path.id = "missing".to_string();

    let response: HttpResponse = ticket_type_groups::delete((test_request.state(), path, test_request.admin_user()))
        .await
        .into();
    support::expects_not_found(&response);
}

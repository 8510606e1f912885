use crate::support;
use crate::support::fixtures;
use crate::support::test_request::TestRequest;
use actix_web::{http::StatusCode, web::Query, HttpResponse};
use api::controllers::movie_theaters::{self, BranchCodeParameters, MovieTheaterSearchParameters};
use chevre::factory::MovieTheaterOffer;

#[actix_rt::test]
async fn search_adds_grace_times() {
    let test_request = TestRequest::create_with_uri("/places/movieTheater/search?limit=10&page=1");
    test_request.chevre.add_movie_theater(fixtures::movie_theater());
    let query = test_request.extract::<Query<MovieTheaterSearchParameters>>().await;

    let response: HttpResponse = movie_theaters::search((test_request.state(), query, test_request.admin_user()))
        .await
        .into();
    assert_eq!(response.status(), StatusCode::OK);
    let body = support::unwrap_body_to_json(&response);
    assert_eq!(body["success"], true);
    assert_eq!(body["count"], 1);
    let theater = &body["results"][0];
    assert_eq!(theater["branchCode"], fixtures::THEATER_BRANCH_CODE);
    assert_eq!(theater["availabilityStartsGraceTimeInDays"], 3);
    assert_eq!(theater["availabilityEndsGraceTimeInMinutes"], "20 minutes after");
}

#[actix_rt::test]
async fn search_full_page_claims_next_page() {
    let test_request = TestRequest::create_with_uri("/places/movieTheater/search?limit=1&page=1");
    let mut other = fixtures::movie_theater();
    other.id = "theater-119".to_string();
    other.branch_code = "119".to_string();
    other.offers = Some(MovieTheaterOffer::default());
    test_request.chevre.add_movie_theater(other);
    test_request.chevre.add_movie_theater(fixtures::movie_theater());
    let query = test_request.extract::<Query<MovieTheaterSearchParameters>>().await;

    let response: HttpResponse = movie_theaters::search((test_request.state(), query, test_request.admin_user()))
        .await
        .into();
    let body = support::unwrap_body_to_json(&response);
    assert_eq!(body["count"], 2);
    assert_eq!(body["results"].as_array().unwrap().len(), 1);
    assert_eq!(body["results"][0]["branchCode"], "119");
    assert!(body["results"][0]["availabilityEndsGraceTimeInMinutes"].is_null());
}

#[actix_rt::test]
async fn screen_list_sorted_by_name() {
    let test_request = TestRequest::create_with_uri(&format!(
        "/places/movieTheater/getScreenListByTheaterBranchCode?branchCode={}",
        fixtures::THEATER_BRANCH_CODE
    ));
    test_request.chevre.add_movie_theater(fixtures::movie_theater());
    let query = test_request.extract::<Query<BranchCodeParameters>>().await;

    let response: HttpResponse =
        movie_theaters::get_screen_list_by_theater_branch_code((test_request.state(), query, test_request.admin_user()))
            .await
            .into();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        support::unwrap_body_to_json(&response),
        json!({
            "success": true,
            "results": [
                {"branchCode": "30", "name": ""},
                {"branchCode": "20", "name": "シアター1"},
                {"branchCode": "10", "name": "シアター2"}
            ]
        })
    );
}

#[actix_rt::test]
async fn screen_list_of_unknown_theater() {
    let test_request =
        TestRequest::create_with_uri("/places/movieTheater/getScreenListByTheaterBranchCode?branchCode=999");
    test_request.chevre.add_movie_theater(fixtures::movie_theater());
    let query = test_request.extract::<Query<BranchCodeParameters>>().await;

    let response: HttpResponse =
        movie_theaters::get_screen_list_by_theater_branch_code((test_request.state(), query, test_request.admin_user()))
            .await
            .into();
    assert_eq!(
        support::unwrap_body_to_json(&response),
        json!({"success": false, "results": []})
    );
}

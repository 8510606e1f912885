use crate::auth::user::AdminUser;
use crate::errors::*;
use crate::models::*;
use crate::server::AppState;
use crate::utils::logging::log_request;
use actix_web::{
    web::{Data, Query},
    HttpResponse,
};
use chevre::factory::{MovieTheater, ScreeningRoom};
use chevre::search::MovieTheaterSearchConditions;
use log::Level;
use serde_json::Value;

const ALL_THEATERS_LIMIT: u32 = 100;

#[derive(Debug, Default, Deserialize)]
pub struct MovieTheaterSearchParameters {
    pub limit: Option<u32>,
    pub page: Option<u32>,
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchCodeParameters {
    pub branch_code: String,
}

#[derive(Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenListItem {
    pub branch_code: String,
    pub name: String,
}

/// Theaters of the project for the selection boxes of the admin screens.
pub(crate) async fn all_movie_theaters(state: &AppState) -> Result<Vec<MovieTheater>, ApiError> {
    let result = state
        .config
        .chevre_client
        .search_movie_theaters(&MovieTheaterSearchConditions {
            limit: Some(ALL_THEATERS_LIMIT),
            project_ids: vec![state.config.project_id.clone()],
            ..Default::default()
        })
        .await?;
    Ok(result.data)
}

/// Resolves a theater by branch code and loads it again by id, the only lookup that includes its screens.
pub(crate) async fn find_by_branch_code(state: &AppState, branch_code: &str) -> Result<MovieTheater, ApiError> {
    let client = &state.config.chevre_client;
    let found = client
        .search_movie_theaters(&MovieTheaterSearchConditions {
            limit: Some(1),
            project_ids: vec![state.config.project_id.clone()],
            branch_codes: vec![branch_code.to_string()],
            ..Default::default()
        })
        .await?
        .data
        .into_iter()
        .next()
        .ok_or_else(|| ApplicationError::not_found("Movie theater not found"))?;
    Ok(client.find_movie_theater(&found.id).await?)
}

pub(crate) fn ends_grace_time_label(minutes: i64) -> String {
    if minutes >= 0 {
        format!("{} minutes after", minutes)
    } else {
        format!("{} minutes before", -minutes)
    }
}

fn theater_row(theater: MovieTheater) -> Result<Value, ApiError> {
    let starts_in_days = theater.availability_starts_grace_days();
    let ends_label = theater.availability_ends_grace_minutes().map(ends_grace_time_label);
    let mut row = serde_json::to_value(theater)?;
    if let Some(fields) = row.as_object_mut() {
        fields.insert("availabilityStartsGraceTimeInDays".to_string(), json!(starts_in_days));
        fields.insert("availabilityEndsGraceTimeInMinutes".to_string(), json!(ends_label));
    }
    Ok(row)
}

pub async fn search(
    (state, query, user): (Data<AppState>, Query<MovieTheaterSearchParameters>, AdminUser),
) -> Result<HttpResponse, ApiError> {
    let (page, limit) = (page_or_default(query.page), limit_or_default(query.limit));
    let conditions = MovieTheaterSearchConditions {
        limit: Some(limit),
        page: Some(page),
        project_ids: vec![state.config.project_id.clone()],
        name: query.name.clone().filter(|n| !n.is_empty()),
        ..Default::default()
    };
    match state.config.chevre_client.search_movie_theaters(&conditions).await {
        Ok(result) => {
            let count = paged_count(page, limit, result.data.len());
            let results = result
                .data
                .into_iter()
                .map(theater_row)
                .collect::<Result<Vec<Value>, ApiError>>()?;
            Ok(HttpResponse::Ok().json(ListResponse::new(count, results)))
        }
        Err(e) => {
            log_request(
                Level::Warn,
                "api::movie_theaters",
                "Movie theater search failed",
                &user,
                json!({"error": e.to_string()}),
            );
            Ok(HttpResponse::Ok().json(ListResponse::<Value>::failure()))
        }
    }
}

fn screen_name(room: &ScreeningRoom) -> String {
    room.name.as_ref().map(|n| n.ja.clone()).unwrap_or_default()
}

pub async fn get_screen_list_by_theater_branch_code(
    (state, query, user): (Data<AppState>, Query<BranchCodeParameters>, AdminUser),
) -> Result<HttpResponse, ApiError> {
    match find_by_branch_code(&state, &query.branch_code).await {
        Ok(theater) => {
            let mut results: Vec<ScreenListItem> = theater
                .contains_place
                .iter()
                .map(|room| ScreenListItem {
                    branch_code: room.branch_code.clone(),
                    name: screen_name(room),
                })
                .collect();
            results.sort_by(|a, b| a.name.cmp(&b.name));
            Ok(HttpResponse::Ok().json(json!({"success": true, "results": results})))
        }
        Err(e) => {
            log_request(
                Level::Warn,
                "api::movie_theaters",
                "Screen list lookup failed",
                &user,
                json!({"branch_code": query.branch_code, "error": e.to_string()}),
            );
            Ok(HttpResponse::Ok().json(json!({"success": false, "results": []})))
        }
    }
}

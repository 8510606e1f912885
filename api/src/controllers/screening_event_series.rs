use crate::auth::user::AdminUser;
use crate::controllers::movie_theaters::all_movie_theaters;
use crate::errors::*;
use crate::extractors::*;
use crate::models::*;
use crate::server::AppState;
use crate::utils::dates;
use crate::utils::logging::log_request;
use crate::validators::{append_validation_error, required};
use actix_web::{
    web::{Data, Path, Query},
    HttpResponse,
};
use chevre::factory::*;
use chevre::search::{CategoryCodeSearchConditions, EventSearchConditions, MovieSearchConditions};
use chrono::prelude::*;
use chrono::Duration;
use log::Level;
use serde_json::{Map, Value};

const SELECTION_LIMIT: u32 = 100;
const CONTAINS_ENDED: &str = "1";

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreeningEventSeriesListParameters {
    pub limit: Option<u32>,
    pub page: Option<u32>,
    pub name: Option<String>,
    pub contains_ended: Option<String>,
    pub location_branch_code: Option<String>,
    pub movie_identifier: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreeningEventSeriesSearchParameters {
    #[serde(default)]
    pub branch_code: String,
    pub from_date: Option<String>,
    pub to_date: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RatingParameters {
    pub identifier: String,
}

fn present(value: &Option<String>) -> Option<String> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty()).map(|v| v.to_string())
}

/// The stored series with display-only fields added next to its own.
fn extended_row(series: &ScreeningEventSeries, extra: Map<String, Value>) -> Result<Value, ApiError> {
    let mut row = serde_json::to_value(series)?;
    if let Some(fields) = row.as_object_mut() {
        fields.extend(extra);
    }
    Ok(row)
}

fn first_day(attributes: &ScreeningEventSeriesAttributes) -> String {
    attributes
        .start_date
        .map(|d| dates::format_day(dates::jst_date(d)))
        .unwrap_or_default()
}

/// Series store the day after the last screening day as their end.
fn last_day(attributes: &ScreeningEventSeriesAttributes) -> String {
    attributes
        .end_date
        .map(|d| dates::format_day(dates::jst_date(d) - Duration::days(1)))
        .unwrap_or_default()
}

async fn movies_on_offer(state: &AppState) -> Result<Vec<Movie>, ApiError> {
    let result = state
        .config
        .chevre_client
        .search_movies(&MovieSearchConditions {
            limit: Some(SELECTION_LIMIT),
            project_ids: vec![state.config.project_id.clone()],
            available_from: Some(Utc::now()),
            sort_by_date_published_desc: true,
            ..Default::default()
        })
        .await?;
    Ok(result.data)
}

async fn find_movie(state: &AppState, identifier: &str) -> Result<Movie, ApiError> {
    let movie = state
        .config
        .chevre_client
        .search_movies(&MovieSearchConditions {
            limit: Some(1),
            project_ids: vec![state.config.project_id.clone()],
            identifier: Some(identifier.to_string()),
            ..Default::default()
        })
        .await?
        .data
        .into_iter()
        .next()
        .ok_or_else(|| ApplicationError::not_found("Movie not found"))?;
    Ok(movie)
}

async fn video_format_types(state: &AppState) -> Result<Vec<CategoryCode>, ApiError> {
    let result = state
        .config
        .chevre_client
        .search_category_codes(&CategoryCodeSearchConditions {
            limit: Some(SELECTION_LIMIT),
            project_id: Some(state.config.project_id.clone()),
            in_code_set: Some(CategorySetIdentifier::VideoFormatType),
            ..Default::default()
        })
        .await?;
    Ok(result.data)
}

async fn form_attributes(
    state: &AppState,
    form: &ScreeningEventSeriesForm,
    is_new: bool,
) -> Result<ScreeningEventSeriesAttributes, ApiError> {
    let movie = find_movie(state, &form.work_performed.identifier).await?;
    let theater = state.config.chevre_client.find_movie_theater(&form.location_id).await?;
    form.to_attributes(&Project::new(&state.config.project_id), &movie, &theater, is_new)
}

pub async fn index((state, _user): (Data<AppState>, AdminUser)) -> Result<HttpResponse, ApiError> {
    let movie_theaters = all_movie_theaters(&state).await?;
    Ok(HttpResponse::Ok().json(json!({ "movieTheaters": movie_theaters })))
}

pub async fn add_form((state, _user): (Data<AppState>, AdminUser)) -> Result<HttpResponse, ApiError> {
    let forms = ScreeningEventSeriesForm {
        mvtk_flg: MVTK_FLAG_ACCEPTED.to_string(),
        ..Default::default()
    };
    Ok(HttpResponse::Ok().json(json!({
        "forms": forms,
        "movies": movies_on_offer(&state).await?,
        "movieTheaters": all_movie_theaters(&state).await?,
        "videoFormatTypes": video_format_types(&state).await?
    })))
}

pub async fn create(
    (state, json, user): (Data<AppState>, Json<ScreeningEventSeriesForm>, AdminUser),
) -> Result<HttpResponse, ApiError> {
    let form = json.into_inner();
    form.validate_record()?;

    let attributes = form_attributes(&state, &form, true).await?;
    let series = state
        .config
        .chevre_client
        .create_screening_event_series(&attributes)
        .await?;
    log_request(
        Level::Info,
        "api::screening_event_series",
        "Screening event series created",
        &user,
        json!({"screening_event_series_id": series.id}),
    );
    Ok(HttpResponse::Created().json(json!({ "id": series.id })))
}

pub async fn edit_form(
    (state, path, _user): (Data<AppState>, Path<EventPathParameters>, AdminUser),
) -> Result<HttpResponse, ApiError> {
    let series = state
        .config
        .chevre_client
        .find_screening_event_series(&path.event_id)
        .await?;
    Ok(HttpResponse::Ok().json(json!({
        "forms": ScreeningEventSeriesForm::from_series(&series),
        "movies": movies_on_offer(&state).await?,
        "movieTheaters": all_movie_theaters(&state).await?
    })))
}

pub async fn update(
    (state, path, json, user): (Data<AppState>, Path<EventPathParameters>, Json<ScreeningEventSeriesForm>, AdminUser),
) -> Result<HttpResponse, ApiError> {
    let form = json.into_inner();
    form.validate_record()?;

    let attributes = form_attributes(&state, &form, false).await?;
    state
        .config
        .chevre_client
        .update_screening_event_series(&path.event_id, &attributes)
        .await?;
    log_request(
        Level::Info,
        "api::screening_event_series",
        "Screening event series updated",
        &user,
        json!({"screening_event_series_id": path.event_id}),
    );
    Ok(AjaxResponse::ok())
}

fn list_row(series: &ScreeningEventSeries) -> Result<Value, ApiError> {
    let attributes = &series.attributes;
    let video_format = attributes
        .video_format
        .iter()
        .map(|f| f.type_of.as_str())
        .collect::<Vec<&str>>()
        .join(" ");
    let mut extra = Map::new();
    extra.insert("translationType".to_string(), json!(translation_type_label(attributes)));
    extra.insert("startDay".to_string(), json!(first_day(attributes)));
    extra.insert("endDay".to_string(), json!(last_day(attributes)));
    extra.insert("videoFormat".to_string(), json!(video_format));
    extended_row(series, extra)
}

pub async fn get_list(
    (state, query, user): (Data<AppState>, Query<ScreeningEventSeriesListParameters>, AdminUser),
) -> Result<HttpResponse, ApiError> {
    let (page, limit) = (page_or_default(query.page), limit_or_default(query.limit));
    let conditions = EventSearchConditions {
        limit: Some(limit),
        page: Some(page),
        project_ids: vec![state.config.project_id.clone()],
        name: present(&query.name),
        end_from: if query.contains_ended.as_deref() == Some(CONTAINS_ENDED) {
            None
        } else {
            Some(Utc::now())
        },
        location_branch_codes: present(&query.location_branch_code).into_iter().collect(),
        work_performed_identifiers: present(&query.movie_identifier).into_iter().collect(),
        ..Default::default()
    };
    match state.config.chevre_client.search_screening_event_series(&conditions).await {
        Ok(result) => {
            let count = paged_count(page, limit, result.data.len());
            let results = result
                .data
                .iter()
                .map(list_row)
                .collect::<Result<Vec<Value>, ApiError>>()?;
            Ok(HttpResponse::Ok().json(ListResponse::new(count, results)))
        }
        Err(e) => {
            log_request(
                Level::Warn,
                "api::screening_event_series",
                "Screening event series search failed",
                &user,
                json!({"error": e.to_string()}),
            );
            Ok(HttpResponse::Ok().json(ListResponse::<Value>::failure()))
        }
    }
}

fn search_row(series: &ScreeningEventSeries) -> Result<Value, ApiError> {
    let attributes = &series.attributes;
    let mut extra = Map::new();
    extra.insert("filmNameJa".to_string(), json!(attributes.name.ja));
    extra.insert("filmNameEn".to_string(), json!(attributes.name.en));
    extra.insert("kanaName".to_string(), json!(attributes.kana_name));
    extra.insert(
        "mvtkFlg".to_string(),
        json!(if attributes.accepts_movie_ticket() { "1" } else { "0" }),
    );
    extra.insert("translationType".to_string(), json!(translation_type_label(attributes)));
    extra.insert(
        "duration".to_string(),
        json!(attributes
            .duration
            .as_deref()
            .and_then(dates::iso_duration_minutes)
            .map(dates::humanize_minutes)),
    );
    extra.insert(
        "contentRating".to_string(),
        json!(attributes.work_performed.content_rating),
    );
    extended_row(series, extra)
}

/// Series still in session at a theater, for the screening event registration screen.
pub async fn search(
    (state, query, user): (Data<AppState>, Query<ScreeningEventSeriesSearchParameters>, AdminUser),
) -> Result<HttpResponse, ApiError> {
    append_validation_error(Ok(()), "branchCode", required(&query.branch_code, "Select a theater"))?;

    let in_session_from = match present(&query.from_date) {
        Some(from_date) => dates::jst_datetime(dates::parse_date(&from_date)?, NaiveTime::from_hms(23, 59, 59)),
        None => Utc::now(),
    };
    let in_session_through = match present(&query.to_date) {
        Some(to_date) => Some(dates::start_of_day(dates::parse_date(&to_date)?)),
        None => None,
    };
    let conditions = EventSearchConditions {
        limit: Some(SELECTION_LIMIT),
        project_ids: vec![state.config.project_id.clone()],
        in_session_from: Some(in_session_from),
        in_session_through,
        location_branch_codes: vec![query.branch_code.clone()],
        ..Default::default()
    };
    match state.config.chevre_client.search_screening_event_series(&conditions).await {
        Ok(result) => {
            let mut series = result.data;
            series.sort_by(|a, b| a.attributes.name.ja.cmp(&b.attributes.name.ja));
            let results = series.iter().map(search_row).collect::<Result<Vec<Value>, ApiError>>()?;
            Ok(HttpResponse::Ok().json(ListResponse::new(results.len() as u64, results)))
        }
        Err(e) => {
            log_request(
                Level::Warn,
                "api::screening_event_series",
                "Screening event series lookup failed",
                &user,
                json!({"branch_code": query.branch_code, "error": e.to_string()}),
            );
            Ok(HttpResponse::Ok().json(ListResponse::<Value>::failure()))
        }
    }
}

pub async fn screening_events(
    (state, path, _user): (Data<AppState>, Path<EventPathParameters>, AdminUser),
) -> Result<HttpResponse, ApiError> {
    let result = state
        .config
        .chevre_client
        .search_screening_events(&EventSearchConditions {
            limit: Some(SELECTION_LIMIT),
            project_ids: vec![state.config.project_id.clone()],
            super_event_ids: vec![path.event_id.clone()],
            ..Default::default()
        })
        .await?;
    Ok(HttpResponse::Ok().json(result))
}

pub async fn get_rating(
    (state, query, user): (Data<AppState>, Query<RatingParameters>, AdminUser),
) -> Result<HttpResponse, ApiError> {
    match find_movie(&state, &query.identifier).await {
        Ok(movie) => Ok(HttpResponse::Ok().json(json!({"success": true, "results": movie.content_rating}))),
        Err(e) => {
            log_request(
                Level::Warn,
                "api::screening_event_series",
                "Content rating lookup failed",
                &user,
                json!({"identifier": query.identifier, "error": e.to_string()}),
            );
            Ok(HttpResponse::Ok().json(json!({"success": false, "results": null})))
        }
    }
}

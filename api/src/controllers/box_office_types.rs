use crate::auth::user::AdminUser;
use crate::errors::*;
use crate::extractors::*;
use crate::models::*;
use crate::server::AppState;
use crate::utils::logging::log_request;
use actix_web::{
    web::{Data, Path, Query},
    HttpResponse,
};
use chevre::factory::{CategoryCode, CategorySetIdentifier, Project};
use chevre::search::CategoryCodeSearchConditions;
use log::Level;

const LIST_LIMIT: u32 = 100;

#[derive(Debug, Deserialize, PartialEq, Serialize)]
pub struct BoxOfficeTypeListItem {
    pub id: String,
    pub name: String,
}

impl From<CategoryCode> for BoxOfficeTypeListItem {
    fn from(code: CategoryCode) -> Self {
        BoxOfficeTypeListItem {
            id: code.code_value,
            name: code.name.ja,
        }
    }
}

fn service_type_conditions(project_id: &str) -> CategoryCodeSearchConditions {
    CategoryCodeSearchConditions {
        project_id: Some(project_id.to_string()),
        in_code_set: Some(CategorySetIdentifier::ServiceType),
        ..Default::default()
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_ref().map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

pub async fn get_list(
    (state, query, user): (Data<AppState>, Query<BoxOfficeTypeListParameters>, AdminUser),
) -> Result<HttpResponse, ApiError> {
    let conditions = CategoryCodeSearchConditions {
        limit: Some(LIST_LIMIT),
        code_value: non_empty(&query.id),
        name: non_empty(&query.name),
        ..service_type_conditions(&state.config.project_id)
    };
    match state.config.chevre_client.search_category_codes(&conditions).await {
        Ok(result) => {
            let mut codes = result.data;
            codes.sort_by(|a, b| a.code_value.cmp(&b.code_value));
            let results: Vec<BoxOfficeTypeListItem> = codes.into_iter().map(|c| c.into()).collect();
            Ok(HttpResponse::Ok().json(ListResponse::new(results.len() as u64, results)))
        }
        Err(e) => {
            log_request(
                Level::Warn,
                "api::box_office_types",
                "Box office type search failed",
                &user,
                json!({"error": e.to_string()}),
            );
            Ok(HttpResponse::Ok().json(ListResponse::<BoxOfficeTypeListItem>::failure()))
        }
    }
}

pub async fn create(
    (state, json, user): (Data<AppState>, Json<NewBoxOfficeType>, AdminUser),
) -> Result<HttpResponse, ApiError> {
    let request = json.into_inner();
    request.validate_record()?;

    let client = &state.config.chevre_client;
    let existing = client
        .search_category_codes(&CategoryCodeSearchConditions {
            limit: Some(1),
            code_value: Some(request.id.clone()),
            ..service_type_conditions(&state.config.project_id)
        })
        .await?;
    if !existing.data.is_empty() {
        return Err(ApplicationError::unprocessable("A box office type with this code already exists").into());
    }

    let project = Project::new(&state.config.project_id);
    let created = client
        .create_category_code(&CategoryCode::service_type(project, &request.id, &request.name))
        .await?;
    log_request(
        Level::Info,
        "api::box_office_types",
        "Box office type created",
        &user,
        json!({"code_value": created.code_value}),
    );
    Ok(HttpResponse::Created().json(BoxOfficeTypeListItem::from(created)))
}

pub async fn update(
    (state, path, json, user): (Data<AppState>, Path<PathParameters>, Json<BoxOfficeTypeUpdate>, AdminUser),
) -> Result<HttpResponse, ApiError> {
    let request = json.into_inner();
    request.validate_record()?;

    let client = &state.config.chevre_client;
    let existing = client
        .search_category_codes(&CategoryCodeSearchConditions {
            limit: Some(1),
            code_value: Some(path.id.clone()),
            ..service_type_conditions(&state.config.project_id)
        })
        .await?
        .data
        .into_iter()
        .next()
        .ok_or_else(|| ApplicationError::not_found("Box office type not found"))?;

    let mut category_code = CategoryCode::service_type(existing.project.clone(), &path.id, &request.name);
    category_code.id = existing.id.clone();
    let id = existing.id.unwrap_or_else(|| path.id.clone());
    client.update_category_code(&id, &category_code).await?;
    log_request(
        Level::Info,
        "api::box_office_types",
        "Box office type updated",
        &user,
        json!({"code_value": path.id}),
    );
    Ok(HttpResponse::NoContent().finish())
}

use crate::auth::user::AdminUser;
use crate::errors::*;
use crate::models::*;
use crate::server::AppState;
use crate::utils::logging::log_request;
use actix_web::{
    web::{Data, Path, Query},
    HttpResponse,
};
use chevre::factory::{OfferCatalog, TicketType, ITEM_OFFERED_EVENT_SERVICE};
use chevre::search::{OfferCatalogSearchConditions, TicketTypeSearchConditions};
use log::Level;

const SELECTION_LIMIT: u32 = 100;

#[derive(Debug, Default, Deserialize)]
pub struct TicketTypeGroupSearchParameters {
    pub limit: Option<u32>,
    pub page: Option<u32>,
    pub name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketTypePriceParameters {
    pub price: Option<i64>,
    /// Comma separated ids of the ticket types already in the group.
    pub ticket_type_choose: Option<String>,
}

impl TicketTypePriceParameters {
    pub fn chosen_ids(&self) -> Vec<&str> {
        self.ticket_type_choose
            .as_deref()
            .map(|ids| ids.split(',').map(str::trim).filter(|id| !id.is_empty()).collect())
            .unwrap_or_default()
    }
}

/// Ticket type groups that can be attached to a screening event.
pub(crate) async fn event_service_catalogs(state: &AppState) -> Result<Vec<OfferCatalog>, ApiError> {
    let result = state
        .config
        .chevre_client
        .search_offer_catalogs(&OfferCatalogSearchConditions {
            limit: Some(SELECTION_LIMIT),
            project_id: Some(state.config.project_id.clone()),
            item_offered_type_of: Some(ITEM_OFFERED_EVENT_SERVICE.to_string()),
            ..Default::default()
        })
        .await?;
    Ok(result.data)
}

pub async fn get_list(
    (state, query, user): (Data<AppState>, Query<TicketTypeGroupSearchParameters>, AdminUser),
) -> Result<HttpResponse, ApiError> {
    let (page, limit) = (page_or_default(query.page), limit_or_default(query.limit));
    let conditions = OfferCatalogSearchConditions {
        limit: Some(limit),
        page: Some(page),
        project_id: Some(state.config.project_id.clone()),
        name: query.name.clone().filter(|n| !n.is_empty()),
        ..Default::default()
    };
    match state.config.chevre_client.search_offer_catalogs(&conditions).await {
        Ok(result) => {
            let count = paged_count(page, limit, result.data.len());
            Ok(HttpResponse::Ok().json(ListResponse::new(count, result.data)))
        }
        Err(e) => {
            log_request(
                Level::Warn,
                "api::ticket_type_groups",
                "Ticket type group search failed",
                &user,
                json!({"error": e.to_string()}),
            );
            Ok(HttpResponse::Ok().json(ListResponse::<OfferCatalog>::failure()))
        }
    }
}

pub async fn get_ticket_type_price_list(
    (state, query, user): (Data<AppState>, Query<TicketTypePriceParameters>, AdminUser),
) -> Result<HttpResponse, ApiError> {
    let conditions = TicketTypeSearchConditions {
        limit: Some(SELECTION_LIMIT),
        project_id: Some(state.config.project_id.clone()),
        price: query.price,
        ..Default::default()
    };
    match state.config.chevre_client.search_ticket_types(&conditions).await {
        Ok(result) => {
            let chosen = query.chosen_ids();
            let results: Vec<TicketType> = result
                .data
                .into_iter()
                .filter(|t| !chosen.contains(&t.id.as_str()))
                .collect();
            Ok(HttpResponse::Ok().json(json!({"success": true, "results": results})))
        }
        Err(e) => {
            log_request(
                Level::Warn,
                "api::ticket_type_groups",
                "Ticket type search failed",
                &user,
                json!({"price": query.price, "error": e.to_string()}),
            );
            Ok(HttpResponse::Ok().json(json!({"success": false, "results": []})))
        }
    }
}

pub async fn delete(
    (state, path, user): (Data<AppState>, Path<PathParameters>, AdminUser),
) -> Result<HttpResponse, ApiError> {
    state.config.chevre_client.delete_offer_catalog(&path.id).await?;
    log_request(
        Level::Info,
        "api::ticket_type_groups",
        "Ticket type group deleted",
        &user,
        json!({"offer_catalog_id": path.id}),
    );
    Ok(HttpResponse::NoContent().finish())
}

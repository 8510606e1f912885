use crate::auth::user::AdminUser;
use crate::controllers::movie_theaters::all_movie_theaters;
use crate::errors::*;
use crate::models::*;
use crate::server::AppState;
use crate::utils::logging::log_request;
use actix_web::{
    web::{Data, Query},
    HttpResponse,
};
use chevre::factory::{AcceptedOffer, Order, StartReturnOrderParams, PRICE_CURRENCY_JPY};
use chrono::prelude::*;
use chrono::Duration;
use log::Level;
use serde_json::Value;

const NO_RESERVED_SEAT: &str = "no reserved seat";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCancelParameters {
    pub order_number: String,
}

fn price_label(offer: &AcceptedOffer) -> String {
    match offer.unit_price_component() {
        Some(unit_price) => {
            let tickets = unit_price
                .reference_quantity
                .as_ref()
                .and_then(|q| q.value)
                .unwrap_or(1);
            format!("{} ({} tickets) {}", unit_price.price, tickets, PRICE_CURRENCY_JPY)
        }
        None => offer.price.map(|price| price.to_string()).unwrap_or_default(),
    }
}

/// One "seat / ticket name / price" line per accepted offer, separated by `<br>`.
/// Offers other than event reservations have no seat and no ticket name.
pub fn ticket_info(order: &Order) -> String {
    order
        .accepted_offers
        .iter()
        .map(|offer| {
            let ticket = Some(&offer.item_offered)
                .filter(|item| item.is_event_reservation())
                .and_then(|item| item.reserved_ticket.as_ref());
            let seat = ticket
                .and_then(|t| t.ticketed_seat.as_ref())
                .map(|s| s.seat_number.clone())
                .unwrap_or_else(|| NO_RESERVED_SEAT.to_string());
            let name = ticket
                .and_then(|t| t.ticket_type.as_ref())
                .map(|t| t.name.ja.clone())
                .unwrap_or_default();
            format!("{} / {} / {}", seat, name, price_label(offer))
        })
        .collect::<Vec<String>>()
        .join("<br>")
}

fn order_row(order: &Order) -> Result<Value, ApiError> {
    let payment_method_id = order
        .payment_methods
        .iter()
        .map(|p| p.payment_method_id.as_str())
        .collect::<Vec<&str>>()
        .join(",");
    let mut row = serde_json::to_value(order)?;
    if let Some(fields) = row.as_object_mut() {
        fields.insert("paymentMethodId".to_string(), json!(payment_method_id));
        fields.insert("ticketInfo".to_string(), json!(ticket_info(order)));
    }
    Ok(row)
}

pub async fn index((state, _user): (Data<AppState>, AdminUser)) -> Result<HttpResponse, ApiError> {
    let movie_theaters = all_movie_theaters(&state).await?;
    Ok(HttpResponse::Ok().json(json!({ "movieTheaters": movie_theaters })))
}

async fn return_order(state: &AppState, user: &AdminUser, order_number: &str) -> Result<(), ApiError> {
    let client = &state.config.chevre_client;
    let expires = Utc::now() + Duration::minutes(state.config.return_order_expires_in_minutes);
    let transaction = client
        .start_return_order(&StartReturnOrderParams::new(order_number, expires))
        .await?;
    client.confirm_return_order(&transaction).await?;
    state.add_returning_order(&user.username, order_number)
}

pub async fn cancel(
    (state, query, user): (Data<AppState>, Query<OrderCancelParameters>, AdminUser),
) -> Result<HttpResponse, ApiError> {
    match return_order(&state, &user, &query.order_number).await {
        Ok(()) => {
            log_request(
                Level::Info,
                "api::orders",
                "Order returned",
                &user,
                json!({"order_number": query.order_number}),
            );
            Ok(HttpResponse::Ok().json(json!({"success": true})))
        }
        Err(e) => {
            log_request(
                Level::Warn,
                "api::orders",
                "Order return failed",
                &user,
                json!({"order_number": query.order_number, "error": e.to_string()}),
            );
            Ok(HttpResponse::Ok().json(json!({"success": false})))
        }
    }
}

pub async fn search(
    (state, query, user): (Data<AppState>, Query<OrderSearchParameters>, AdminUser),
) -> Result<HttpResponse, ApiError> {
    let (page, limit) = (page_or_default(query.page), limit_or_default(query.limit));
    let mut conditions =
        query.to_conditions(&state.config.pos_client_id, &state.config.frontend_client_id, Utc::now())?;
    conditions.limit = Some(limit);
    conditions.page = Some(page);
    let order_cancellings = state.returning_orders_of(&user.username)?;

    match state.config.chevre_client.search_orders(&conditions).await {
        Ok(result) => {
            let count = paged_count(page, limit, result.data.len());
            let results = result.data.iter().map(order_row).collect::<Result<Vec<Value>, ApiError>>()?;
            Ok(HttpResponse::Ok().json(json!({
                "success": true,
                "count": count,
                "results": results,
                "orderCancellings": order_cancellings
            })))
        }
        Err(e) => {
            log_request(
                Level::Warn,
                "api::orders",
                "Order search failed",
                &user,
                json!({"error": e.to_string()}),
            );
            Ok(HttpResponse::Ok().json(json!({
                "success": false,
                "count": 0,
                "results": [],
                "orderCancellings": order_cancellings
            })))
        }
    }
}

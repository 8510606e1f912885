use crate::errors::{ApiError, ApplicationError};
use crate::utils::dates;
use chevre::factory::PropertyValue;
use chevre::search::OrderSearchConditions;
use chrono::prelude::*;

pub const PURCHASE_LOCATION_POS: &str = "POS";
pub const PURCHASE_LOCATION_WEB: &str = "WEB";
const CLIENT_ID_IDENTIFIER: &str = "clientId";

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSearchParameters {
    pub limit: Option<u32>,
    pub page: Option<u32>,
    /// `POS` or `WEB`; anything else searches every purchase location.
    pub place_ticket: Option<String>,
    pub start_date: Option<String>,
    pub start_date_hour_from: Option<String>,
    pub start_date_minute_from: Option<String>,
    pub start_date_hour_through: Option<String>,
    pub start_date_minute_through: Option<String>,
    pub order_date_from: Option<String>,
    pub order_date_through: Option<String>,
    pub telephone: Option<String>,
    pub confirmation_number: Option<String>,
    pub screening_event_series_id: Option<String>,
    pub location_branch_code: Option<String>,
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn time_of_day(hour: Option<&str>, minute: Option<&str>, default_hour: u32, default_minute: u32) -> Result<NaiveTime, ApiError> {
    let parse = |value: Option<&str>, default: u32| -> Result<u32, ApiError> {
        match value {
            Some(value) => value
                .parse()
                .map_err(|_| ApplicationError::bad_request("Invalid start time").into()),
            None => Ok(default),
        }
    };
    let (hour, minute) = (parse(hour, default_hour)?, parse(minute, default_minute)?);
    NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(|| ApplicationError::bad_request("Invalid start time").into())
}

impl OrderSearchParameters {
    /// Translates the screen's filters. Without an order date range the last month is searched.
    pub fn to_conditions(
        &self,
        pos_client_id: &str,
        frontend_client_id: &str,
        now: DateTime<Utc>,
    ) -> Result<OrderSearchConditions, ApiError> {
        let mut conditions = OrderSearchConditions {
            limit: self.limit,
            page: self.page,
            ..Default::default()
        };

        match present(&self.place_ticket) {
            Some(PURCHASE_LOCATION_POS) => conditions
                .customer_identifiers
                .push(PropertyValue::new(CLIENT_ID_IDENTIFIER, pos_client_id)),
            Some(PURCHASE_LOCATION_WEB) => conditions
                .customer_identifiers
                .push(PropertyValue::new(CLIENT_ID_IDENTIFIER, frontend_client_id)),
            _ => {}
        }

        if let Some(start_date) = present(&self.start_date) {
            let day = dates::parse_date(start_date)?;
            let from = time_of_day(
                present(&self.start_date_hour_from),
                present(&self.start_date_minute_from),
                0,
                0,
            )?;
            let through = time_of_day(
                present(&self.start_date_hour_through),
                present(&self.start_date_minute_through),
                23,
                55,
            )?;
            conditions.event_start_from = Some(dates::jst_datetime(day, from));
            conditions.event_start_through = Some(dates::jst_datetime(day, through));
        }

        match present(&self.order_date_from) {
            Some(order_date_from) => {
                conditions.order_date_from = Some(dates::start_of_day(dates::parse_date(order_date_from)?));
                conditions.order_date_through = match present(&self.order_date_through) {
                    Some(through) => Some(
                        dates::jst_datetime(dates::parse_date(through)?, NaiveTime::from_hms(23, 59, 59)),
                    ),
                    None => Some(now),
                };
            }
            None => {
                conditions.order_date_from = Some(dates::one_month_before(now));
                conditions.order_date_through = Some(now);
            }
        }

        conditions.customer_telephone = present(&self.telephone).map(|t| t.to_string());
        conditions.confirmation_numbers = present(&self.confirmation_number)
            .map(|n| vec![n.to_string()])
            .unwrap_or_default();
        conditions.super_event_ids = present(&self.screening_event_series_id)
            .map(|id| vec![id.to_string()])
            .unwrap_or_default();
        conditions.super_event_location_branch_codes = present(&self.location_branch_code)
            .map(|code| vec![code.to_string()])
            .unwrap_or_default();
        Ok(conditions)
    }
}

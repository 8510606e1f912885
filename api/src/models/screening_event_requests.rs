use crate::validators::{append_validation_error, optional_date, optional_range, required, required_list};
use validator::ValidationErrors;

const EXCLUDE_FLAG_ON: &str = "1";
/// One week either side of the start.
pub const MAX_SALES_END_OFFSET_MINUTES: i64 = 7 * 24 * 60;
pub const MAX_SALE_START_DAYS: i64 = 365;
pub const MAX_SEARCH_DAYS: i64 = 366;

fn sales_end_offset(value: Option<i64>) -> Result<(), validator::ValidationError> {
    optional_range(
        value,
        -MAX_SALES_END_OFFSET_MINUTES,
        MAX_SALES_END_OFFSET_MINUTES,
        "Sales end must be within a week of the start",
    )
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeData {
    #[serde(default)]
    pub door_time: String,
    #[serde(default)]
    pub start_time: String,
    #[serde(default)]
    pub end_time: String,
}

/// Registration of a recurring schedule for one screening event series on one screen.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScreeningEventRegistration {
    pub screening_event_id: String,
    pub theater: String,
    pub screen: String,
    pub start_date: String,
    pub to_date: String,
    pub week_day_data: Vec<u32>,
    pub time_data: Vec<TimeData>,
    /// Offer catalog id per time slot.
    pub ticket_data: Vec<String>,
    /// `"1"` per time slot that must not accept MovieTicket.
    pub mvtk_exclude_flg_data: Vec<String>,
    pub end_sale_time_after_screening: Option<i64>,
    pub sale_start_days: Option<i64>,
    pub online_display_start_date: Option<String>,
    pub max_seat_number: Option<i64>,
}

impl ScreeningEventRegistration {
    pub fn validate_record(&self) -> Result<(), ValidationErrors> {
        let mut validation_errors = Ok(());
        validation_errors = append_validation_error(
            validation_errors,
            "screeningEventId",
            required(&self.screening_event_id, "Select a screening event series"),
        );
        validation_errors = append_validation_error(
            validation_errors,
            "startDate",
            required(&self.start_date, "Select the first screening day"),
        );
        validation_errors = append_validation_error(
            validation_errors,
            "startDate",
            optional_date(&Some(self.start_date.clone()), "First screening day is not a valid date"),
        );
        validation_errors = append_validation_error(
            validation_errors,
            "toDate",
            required(&self.to_date, "Select the last screening day"),
        );
        validation_errors = append_validation_error(
            validation_errors,
            "toDate",
            optional_date(&Some(self.to_date.clone()), "Last screening day is not a valid date"),
        );
        validation_errors = append_validation_error(
            validation_errors,
            "weekDayData",
            required_list(&self.week_day_data, "Select at least one weekday"),
        );
        validation_errors = append_validation_error(
            validation_errors,
            "screen",
            required(&self.screen, "Select a screen"),
        );
        validation_errors = append_validation_error(
            validation_errors,
            "theater",
            required(&self.theater, "Select a theater"),
        );
        validation_errors = append_validation_error(
            validation_errors,
            "timeData",
            required_list(&self.time_data, "Enter at least one showtime"),
        );
        validation_errors = append_validation_error(
            validation_errors,
            "ticketData",
            required_list(&self.ticket_data, "Select a ticket type group"),
        );
        validation_errors = append_validation_error(
            validation_errors,
            "endSaleTimeAfterScreening",
            sales_end_offset(self.end_sale_time_after_screening),
        );
        validation_errors = append_validation_error(
            validation_errors,
            "saleStartDays",
            optional_range(
                self.sale_start_days,
                0,
                MAX_SALE_START_DAYS,
                "Sales must start within a year before the screening",
            ),
        );
        append_validation_error(
            validation_errors,
            "onlineDisplayStartDate",
            optional_date(&self.online_display_start_date, "Online display start is not a valid date"),
        )
    }

    pub fn excludes_movie_ticket(&self, slot_index: usize) -> bool {
        self.mvtk_exclude_flg_data
            .get(slot_index)
            .map_or(false, |flag| flag == EXCLUDE_FLAG_ON)
    }
}

/// Edit of a single screening event.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScreeningEventUpdate {
    pub screening_event_id: String,
    pub theater: String,
    pub screen: String,
    pub day: String,
    pub door_time: String,
    pub start_time: String,
    pub end_time: String,
    pub ticket_type_group: String,
    pub sale_start_date: Option<String>,
    pub sale_start_time: Option<String>,
    pub online_display_start_date: Option<String>,
    pub end_sale_time_after_screening: Option<i64>,
    pub mvtk_exclude_flg: Option<String>,
    pub max_seat_number: Option<i64>,
}

impl ScreeningEventUpdate {
    pub fn validate_record(&self) -> Result<(), ValidationErrors> {
        let mut validation_errors = Ok(());
        validation_errors = append_validation_error(
            validation_errors,
            "screeningEventId",
            required(&self.screening_event_id, "Select a screening event series"),
        );
        validation_errors = append_validation_error(
            validation_errors,
            "day",
            required(&self.day, "Select the screening day"),
        );
        validation_errors = append_validation_error(
            validation_errors,
            "day",
            optional_date(&Some(self.day.clone()), "Screening day is not a valid date"),
        );
        validation_errors = append_validation_error(
            validation_errors,
            "doorTime",
            required(&self.door_time, "Enter the door time"),
        );
        validation_errors = append_validation_error(
            validation_errors,
            "startTime",
            required(&self.start_time, "Enter the start time"),
        );
        validation_errors = append_validation_error(
            validation_errors,
            "endTime",
            required(&self.end_time, "Enter the end time"),
        );
        validation_errors = append_validation_error(
            validation_errors,
            "screen",
            required(&self.screen, "Select a screen"),
        );
        validation_errors = append_validation_error(
            validation_errors,
            "ticketTypeGroup",
            required(&self.ticket_type_group, "Select a ticket type group"),
        );
        validation_errors = append_validation_error(
            validation_errors,
            "saleStartDate",
            optional_date(&self.sale_start_date, "Sales start is not a valid date"),
        );
        validation_errors = append_validation_error(
            validation_errors,
            "endSaleTimeAfterScreening",
            sales_end_offset(self.end_sale_time_after_screening),
        );
        append_validation_error(
            validation_errors,
            "onlineDisplayStartDate",
            optional_date(&self.online_display_start_date, "Online display start is not a valid date"),
        )
    }

    pub fn excludes_movie_ticket(&self) -> bool {
        self.mvtk_exclude_flg.as_deref() == Some(EXCLUDE_FLAG_ON)
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ScreeningEventSearchParameters {
    /// Theater branch code.
    pub theater: String,
    /// `YYYYMMDD`
    pub date: String,
    pub days: Option<i64>,
    pub screen: Option<String>,
}

impl ScreeningEventSearchParameters {
    pub fn validate_record(&self) -> Result<(), ValidationErrors> {
        append_validation_error(
            Ok(()),
            "days",
            optional_range(self.days, 1, MAX_SEARCH_DAYS, "Search at most a year of days"),
        )
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreeningEventSeriesLookupParameters {
    pub movie_theater_branch_code: String,
    pub identifier: String,
}

use crate::utils::dates;
use chevre::factory::PaymentMethodType;
use chrono::prelude::*;
use chrono::Duration;

/// One showtime of the day, repeated on every scheduled day.
#[derive(Clone, Debug, PartialEq)]
pub struct TimeSlot {
    pub door_time: NaiveTime,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub ticket_type_group_id: String,
    pub exclude_movie_ticket: bool,
}

/// A recurring schedule: every listed weekday in `[start_date, end_date]` gets every time slot.
#[derive(Clone, Debug, PartialEq)]
pub struct Schedule {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// 0 is Sunday.
    pub weekdays: Vec<u32>,
    pub time_slots: Vec<TimeSlot>,
    /// Sales close this many minutes after the start, before it when negative.
    /// Bounded by `MAX_SALES_END_OFFSET_MINUTES`.
    pub offers_valid_after_start_in_minutes: i64,
    /// Sales open at midnight this many days before the screening day.
    /// Bounded by `MAX_SALE_START_DAYS`.
    pub sale_start_days: i64,
    pub online_display_start_date: NaiveDate,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScheduledEvent {
    pub day: NaiveDate,
    pub slot_index: usize,
    pub ticket_type_group_id: String,
    pub door_time: DateTime<Utc>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub valid_from: DateTime<Utc>,
    pub valid_through: DateTime<Utc>,
    pub availability_starts: DateTime<Utc>,
    pub availability_ends: DateTime<Utc>,
    pub accepted_payment_method: Option<Vec<PaymentMethodType>>,
}

/// Payment methods of an event. `None` leaves every method accepted.
pub fn accepted_payment_methods(exclude_movie_ticket: bool) -> Option<Vec<PaymentMethodType>> {
    if exclude_movie_ticket {
        Some(PaymentMethodType::all_except(PaymentMethodType::MovieTicket))
    } else {
        None
    }
}

impl Schedule {
    /// Events ordered by day, then by slot order.
    pub fn events(&self) -> Vec<ScheduledEvent> {
        let mut events = Vec::new();
        if self.weekdays.is_empty() {
            return events;
        }
        let availability_starts = dates::start_of_day(self.online_display_start_date);

        let mut day = self.start_date;
        while day <= self.end_date {
            if self.weekdays.contains(&dates::weekday_number(day)) {
                let valid_from = dates::start_of_day(day) - Duration::days(self.sale_start_days);
                for (slot_index, slot) in self.time_slots.iter().enumerate() {
                    let start_date = dates::jst_datetime(day, slot.start_time);
                    let sales_end = start_date + Duration::minutes(self.offers_valid_after_start_in_minutes);
                    events.push(ScheduledEvent {
                        day,
                        slot_index,
                        ticket_type_group_id: slot.ticket_type_group_id.clone(),
                        door_time: dates::jst_datetime(day, slot.door_time),
                        start_date,
                        end_date: dates::jst_datetime(day, slot.end_time),
                        valid_from,
                        valid_through: sales_end,
                        availability_starts,
                        availability_ends: sales_end,
                        accepted_payment_method: accepted_payment_methods(slot.exclude_movie_ticket),
                    });
                }
            }
            day = match day.succ_opt() {
                Some(next) => next,
                None => break,
            };
        }
        events
    }
}

pub mod box_office_types;
pub mod movie_theaters;
pub mod orders;
pub mod screening_event_series;
pub mod screening_events;
pub mod status;
pub mod ticket_type_groups;

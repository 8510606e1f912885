mod auth;
mod movie_theaters;
mod orders;
mod screening_events;
mod status;
mod ticket_type_groups;

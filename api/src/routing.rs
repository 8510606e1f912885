use crate::controllers::*;
use actix_web::web;

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/status").route(web::get().to(status::check)))
        .service(web::resource("/boxOfficeTypes/getlist").route(web::get().to(box_office_types::get_list)))
        .service(web::resource("/boxOfficeTypes/{id}").route(web::put().to(box_office_types::update)))
        .service(web::resource("/boxOfficeTypes").route(web::post().to(box_office_types::create)))
        .service(
            web::resource("/events/screeningEvent/search").route(web::get().to(screening_events::search)),
        )
        .service(
            web::resource("/events/screeningEvent/searchScreeningEventSeries")
                .route(web::get().to(screening_events::search_screening_event_series)),
        )
        .service(
            web::resource("/events/screeningEvent/regist").route(web::post().to(screening_events::regist)),
        )
        .service(
            web::resource("/events/screeningEvent/{eventId}/update")
                .route(web::post().to(screening_events::update)),
        )
        .service(
            web::resource("/events/screeningEvent/{eventId}/cancel")
                .route(web::put().to(screening_events::cancel)),
        )
        .service(web::resource("/events/screeningEvent").route(web::get().to(screening_events::index)))
        .service(
            web::resource("/events/screeningEventSeries/add")
                .route(web::get().to(screening_event_series::add_form))
                .route(web::post().to(screening_event_series::create)),
        )
        .service(
            web::resource("/events/screeningEventSeries/getlist")
                .route(web::get().to(screening_event_series::get_list)),
        )
        .service(
            web::resource("/events/screeningEventSeries/getrating")
                .route(web::get().to(screening_event_series::get_rating)),
        )
        .service(
            web::resource("/events/screeningEventSeries/search")
                .route(web::get().to(screening_event_series::search)),
        )
        .service(
            web::resource("/events/screeningEventSeries/{eventId}/update")
                .route(web::get().to(screening_event_series::edit_form))
                .route(web::post().to(screening_event_series::update)),
        )
        .service(
            web::resource("/events/screeningEventSeries/{eventId}/screeningEvents")
                .route(web::get().to(screening_event_series::screening_events)),
        )
        .service(
            web::resource("/events/screeningEventSeries").route(web::get().to(screening_event_series::index)),
        )
        .service(web::resource("/places/movieTheater/search").route(web::get().to(movie_theaters::search)))
        .service(
            web::resource("/places/movieTheater/getScreenListByTheaterBranchCode")
                .route(web::get().to(movie_theaters::get_screen_list_by_theater_branch_code)),
        )
        .service(web::resource("/orders/cancel").route(web::get().to(orders::cancel)))
        .service(web::resource("/orders/search").route(web::get().to(orders::search)))
        .service(web::resource("/orders").route(web::get().to(orders::index)))
        .service(
            web::resource("/ticketTypeGroups/getlist").route(web::get().to(ticket_type_groups::get_list)),
        )
        .service(
            web::resource("/ticketTypeGroups/getTicketTypePriceList")
                .route(web::get().to(ticket_type_groups::get_ticket_type_price_list)),
        )
        .service(web::resource("/ticketTypeGroups/{id}").route(web::delete().to(ticket_type_groups::delete)));
}

pub use self::ajax_response::*;
pub use self::box_office_type_request::*;
pub use self::order_search_parameters::*;
pub use self::paging::*;
pub use self::path_parameters::*;
pub use self::screening_event_requests::*;
pub use self::screening_event_schedule::*;
pub use self::screening_event_series_form::*;

mod ajax_response;
mod box_office_type_request;
mod order_search_parameters;
mod paging;
mod path_parameters;
mod screening_event_requests;
mod screening_event_schedule;
mod screening_event_series_form;

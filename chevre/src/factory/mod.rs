//! Domain types exchanged with the ticketing API.

mod category_code;
mod common;
mod creative_work;
mod event;
mod offer_catalog;
mod order;
mod payment_method_type;
mod place;

pub use self::category_code::*;
pub use self::common::*;
pub use self::creative_work::*;
pub use self::event::*;
pub use self::offer_catalog::*;
pub use self::order::*;
pub use self::payment_method_type::*;
pub use self::place::*;

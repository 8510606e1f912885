pub use self::admin_logger::*;

mod admin_logger;

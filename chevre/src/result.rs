use crate::error::ChevreError;

pub type ChevreResult<T> = Result<T, ChevreError>;

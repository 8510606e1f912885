use std::error::Error;
use std::fmt;

#[derive(Debug, PartialEq)]
pub enum ApplicationErrorType {
    Internal,
    Unprocessable,
    BadRequest,
    NotFound,
}

#[derive(Debug)]
pub struct ApplicationError {
    pub reason: String,
    pub error_type: ApplicationErrorType,
}

impl ApplicationError {
    pub fn new(reason: String) -> ApplicationError {
        ApplicationError::new_with_type(ApplicationErrorType::Internal, reason)
    }

    pub fn new_with_type(error_type: ApplicationErrorType, reason: String) -> ApplicationError {
        ApplicationError { reason, error_type }
    }

    pub fn unprocessable(reason: &str) -> ApplicationError {
        ApplicationError::new_with_type(ApplicationErrorType::Unprocessable, reason.to_string())
    }

    pub fn bad_request(reason: &str) -> ApplicationError {
        ApplicationError::new_with_type(ApplicationErrorType::BadRequest, reason.to_string())
    }

    pub fn not_found(reason: &str) -> ApplicationError {
        ApplicationError::new_with_type(ApplicationErrorType::NotFound, reason.to_string())
    }
}

impl fmt::Display for ApplicationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.reason)
    }
}

impl Error for ApplicationError {}

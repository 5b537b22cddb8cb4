pub mod error;

pub use error::{bad_request, json_error_handler, sms_error_response, validation_error_response};

pub mod error;

pub use error::{handle_domain_error, outcome_status, validation_error_response};

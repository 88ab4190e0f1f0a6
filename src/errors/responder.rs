use std::error::Error;

use super::codes::ErrorKind;
use super::condition::{summarize, ErrorCondition, FieldViolation};
use super::response::ErrorResponse;

/// Turns error conditions into error responses.
///
/// Every method is total: whatever it is given, it returns a response.
#[derive(Debug, Clone, Copy, Default)]
pub struct ErrorResponder {
    /// Drop the details of internal errors instead of echoing them to clients
    pub redact_internal_details: bool,
}

impl ErrorResponder {
    pub fn new(redact_internal_details: bool) -> Self {
        Self {
            redact_internal_details,
        }
    }

    /// Classify a condition and build its response
    pub fn respond(&self, condition: &ErrorCondition) -> ErrorResponse {
        match condition {
            ErrorCondition::NotFound(message) => self.handle_not_found(message),
            ErrorCondition::ValidationFailure(message) => self.handle_validation_failure(message),
            ErrorCondition::MalformedInput(violations) => self.handle_malformed_input(violations),
            ErrorCondition::Unclassified(message) => self.handle_unclassified(message.as_deref()),
        }
    }

    /// Respond to an arbitrary error. The source chain is searched for an
    /// [`ErrorCondition`]; anything else is unclassified.
    pub fn respond_to_error(&self, error: &(dyn Error + 'static)) -> ErrorResponse {
        let mut current: Option<&(dyn Error + 'static)> = Some(error);

        while let Some(err) = current {
            if let Some(condition) = err.downcast_ref::<ErrorCondition>() {
                return self.respond(condition);
            }
            current = err.source();
        }

        self.handle_unclassified(Some(&error.to_string()))
    }

    pub fn handle_not_found(&self, message: &str) -> ErrorResponse {
        ErrorResponse::new(ErrorKind::NotFound, Some(message.to_string()))
    }

    pub fn handle_validation_failure(&self, message: &str) -> ErrorResponse {
        ErrorResponse::new(ErrorKind::BadRequest, Some(message.to_string()))
    }

    pub fn handle_malformed_input(&self, violations: &[FieldViolation]) -> ErrorResponse {
        ErrorResponse::new(ErrorKind::ValidationError, Some(summarize(violations)))
    }

    pub fn handle_unclassified(&self, message: Option<&str>) -> ErrorResponse {
        let details = if self.redact_internal_details {
            None
        } else {
            message.map(str::to_string)
        };

        ErrorResponse::new(ErrorKind::InternalError, details)
    }
}

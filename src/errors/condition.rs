use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use validator::ValidationErrors;

use super::codes::ErrorKind;
use super::responder::ErrorResponder;

/// A classified reason a request could not be fulfilled.
///
/// Handlers return this as their error type; the router's error hook turns
/// it into an [`ErrorResponse`](super::ErrorResponse).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorCondition {
    /// The requested resource does not exist
    #[error("{0}")]
    NotFound(String),

    /// A business rule rejected the request
    #[error("{0}")]
    ValidationFailure(String),

    /// The request body or parameters are structurally invalid
    #[error("{}", summarize(.0))]
    MalformedInput(Vec<FieldViolation>),

    /// Anything else; the message may be absent
    #[error("{}", .0.as_deref().unwrap_or("unclassified error"))]
    Unclassified(Option<String>),
}

/// One rejected field and why
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Render violations as `field: message` pairs joined by `"; "`, ordered by
/// field so the same set always yields the same text.
pub fn summarize(violations: &[FieldViolation]) -> String {
    let mut sorted: Vec<&FieldViolation> = violations.iter().collect();
    sorted.sort();
    sorted
        .iter()
        .map(|v| format!("{}: {}", v.field, v.message))
        .collect::<Vec<_>>()
        .join("; ")
}

impl ErrorCondition {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn validation_failure(message: impl Into<String>) -> Self {
        Self::ValidationFailure(message.into())
    }

    pub fn malformed_input(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MalformedInput(vec![FieldViolation::new(field, message)])
    }

    pub fn unclassified(message: impl Into<String>) -> Self {
        Self::Unclassified(Some(message.into()))
    }

    /// Response category for this condition
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::ValidationFailure(_) => ErrorKind::BadRequest,
            Self::MalformedInput(_) => ErrorKind::ValidationError,
            Self::Unclassified(_) => ErrorKind::InternalError,
        }
    }
}

impl From<ValidationErrors> for ErrorCondition {
    fn from(errors: ValidationErrors) -> Self {
        let violations = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |error| {
                    let message = error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| error.code.to_string());
                    FieldViolation::new(field.to_string(), message)
                })
            })
            .collect();

        Self::MalformedInput(violations)
    }
}

impl From<JsonRejection> for ErrorCondition {
    fn from(rejection: JsonRejection) -> Self {
        Self::malformed_input("body", rejection.body_text())
    }
}

impl From<PathRejection> for ErrorCondition {
    fn from(rejection: PathRejection) -> Self {
        Self::malformed_input("path", rejection.body_text())
    }
}

impl From<anyhow::Error> for ErrorCondition {
    fn from(error: anyhow::Error) -> Self {
        match error.downcast::<ErrorCondition>() {
            Ok(condition) => condition,
            Err(other) => Self::Unclassified(Some(other.to_string())),
        }
    }
}

impl IntoResponse for ErrorCondition {
    fn into_response(self) -> Response {
        let mut response = ErrorResponder::default().respond(&self).into_response();
        // Picked up by the error hook, which re-renders with the configured responder
        response.extensions_mut().insert(self);
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Sample {
        #[validate(length(min = 1, message = "must not be blank"))]
        name: String,
        #[validate(range(min = 1))]
        quantity: u32,
    }

    #[test]
    fn test_kind_mapping() {
        assert_eq!(ErrorCondition::not_found("x").kind(), ErrorKind::NotFound);
        assert_eq!(
            ErrorCondition::validation_failure("x").kind(),
            ErrorKind::BadRequest
        );
        assert_eq!(
            ErrorCondition::malformed_input("f", "x").kind(),
            ErrorKind::ValidationError
        );
        assert_eq!(
            ErrorCondition::Unclassified(None).kind(),
            ErrorKind::InternalError
        );
    }

    #[test]
    fn test_summarize_is_ordered() {
        let a = vec![
            FieldViolation::new("price", "too low"),
            FieldViolation::new("name", "blank"),
        ];
        let b = vec![
            FieldViolation::new("name", "blank"),
            FieldViolation::new("price", "too low"),
        ];
        assert_eq!(summarize(&a), "name: blank; price: too low");
        assert_eq!(summarize(&a), summarize(&b));
        assert_eq!(summarize(&[]), "");
    }

    #[test]
    fn test_from_validation_errors() {
        let sample = Sample {
            name: String::new(),
            quantity: 0,
        };
        let condition = ErrorCondition::from(sample.validate().unwrap_err());

        match condition {
            ErrorCondition::MalformedInput(violations) => {
                assert_eq!(violations.len(), 2);
                assert!(violations.contains(&FieldViolation::new("name", "must not be blank")));
                // No message configured, so the validator code is used
                assert!(violations.contains(&FieldViolation::new("quantity", "range")));
            }
            other => panic!("unexpected condition: {:?}", other),
        }
    }

    #[test]
    fn test_from_anyhow_keeps_known_condition() {
        let error = anyhow::Error::new(ErrorCondition::not_found("Product with id 7 not found"));
        assert_eq!(
            ErrorCondition::from(error),
            ErrorCondition::not_found("Product with id 7 not found")
        );
    }

    #[test]
    fn test_from_anyhow_falls_back_to_unclassified() {
        let error = anyhow::anyhow!("disk on fire");
        assert_eq!(
            ErrorCondition::from(error),
            ErrorCondition::unclassified("disk on fire")
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(ErrorCondition::not_found("gone").to_string(), "gone");
        assert_eq!(
            ErrorCondition::malformed_input("name", "blank").to_string(),
            "name: blank"
        );
        assert_eq!(
            ErrorCondition::Unclassified(None).to_string(),
            "unclassified error"
        );
    }

    #[test]
    fn test_into_response_attaches_condition() {
        let condition = ErrorCondition::not_found("gone");
        let response = condition.clone().into_response();
        assert_eq!(response.status(), axum::http::StatusCode::NOT_FOUND);
        assert_eq!(response.extensions().get::<ErrorCondition>(), Some(&condition));
    }
}

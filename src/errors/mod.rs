//! Error conditions and the JSON error responses they map to

pub mod codes;
pub mod condition;
pub mod responder;
pub mod response;

pub use codes::ErrorKind;
pub use condition::{ErrorCondition, FieldViolation};
pub use responder::ErrorResponder;
pub use response::ErrorResponse;

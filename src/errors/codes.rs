/// Response categories for error conditions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Requested product does not exist
    NotFound,

    /// Business rule rejected the request
    BadRequest,

    /// Request body or parameters failed structural validation
    ValidationError,

    /// Anything not otherwise classified
    InternalError,
}

impl ErrorKind {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::NotFound => 404,
            Self::BadRequest => 400,
            Self::ValidationError => 400,
            Self::InternalError => 500,
        }
    }

    /// Short title sent as the `message` field of the error body
    pub fn title(&self) -> &'static str {
        match self {
            Self::NotFound => "Product Not Found",
            Self::BadRequest => "Bad Request",
            Self::ValidationError => "Validation Error",
            Self::InternalError => "Internal Server Error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ErrorKind::NotFound.status_code(), 404);
        assert_eq!(ErrorKind::BadRequest.status_code(), 400);
        assert_eq!(ErrorKind::ValidationError.status_code(), 400);
        assert_eq!(ErrorKind::InternalError.status_code(), 500);
    }

    #[test]
    fn test_titles() {
        assert_eq!(ErrorKind::NotFound.title(), "Product Not Found");
        assert_eq!(ErrorKind::BadRequest.title(), "Bad Request");
        assert_eq!(ErrorKind::ValidationError.title(), "Validation Error");
        assert_eq!(ErrorKind::InternalError.title(), "Internal Server Error");
    }
}

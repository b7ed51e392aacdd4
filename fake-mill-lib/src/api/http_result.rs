use http::StatusCode;
use thiserror::Error;

/// Handler result, T is typically a hyper::Response
/// HttpError is rendered as a JSON error body
pub type HttpResult<T> = std::result::Result<T, HttpError>;

/// Describes things that can go wrong while answering a request
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HttpError {
    #[error("{0} parameter is required")]
    MissingParameter(&'static str),

    #[error("not found")]
    NotFound(String),

    #[error("method not allowed")]
    MethodNotAllowed,

    #[error("failed to build response: {0}")]
    Response(String),
}

impl HttpError {
    /// Machine readable error code sent alongside the message
    pub fn code(&self) -> &'static str {
        match self {
            HttpError::MissingParameter(_) => "missing_required_parameter",
            HttpError::NotFound(_) => "not_found",
            HttpError::MethodNotAllowed => "method_not_allowed",
            HttpError::Response(_) => "internal_error",
        }
    }
}

impl From<HttpError> for StatusCode {
    fn from(e: HttpError) -> StatusCode {
        match e {
            HttpError::MissingParameter(_) => StatusCode::BAD_REQUEST,
            HttpError::NotFound(_) => StatusCode::NOT_FOUND,
            HttpError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            HttpError::Response(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping() {
        assert_eq!(StatusCode::from(HttpError::MissingParameter("cpf")), StatusCode::BAD_REQUEST);
        assert_eq!(StatusCode::from(HttpError::NotFound("/x".into())), StatusCode::NOT_FOUND);
        assert_eq!(StatusCode::from(HttpError::MethodNotAllowed), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(
            StatusCode::from(HttpError::Response("boom".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn missing_parameter_message() {
        let err = HttpError::MissingParameter("phone_number");
        assert_eq!(err.to_string(), "phone_number parameter is required");
        assert_eq!(err.code(), "missing_required_parameter");
    }
}

use actix_web::{
    error::{InternalError, JsonPayloadError},
    http::StatusCode,
    HttpRequest, HttpResponse,
};
use tc_core::errors::DomainError;
use tracing::warn;

use crate::dto::ErrorResponse;

/// Maps a domain error to the status used when it cannot travel in a
/// 200 body's `err` field
pub fn status_for(error: &DomainError) -> StatusCode {
    match error {
        DomainError::RequestShape { .. } => StatusCode::BAD_REQUEST,
        DomainError::Token(_) => StatusCode::INTERNAL_SERVER_ERROR,
        DomainError::Store(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}

/// Builds an `{err}` response for a domain error
pub fn domain_error_response(error: &DomainError) -> HttpResponse {
    HttpResponse::build(status_for(error)).json(ErrorResponse {
        err: error.to_string(),
    })
}

/// Rejects bodies that are not valid JSON for the endpoint
///
/// Registered through `web::JsonConfig`; the request is answered with 400
/// before any service code runs.
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    let error = DomainError::RequestShape {
        message: err.to_string(),
    };
    warn!(
        path = %req.path(),
        code = error.error_code(),
        error = %error,
        "Rejected request body"
    );

    let response = domain_error_response(&error);
    InternalError::from_response(err, response).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tc_core::errors::{StoreError, TokenError};

    #[test]
    fn test_status_for_each_kind() {
        let shape = DomainError::RequestShape {
            message: "EOF while parsing a value".to_string(),
        };
        assert_eq!(status_for(&shape), StatusCode::BAD_REQUEST);

        let token = DomainError::from(TokenError::InvalidSignature);
        assert_eq!(status_for(&token), StatusCode::INTERNAL_SERVER_ERROR);

        let store = DomainError::from(StoreError::unavailable("connection refused"));
        assert_eq!(status_for(&store), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_request_shape_message() {
        let error = DomainError::RequestShape {
            message: "expected value".to_string(),
        };
        assert_eq!(error.to_string(), "error to request: expected value");
    }
}

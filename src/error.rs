use actix_web::HttpResponse;
use actix_web::ResponseError;
use actix_web::http::StatusCode;

/// Every failure a request can end in.
///
/// Anything that reaches the client is rendered as `{"message": ...}`.
/// Internal details are logged on conversion and never serialized.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Validation(String),
    #[error("Invalid credentials")]
    Credentials,
    #[error("Not authenticated")]
    Unauthenticated,
    #[error("User already exists")]
    Conflict,
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("Internal server error")]
    Internal,
}

impl Error {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
    /// Logs the underlying cause and collapses it into an opaque 500.
    pub fn internal(cause: impl std::fmt::Display) -> Self {
        log::error!("internal error: {}", cause);
        Self::Internal
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Credentials => StatusCode::BAD_REQUEST,
            Self::Conflict => StatusCode::BAD_REQUEST,
            Self::Unauthenticated => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .json(serde_json::json!({ "message": self.to_string() }))
    }
}

#[cfg(feature = "database")]
impl From<tokio_postgres::Error> for Error {
    fn from(e: tokio_postgres::Error) -> Self {
        use tokio_postgres::error::SqlState;
        if e.code() == Some(&SqlState::UNIQUE_VIOLATION) {
            Self::Conflict
        } else {
            Self::internal(e)
        }
    }
}

impl From<actix_web::error::BlockingError> for Error {
    fn from(e: actix_web::error::BlockingError) -> Self {
        Self::internal(e)
    }
}

impl From<jsonwebtoken::errors::Error> for Error {
    fn from(e: jsonwebtoken::errors::Error) -> Self {
        Self::internal(e)
    }
}

impl From<argon2::password_hash::Error> for Error {
    fn from(e: argon2::password_hash::Error) -> Self {
        Self::internal(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::MessageBody;

    fn body(e: Error) -> serde_json::Value {
        let bytes = e.error_response().into_body().try_into_bytes().unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn credentials_are_uniform() {
        assert!(Error::Credentials.status_code() == StatusCode::BAD_REQUEST);
        assert!(body(Error::Credentials) == serde_json::json!({ "message": "Invalid credentials" }));
    }

    #[test]
    fn not_found_names_the_entity() {
        assert!(Error::NotFound("Task").status_code() == StatusCode::NOT_FOUND);
        assert!(body(Error::NotFound("User")) == serde_json::json!({ "message": "User not found" }));
    }

    #[test]
    fn internal_hides_cause() {
        let e = Error::internal("password for db is hunter2");
        assert!(e.status_code() == StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body(e) == serde_json::json!({ "message": "Internal server error" }));
    }
}

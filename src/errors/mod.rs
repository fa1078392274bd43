use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use derive_more::Display;
use serde::Serialize;

use crate::entities::order::{OrderAction, OrderStatus};

/// Errors rendered by the mock order API.
#[derive(Debug, Display)]
pub enum ApiError {
    #[display("not found")]
    NotFound,
    #[display("bad request: {}", _0)]
    BadRequest(String),
    #[display("internal")]
    Internal,
}

#[derive(Serialize)]
struct ErrBody {
    error: String,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrBody {
            error: self.to_string(),
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RepoErr {
    #[error("not found")]
    NotFound,
    #[error("cannot {action} an order that is {status}")]
    PreconditionFailed {
        action: OrderAction,
        status: OrderStatus,
    },
    #[error("invalid: {0}")]
    Invalid(String),
}

impl From<RepoErr> for ApiError {
    fn from(e: RepoErr) -> Self {
        match e {
            RepoErr::NotFound => ApiError::NotFound,
            RepoErr::PreconditionFailed { .. } | RepoErr::Invalid(_) => {
                ApiError::BadRequest(e.to_string())
            }
        }
    }
}

/// Failures at the remote API boundary.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("invalid api base url: {0}")]
    InvalidBaseUrl(String),
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("api responded with status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("could not decode api response: {0}")]
    Decode(#[source] reqwest::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum TransitionError {
    #[error("cannot {action} an order that is {status}")]
    NotAllowed {
        action: OrderAction,
        status: OrderStatus,
    },
    #[error(transparent)]
    Remote(#[from] ClientError),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
}

use rocket::{
    http::Status,
    request::Request,
    response::{self, Responder},
    serde::json::Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error("{0}")]
    Validation(String),
    #[error("{0} not found")]
    NotFound(String),
}

#[derive(Serialize)]
pub struct ActionResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ActionResponse {
    pub fn ok() -> Self {
        ActionResponse {
            success: true,
            error: None,
        }
    }

    pub fn error(msg: &str) -> Self {
        ActionResponse {
            success: false,
            error: Some(msg.to_string()),
        }
    }
}

// Validation failures resolve normally with `success: false`, the way the
// front end already handles them; only missing records change the status.
impl<'r> Responder<'r, 'static> for ServiceError {
    fn respond_to(self, req: &'r Request<'_>) -> response::Result<'static> {
        let body = Json(ActionResponse::error(&self.to_string()));
        match self {
            ServiceError::Validation(_) => body.respond_to(req),
            ServiceError::NotFound(_) => (Status::NotFound, body).respond_to(req),
        }
    }
}

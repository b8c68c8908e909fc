//! Shared response envelope types for API handlers.
//!
//! Mutations answer with a `status` marker plus either a `data` payload or a
//! human-readable `message`; listings answer with `count` + `data`.

use serde::Serialize;

/// Value of the `status` field on successful mutations.
pub const SUCCESS: &str = "success";

/// `{ "status": "success", "data": T }` envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub status: &'static str,
    pub data: T,
}

impl<T: Serialize> DataResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            status: SUCCESS,
            data,
        }
    }
}

/// `{ "status": "success", "message": "..." }` envelope.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub status: &'static str,
    pub message: String,
}

impl MessageResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: SUCCESS,
            message: message.into(),
        }
    }
}

/// `{ "count": n, "data": [...] }` envelope for unpaginated listings.
#[derive(Debug, Serialize)]
pub struct ListResponse<T: Serialize> {
    pub count: usize,
    pub data: Vec<T>,
}

impl<T: Serialize> From<Vec<T>> for ListResponse<T> {
    fn from(data: Vec<T>) -> Self {
        Self {
            count: data.len(),
            data,
        }
    }
}

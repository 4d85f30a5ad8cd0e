use actix_web::error::InternalError;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde_derive::Serialize;

#[derive(Serialize)]
pub struct JsonResponse<T> {
    pub(crate) status: String,
    pub(crate) message: String,
    pub(crate) code: u32,
    pub(crate) id: Option<i32>,
    pub(crate) item: Option<T>,
    pub(crate) list: Option<Vec<T>>,
}

pub struct JsonResponseBuilder<T>
where
    T: serde::Serialize,
{
    id: Option<i32>,
    item: Option<T>,
    list: Option<Vec<T>>,
}

impl<T> Default for JsonResponseBuilder<T>
where
    T: serde::Serialize,
{
    fn default() -> Self {
        Self {
            id: None,
            item: None,
            list: None,
        }
    }
}

impl<T> JsonResponse<T>
where
    T: serde::Serialize,
{
    pub fn build() -> JsonResponseBuilder<T> {
        JsonResponseBuilder::default()
    }
}

impl<T> JsonResponseBuilder<T>
where
    T: serde::Serialize,
{
    pub fn set_id(mut self, id: i32) -> Self {
        self.id = Some(id);
        self
    }

    pub fn set_item(mut self, item: T) -> Self {
        self.item = Some(item);
        self
    }

    pub fn set_list(mut self, list: Vec<T>) -> Self {
        self.list = Some(list);
        self
    }

    fn into_response(self, status: &str, message: String, code: StatusCode) -> JsonResponse<T> {
        JsonResponse {
            status: status.to_string(),
            message,
            code: code.as_u16() as u32,
            id: self.id,
            item: self.item,
            list: self.list,
        }
    }

    pub fn ok(self, message: impl Into<String>) -> HttpResponse {
        let message = message.into();
        let message = if message.trim().is_empty() {
            "Success".to_string()
        } else {
            message
        };
        HttpResponse::Ok().json(self.into_response("OK", message, StatusCode::OK))
    }

    fn error(self, code: StatusCode, message: String, fallback: &str) -> actix_web::Error {
        let message = if message.trim().is_empty() {
            fallback.to_string()
        } else {
            message
        };
        let body = self.into_response("Error", message.clone(), code);
        InternalError::from_response(message, HttpResponse::build(code).json(body)).into()
    }

    pub fn bad_request(self, message: impl Into<String>) -> actix_web::Error {
        self.error(StatusCode::BAD_REQUEST, message.into(), "Bad request")
    }

    pub fn form_error(self, message: impl Into<String>) -> actix_web::Error {
        self.error(StatusCode::BAD_REQUEST, message.into(), "Validation error")
    }

    pub fn forbidden(self, message: impl Into<String>) -> actix_web::Error {
        self.error(StatusCode::FORBIDDEN, message.into(), "Forbidden")
    }

    pub fn not_found(self, message: impl Into<String>) -> actix_web::Error {
        self.error(StatusCode::NOT_FOUND, message.into(), "Object not found")
    }

    pub fn internal_server_error(self, message: impl Into<String>) -> actix_web::Error {
        self.error(
            StatusCode::INTERNAL_SERVER_ERROR,
            message.into(),
            "Internal error",
        )
    }
}

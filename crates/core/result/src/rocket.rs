use std::io::Cursor;

use rocket::{
    http::{ContentType, Status},
    response::{self, Responder},
    Request, Response,
};

use crate::{Error, ErrorType};

impl Error {
    /// HTTP status this error should be reported with
    pub fn rocket_status(&self) -> Status {
        match self.error_type {
            ErrorType::LabelMe => Status::InternalServerError,

            ErrorType::NoBody => Status::BadRequest,
            ErrorType::InvalidBody { .. } => Status::BadRequest,
            ErrorType::FailedValidation { .. } => Status::BadRequest,
            ErrorType::PayloadTooLarge => Status::UnprocessableEntity,
            ErrorType::IOError => Status::UnprocessableEntity,

            ErrorType::NotAuthorized => Status::Forbidden,
            ErrorType::InvalidCredential => Status::InternalServerError,

            ErrorType::DatabaseError { .. } => Status::InternalServerError,
            ErrorType::InternalError => Status::InternalServerError,
            ErrorType::NotFound => Status::NotFound,
            ErrorType::UnprocessableEntity => Status::UnprocessableEntity,
        }
    }
}

/// HTTP response builder for Error enum
impl<'r> Responder<'r, 'static> for Error {
    fn respond_to(self, _: &'r Request<'_>) -> response::Result<'static> {
        let status = self.rocket_status();

        // Serialize the error data structure into JSON.
        let string = serde_json::to_string(&self).unwrap();

        // Build and send the request.
        Response::build()
            .sized_body(string.len(), Cursor::new(string))
            .header(ContentType::new("application", "json"))
            .status(status)
            .ok()
    }
}

use rocket::data::{Data, FromData, Limits, Outcome};
use rocket::request::{local_cache, Request};
use rocket::response::{self, content, Responder};
use serde::{Deserialize, Serialize};

use bloom_result::{create_error, Error};

// Modified version of rocket::serde::json which stores the error so it
// can be passed on to the error catcher, and which reports an absent
// body separately from a body that fails to deserialise.

#[derive(Debug, Clone)]
pub struct Json<T>(pub T);

impl<'r, T: Deserialize<'r>> Json<T> {
    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }

    fn from_str(s: &'r str) -> Result<Self, Error> {
        serde_json::from_str(s).map(Json).map_err(|e| {
            create_error!(InvalidBody {
                error: e.to_string()
            })
        })
    }

    async fn from_data_inner(req: &'r Request<'_>, data: Data<'r>) -> Result<Self, Error> {
        let limit = req.limits().get("json").unwrap_or(Limits::JSON);
        let string = match data.open(limit).into_string().await {
            Ok(s) if s.is_complete() => s.into_inner(),
            Ok(_) => return Err(create_error!(PayloadTooLarge)),
            Err(_) => return Err(create_error!(IOError)),
        };

        if string.trim().is_empty() {
            return Err(create_error!(NoBody));
        }

        Self::from_str(local_cache!(req, string))
    }
}

impl<T> std::ops::Deref for Json<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[rocket::async_trait]
impl<'r, T: Deserialize<'r> + std::fmt::Debug> FromData<'r> for Json<T> {
    type Error = Error;

    async fn from_data(req: &'r Request<'_>, data: Data<'r>) -> Outcome<'r, Self> {
        match Self::from_data_inner(req, data).await {
            Ok(value) => Outcome::Success(value),
            Err(e) => {
                req.local_cache(|| Some(e.clone()));
                Outcome::Error((e.rocket_status(), e))
            }
        }
    }
}

impl<'r, T: Serialize> Responder<'r, 'static> for Json<T> {
    fn respond_to(self, req: &'r Request<'_>) -> response::Result<'static> {
        match serde_json::to_string(&self.0) {
            Ok(string) => content::RawJson(string).respond_to(req),
            Err(_) => create_error!(InternalError).respond_to(req),
        }
    }
}

impl<T: validator::Validate> validator::Validate for Json<T> {
    fn validate(&self) -> Result<(), validator::ValidationErrors> {
        self.0.validate()
    }
}

use bloom_result::{create_error, Error, Result};
use rocket::{catch, Catcher, Request};

#[catch(400)]
pub fn bad_request(req: &Request) -> Result<()> {
    match req.local_cache(|| None::<Error>) {
        Some(e) => Err(e.clone()),
        None => Err(create_error!(InvalidBody {
            error: "bad request".to_string()
        })),
    }
}

#[catch(404)]
pub fn not_found() -> Result<()> {
    Err(create_error!(NotFound))
}

#[catch(422)]
pub fn unprocessable_entity(req: &Request) -> Result<()> {
    match req.local_cache(|| None::<Error>) {
        Some(e) => Err(e.clone()),
        None => Err(create_error!(UnprocessableEntity)),
    }
}

pub fn all_catchers() -> Vec<Catcher> {
    catchers![bad_request, not_found, unprocessable_entity]
}

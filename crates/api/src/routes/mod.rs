use rocket::{Build, Rocket};

mod root;
mod trusted;

pub fn mount(rocket: Rocket<Build>) -> Rocket<Build> {
    rocket
        .mount("/", routes![root::root])
        .mount("/trusted", trusted::routes())
}

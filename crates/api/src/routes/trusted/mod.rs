use rocket::Route;

mod report_publication;

pub fn routes() -> Vec<Route> {
    routes![report_publication::report_publication]
}

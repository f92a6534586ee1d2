#[macro_use]
extern crate rocket;
#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_json;

pub mod routes;
pub mod util;

use bloom_database::{Database, DatabaseInfo};
use rocket::{Build, Rocket};
use rocket_cors::AllowedOrigins;
use std::str::FromStr;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Connect the database and build the web server
pub async fn web() -> Rocket<Build> {
    // Setup database
    let db = DatabaseInfo::Auto
        .connect()
        .await
        .expect("Database connection failed.");

    db.migrate_database()
        .await
        .expect("Failed to migrate the database.");

    build(db)
}

/// Configure Rocket for the given database
pub fn build(db: Database) -> Rocket<Build> {
    let cors = rocket_cors::CorsOptions {
        allowed_origins: AllowedOrigins::All,
        allowed_methods: [
            "Get", "Put", "Post", "Delete", "Options", "Head", "Trace", "Connect", "Patch",
        ]
        .iter()
        .map(|s| FromStr::from_str(s).unwrap())
        .collect(),
        ..Default::default()
    }
    .to_cors()
    .expect("Failed to create CORS.");

    routes::mount(rocket::build())
        .mount("/", rocket_cors::catch_all_options_routes())
        .register("/", util::catchers::all_catchers())
        .manage(db)
        .manage(cors.clone())
        .attach(cors)
}

#[launch]
async fn rocket() -> _ {
    let _guard = util::log::setup_logging();

    info!("Starting Bloom API server [version {}].", VERSION);

    bloom_config::init().await;

    web().await
}

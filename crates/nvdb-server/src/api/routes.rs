//! Route table
//!
//! Routes:
//! - GET  /health
//! - GET  {prefix}/
//! - GET  {prefix}/config
//! - GET  {prefix}/db/test
//! - POST {prefix}/embedding
//! - POST {prefix}/embedding-id
//! - POST {prefix}/embedding/batch/all
//! - POST {prefix}/similarity-compare

use nvdb_infrastructure::AppContext;
use rocket::{Build, Rocket, catchers, routes};

use super::cors::Cors;
use super::error::{bad_request, internal_error, not_found, unprocessable};
use super::handlers::{
    config, db_test, embed_batch, embed_record, embed_text, health, root, similarity_compare,
};

/// Build the Rocket application around `context`
pub fn api_rocket(context: AppContext) -> Rocket<Build> {
    let prefix = context.config.server.mount_path();

    rocket::build()
        .manage(context)
        .attach(Cors)
        .mount("/", routes![health])
        .mount(
            prefix,
            routes![
                root,
                config,
                db_test,
                embed_text,
                embed_record,
                embed_batch,
                similarity_compare
            ],
        )
        .register(
            "/",
            catchers![bad_request, not_found, unprocessable, internal_error],
        )
}

//! Applies the migrations under `./migrations` to the database named by
//! `BACKEND_DB_CONNECTION_STRING`.

use std::env;
use std::error::Error;

use movine::Movine;
use postgres::{Client, NoTls};

use log::{debug, info, initialize_logger};

fn main() -> Result<(), Box<dyn Error>> {
    dotenv::dotenv().ok();

    let logger = initialize_logger();
    let connection_string = env::var("BACKEND_DB_CONNECTION_STRING")
        .map_err(|e| format!("could not read BACKEND_DB_CONNECTION_STRING: {}", e))?;

    debug!(logger, "Connecting to database...");

    let client = Client::connect(&connection_string, NoTls)?;

    let mut movine = Movine::new(client);
    movine.set_migration_dir("./migrations");

    if movine.status().is_err() {
        debug!(logger, "Initializing movine...");
        movine
            .initialize()
            .map_err(|e| format!("failed to initialize movine: {:?}", e))?;
    }

    debug!(logger, "Running migrations...");
    movine
        .up()
        .map_err(|e| format!("failed to run migrations: {:?}", e))?;

    info!(logger, "Database is up to date."; "version" => info::VERSION);

    Ok(())
}

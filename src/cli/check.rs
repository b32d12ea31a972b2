//! `vetclinic check` handlers.

use diesel::prelude::*;

use crate::adapter::sqlite::database::connection::create_pool;
use crate::cli::{output, CheckCommand};
use crate::config::Config;
use crate::error::{Error, Result};

/// Probe the configured database: open a connection and run a trivial
/// statement, reporting the outcome.
pub fn handle(cmd: &CheckCommand, config: &Config) -> Result<()> {
    match cmd {
        CheckCommand::Db => {
            output::section("Database check");
            output::key_value("url", &config.database.url);

            let pool = create_pool(&config.database.url)?;
            let mut conn = pool
                .get()
                .map_err(|e| Error::Connection(e.to_string()))?;
            diesel::sql_query("SELECT 1")
                .execute(&mut conn)
                .map_err(|e| Error::Database(e.to_string()))?;

            output::ok("database reachable");
            Ok(())
        }
    }
}

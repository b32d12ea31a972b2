use clap::Parser;
use tracing::info;

use vetclinic::cli::{self, output, Cli};
use vetclinic::config::Config;

fn main() {
    let _ = dotenvy::dotenv();

    let args = Cli::parse();

    // A missing file at the default path falls back to built-in defaults;
    // an unreadable or invalid file is always an error.
    let config = if args.config.exists() {
        match Config::load(&args.config) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Failed to load config: {e}");
                std::process::exit(1);
            }
        }
    } else if args.config.as_os_str() == "config.toml" {
        Config::default()
    } else {
        eprintln!("Config file not found: {}", args.config.display());
        std::process::exit(1);
    };

    config.init_logging();
    info!(database = %config.database.url, "vetclinic starting");

    if let Err(e) = cli::run(args.command, &config) {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}

//! `banan` command line front end.

use clap::Parser;

mod commands;
mod output;

use banan_pos::PosConfig;
use banan_pos::logger::init_logger;
use commands::Cli;

#[tokio::main]
async fn main() {
    // .env is optional
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let config = match PosConfig::from_env() {
        Ok(config) => cli.apply_overrides(config),
        Err(e) => {
            output::print_error(&e.to_string());
            std::process::exit(2);
        }
    };

    let _guard = match init_logger(config.log_level.as_deref(), config.log_dir.as_deref()) {
        Ok(guard) => guard,
        Err(e) => {
            output::print_error(&format!("Failed to initialize logging: {}", e));
            std::process::exit(2);
        }
    };

    if let Err(e) = cli.execute(config).await {
        output::print_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

mod adapters;
mod cli;
mod config;
mod core;

use clap::Parser;

use cli::context::Settings;
use cli::{Cli, Commands};
use config::app_config::AppConfig;

fn main() {
    let args = Cli::parse();
    cli::logging::init(args.verbose, args.quiet);

    let result = AppConfig::load(args.config.as_deref()).and_then(|config| {
        let settings = Settings::resolve(&args, &config);
        match &args.command {
            Commands::Public { key_id, output } => cli::commands::export::execute_public(
                &settings,
                key_id,
                output.as_deref(),
                args.quiet,
            ),
            Commands::Secret { key_id, output } => cli::commands::export::execute_secret(
                &settings,
                key_id,
                output.as_deref(),
                args.quiet,
            ),
            Commands::Cache => cli::commands::cache::execute(&settings),
            Commands::Status => cli::commands::status::execute(&settings),
        }
    });

    if let Err(e) = result {
        cli::output::error(&format!("Error: {e}"));
        std::process::exit(1);
    }
}

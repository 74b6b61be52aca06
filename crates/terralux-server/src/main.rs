use std::sync::Arc;

use clap::Parser;
use tracing::info;

use terralux_migration::{Migrator, MigratorTrait};
use terralux_server::model::{Cli, Command, Configuration};
use terralux_server::seed;
use terralux_server::startup::{http_server, init_logging};
use terralux_suggest::{AnthropicSuggester, ModelSuggester};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let configuration = Configuration::new(&cli)?;

    let _log_guard = init_logging(&configuration.logging_config())?;

    let db = configuration.database_connection().await?;
    Migrator::up(&db, None).await?;

    match cli.command {
        Some(Command::Seed { clear }) => seed::run_seed(&db, clear).await,
        Some(Command::SeedAi {
            vendors_only,
            limit,
        }) => {
            let suggester = AnthropicSuggester::new(configuration.suggest_config()?);
            seed::run_seed_ai(&db, &suggester, vendors_only, limit).await
        }
        Some(Command::Suggest {
            vendor_id,
            auto_create,
        }) => {
            let suggester = AnthropicSuggester::new(configuration.suggest_config()?);
            seed::run_suggest(&db, &suggester, vendor_id, auto_create).await
        }
        None => {
            let suggester: Arc<dyn ModelSuggester> =
                Arc::new(AnthropicSuggester::new(configuration.suggest_config()?));

            let address = configuration.server_address();
            let port = configuration.server_port();
            info!("starting server on {}:{}", address, port);

            http_server(
                db,
                suggester,
                configuration.context_path(),
                address,
                port,
            )?
            .await?;
            Ok(())
        }
    }
}

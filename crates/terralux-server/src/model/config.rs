//! Command line arguments and application configuration
//!
//! Settings come from `conf/application.yml`, overlaid by `TERRALUX_*`
//! environment variables and CLI flags. Secrets (`ANTHROPIC_API_KEY`,
//! `DATABASE_URL`) are read from the plain environment so they never live
//! in the config file.

use std::time::Duration;

use clap::{Parser, Subcommand};
use config::{Config, Environment};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use terralux_common::TerraluxError;
use terralux_suggest::SuggestConfig;

use crate::startup::logging::LoggingConfig;

const DEFAULT_SERVER_PORT: u16 = 8080;
const DEFAULT_CONTEXT_PATH: &str = "/api";

/// Command line arguments for the server
#[derive(Debug, Parser)]
#[command(name = "terralux-server", about = "TerraLux building systems index")]
pub struct Cli {
    #[arg(long = "db-url", env = "DATABASE_URL")]
    pub database_url: Option<String>,
    #[arg(short = 'p', long = "port")]
    pub port: Option<u16>,
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Batch entry points; the default (no subcommand) serves HTTP.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Seed the fixed vendor and model dataset
    Seed {
        /// Clear existing vendors and models first
        #[arg(long)]
        clear: bool,
    },
    /// Seed vendors and derive their models with the suggestion client
    SeedAi {
        /// Only create vendors, skip model generation
        #[arg(long)]
        vendors_only: bool,
        /// Limit the number of vendors to process
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Generate suggestions for one existing vendor
    Suggest {
        /// Vendor id
        vendor_id: i64,
        /// Persist the suggested models instead of only printing them
        #[arg(long)]
        auto_create: bool,
    },
}

/// Application configuration loaded from config files and environment
#[derive(Clone, Debug, Default)]
pub struct Configuration {
    pub config: Config,
}

impl Configuration {
    pub fn new(cli: &Cli) -> anyhow::Result<Self> {
        let mut config_builder = Config::builder()
            .add_source(config::File::with_name("conf/application.yml").required(false))
            .add_source(
                Environment::with_prefix("terralux")
                    .separator("_")
                    .try_parsing(true),
            );

        if let Some(url) = &cli.database_url {
            config_builder = config_builder.set_override("db.url", url.clone())?;
        }
        if let Some(port) = cli.port {
            config_builder = config_builder.set_override("server.port", i64::from(port))?;
        }

        let config = config_builder.build()?;

        Ok(Configuration { config })
    }

    pub fn server_address(&self) -> String {
        self.config
            .get_string("server.address")
            .unwrap_or("0.0.0.0".to_string())
    }

    pub fn server_port(&self) -> u16 {
        self.config
            .get_int("server.port")
            .unwrap_or(DEFAULT_SERVER_PORT.into()) as u16
    }

    pub fn context_path(&self) -> String {
        self.config
            .get_string("server.contextPath")
            .unwrap_or(DEFAULT_CONTEXT_PATH.to_string())
    }

    pub fn database_url(&self) -> anyhow::Result<String> {
        self.config
            .get_string("db.url")
            .or_else(|_| std::env::var("DATABASE_URL"))
            .map_err(|_| {
                TerraluxError::ConfigError(
                    "database URL missing: set db.url or DATABASE_URL".to_string(),
                )
                .into()
            })
    }

    pub async fn database_connection(&self) -> anyhow::Result<DatabaseConnection> {
        let max_connections = self.config.get_int("db.pool.maxConnections").unwrap_or(20) as u32;
        let connect_timeout = self.config.get_int("db.pool.connectTimeout").unwrap_or(30) as u64;

        let mut opt = ConnectOptions::new(self.database_url()?);
        opt.max_connections(max_connections)
            .connect_timeout(Duration::from_secs(connect_timeout))
            .sqlx_logging(false);

        Ok(Database::connect(opt).await?)
    }

    /// Suggestion client settings; the API key comes from the environment.
    pub fn suggest_config(&self) -> anyhow::Result<SuggestConfig> {
        let api_key = self
            .config
            .get_string("anthropic.apiKey")
            .or_else(|_| std::env::var("ANTHROPIC_API_KEY"))
            .map_err(|_| {
                TerraluxError::ConfigError("ANTHROPIC_API_KEY is not set".to_string())
            })?;

        let mut suggest = SuggestConfig::new(api_key);
        if let Ok(model_id) = self.config.get_string("anthropic.model") {
            suggest.model_id = model_id;
        }
        if let Ok(max_tokens) = self.config.get_int("anthropic.maxTokens") {
            suggest.max_tokens = max_tokens as u32;
        }
        if let Ok(base_url) = self.config.get_string("anthropic.baseUrl") {
            suggest.base_url = base_url;
        }

        Ok(suggest)
    }

    pub fn logging_config(&self) -> LoggingConfig {
        LoggingConfig::from_config(
            self.config.get_string("logging.dir").ok(),
            self.config.get_bool("logging.console").unwrap_or(true),
            self.config.get_bool("logging.file").unwrap_or(false),
            self.config
                .get_string("logging.level")
                .unwrap_or("info".to_string()),
        )
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn test_cli_defaults_to_serve() {
        let cli = Cli::parse_from(["terralux-server"]);
        assert!(cli.command.is_none());
        assert!(cli.database_url.is_none());
    }

    #[test]
    fn test_cli_seed_flags() {
        let cli = Cli::parse_from(["terralux-server", "seed", "--clear"]);
        assert!(matches!(cli.command, Some(Command::Seed { clear: true })));
    }

    #[test]
    fn test_cli_seed_ai_flags() {
        let cli = Cli::parse_from([
            "terralux-server",
            "seed-ai",
            "--vendors-only",
            "--limit",
            "3",
        ]);
        match cli.command {
            Some(Command::SeedAi {
                vendors_only,
                limit,
            }) => {
                assert!(vendors_only);
                assert_eq!(limit, Some(3));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_cli_suggest_args() {
        let cli = Cli::parse_from(["terralux-server", "suggest", "7", "--auto-create"]);
        match cli.command {
            Some(Command::Suggest {
                vendor_id,
                auto_create,
            }) => {
                assert_eq!(vendor_id, 7);
                assert!(auto_create);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_configuration_defaults() {
        let cli = Cli::parse_from(["terralux-server"]);
        let configuration = Configuration::new(&cli).unwrap();
        assert_eq!(configuration.server_address(), "0.0.0.0");
        assert_eq!(configuration.server_port(), DEFAULT_SERVER_PORT);
        assert_eq!(configuration.context_path(), "/api");
    }

    #[test]
    fn test_cli_overrides_port() {
        let cli = Cli::parse_from(["terralux-server", "--port", "9000"]);
        let configuration = Configuration::new(&cli).unwrap();
        assert_eq!(configuration.server_port(), 9000);
    }
}

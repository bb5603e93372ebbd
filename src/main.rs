use anyhow::Result;
use clap::{Parser, Subcommand};

use recipe_finder::config::Config;

#[derive(Parser)]
#[command(name = "recipe-finder", version, about = "Search recipes and keep a personal collection")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the collection API (default)
    Serve {
        /// Overrides RECIPE_PORT
        #[arg(long)]
        port: Option<u16>,
    },
    /// Interactive search client
    Client,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    recipe_finder::init_tracing();

    let mut config = Config::load()?;
    match cli.command.unwrap_or(Command::Serve { port: None }) {
        Command::Serve { port } => {
            if let Some(port) = port {
                config.port = port;
            }
            recipe_finder::run_server(config).await
        }
        Command::Client => recipe_finder::run_client(config).await,
    }
}

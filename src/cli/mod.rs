pub mod commands;
pub mod utils;

use clap::{Parser, Subcommand};
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "bookmarkctl")]
#[command(about = "Operations CLI for the Bookmark API")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Apply pending database migrations")]
    Migrate,

    #[command(about = "Mint a development JWT for a user")]
    Token {
        #[arg(long, help = "User id (UUID) for the token subject")]
        user_id: Uuid,
        #[arg(long, help = "Email claim for the token")]
        email: String,
    },

    #[command(about = "Check server health from the /health endpoint")]
    Health {
        #[arg(long, help = "Server base URL (defaults to BOOKMARK_API_URL or localhost)")]
        url: Option<String>,
    },
}

#[derive(Debug, Clone)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);

    match cli.command {
        Commands::Migrate => commands::migrate::handle(output_format).await,
        Commands::Token { user_id, email } => {
            commands::token::handle(user_id, email, output_format).await
        }
        Commands::Health { url } => commands::health::handle(url, output_format).await,
    }
}

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;

use naiin::api;
use naiin::auth::{FirebaseIdentity, IdentityProvider};
use naiin::client::SearchClient;
use naiin::config::CONFIG;
use naiin::error::AppError;
use naiin::state::AppState;

#[derive(Parser)]
#[command(name = "naiin", version, about = "n.ai.in search demo")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the web server (default)
    Serve {
        #[arg(long)]
        port: Option<u16>,
    },
    /// Query a running server's /api/search and print the payload
    Search {
        query: String,
        /// Base URL of the server, defaults to API_BASE_URL
        #[arg(long)]
        api: Option<String>,
    },
    /// Sign in against the identity provider
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(true)
        .init();

    let cli = Cli::parse();
    match cli.command.unwrap_or(Command::Serve { port: None }) {
        Command::Serve { port } => {
            let mut config = CONFIG.clone();
            if let Some(port) = port {
                config.port = port;
            }
            tracing::info!("results source: {}", config.results_source);
            let listener = TcpListener::bind(config.bind_addr()).await?;
            api::serve(listener, AppState::new(config)).await?;
        }
        Command::Search { query, api } => {
            let client = SearchClient::new(api.unwrap_or_else(|| CONFIG.api_base_url.clone()));
            match client.search(&query).await {
                Ok(payload) => println!("{}", serde_json::to_string_pretty(&payload)?),
                Err(e) => {
                    tracing::warn!("{:#}", e);
                    println!("{}", e.notice());
                }
            }
        }
        Command::Login { email, password } => {
            let identity = FirebaseIdentity::from_config(&CONFIG);
            match identity.sign_in(&email, &password).await {
                Ok(()) => println!("Logged in!"),
                Err(e) => {
                    let err = AppError::from(e);
                    tracing::warn!("{:#}", err);
                    println!("{}", err.notice());
                }
            }
        }
    }
    Ok(())
}

mod logging;
mod session;
mod terminal;

use std::net::SocketAddr;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use va_core::config::{API_BASE_URL_ENV, CLIENT_ID_ENV, CLIENT_SECRET_ENV, DEFAULT_API_BASE_URL, UPSTREAM_URL_ENV};
use va_core::{ProxyConfig, ViewConfig};
use va_view::{HeadlessWidget, HttpArticleApi, SubmitOutcome, ViewController};
use va_web::AppState;

use crate::logging::init_logging;
use crate::terminal::TerminalSurface;

#[derive(Parser, Debug)]
#[command(author, version, about = "Turn YouTube videos into readable articles", long_about = None)]
struct Cli {
    #[arg(long, default_value = "info", help = "Log level used when RUST_LOG is unset")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Run the credential-injecting proxy.
    Serve {
        #[arg(long, env = "VA_BIND", default_value = "127.0.0.1:3000")]
        bind: SocketAddr,
        #[arg(long, env = CLIENT_ID_ENV, hide_env_values = true)]
        client_id: Option<String>,
        #[arg(long, env = CLIENT_SECRET_ENV, hide_env_values = true)]
        client_secret: Option<String>,
        #[arg(long, env = UPSTREAM_URL_ENV)]
        upstream_url: Option<String>,
    },
    /// Submit one video and print the article.
    Process {
        url: String,
        #[arg(long, default_value = "")]
        search_intent: String,
        #[arg(long, env = API_BASE_URL_ENV, default_value = DEFAULT_API_BASE_URL)]
        api_base_url: String,
    },
    /// Interactive session with history, timestamps and copy.
    Session {
        #[arg(long, env = API_BASE_URL_ENV, default_value = DEFAULT_API_BASE_URL)]
        api_base_url: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    match cli.command {
        Commands::Serve { bind, client_id, client_secret, upstream_url } => {
            let config = ProxyConfig { client_id, client_secret, upstream_url };
            if let Err(e) = config.target() {
                // Requests will fail with 500 until this is fixed.
                tracing::warn!("Proxy started without a usable upstream: {}", e);
            }
            va_web::serve(bind, AppState::new(config)).await
        }
        Commands::Process { url, search_intent, api_base_url } => {
            let mut view = build_view(api_base_url);
            match view.submit(&url, &search_intent).await {
                SubmitOutcome::Rendered { video_id } => {
                    info!("Rendered article for {}", video_id.as_deref().unwrap_or("unknown video"));
                    Ok(())
                }
                SubmitOutcome::Rejected(e) => Err(anyhow::anyhow!(e)),
                SubmitOutcome::Failed(failure) => Err(anyhow::anyhow!(failure.message)),
            }
        }
        Commands::Session { api_base_url } => {
            let mut view = build_view(api_base_url);
            session::run(&mut view).await.context("session aborted")
        }
    }
}

fn build_view(api_base_url: String) -> ViewController<HttpArticleApi, TerminalSurface> {
    let api = HttpArticleApi::new(ViewConfig::new(api_base_url));
    let mut view = ViewController::new(api, TerminalSurface::default(), Box::new(HeadlessWidget));
    // No embed script to wait for in a terminal.
    view.on_player_ready();
    view
}

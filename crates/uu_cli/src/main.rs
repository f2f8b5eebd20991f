use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use uu_core::format::display_date_short;
use uu_core::Result;
use uu_feed::{load_articles, ArticleSource, FeedClient, DEFAULT_ENDPOINT};
use uu_prefs::ThemePrefs;
use uu_web::AppState;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Feed endpoint to read articles from
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    endpoint: String,
    /// Directory holding persisted preferences (the theme flag)
    #[arg(long, default_value = ".uu")]
    prefs_dir: PathBuf,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Fetch the feed once and serve the site
    Serve {
        #[arg(long, default_value = "127.0.0.1:3000")]
        addr: SocketAddr,
    },
    /// Fetch the feed once and print it to stdout
    Fetch,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let client = FeedClient::with_endpoint(&cli.endpoint)?;

    match cli.command {
        Commands::Serve { addr } => {
            info!("Fetching articles from {}", client.endpoint());
            let articles = load_articles(&client).await;
            let theme = ThemePrefs::load(&cli.prefs_dir);
            info!(
                "Serving {} articles ({} mode)",
                articles.len(),
                if theme.dark_mode() { "dark" } else { "light" }
            );
            uu_web::serve(addr, AppState::new(articles, theme)).await?;
        }
        Commands::Fetch => {
            let articles = client.fetch_recent().await?;
            println!("Found {} articles", articles.len());
            for article in articles {
                match article.published_date.as_deref() {
                    Some(raw) => println!("- {} ({})", article.title, display_date_short(raw)),
                    None => println!("- {}", article.title),
                }
            }
        }
    }

    Ok(())
}

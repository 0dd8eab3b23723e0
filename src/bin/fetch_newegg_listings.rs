use std::env;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use ramtrack::scrapers::newegg::NeweggScraper;
use ramtrack::scrapers::render_document_lines;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let urls: Vec<String> = env::args().skip(1).collect();
    if urls.is_empty() {
        eprintln!("Usage: fetch_newegg_listings <url>...");
        return Err("no urls given".into());
    }

    let scraper = NeweggScraper::new();
    let mut error_count = 0;

    for (index, url) in urls.iter().enumerate() {
        tracing::info!("[{}/{}] Fetching: {}", index + 1, urls.len(), url);
        match scraper.fetch(url).await {
            Ok(listings) => {
                tracing::info!("  Parsed {} listings", listings.len());
                print!("{}", render_document_lines("newegg", &listings));
            }
            Err(e) => {
                tracing::error!("  Failed: {}", e);
                error_count += 1;
            }
        }
    }

    if error_count > 0 {
        return Err(format!("{} of {} feeds failed", error_count, urls.len()).into());
    }
    Ok(())
}

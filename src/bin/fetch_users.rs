//! One-shot refresh of the local user feed copy.
//!
//! Downloads the intranet user XML feed and overwrites the file the server
//! reads. Meant to run out-of-band (cron or by hand); the server itself
//! never touches the network.

use std::fs;
use std::io;

use presence_analyzer::config::AppConfig;

#[tokio::main]
async fn main() -> io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = AppConfig::from_env();
    log::info!("Fetching user feed from {}", config.feed_url);

    let response = reqwest::get(&config.feed_url)
        .await
        .and_then(|resp| resp.error_for_status())
        .map_err(io::Error::other)?;
    let content = response.text().await.map_err(io::Error::other)?;

    fs::write(&config.data_xml, &content)?;
    log::info!("Wrote {} bytes to {}", content.len(), config.data_xml.display());
    Ok(())
}

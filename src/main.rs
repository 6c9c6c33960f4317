mod config;
mod error;
mod service;
mod sync;
mod video;
mod youtube;

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use colored::Colorize;
use dotenv::dotenv;

use config::Config;
use error::{Error, Result};
use youtube::YouTube;

async fn run() -> Result<()> {
    let client_id = env::var("YT_CLIENT_ID")
        .map_err(|_| Error::Config("YT_CLIENT_ID must be set".to_string()))?;
    let client_secret = env::var("YT_CLIENT_SECRET")
        .map_err(|_| Error::Config("YT_CLIENT_SECRET must be set".to_string()))?;
    let refresh_token = env::var("YT_REFRESH_TOKEN")
        .map_err(|_| Error::Config("YT_REFRESH_TOKEN must be set".to_string()))?;

    let config_path = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("playlist.toml"));
    let config = Config::from_file(&config_path)?;

    let mut youtube = YouTube::new(&client_id, &client_secret, &refresh_token);

    let playlist_id = sync::find_or_create_playlist(
        &mut youtube,
        &config.playlist.title,
        &config.playlist.description,
        config.playlist.privacy,
    )
    .await?;

    let report = sync::sync_videos(&mut youtube, &playlist_id, &config.videos).await?;

    println!();
    println!("{}", "done!".green().bold());
    println!("    added {} new videos", report.added);
    println!("    skipped {} duplicates or unavailable", report.skipped);

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

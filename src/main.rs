mod cli;

use std::time::Instant;

use clap::Parser;
use cli::{Cli, Commands};
use log::info;
use plex_api_tester::{
    plex::{self, extract::extract_playlists},
    Config, Plex,
};

fn main() -> Result<(), anyhow::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = Config::from_env()?;
    let plex = Plex::new(config)?;

    match cli.command {
        Commands::Main { title } => {
            let Some(rating_key) = plex::get_playlist_rating_key(&plex, &title) else {
                return Ok(());
            };
            let items = plex::get_playlist_items(&plex, &rating_key);
            println!("{:#?}", items);
        }
        Commands::Test1 => {
            let root = plex.fetch_playlists().ok();
            for playlist in extract_playlists(root.as_ref()) {
                println!(
                    "({}, {}, {})",
                    playlist.rating_key, playlist.title, playlist.playlist_type
                );
            }
        }
        Commands::Test2 { title } => {
            let start = Instant::now();
            let items = plex::get_playlist_rating_key(&plex, &title)
                .map(|rating_key| plex::get_playlist_items(&plex, &rating_key))
                .unwrap_or_default();
            let fetch_duration = start.elapsed();

            let start = Instant::now();
            let sorted = plex::sort_playlist_data(&items, plex.base_url());
            let sort_duration = start.elapsed();

            info!("Fetched {} items from '{}'", items.len(), title);
            println!("Plex API call duration: {:.4} seconds", fetch_duration.as_secs_f64());
            println!("Regrouping duration: {:.4} seconds", sort_duration.as_secs_f64());
            println!("{:#?}", sorted);
        }
        Commands::Playlists => {
            println!("{:#?}", plex::get_playlists(&plex));
        }
        Commands::Items { rating_key, sorted } => {
            let items = plex::get_playlist_items(&plex, &rating_key);
            if sorted {
                println!("{:#?}", plex::sort_playlist_data(&items, plex.base_url()));
            } else {
                println!("{:#?}", items);
            }
        }
        Commands::Create {
            title,
            media_type,
            uris,
        } => {
            if let Some(playlist) = plex::create_playlist(&plex, &title, &media_type, &uris) {
                println!("{:#?}", playlist);
            }
        }
        Commands::Delete { rating_key } => {
            plex::delete_playlist(&plex, &rating_key);
        }
        Commands::RemoveItems {
            rating_key,
            playlist_item_ids,
        } => {
            plex::remove_playlist_items(&plex, &rating_key, &playlist_item_ids);
        }
        Commands::Identity => {
            if let Ok(identity) = plex.identity() {
                println!("{:#?}", identity);
            }
        }
    }

    Ok(())
}

use eztv_core::EztvScraper;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let scraper = EztvScraper::new()?;

    println!("🔍 Searching for 'game of thrones s01e01'...\n");

    let episodes = scraper.search("game of thrones s01e01").await?;

    println!("Found {} releases:", episodes.len());
    for (i, episode) in episodes.iter().take(10).enumerate() {
        println!(
            "  {}. {} - {} bytes, {} seeds",
            i + 1,
            episode.title,
            episode.size,
            episode.seeds
        );
    }

    println!("\n📺 Resolving show by name: 'Dark Matter'\n");

    let show = scraper.get_show("Dark Matter").await?;

    println!("Title: {}", show.title);
    if let Some(imdb_id) = &show.imdb_id {
        println!("IMDb: https://www.imdb.com/title/{}/", imdb_id);
    }
    if !show.summary.is_empty() {
        println!("Summary: {}", show.summary);
    }
    println!("\n🎬 Episodes ({}):", show.episodes.len());
    for episode in show.episodes.iter().take(10) {
        println!(
            "  • {} ({}, {} seeds)",
            episode.title, episode.released, episode.seeds
        );
    }

    println!("\n📋 Listing the full show catalog...\n");
    let shows = scraper.get_shows().await?;
    println!("{} shows listed; first entries:", shows.len());
    for show in shows.iter().take(5) {
        println!("  {} (id {})", show.title, show.id);
    }

    Ok(())
}

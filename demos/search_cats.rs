//! Search the catalog and walk the metadata endpoints.
//!
//! Run with: `cargo run --example search_cats`

use ai_cats::{CatsClient, SearchOptions, SimilarOptions, Theme};

#[tokio::main]
async fn main() -> ai_cats::Result<()> {
    let client = CatsClient::new();

    let themes = client.themes().await?;
    println!("Available themes: {:?}", themes);

    let total = client.count(None).await?;
    let xmas = client.count(Some(Theme::Xmas)).await?;
    println!("{total} cats in the catalog, {xmas} of them festive");

    let hits = client
        .search(&SearchOptions::new().query("orange").limit(5).descending(true))
        .await?;
    for hit in &hits {
        let info = client.info(&hit.id).await?;
        println!("{} ({}): {}", hit.id, info.theme, info.prompt);
    }

    if let Some(first) = hits.first() {
        let similar = client
            .similar(&first.id, &SimilarOptions::new().limit(3))
            .await?;
        println!("{} images similar to {}", similar.len(), first.id);
    }

    let completion = client
        .search_completion(&SearchOptions::new().query("oran"))
        .await?;
    println!("Did you mean: {completion}");

    Ok(())
}

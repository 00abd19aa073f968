//! Fetch a random themed cat image and save it to disk.
//!
//! Run with: `cargo run --example random_cat`

use ai_cats::{CatsClient, RandomCatOptions, ResponseType, Size, Theme};

#[tokio::main]
async fn main() -> ai_cats::Result<()> {
    let client = CatsClient::new();

    let image = client
        .random(&RandomCatOptions::new().size(Size::S512).theme(Theme::Halloween))
        .await?;
    let bytes = image.into_bytes()?;
    std::fs::write("cat.jpg", &bytes).expect("write cat.jpg");
    println!("Saved {} bytes to cat.jpg", bytes.len());

    // The same image data can come back ready for an <img src=...> tag.
    let data_url = client
        .random(&RandomCatOptions::new().response_type(ResponseType::DataUrl))
        .await?;
    if let ai_cats::ImageData::DataUrl(url) = data_url {
        println!("Data URL preview: {}...", &url[..40.min(url.len())]);
    }

    Ok(())
}

//! Basic end-to-end flow: connect, generate, poll until finished
//!
//! Usage: SEMANTICPEN_API_KEY=... cargo run --example basic

use std::time::Duration;

use semanticpen::{Client, Config, WaitOptions};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let api_key = std::env::var("SEMANTICPEN_API_KEY").expect("SEMANTICPEN_API_KEY not set");

    let client = Client::with_config(
        api_key,
        Config {
            debug: true,
            ..Default::default()
        },
    )?;

    println!("═══════════════════════════════════════════════════════════");
    println!("  semanticpen basic demo");
    println!("═══════════════════════════════════════════════════════════");

    println!("Testing connection...");
    client.test_connection().await?;
    println!("Connection OK");

    println!("Generating article...");
    let ack = client
        .generate_article("Rust Programming Best Practices", None)
        .await?;
    println!("  Article ID: {}", ack.article_id);
    println!("  Project ID: {}", ack.project_id);
    println!("  Message:    {}", ack.message);

    println!("Waiting for completion...");
    let article = client
        .wait_for_article(
            &ack.article_id,
            WaitOptions::new()
                .max_attempts(60)
                .interval(Duration::from_secs(5))
                .on_progress(|attempt, status| {
                    println!("  attempt {attempt}: {status}");
                }),
        )
        .await?;

    println!("Article completed");
    println!("  Title:    {}", article.title.unwrap_or_default());
    println!("  Status:   {}", article.status);
    println!("  Progress: {}%", article.progress);

    if let Some(html) = &article.article_html {
        println!("  Content:  {} characters of HTML", html.len());
    }

    if let Some(seo) = &article.seo_data {
        println!("  SEO title:       {}", seo.title.clone().unwrap_or_default());
        println!("  SEO description: {}", seo.description.clone().unwrap_or_default());
        println!("  SEO keywords:    {:?}", seo.keywords.clone().unwrap_or_default());
    }

    Ok(())
}

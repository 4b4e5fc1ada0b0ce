//! Advanced flow: full option groups, progress tracking, cleanup
//!
//! Usage: SEMANTICPEN_API_KEY=... cargo run --example advanced

use std::collections::HashMap;
use std::time::Duration;

use semanticpen::{
    Client, Config, GenerateArticleRequest, GenerationOptions, SeoOptions, WaitOptions,
    WritingOptions,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let api_key = std::env::var("SEMANTICPEN_API_KEY").expect("SEMANTICPEN_API_KEY not set");

    let client = Client::with_config(
        api_key,
        Config {
            timeout: Duration::from_secs(60),
            ..Default::default()
        },
    )?;

    println!("═══════════════════════════════════════════════════════════");
    println!("  semanticpen advanced demo");
    println!("═══════════════════════════════════════════════════════════");

    println!("Testing connection...");
    client.test_connection().await?;
    println!("Connection OK");

    let mut advanced = HashMap::new();
    advanced.insert("includeStatistics".to_string(), serde_json::json!(true));
    advanced.insert("includeCaseStudies".to_string(), serde_json::json!(true));
    advanced.insert(
        "targetAudience".to_string(),
        serde_json::json!("healthcare professionals"),
    );

    let request = GenerateArticleRequest {
        generation: Some(GenerationOptions {
            project_name: Some("Healthcare Tech Blog".into()),
            language: Some("en".into()),
            country: Some("US".into()),
            perspective: Some("third-person".into()),
            purpose: Some("informative".into()),
            clickbait_level: Some(2),
        }),
        seo: Some(SeoOptions {
            title: Some("AI Revolution in Healthcare: Transforming Patient Care".into()),
            description: Some(
                "How artificial intelligence is improving patient outcomes worldwide.".into(),
            ),
            keywords: Some(vec![
                "artificial intelligence".into(),
                "healthcare".into(),
                "patient care".into(),
            ]),
            use_schema: Some(true),
        }),
        writing: Some(WritingOptions {
            style: Some("professional".into()),
            tone: Some("informative".into()),
            length: Some("long".into()),
            include_images: Some(true),
            image_style: Some("professional".into()),
        }),
        advanced: Some(advanced),
        ..Default::default()
    };

    println!("Generating article with advanced options...");
    let ack = client
        .generate_article("Artificial Intelligence in Healthcare", Some(request))
        .await?;
    println!("  Article ID: {}", ack.article_id);
    println!("  Project ID: {}", ack.project_id);

    println!("Waiting for completion...");
    let started = std::time::Instant::now();
    let article = client
        .wait_for_article(
            &ack.article_id,
            WaitOptions::new()
                .max_attempts(100)
                .interval(Duration::from_secs(3))
                .on_progress(|attempt, status| {
                    println!("  attempt {attempt}: {status}");
                }),
        )
        .await?;

    println!("Article completed in {:?}", started.elapsed());
    println!("  Title:    {}", article.title.clone().unwrap_or_default());
    println!("  Progress: {}%", article.progress);
    if let Some(html) = &article.article_html {
        println!("  Content:  {} characters of HTML", html.len());
    }

    println!("Cleaning up...");
    client.delete_article(&article.id).await?;
    println!("Article deleted");

    Ok(())
}

//! Send a bot into a meeting, poll its status, then remove it.
//!
//! ```sh
//! RECALL_API_KEY=... cargo run --example meeting_bot -- https://meet.google.com/abc-defg-hij
//! ```

use std::time::Duration;

use recall_client::RecallClient;
use recall_client::types::CreateBot;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().init();

    let api_key = std::env::var("RECALL_API_KEY")
        .map_err(|_| "set RECALL_API_KEY in the environment to run this demo")?;
    let meeting_url = std::env::args()
        .nth(1)
        .ok_or("pass the meeting URL as the first argument")?;

    let client = RecallClient::builder()
        .with_api_key(api_key)
        .with_timeout(Duration::from_secs(30))
        .build()?;

    let bot = client
        .bot()
        .create(&CreateBot {
            bot_name: Some("recall-client demo".to_string()),
            ..CreateBot::for_meeting(meeting_url)
        })
        .await?;
    println!("Bot created: {}", bot.id);

    for _ in 0..5 {
        tokio::time::sleep(Duration::from_secs(10)).await;
        let current = client.bot().retrieve(&bot).await?;
        println!(
            "Latest bot state:\n{}",
            serde_json::to_string_pretty(&current)?
        );
    }

    println!("Stopping bot...");
    client.bot().leave_call(&bot).await?;
    println!("Bot left the meeting.");

    Ok(())
}

//! Search clients through the active source.
//!
//! Run with: cargo run -p dispatcher --example search_clients -- "Mar"
//!
//! Settings are read from the database named by COURIER_SETTINGS_DB
//! (default: courier.db). Configure it first, e.g.:
//!   sqlite3 courier.db "INSERT INTO settings (key, value) VALUES ('notion_api_key', 'secret_...');"

use dispatcher::{active_source, DebouncedSearch, Source};
use settings::SettingsStore;
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().collect();
    let query = if args.len() > 1 {
        args[1..].join(" ")
    } else {
        "Mar".to_string()
    };

    let db_path =
        env::var("COURIER_SETTINGS_DB").unwrap_or_else(|_| "courier.db".to_string());
    let store = SettingsStore::connect(&format!("sqlite:{}?mode=rwc", db_path)).await?;
    store.migrate().await?;

    let source = active_source(&store).await?;
    println!("Active source: {}", source.name());
    println!("Searching for \"{}\"...\n", query);

    let search = DebouncedSearch::new();
    match search.search(source.as_ref(), &query).await {
        Some(Ok(clients)) if clients.is_empty() => println!("No client matched."),
        Some(Ok(clients)) => {
            for client in clients {
                println!("{} ({})", client.name, client.phone);
            }
        }
        Some(Err(e)) => eprintln!("Search failed: {}", e),
        None => println!("Search superseded."),
    }

    Ok(())
}

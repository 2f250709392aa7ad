//! Run with: cargo run --bin check_connection [uri] [db_name]

use mongo_connect::{connect, ConnectOptions};
use std::env;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = env::args().skip(1);
    let mut options = ConnectOptions::default();
    if let Some(uri) = args.next() {
        options = options.with_uri(uri);
    }
    if let Some(db_name) = args.next() {
        options = options.with_db_name(db_name);
    }

    let conn = connect(Some(&options)).await?;
    let db = conn.database();

    println!("Connected to database '{}'", db.name());
    println!("\nCollections:");
    for name in db.list_collection_names().await? {
        println!("  - {}", name);
    }

    Ok(())
}

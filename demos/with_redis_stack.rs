//! Redis Stack store walkthrough
//!
//! Requires a local Redis Stack instance (RedisJSON module loaded), e.g.:
//!   docker run -p 6379:6379 redis/redis-stack-server
//!
//! Run with: cargo run --example with_redis_stack

use redis_stack_session::{RedisStackStore, SessionRecord, SessionStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let store = RedisStackStore::from_url("redis://127.0.0.1/")
        .await?
        .with_prefix("demo:")
        .with_ttl(300);

    let mut record = SessionRecord::new();
    record.set("user", "alice");
    record.set("cart", serde_json::json!({"items": ["book", "pen"]}));

    // Stored as a JSON document at key "demo:demo-session"
    store.set("demo-session", &record).await?;
    println!("saved: {:?}", store.get("demo-session").await?);

    // TTL-only refresh
    store.touch("demo-session").await?;

    println!("session ids: {:?}", store.ids().await?);
    println!("active sessions: {}", store.length().await?);

    store.destroy("demo-session").await?;
    println!("after destroy: {:?}", store.get("demo-session").await?);

    Ok(())
}

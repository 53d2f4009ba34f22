//! Memory store walkthrough
//!
//! Exercises the full store contract against the in-memory backend.
//! Run with: cargo run --example basic

use redis_stack_session::{MemoryStore, SessionRecord, SessionStore, SessionStoreExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let store = MemoryStore::new().with_ttl(3600);

    let mut record = SessionRecord::new();
    record.set("user", "alice");
    record.set("views", 1);

    store.set("demo-session", &record).await?;
    println!("saved: {:?}", store.get("demo-session").await?);

    // Refresh the expiration without rewriting the payload
    store.touch("demo-session").await?;

    // Fire-and-forget save; the handle is droppable
    record.set("views", 2);
    store.set_detached("demo-session", record).await?;
    println!("after detached save: {:?}", store.get("demo-session").await?);

    println!("active sessions: {}", store.length().await?);

    store.destroy("demo-session").await?;
    println!("after destroy: {:?}", store.get("demo-session").await?);

    Ok(())
}

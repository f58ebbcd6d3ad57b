//! Sandbox run: twelve simulated API calls, paced in small batches.
//!
//! ```text
//! RUST_LOG=info cargo run --example sandbox
//! ```

use std::time::Duration;

use batch_pacer::config::ScheduleConfig;
use batch_pacer::core::{batch_process, AppResult};
use batch_pacer::util::init_tracing;

async fn process_item(item: u32) -> Result<(), std::io::Error> {
    tracing::info!(item, "processing item");
    // stand-in for an API call
    tokio::time::sleep(Duration::from_millis(500)).await;
    Ok(())
}

#[tokio::main]
async fn main() -> AppResult<()> {
    init_tracing();

    let items: Vec<u32> = (1..=12).collect();
    let config = ScheduleConfig::new(5, 2_000);

    let summary = batch_process(items, process_item, &config).await?;
    tracing::info!(
        batches = summary.batches,
        elapsed_ms = summary.elapsed_ms,
        "all batches processed"
    );
    Ok(())
}

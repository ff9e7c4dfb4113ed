//! Basic logger usage example
//!
//! Demonstrates the process-wide logger, level filtering and debug mode.
//!
//! Run with: cargo run --example basic_usage

use leveled_logger::prelude::*;
use leveled_logger::{debug, error, global, info, warn};

fn handle_request(id: u32) {
    info!("handling request {}", id);
    debug!("request {} payload size {}", id, 512);
}

fn main() -> Result<()> {
    println!("=== Leveled Logger - Basic Usage Example ===\n");

    println!("1. Default threshold (INFO) - debug lines are hidden:");
    handle_request(1);
    warn!("cache miss ratio at {}%", 37);
    error!("upstream returned {}", 502);

    println!("\n2. Debug mode:");
    global::enable_debug_mode();
    handle_request(2);

    println!("\n3. Without timestamps:");
    global::disable_timestamp();
    handle_request(3);

    println!("\n4. Only errors:");
    global::set_level(LogLevel::Error);
    handle_request(4);
    error!("still visible");

    global::logger().flush()?;

    println!("\n=== Example completed successfully! ===");

    Ok(())
}

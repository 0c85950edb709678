use anyhow::Result;
use passwordless::cli::{start, telemetry};

// Main function
#[tokio::main]
async fn main() -> Result<()> {
    // Start the program
    let (action, globals) = start()?;

    // Handle the action
    let result = action.execute(&globals).await;

    telemetry::shutdown_tracer();

    result
}

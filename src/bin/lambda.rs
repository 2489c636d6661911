//! AWS Lambda entry point for the frontier crawler
//!
//! Deploy with `cargo lambda build --release --features lambda` and wire
//! the frontier table's change stream to this function.

use lambda_runtime::{Error as LambdaError, service_fn};

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use frontier_crawler::handler::handler;

/// Main entry point for the AWS Lambda function.
#[tokio::main]
async fn main() -> Result<(), LambdaError> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    info!("frontier crawler starting...");
    lambda_runtime::run(service_fn(handler)).await
}

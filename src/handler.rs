// src/handler.rs

//! AWS Lambda handler for the crawler.

use std::sync::Arc;

use lambda_runtime::{Error as LambdaError, LambdaEvent};
use serde_json::Value;
use tracing::{error, info, instrument};

use crate::config::CrawlerConfig;
use crate::error::{AppError, Result};
use crate::models::StreamEvent;
use crate::pipeline::{BatchProcessor, BatchSummary};
use crate::storage::DynamoFrontier;

/// Main Lambda handler function.
///
/// A returned error surfaces to the delivery mechanism, which owns
/// redelivery of the whole batch; entries already written by a partially
/// processed batch are not rolled back.
#[instrument(skip(event))]
pub async fn handler(event: LambdaEvent<Value>) -> std::result::Result<Value, LambdaError> {
    let batch: StreamEvent = serde_json::from_value(event.payload).map_err(AppError::from)?;

    match run_batch(&batch).await {
        Ok(summary) => {
            info!(%summary, "batch processed");
            Ok(serde_json::json!({ "status": "success", "summary": summary.to_string() }))
        }
        Err(e) => {
            error!("batch failed: {}", e);
            Err(e.into())
        }
    }
}

/// Internal pipeline logic for the Lambda environment.
///
/// Everything is rebuilt per invocation: no in-process state survives
/// between batches.
async fn run_batch(batch: &StreamEvent) -> Result<BatchSummary> {
    let config = Arc::new(CrawlerConfig::from_env());
    config.validate()?;

    let store = DynamoFrontier::from_env(config.table_name.clone()).await?;
    let processor = BatchProcessor::new(config, Arc::new(store))?;
    processor.process(batch).await
}

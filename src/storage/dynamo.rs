//! DynamoDB frontier store implementation.
//!
//! Each write is a fresh `PutItem` of `{url, depth}` into the configured
//! table; the table's change stream is what re-triggers processing, so a
//! write here is also the fan-out signal for the next crawl step.

use async_trait::async_trait;
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::types::AttributeValue;
use tracing::info;

use crate::error::{AppError, Result};
use crate::storage::FrontierStore;

/// DynamoDB-backed frontier store.
pub struct DynamoFrontier {
    client: Client,
    table: String,
}

impl DynamoFrontier {
    /// Create a store over an existing client.
    pub fn new(client: Client, table: impl Into<String>) -> Self {
        Self {
            client,
            table: table.into(),
        }
    }

    /// Create a store from environment configuration.
    ///
    /// Region and credentials come from the default provider chain.
    pub async fn from_env(table: impl Into<String>) -> Result<Self> {
        let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        Ok(Self::new(Client::new(&config), table))
    }
}

#[async_trait]
impl FrontierStore for DynamoFrontier {
    async fn put_new_entry(&self, url: &str, depth: u32) -> Result<()> {
        self.client
            .put_item()
            .table_name(&self.table)
            .item("url", AttributeValue::S(url.to_string()))
            .item("depth", AttributeValue::N(depth.to_string()))
            .send()
            .await
            .map_err(|e| AppError::write(url, e.into_service_error()))?;

        info!(table = %self.table, url = %url, depth, "inserted frontier entry");
        Ok(())
    }
}

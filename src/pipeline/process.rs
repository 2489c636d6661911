// src/pipeline/process.rs

//! Batch processing of frontier change records.

use std::fmt;
use std::sync::Arc;

use tracing::info;

use crate::config::CrawlerConfig;
use crate::error::Result;
use crate::models::{ChangeKind, StreamEvent};
use crate::pipeline::depth::{DepthDecision, DepthGuard};
use crate::services::LinkExtractor;
use crate::storage::FrontierStore;
use crate::utils::http;

/// Summary of one processed batch.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    /// Records delivered in the batch
    pub records_seen: usize,
    /// Creation records fetched and fanned out
    pub entries_processed: usize,
    /// Records skipped because they were not creations
    pub skipped_kind: usize,
    /// Creation records stopped by the depth limit
    pub stopped_depth: usize,
    /// Frontier entries written
    pub links_inserted: usize,
}

impl fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "processed {} of {} records ({} non-creation, {} at depth limit), inserted {} links",
            self.entries_processed,
            self.records_seen,
            self.skipped_kind,
            self.stopped_depth,
            self.links_inserted
        )
    }
}

/// Processes one delivered batch of change records.
///
/// Records are handled strictly in delivery order, one at a time. The
/// only per-entry skip is the depth limit; a decode, fetch, or write
/// failure aborts the whole batch immediately and is returned to the
/// delivery mechanism. Entries written before the failure stay written,
/// so a redelivered batch can duplicate them — the store has no
/// exactly-once guarantee by design.
pub struct BatchProcessor {
    config: Arc<CrawlerConfig>,
    client: reqwest::Client,
    extractor: LinkExtractor,
    guard: DepthGuard,
    store: Arc<dyn FrontierStore>,
}

impl BatchProcessor {
    /// Create a processor over the given configuration and store.
    pub fn new(config: Arc<CrawlerConfig>, store: Arc<dyn FrontierStore>) -> Result<Self> {
        let client = http::create_async_client(&config)?;
        let guard = DepthGuard::new(config.max_depth);
        Ok(Self {
            config,
            client,
            extractor: LinkExtractor::new(),
            guard,
            store,
        })
    }

    /// Process every record in the batch.
    pub async fn process(&self, event: &StreamEvent) -> Result<BatchSummary> {
        let mut summary = BatchSummary {
            records_seen: event.records.len(),
            ..BatchSummary::default()
        };

        for record in &event.records {
            // Only creations represent new crawl work.
            if record.kind != ChangeKind::Created {
                summary.skipped_kind += 1;
                continue;
            }

            let entry = record.decode_entry()?;
            info!(url = %entry.url, depth = entry.depth, "processing frontier entry");

            let next_depth = match self.guard.evaluate(entry.depth) {
                DepthDecision::Stop => {
                    info!(url = %entry.url, depth = entry.depth, "depth limit reached, skipping");
                    summary.stopped_depth += 1;
                    continue;
                }
                DepthDecision::Continue { next_depth } => next_depth,
            };

            let body =
                http::fetch_body(&self.client, &entry.url, self.config.max_body_bytes).await?;
            let links = self.extractor.extract(&body);
            info!(url = %entry.url, count = links.len(), "found links");

            for link in &links {
                info!(url = %link, depth = next_depth, "inserting frontier entry");
                self.store.put_new_entry(link, next_depth).await?;
                summary.links_inserted += 1;
            }

            summary.entries_processed += 1;
        }

        Ok(summary)
    }
}

//! Pipeline entry points for crawl-step processing.
//!
//! - `depth`: pure policy bounding traversal
//! - `process`: the per-batch crawl-step loop

pub mod depth;
pub mod process;

pub use depth::{DepthDecision, DepthGuard};
pub use process::{BatchProcessor, BatchSummary};

// src/models/mod.rs

//! Domain models for the crawler.
//!
//! - `FrontierEntry`: the unit of crawl work
//! - `StreamEvent` and friends: the change-notification batch consumed
//!   from the frontier store's stream

mod entry;
mod event;

pub use entry::FrontierEntry;
pub use event::{Attribute, ChangeKind, ChangeRecord, RecordSnapshot, StreamEvent};

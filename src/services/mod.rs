//! Service layer for the crawler.
//!
//! Currently a single service: link extraction (`LinkExtractor`).

mod links;

pub use links::LinkExtractor;

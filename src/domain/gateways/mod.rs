//! Gateway trait definitions for the domain layer.
//!
//! Gateways abstract the outbound I/O the pipeline needs. Concrete
//! implementations live in `crate::infrastructure`; mock implementations are
//! generated via `mockall` for unit tests.

pub mod page_fetcher;

pub use page_fetcher::{FetchRequest, HttpMethod, PageFetcher};

#[cfg(test)]
pub use page_fetcher::MockPageFetcher;

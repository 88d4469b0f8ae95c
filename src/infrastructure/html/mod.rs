//! HTML payload extraction built on `scraper`.

mod next_data;

pub use next_data::extract_hydration;

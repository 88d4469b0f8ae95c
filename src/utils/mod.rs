//! Utility functions for input parsing and formatting.
//!
//! - [`profile_target`] - Command-line URL/username interpretation
//! - [`url_normalizer`] - Profile URL normalization
//! - [`timestamp`] - Epoch millisecond formatting

pub mod profile_target;
pub mod timestamp;
pub mod url_normalizer;

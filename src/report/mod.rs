//! Snapshot output: JSON artifact and console rendering.
//!
//! - [`dto`] - Serializable [`ProfileSnapshot`]
//! - [`console`] - Human-readable lines for stdout
//! - [`writer`] - `linktree_<username>.json` artifact

pub mod console;
pub mod dto;
pub mod writer;

pub use dto::{ContactItem, LinkItem, ProfileSnapshot};
pub use writer::{snapshot_file_name, write_snapshot};

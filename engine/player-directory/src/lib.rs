//! Player Directory - Read-only queries over the cricket player dataset
//!
//! This crate loads the static player dataset once at process start and
//! answers lookup, filter, and aggregation queries against it. The
//! collection is immutable for the lifetime of the process; every
//! operation is a pure read.

pub mod dataset;
pub mod directory;
pub mod types;

pub use dataset::load_players;
pub use directory::PlayerDirectory;
pub use types::{DirectoryError, PlayerRecord};

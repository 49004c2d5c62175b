//! Storage accessor: a typed two-operation interface (insert-one,
//! query-with-filter) over a pluggable document backend.
//!
//! The accessor is stateless per call; identifiers are assigned by the
//! backend at insertion time and never supplied by callers.

pub mod backend;
pub mod config;
pub mod database;
pub mod errors;
pub mod filter;
pub mod memory;
pub mod record;

pub use backend::{DocumentBackend, NATIVE_ID_FIELD};
pub use config::DatabaseConfig;
pub use database::Database;
pub use errors::{StoreError, StoreResult};
pub use filter::Filter;
pub use memory::MemoryBackend;
pub use record::{Record, Stored, PUBLIC_ID_FIELD};

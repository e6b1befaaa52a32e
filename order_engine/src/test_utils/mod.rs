//! Test helpers: an in-memory [`OrderStore`](crate::traits::OrderStore), a scripted payment processor, and
//! throwaway-SQLite environment setup for integration tests.
mod memory;
#[cfg(feature = "sqlite")]
mod prepare_env;

pub use memory::{MemoryStore, TestPaymentProcessor};
#[cfg(feature = "sqlite")]
pub use prepare_env::{create_database, prepare_test_env, random_db_path, run_migrations};

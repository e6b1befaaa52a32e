//! SQLite backend for the order payment gateway.
mod sqlite_impl;

pub mod db;

pub use db::{apply_migrations, db_url, new_pool};
pub use sqlite_impl::SqliteDatabase;
